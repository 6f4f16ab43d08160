use miette::Result;

/// Main entry point for the module-carousel CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    module_carousel::run()
}
