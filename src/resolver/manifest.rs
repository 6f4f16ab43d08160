use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Deserialize;
use walkdir::WalkDir;

use super::{canonical, find_installed_package, relative_id};
use crate::constants::discovery::{IGNORED_DIRS, MANIFEST_FILE};
use crate::core::ModuleId;
use crate::error::ModuleCarouselError;
use crate::progress::ProgressReporter;

/// Where to look for modules and which files count as modules
#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub cwd: PathBuf,
    pub patterns: Vec<String>,
}

/// The fields of `package.json` the resolver reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn parse_file(path: &Path) -> Result<Self, ModuleCarouselError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ModuleCarouselError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        serde_json::from_str(&content).map_err(|e| {
            ModuleCarouselError::manifest_parse(&path.display().to_string(), &content, e)
        })
    }
}

/// Collect the modules of every dependency declared in `<cwd>/package.json`
///
/// Module ids are relative to `cwd`, deduplicated and sorted.
pub fn glob_match(options: &MatchOptions) -> Result<Vec<ModuleId>, ModuleCarouselError> {
    glob_match_with_progress(options, None)
}

pub fn glob_match_with_progress(
    options: &MatchOptions,
    progress: Option<&ProgressReporter>,
) -> Result<Vec<ModuleId>, ModuleCarouselError> {
    let manifest_path = options.cwd.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(ModuleCarouselError::MissingManifest {
            cwd: options.cwd.clone(),
        });
    }

    let manifest = PackageManifest::parse_file(&manifest_path)?;
    let patterns = compile_patterns(&options.patterns)?;
    let root = canonical(&options.cwd)?;

    let mut modules = Vec::new();
    for (name, specifier) in &manifest.dependencies {
        if let Some(p) = progress {
            p.checking_package(name);
        }

        let Some(package_dir) = locate_package(&root, name, specifier) else {
            continue;
        };

        modules.extend(
            match_package_files(&package_dir, &patterns)
                .into_iter()
                .map(|file| relative_id(&root, &file)),
        );
    }

    modules.sort();
    modules.dedup();

    Ok(modules)
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, ModuleCarouselError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| ModuleCarouselError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Resolve a declared dependency to its canonical package directory
///
/// `file:` and `link:` specifiers point at a directory relative to the
/// manifest; anything else must be installed under `node_modules`. A
/// directory without its own manifest is not a package.
fn locate_package(root: &Path, name: &str, specifier: &str) -> Option<PathBuf> {
    let local = specifier
        .strip_prefix("file:")
        .or_else(|| specifier.strip_prefix("link:"))
        .map(|relative| root.join(relative))
        .filter(|dir| dir.join(MANIFEST_FILE).is_file());

    local
        .or_else(|| find_installed_package(name, root))
        .filter(|dir| dir.join(MANIFEST_FILE).is_file())
        .and_then(|dir| dir.canonicalize().ok())
}

fn match_package_files(package_dir: &Path, patterns: &[Pattern]) -> Vec<PathBuf> {
    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    WalkDir::new(package_dir)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !IGNORED_DIRS.iter().any(|ignored| e.file_name() == *ignored)
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .strip_prefix(package_dir)
                .is_ok_and(|relative| {
                    patterns
                        .iter()
                        .any(|pattern| pattern.matches_path_with(relative, options))
                })
        })
        .map(|e| e.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn options(cwd: &Path) -> MatchOptions {
        MatchOptions {
            cwd: cwd.to_path_buf(),
            patterns: vec!["**/*.module.ts".to_string()],
        }
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();

        let err = glob_match(&options(temp.path())).unwrap_err();
        assert!(matches!(err, ModuleCarouselError::MissingManifest { .. }));
        assert_eq!(err.to_string(), "There is no package.json file here");
    }

    #[test]
    fn test_invalid_manifest_points_at_error() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("package.json"), "{\n  \"dependencies\": {,}\n}");

        let err = glob_match(&options(temp.path())).unwrap_err();
        match err {
            ModuleCarouselError::ManifestParseError(inner) => assert!(inner.span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pattern() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("package.json"), "{}");

        let mut opts = options(temp.path());
        opts.patterns = vec!["[".to_string()];

        assert!(matches!(
            glob_match(&opts),
            Err(ModuleCarouselError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_manifest_without_dependencies() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("package.json"), r#"{ "name": "app" }"#);

        assert!(glob_match(&options(temp.path())).unwrap().is_empty());
    }

    #[test]
    fn test_matches_file_and_installed_packages() {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("app");
        write(
            &app.join("package.json"),
            r#"{ "dependencies": { "local": "file:../local", "remote": "^1.0.0", "absent": "^2.0.0" } }"#,
        );

        write(&temp.path().join("local/package.json"), "{}");
        write(&temp.path().join("local/a.module.ts"), "");
        write(&temp.path().join("local/nested/b.module.ts"), "");
        write(&temp.path().join("local/c.ts"), "");
        write(&temp.path().join("local/node_modules/x/d.module.ts"), "");

        write(&app.join("node_modules/remote/package.json"), "{}");
        write(&app.join("node_modules/remote/lib/e.module.ts"), "");

        assert_eq!(
            glob_match(&options(&app)).unwrap(),
            vec![
                "../local/a.module.ts",
                "../local/nested/b.module.ts",
                "node_modules/remote/lib/e.module.ts",
            ]
        );
    }

    #[test]
    fn test_directory_without_manifest_is_skipped() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("package.json"),
            r#"{ "dependencies": { "loose": "file:./loose" } }"#,
        );
        write(&temp.path().join("loose/a.module.ts"), "");

        assert!(glob_match(&options(temp.path())).unwrap().is_empty());
    }
}
