//! # Module Resolution
//!
//! The collaborators that turn a package directory into the
//! [`DependencyRecord`](crate::core::DependencyRecord)s the graph engine
//! consumes. Nothing in [`crate::graph`] or [`crate::detector`] depends on
//! this module.
//!
//! ## Components
//!
//! - **manifest**: reads `package.json`, locates every declared dependency
//!   package and matches module files inside it against glob patterns
//! - **imports**: parses each matched module with oxc, resolves its import
//!   specifiers the way Node does and keeps the ones that land on another
//!   matched module
//!
//! Module identifiers are paths relative to the analysis root, joined with
//! `/`, for example `../third/foo3/foo3.module.ts`.

mod imports;
mod manifest;

use std::path::{Component, Path, PathBuf};

pub use imports::{analyze, analyze_with_progress, extract_specifiers};
pub use manifest::{MatchOptions, PackageManifest, glob_match, glob_match_with_progress};

use crate::constants::discovery::PACKAGES_DIR;
use crate::error::ModuleCarouselError;

/// Canonicalize a path, reporting failures as a read error on that path
pub(crate) fn canonical(path: &Path) -> Result<PathBuf, ModuleCarouselError> {
    path.canonicalize()
        .map_err(|source| ModuleCarouselError::FileReadError {
            path: path.to_path_buf(),
            source,
        })
}

/// Express `target` relative to `base` with `/` separators
///
/// Both paths are expected to be absolute and canonical.
pub(crate) fn relative_id(base: &Path, target: &Path) -> String {
    let base_parts: Vec<Component<'_>> = base.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();

    let shared = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    parts.extend(std::iter::repeat_n("..".to_string(), base_parts.len() - shared));
    parts.extend(
        target_parts[shared..]
            .iter()
            .map(|part| part.as_os_str().to_string_lossy().into_owned()),
    );

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Find an installed package directory for discovery: `node_modules` in
/// `from` and then in each of its ancestors
pub(crate) fn find_installed_package(name: &str, from: &Path) -> Option<PathBuf> {
    from.ancestors()
        .map(|dir| dir.join(PACKAGES_DIR).join(name))
        .find(|candidate| candidate.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_id_sibling_tree() {
        let base = Path::new("/repo/example/foo-test");
        let target = Path::new("/repo/example/third/foo3/foo3.module.ts");

        assert_eq!(relative_id(base, target), "../third/foo3/foo3.module.ts");
    }

    #[test]
    fn test_relative_id_nested() {
        let base = Path::new("/repo/app");
        let target = Path::new("/repo/app/node_modules/pkg/a.ts");

        assert_eq!(relative_id(base, target), "node_modules/pkg/a.ts");
    }

    #[test]
    fn test_relative_id_same_path() {
        assert_eq!(relative_id(Path::new("/repo"), Path::new("/repo")), ".");
    }

    #[test]
    fn test_find_installed_package_walks_ancestors() {
        let temp = tempfile::tempdir().unwrap();
        let installed = temp.path().join("node_modules").join("pkg");
        std::fs::create_dir_all(&installed).unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_installed_package("pkg", &nested), Some(installed));
        assert_eq!(find_installed_package("missing", &nested), None);
    }
}
