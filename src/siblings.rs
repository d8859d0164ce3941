//! Locate tool packages checked out next to this repository.
//!
//! Two layouts are supported. The flat one keeps every package side by side:
//!
//! ```text
//! repo/hdl_modules/hdl_modules
//! repo/tsfpga/tsfpga
//! repo/hdl_registers/hdl_registers
//! repo/vunit/vunit
//! ```
//!
//! The alternative keeps the HDL packages as submodules of a development
//! repository with VUnit outside of it, three levels further up.

use std::path::{Path, PathBuf};

/// Packages looked up by [`search_path`], lowest precedence first.
pub const SIBLING_PACKAGES: &[&str] = &["tsfpga", "hdl_registers", "vunit"];

const VUNIT: &str = "vunit";

/// Candidate checkouts of `package`, highest precedence first.
///
/// Paths are joined lexically and need not exist.
pub fn candidate_paths(repo_root: &Path, package: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if package == VUNIT {
        if let Some(base) = repo_root.ancestors().nth(5) {
            candidates.push(base.join(VUNIT).join(VUNIT));
        }
    }
    if let Some(base) = repo_root.ancestors().nth(2) {
        candidates.push(base.join(package).join(package));
    }

    candidates
}

/// Every candidate path of every sibling package, highest precedence first.
pub fn search_path(repo_root: &Path) -> Vec<PathBuf> {
    SIBLING_PACKAGES
        .iter()
        .rev()
        .flat_map(|package| candidate_paths(repo_root, package))
        .collect()
}

/// First existing checkout of `package`, if any.
pub fn locate(repo_root: &Path, package: &str) -> Option<PathBuf> {
    candidate_paths(repo_root, package)
        .into_iter()
        .find(|path| path.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flat_layout_candidate() {
        let root = Path::new("/work/repo/hdl_modules/hdl_modules");
        assert_eq!(
            candidate_paths(root, "tsfpga"),
            vec![PathBuf::from("/work/repo/tsfpga/tsfpga")]
        );
    }

    #[test]
    fn test_vunit_prefers_alternative_layout() {
        let root = Path::new("/dev/a/b/external/hdl_modules/hdl_modules");
        assert_eq!(
            candidate_paths(root, "vunit"),
            vec![
                PathBuf::from("/dev/vunit/vunit"),
                PathBuf::from("/dev/a/b/external/vunit/vunit"),
            ]
        );
    }

    #[test]
    fn test_shallow_root_has_fewer_candidates() {
        let root = Path::new("/repo");
        assert!(candidate_paths(root, "vunit").is_empty());
    }

    #[test]
    fn test_search_path_order() {
        let root = Path::new("/dev/a/b/external/hdl_modules/hdl_modules");
        let paths = search_path(root);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/dev/vunit/vunit"),
                PathBuf::from("/dev/a/b/external/vunit/vunit"),
                PathBuf::from("/dev/a/b/external/hdl_registers/hdl_registers"),
                PathBuf::from("/dev/a/b/external/tsfpga/tsfpga"),
            ]
        );
    }

    #[test]
    fn test_locate_finds_existing_checkout() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("repo").join("hdl_modules").join("hdl_modules");
        fs::create_dir_all(&root).unwrap();
        let tsfpga = temp_dir.path().join("repo").join("tsfpga").join("tsfpga");
        fs::create_dir_all(&tsfpga).unwrap();

        assert_eq!(locate(&root, "tsfpga"), Some(tsfpga));
        assert_eq!(locate(&root, "hdl_registers"), None);
    }
}
