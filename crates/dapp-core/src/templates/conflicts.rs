//! Detect pre-existing content in a target directory

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::Path;

/// Entries that may already exist in the target directory without blocking
/// generation
const IGNORABLE_ENTRIES: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    "LICENSE",
    "Thumbs.db",
    "docs",
    "mkdocs.yml",
    "npm-debug.log",
    "yarn-debug.log",
    "yarn-error.log",
    "pnpm-debug.log",
    "bun.lockb",
];

pub fn is_ignorable(name: &str) -> bool {
    // IntelliJ-based editors drop module files next to the project
    IGNORABLE_ENTRIES.contains(&name) || name.ends_with(".iml")
}

/// Entries of `dir` that would conflict with a generated project, in
/// directory-listing order
pub fn conflicting_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScaffoldError::io(dir, e))? {
        let entry = entry.map_err(|e| ScaffoldError::io(dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.retain(|name| !is_ignorable(name));
    Ok(names)
}

/// True when every entry of `dir` is harmless residue
pub fn is_dir_empty(dir: &Path) -> Result<bool> {
    Ok(conflicting_entries(dir)?.is_empty())
}

/// Recursively remove each named entry of `dir`; missing entries are fine
pub fn remove_entries(dir: &Path, names: &[String]) -> Result<()> {
    for name in names {
        let path = dir.join(name);
        let meta = match fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ScaffoldError::io(&path, e)),
        };
        let removed = if meta.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| ScaffoldError::io(&path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Raw `read_dir` order with residue filtered out
    fn listing(dir: &Path) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if !is_ignorable(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    #[test]
    fn test_empty_directory() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        assert!(is_dir_empty(tmp.path())?);
        assert!(conflicting_entries(tmp.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_git_residue_is_ignored() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::create_dir(tmp.path().join(".git"))?;
        fs::write(tmp.path().join(".gitignore"), "node_modules")?;
        fs::write(tmp.path().join("LICENSE"), "MIT")?;
        fs::write(tmp.path().join(".DS_Store"), "")?;

        assert!(is_dir_empty(tmp.path())?);
        assert_eq!(conflicting_entries(tmp.path())?, Vec::<String>::new());
        Ok(())
    }

    #[test]
    fn test_iml_files_are_ignored() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join("project.iml"), "<xml>")?;
        fs::write(tmp.path().join("module.iml"), "")?;

        assert!(is_dir_empty(tmp.path())?);
        Ok(())
    }

    #[test]
    fn test_real_content_conflicts() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join("package.json"), "{}")?;
        fs::write(tmp.path().join("index.js"), "")?;
        fs::write(tmp.path().join(".gitignore"), "")?;
        fs::create_dir(tmp.path().join("src"))?;

        assert!(!is_dir_empty(tmp.path())?);
        let conflicts = conflicting_entries(tmp.path())?;
        assert_eq!(conflicts, listing(tmp.path())?);
        assert_eq!(conflicts.len(), 3);
        Ok(())
    }

    #[test]
    fn test_conflicts_keep_listing_order() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        for name in ["zeta.js", "alpha.js", "package.json", "mid.ts", "index.js", "beta.md"] {
            fs::write(tmp.path().join(name), "")?;
        }
        fs::create_dir(tmp.path().join("src"))?;
        fs::create_dir(tmp.path().join(".git"))?;

        let conflicts = conflicting_entries(tmp.path())?;

        assert_eq!(conflicts, listing(tmp.path())?);
        assert_eq!(conflicts.len(), 7);
        assert!(!conflicts.contains(&".git".to_string()));
        Ok(())
    }

    #[test]
    fn test_emptiness_matches_conflicts() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        for name in ["docs", "bun.lockb", "README.md"] {
            fs::write(tmp.path().join(name), "")?;
            assert_eq!(
                is_dir_empty(tmp.path())?,
                conflicting_entries(tmp.path())?.is_empty()
            );
        }
        assert_eq!(conflicting_entries(tmp.path())?, vec!["README.md"]);
        Ok(())
    }

    #[test]
    fn test_remove_entries() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::create_dir_all(tmp.path().join("src/nested"))?;
        fs::write(tmp.path().join("src/nested/a.ts"), "")?;
        fs::write(tmp.path().join("index.js"), "")?;
        fs::create_dir(tmp.path().join(".git"))?;

        let conflicts = conflicting_entries(tmp.path())?;
        remove_entries(tmp.path(), &conflicts)?;
        remove_entries(tmp.path(), &["gone".to_string()])?;

        assert!(!tmp.path().join("src").exists());
        assert!(!tmp.path().join("index.js").exists());
        assert!(tmp.path().join(".git").exists());
        Ok(())
    }
}
