//! Where templates are loaded from
//!
//! Lookup order:
//! 1. `--template-dir`
//! 2. the `CREATE_NEXTJS_DAPP_TEMPLATES` environment variable
//! 3. a `templates` directory next to the executable
//! 4. the `templates` directory of this source checkout

use crate::templates::TemplateRoot;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable overriding the template directory
pub const TEMPLATE_DIR_ENV: &str = "CREATE_NEXTJS_DAPP_TEMPLATES";

const BUNDLED_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates");

/// Which lookup step produced the template root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrigin {
    Flag,
    Env,
    Installed,
    Bundled,
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TemplateOrigin::Flag => "--template-dir",
            TemplateOrigin::Env => TEMPLATE_DIR_ENV,
            TemplateOrigin::Installed => "installation",
            TemplateOrigin::Bundled => "source checkout",
        };
        f.write_str(label)
    }
}

/// Resolve the template root for this process
pub fn locate_templates(flag: Option<&Path>, cwd: &Path) -> (TemplateRoot, TemplateOrigin) {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_template_root(flag, std::env::var_os(TEMPLATE_DIR_ENV), exe_dir.as_deref(), cwd)
}

fn resolve_template_root(
    flag: Option<&Path>,
    env_value: Option<OsString>,
    exe_dir: Option<&Path>,
    cwd: &Path,
) -> (TemplateRoot, TemplateOrigin) {
    if let Some(path) = flag {
        return (TemplateRoot::new(absolute_from(cwd, path)), TemplateOrigin::Flag);
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        let path = PathBuf::from(value);
        return (TemplateRoot::new(absolute_from(cwd, &path)), TemplateOrigin::Env);
    }
    if let Some(installed) = exe_dir.map(|dir| dir.join("templates")) {
        if installed.is_dir() {
            return (TemplateRoot::new(installed), TemplateOrigin::Installed);
        }
    }
    (TemplateRoot::new(BUNDLED_TEMPLATES), TemplateOrigin::Bundled)
}

/// `path` made absolute against `cwd`
pub fn absolute_from(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flag_wins_over_everything() {
        let (root, origin) = resolve_template_root(
            Some(Path::new("local/templates")),
            Some(OsString::from("/from/env")),
            None,
            Path::new("/work"),
        );
        assert_eq!(origin, TemplateOrigin::Flag);
        assert_eq!(root.path(), Path::new("/work/local/templates"));
    }

    #[test]
    fn test_env_used_when_no_flag() {
        let (root, origin) =
            resolve_template_root(None, Some(OsString::from("/from/env")), None, Path::new("/work"));
        assert_eq!(origin, TemplateOrigin::Env);
        assert_eq!(root.path(), Path::new("/from/env"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let (_, origin) =
            resolve_template_root(None, Some(OsString::new()), None, Path::new("/work"));
        assert_eq!(origin, TemplateOrigin::Bundled);
    }

    #[test]
    fn test_templates_next_to_executable() {
        let tmp = tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("templates")).unwrap();

        let (root, origin) = resolve_template_root(None, None, Some(tmp.path()), Path::new("/work"));

        assert_eq!(origin, TemplateOrigin::Installed);
        assert_eq!(root.path(), tmp.path().join("templates"));
    }

    #[test]
    fn test_bundled_fallback_points_at_checkout() {
        let tmp = tempdir().unwrap();
        let (root, origin) = resolve_template_root(None, None, Some(tmp.path()), Path::new("/work"));
        assert_eq!(origin, TemplateOrigin::Bundled);
        assert!(root.path().ends_with("templates"));
    }

    #[test]
    fn test_bundled_templates_have_every_layer() {
        use crate::registry::{providers_for_chain, Chain};

        let root = TemplateRoot::new(BUNDLED_TEMPLATES);
        for chain in Chain::ALL {
            for provider in providers_for_chain(chain) {
                assert!(
                    root.preflight(chain, provider).is_ok(),
                    "missing template layer for {} on {}",
                    provider.id(),
                    chain.id()
                );
            }
        }
    }
}
