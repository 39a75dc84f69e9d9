//! Template layering and project generation
//!
//! This module provides:
//! - The directory overlay used for each template layer
//! - Conflict detection for pre-existing target directories
//! - package.json and .env.example rewriting
//! - `generate_project`, which runs all of the above with cleanup on failure
//!
//! A template root looks like:
//!
//! ```text
//! templates/
//!   base/                 shared Next.js app, copied first
//!   evm/                  chain-wide files and shared directories
//!     rainbowkit/         provider layer, copied last
//!     ...
//!   solana/
//!     wallet-adapter/
//!     ...
//! ```

pub mod conflicts;
pub mod env;
pub mod manifest;
pub mod overlay;

use crate::error::{Result, ScaffoldError};
use crate::options::ResolvedOptions;
use crate::registry::{self, Chain, WalletProvider};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub use conflicts::{conflicting_entries, is_dir_empty, remove_entries};
pub use env::write_env_example;
pub use manifest::patch_manifest;
pub use overlay::overlay;

/// Never copied out of the base template
pub const BASE_EXCLUDES: [&str; 3] = ["node_modules", ".next", ".git"];

/// Directory name inside a chain template reserved for non-provider use
const CHAIN_BASE_MARKER: &str = "base";

/// Location of the layered template tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRoot {
    root: PathBuf,
}

impl TemplateRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn base_dir(&self) -> PathBuf {
        self.root.join("base")
    }

    pub fn chain_dir(&self, chain: Chain) -> PathBuf {
        self.root.join(chain.id())
    }

    pub fn provider_dir(&self, chain: Chain, provider: WalletProvider) -> PathBuf {
        self.chain_dir(chain).join(provider.id())
    }

    /// Check that every layer needed for `chain`/`provider` is present
    pub fn preflight(&self, chain: Chain, provider: WalletProvider) -> Result<()> {
        const REINSTALL: &str = "This is likely a corrupted installation. Try reinstalling.";

        if !self.root.is_dir() {
            return Err(ScaffoldError::TemplateNotFound {
                path: self.root.clone(),
                hint: REINSTALL.to_string(),
            });
        }
        let base = self.base_dir();
        if !base.is_dir() {
            return Err(ScaffoldError::TemplateNotFound {
                path: base,
                hint: REINSTALL.to_string(),
            });
        }
        let provider_dir = self.provider_dir(chain, provider);
        if !provider_dir.is_dir() {
            return Err(ScaffoldError::TemplateNotFound {
                path: provider_dir,
                hint: format!(
                    "No template for {} on {}. This wallet/chain combination may not be supported yet.",
                    provider.display_name(),
                    chain.display_name()
                ),
            });
        }
        Ok(())
    }
}

/// What a successful generation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub files_copied: usize,
}

/// Copy base, chain and provider layers into `project_dir`, in that order.
///
/// Only the chain root's own files and its shared directories (anything not
/// named after a provider or the `base` marker) belong to the chain layer;
/// provider subtrees are left for the provider layer.
pub fn apply_layers(
    templates: &TemplateRoot,
    project_dir: &Path,
    chain: Chain,
    provider: WalletProvider,
) -> Result<usize> {
    let base_excludes: HashSet<&str> = BASE_EXCLUDES.into_iter().collect();
    let mut copied = overlay(&templates.base_dir(), project_dir, &base_excludes)?;

    let chain_dir = templates.chain_dir(chain);
    if chain_dir.is_dir() {
        copied += overlay::overlay_files(&chain_dir, project_dir)?;

        for shared in shared_chain_dirs(&chain_dir)? {
            copied += overlay(&chain_dir.join(&shared), &project_dir.join(&shared), &HashSet::new())?;
        }
    }

    copied += overlay(
        &templates.provider_dir(chain, provider),
        project_dir,
        &HashSet::new(),
    )?;

    Ok(copied)
}

/// Subdirectories of a chain template that are shared by every provider
fn shared_chain_dirs(chain_dir: &Path) -> Result<Vec<String>> {
    let mut shared = Vec::new();
    for entry in fs::read_dir(chain_dir).map_err(|e| ScaffoldError::io(chain_dir, e))? {
        let entry = entry.map_err(|e| ScaffoldError::io(chain_dir, e))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| ScaffoldError::io(entry.path(), e))?
            .is_dir();
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_dir && name != CHAIN_BASE_MARKER && !registry::is_provider_id(&name) {
            shared.push(name);
        }
    }
    shared.sort();
    Ok(shared)
}

/// Generate the project described by `options` from `templates`.
///
/// Runs the three template layers, then rewrites package.json and
/// .env.example. If anything fails, everything this call created is removed
/// before the error is returned: the whole directory when it did not exist
/// before, otherwise each top-level entry that was not already there.
/// Entries that predate the call (e.g. `.git`) are kept.
pub fn generate_project(
    templates: &TemplateRoot,
    options: &ResolvedOptions,
) -> Result<GenerationReport> {
    templates.preflight(options.chain, options.provider)?;

    let project_dir = options.project_path.as_path();
    let existing = if project_dir.exists() {
        Some(top_level_entries(project_dir)?)
    } else {
        None
    };

    let result = write_project(templates, project_dir, options);
    if result.is_err() {
        // Best effort: the generation error is what gets reported
        match existing {
            None => {
                let _ = fs::remove_dir_all(project_dir);
            }
            Some(existing) => {
                if let Ok(now) = top_level_entries(project_dir) {
                    let created: Vec<String> =
                        now.difference(&existing).cloned().collect();
                    let _ = conflicts::remove_entries(project_dir, &created);
                }
            }
        }
    }
    result
}

fn top_level_entries(dir: &Path) -> Result<HashSet<String>> {
    let mut names = HashSet::new();
    for entry in fs::read_dir(dir).map_err(|e| ScaffoldError::io(dir, e))? {
        let entry = entry.map_err(|e| ScaffoldError::io(dir, e))?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

fn write_project(
    templates: &TemplateRoot,
    project_dir: &Path,
    options: &ResolvedOptions,
) -> Result<GenerationReport> {
    let files_copied = apply_layers(templates, project_dir, options.chain, options.provider)?;
    patch_manifest(
        project_dir,
        &options.project_name,
        options.chain,
        options.provider,
    )?;
    write_env_example(project_dir, options.chain, options.provider)?;
    Ok(GenerationReport { files_copied })
}

#[cfg(test)]
pub(crate) mod testing {
    //! Minimal on-disk template tree for tests

    use super::*;

    pub const BASE_PACKAGE_JSON: &str = r#"{
  "name": "nextjs-dapp",
  "version": "0.1.0",
  "private": true,
  "dependencies": {
    "next": "15.1.0",
    "react": "^19.0.0",
    "wagmi": "^1.0.0"
  }
}
"#;

    /// Build base, both chains and every compatible provider layer under `root`
    pub fn write_templates(root: &Path) -> std::io::Result<TemplateRoot> {
        let base = root.join("base");
        fs::create_dir_all(base.join("app"))?;
        fs::create_dir_all(base.join("node_modules/next"))?;
        fs::write(base.join("package.json"), BASE_PACKAGE_JSON)?;
        fs::write(base.join("app/page.tsx"), "base page")?;
        fs::write(base.join("app/layout.tsx"), "base layout")?;
        fs::write(base.join("node_modules/next/index.js"), "")?;

        for chain in Chain::ALL {
            let chain_dir = root.join(chain.id());
            fs::create_dir_all(chain_dir.join("components"))?;
            fs::create_dir_all(chain_dir.join("base"))?;
            fs::write(chain_dir.join("README.md"), format!("{} readme", chain.id()))?;
            fs::write(
                chain_dir.join("components/Header.tsx"),
                format!("{} header", chain.id()),
            )?;
            fs::write(chain_dir.join("base/ignored.txt"), "not copied")?;

            for provider in registry::providers_for_chain(chain) {
                let dir = chain_dir.join(provider.id()).join("components");
                fs::create_dir_all(&dir)?;
                fs::write(dir.join("Providers.tsx"), provider.id())?;
            }
        }
        Ok(TemplateRoot::new(root))
    }
}
