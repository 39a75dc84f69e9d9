//! Options supplied by the user and the resolved configuration of a run

use crate::registry::{Chain, WalletProvider};
use crate::runtime::PackageManager;
use std::path::PathBuf;

/// Project name used when prompts are skipped
pub const DEFAULT_PROJECT_NAME: &str = "my-dapp";

/// Raw options from the command line; unset fields are prompted for
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub project_name: Option<String>,
    pub chain: Option<Chain>,
    pub provider: Option<WalletProvider>,

    /// Skip prompts and use defaults (non-interactive mode)
    pub yes: bool,

    /// Initialize a git repository after generation
    pub git: bool,

    /// Install dependencies after generation
    pub install: bool,

    /// Explicit package manager; detected from the environment when unset
    pub package_manager: Option<PackageManager>,
}

/// Fully validated configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub project_name: String,
    pub chain: Chain,
    /// Always compatible with `chain`
    pub provider: WalletProvider,
    /// Absolute path of the project directory
    pub project_path: PathBuf,
    pub package_manager: PackageManager,
    pub git: bool,
    pub install: bool,
}
