//! dApp Core - Shared library behind `create-nextjs-dapp`
//!
//! This library scaffolds Next.js dApp projects from a layered template tree:
//! a shared base, a chain layer and a wallet provider layer.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name validation, the chain/provider registry,
//!   directory overlay, conflict detection, package.json and .env.example rewriting
//! - **Layer 2: Workflow Orchestration** - [`create::resolve_options`] driven by a
//!   [`Prompter`], [`templates::generate_project`] and [`create::run_post_actions`]
//!   driven by [`ProjectTools`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use dapp_core::{generate_project, Chain, ResolvedOptions, TemplateRoot, WalletProvider};
//!
//! let templates = TemplateRoot::new("templates");
//! let report = generate_project(&templates, &ResolvedOptions {
//!     project_name: "my-dapp".into(),
//!     chain: Chain::Evm,
//!     provider: WalletProvider::RainbowKit,
//!     project_path: "/tmp/my-dapp".into(),
//!     package_manager: Default::default(),
//!     git: false,
//!     install: false,
//! })?;
//! ```

pub mod config;
pub mod create;
pub mod error;
pub mod naming;
pub mod options;
pub mod prompt;
pub mod registry;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use create::{resolve_options, run_post_actions, PostActionReport, Resolution};
pub use error::{ErrorCategory, ScaffoldError};
pub use naming::{validate_project_name, NameValidation};
pub use options::{CreateOptions, ResolvedOptions};
pub use prompt::{Choice, Prompt, Prompter};
pub use registry::{Chain, WalletProvider};
pub use runtime::{GitInit, PackageManager, ProjectTools, SystemTools};
pub use templates::{generate_project, GenerationReport, TemplateRoot};

#[cfg(feature = "tui")]
pub use tui::run;
