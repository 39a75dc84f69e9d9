//! Option resolution and post-generation steps
//!
//! A run moves through name, chain and provider selection, then validates the
//! destination and handles conflicts before anything is generated. Any prompt
//! can be cancelled, which ends the run without an error. With `yes` set no
//! prompt is shown: defaults are used and anything that would need a
//! decision from the user is an error instead.

use crate::error::{summarize_conflicts, ScaffoldError};
use crate::naming::validate_project_name;
use crate::options::{CreateOptions, ResolvedOptions, DEFAULT_PROJECT_NAME};
use crate::prompt::{Choice, Prompt, Prompter};
use crate::registry::{self, Chain, WalletProvider};
use crate::runtime::{GitInit, PackageManager, ProjectTools};
use crate::templates::conflicts::{conflicting_entries, is_dir_empty, remove_entries};
use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// How option resolution ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Ready(ResolvedOptions),
    Cancelled,
}

/// Unwrap a prompt answer or end resolution as cancelled
macro_rules! answer {
    ($prompt:expr) => {
        match $prompt {
            Prompt::Value(value) => value,
            Prompt::Cancelled => return Ok(Resolution::Cancelled),
        }
    };
}

/// Merge command-line options with interactive answers and prepare the
/// destination directory.
///
/// Conflicting entries in an existing destination are deleted only after the
/// user agrees to overwrite them.
pub fn resolve_options<P: Prompter>(
    prompter: &mut P,
    options: &CreateOptions,
    cwd: &Path,
) -> Result<Resolution> {
    let project_name = match &options.project_name {
        Some(name) => {
            let validation = validate_project_name(name);
            if !validation.is_valid() {
                return Err(ScaffoldError::InvalidName {
                    name: name.clone(),
                    problems: validation.problems,
                }
                .into());
            }
            name.clone()
        }
        None if options.yes => DEFAULT_PROJECT_NAME.to_string(),
        None => answer!(prompter.text(
            "What is your project named?",
            DEFAULT_PROJECT_NAME,
            name_problem
        )?),
    };

    let chain = match options.chain {
        Some(chain) => chain,
        None if options.yes => Chain::default(),
        None => {
            let choices: Vec<Choice> = Chain::ALL
                .iter()
                .map(|c| Choice::new(c.display_name(), c.description()))
                .collect();
            let index = answer!(prompter.select(
                "Which blockchain do you want to build on?",
                &choices,
                0
            )?);
            Chain::ALL[index]
        }
    };

    let available = registry::providers_for_chain(chain);
    let mut provider = options.provider;
    if let Some(requested) = provider {
        if !available.contains(&requested) {
            if options.yes {
                return Err(ScaffoldError::IncompatibleProvider {
                    provider: requested,
                    chain,
                }
                .into());
            }
            prompter.warn(&format!(
                "{} doesn't support {}. Please choose another provider.",
                requested.display_name(),
                chain.display_name()
            ))?;
            provider = None;
        }
    }
    let provider = match provider {
        Some(provider) => provider,
        None => answer!(select_provider(prompter, chain, &available, options.yes)?),
    };

    let project_path = cwd.join(&project_name);
    let parent = project_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());
    if !is_writable(&parent) {
        return Err(ScaffoldError::NotWritable(parent).into());
    }

    if project_path.exists() && !is_dir_empty(&project_path)? {
        let conflicts = conflicting_entries(&project_path)?;
        if !conflicts.is_empty() {
            if options.yes {
                return Err(ScaffoldError::Conflicts {
                    name: project_name,
                    conflicts,
                }
                .into());
            }
            prompter.warn(&format!(
                "Directory {} contains files that could conflict:\n  {}",
                project_name,
                summarize_conflicts(&conflicts)
            ))?;
            let overwrite = answer!(prompter.confirm("Would you like to overwrite these files?", false)?);
            if !overwrite {
                return Ok(Resolution::Cancelled);
            }
            remove_entries(&project_path, &conflicts)?;
        }
    }

    Ok(Resolution::Ready(ResolvedOptions {
        project_name,
        chain,
        provider,
        project_path,
        package_manager: options
            .package_manager
            .unwrap_or_else(PackageManager::detect),
        git: options.git,
        install: options.install,
    }))
}

fn select_provider<P: Prompter>(
    prompter: &mut P,
    chain: Chain,
    available: &[WalletProvider],
    yes: bool,
) -> Result<Prompt<WalletProvider>> {
    let Some(default) = registry::default_provider(chain) else {
        anyhow::bail!("No wallet providers support {}", chain.display_name());
    };
    if yes {
        return Ok(Prompt::Value(default));
    }

    let choices: Vec<Choice> = available
        .iter()
        .map(|p| Choice::new(p.display_name(), p.description()))
        .collect();
    let answer = prompter.select("Which wallet provider do you want to use?", &choices, 0)?;
    Ok(match answer {
        Prompt::Value(index) => Prompt::Value(available[index]),
        Prompt::Cancelled => Prompt::Cancelled,
    })
}

fn name_problem(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Project name is required".to_string());
    }
    let validation = validate_project_name(name);
    match validation.first_problem() {
        Some(problem) => Err(problem.to_string()),
        None => Ok(()),
    }
}

/// True when files can be created in `dir`
pub fn is_writable(dir: &Path) -> bool {
    if !dir.is_dir() {
        return false;
    }
    let marker = dir.join(format!(".create-nextjs-dapp-{}", std::process::id()));
    match OpenOptions::new().write(true).create_new(true).open(&marker) {
        Ok(_) => {
            let _ = fs::remove_file(&marker);
            true
        }
        Err(e) => e.kind() == std::io::ErrorKind::AlreadyExists,
    }
}

/// What the best-effort steps after generation did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostActionReport {
    /// `None` when git initialization was not requested
    pub git: Option<GitInit>,
    /// `None` when installation was not requested
    pub installed: Option<bool>,
}

/// Run the requested git and install steps; failures are only reported
pub async fn run_post_actions<T: ProjectTools>(
    tools: &T,
    options: &ResolvedOptions,
) -> PostActionReport {
    let mut report = PostActionReport::default();
    if options.git {
        report.git = Some(tools.init_git(&options.project_path).await);
    }
    if options.install {
        report.installed = Some(
            tools
                .install(&options.project_path, options.package_manager)
                .await,
        );
    }
    report
}

/// Numbered "next steps" shown after a successful run
pub fn next_steps(options: &ResolvedOptions, installed: bool) -> Vec<String> {
    let mut steps = vec![format!("cd {}", options.project_name)];
    if !installed {
        steps.push(options.package_manager.install_command());
    }
    steps.push(options.package_manager.run_command().to_string());
    steps
}
