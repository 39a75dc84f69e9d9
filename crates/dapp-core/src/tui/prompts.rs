//! Charm-style CLI prompts using cliclack

use crate::config::{self, TemplateOrigin};
use crate::create::{self, Resolution};
use crate::error::{ErrorCategory, ScaffoldError};
use crate::options::{CreateOptions, ResolvedOptions};
use crate::prompt::{Choice, Prompt, Prompter, Validator};
use crate::runtime::{GitInit, PackageManager, ProjectTools, SystemTools};
use crate::templates::{self, TemplateRoot};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

const CANCEL_MESSAGE: &str = "See you next time!";

/// How an interactive run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Created,
    Cancelled,
}

/// Prompter backed by cliclack; Esc and Ctrl+C count as cancellation
#[derive(Debug, Default)]
pub struct CliclackPrompter;

fn answer<T>(result: io::Result<T>) -> Result<Prompt<T>> {
    match result {
        Ok(value) => Ok(Prompt::Value(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Prompt::Cancelled),
        Err(e) => Err(e.into()),
    }
}

impl Prompter for CliclackPrompter {
    fn text(&mut self, message: &str, default: &str, validate: Validator) -> Result<Prompt<String>> {
        answer(
            cliclack::input(message)
                .placeholder(default)
                .default_input(default)
                .validate(move |input: &String| validate(input))
                .interact(),
        )
    }

    fn select(&mut self, message: &str, choices: &[Choice], initial: usize) -> Result<Prompt<usize>> {
        let mut select = cliclack::select(message);
        for (idx, choice) in choices.iter().enumerate() {
            select = select.item(idx, &choice.label, &choice.hint);
        }
        answer(select.initial_value(initial).interact())
    }

    fn confirm(&mut self, message: &str, initial: bool) -> Result<Prompt<bool>> {
        answer(cliclack::confirm(message).initial_value(initial).interact())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// Shows a spinner around each post-generation step
struct WithSpinner<T> {
    inner: T,
}

impl<T: ProjectTools> ProjectTools for WithSpinner<T> {
    async fn init_git(&self, root: &Path) -> GitInit {
        let spinner = cliclack::spinner();
        spinner.start("Initializing git repository...");
        let outcome = self.inner.init_git(root).await;
        spinner.stop(match outcome {
            GitInit::Initialized => "Git repository initialized!",
            GitInit::AlreadyTracked => "Skipped git init (already inside a repository)",
            GitInit::Unavailable => "Git initialization failed (git may not be installed)",
            GitInit::Failed => "Git initialization failed",
        });
        outcome
    }

    async fn install(&self, root: &Path, package_manager: PackageManager) -> bool {
        let spinner = cliclack::spinner();
        spinner.start(format!("Installing dependencies with {}...", package_manager));
        let installed = self.inner.install(root, package_manager).await;
        if installed {
            spinner.stop("Dependencies installed!");
        } else {
            spinner.stop("Failed to install dependencies");
        }
        installed
    }
}

/// Run the CLI with interactive prompts
pub async fn run(options: CreateOptions, template_dir: Option<PathBuf>) -> Result<RunOutcome> {
    cliclack::intro("create-nextjs-dapp".bold().cyan())?;

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let templates = setup_templates(template_dir.as_deref(), &cwd)?;

    let mut prompter = CliclackPrompter;
    let resolved = match create::resolve_options(&mut prompter, &options, &cwd)? {
        Resolution::Ready(resolved) => resolved,
        Resolution::Cancelled => {
            cliclack::outro_cancel(CANCEL_MESSAGE)?;
            return Ok(RunOutcome::Cancelled);
        }
    };

    create_project(&templates, &resolved)?;

    let report = create::run_post_actions(&WithSpinner { inner: SystemTools }, &resolved).await;

    print_summary(&resolved, report.installed.unwrap_or(false));
    cliclack::outro("Happy building!".bold().green())?;

    Ok(RunOutcome::Created)
}

fn setup_templates(flag: Option<&Path>, cwd: &Path) -> Result<TemplateRoot> {
    let (templates, origin) = config::locate_templates(flag, cwd);
    if matches!(origin, TemplateOrigin::Flag | TemplateOrigin::Env) {
        cliclack::log::info(format!(
            "Using local templates from {} ({})",
            templates.path().display(),
            origin
        ))?;
    }
    Ok(templates)
}

fn create_project(templates: &TemplateRoot, options: &ResolvedOptions) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating your dApp...");

    match templates::generate_project(templates, options) {
        Ok(report) => {
            spinner.stop(format!(
                "Project created! ({} files in {})",
                report.files_copied,
                options.project_path.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            anyhow::bail!(failure_message(&e, &options.project_path));
        }
    }
}

/// User-facing explanation of a generation failure
fn failure_message(err: &ScaffoldError, project_path: &Path) -> String {
    if let ScaffoldError::TemplateNotFound { .. } = err {
        return err.to_string();
    }
    match err.category() {
        ErrorCategory::PermissionDenied => format!(
            "Permission denied. Unable to write to {}\n  Try running with appropriate permissions or choose a different location.",
            project_path.display()
        ),
        ErrorCategory::DiskFull => "Not enough disk space to create project.".to_string(),
        ErrorCategory::NotFound => format!(
            "File or directory not found during project creation.\n  {}",
            err
        ),
        ErrorCategory::Other => format!(
            "An error occurred while creating the project:\n  {}",
            err
        ),
    }
}

fn print_summary(options: &ResolvedOptions, installed: bool) {
    let rule = "────────────────────────────────────────".dimmed();

    println!();
    println!("  {}", rule);
    println!();
    println!("  {}    {}", "Chain:".bold(), options.chain.display_name().cyan());
    println!("  {}   {}", "Wallet:".bold(), options.provider.display_name().cyan());
    println!("  {}     {}", "Path:".bold(), options.project_path.display().to_string().dimmed());
    println!();
    println!("  {}", rule);

    println!();
    println!("  {}", "Next steps:".bold());
    println!();

    for (i, step) in create::next_steps(options, installed).iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).dimmed(), step.cyan());
    }
    println!();
}
