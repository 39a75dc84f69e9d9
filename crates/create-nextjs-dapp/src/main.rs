//! create-nextjs-dapp - Scaffold a Next.js dApp with your preferred wallet provider

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use dapp_core::registry::providers_for_chain;
use dapp_core::tui::RunOutcome;
use dapp_core::{Chain, CreateOptions, PackageManager, WalletProvider};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "create-nextjs-dapp")]
#[command(about = "Create a Next.js dApp with your preferred wallet provider")]
#[command(version)]
#[command(after_help = wallet_providers_help())]
pub struct Args {
    /// Name of the project directory (also the package name)
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Blockchain to use
    #[arg(short, long, value_enum, ignore_case = true)]
    pub chain: Option<Chain>,

    /// Wallet provider to use
    #[arg(short, long, value_enum, ignore_case = true)]
    pub wallet: Option<WalletProvider>,

    /// Skip prompts and use defaults
    #[arg(short, long)]
    pub yes: bool,

    /// Initialize a git repository
    #[arg(long)]
    pub git: bool,

    /// Install dependencies after creation
    #[arg(long)]
    pub install: bool,

    /// Use npm as the package manager
    #[arg(long = "use-npm", group = "package_manager")]
    pub use_npm: bool,

    /// Use yarn as the package manager
    #[arg(long = "use-yarn", group = "package_manager")]
    pub use_yarn: bool,

    /// Use pnpm as the package manager
    #[arg(long = "use-pnpm", group = "package_manager")]
    pub use_pnpm: bool,

    /// Use bun as the package manager
    #[arg(long = "use-bun", group = "package_manager")]
    pub use_bun: bool,

    /// Local directory to load templates from (for development use)
    #[arg(long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl Args {
    fn package_manager(&self) -> Option<PackageManager> {
        [
            (self.use_npm, PackageManager::Npm),
            (self.use_yarn, PackageManager::Yarn),
            (self.use_pnpm, PackageManager::Pnpm),
            (self.use_bun, PackageManager::Bun),
        ]
        .into_iter()
        .find_map(|(set, pm)| set.then_some(pm))
    }

    fn create_options(&self) -> CreateOptions {
        CreateOptions {
            project_name: self.project_name.clone(),
            chain: self.chain,
            provider: self.wallet,
            yes: self.yes,
            git: self.git,
            install: self.install,
            package_manager: self.package_manager(),
        }
    }
}

fn wallet_providers_help() -> String {
    let mut help = String::from("Wallet providers:\n");
    for chain in Chain::ALL {
        help.push_str(&format!("  {}:\n", chain.network_name()));
        for provider in providers_for_chain(chain) {
            help.push_str(&format!("    {:<16}{}\n", provider.id(), provider.description()));
        }
    }
    help.push_str(
        "\nExamples:\n  \
         create-nextjs-dapp my-dapp --chain evm --wallet rainbowkit\n  \
         create-nextjs-dapp my-solana-app -c solana -w dynamic\n  \
         create-nextjs-dapp my-dapp --yes --git --install",
    );
    help
}

fn print_error(message: impl std::fmt::Display) {
    eprintln!();
    eprintln!("{} {}", "Error:".red(), message);
    eprintln!();
    eprintln!(
        "Run {} for usage information.",
        "create-nextjs-dapp --help".cyan()
    );
    eprintln!();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let result = dapp_core::run(args.create_options(), args.template_dir.clone()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(RunOutcome::Created | RunOutcome::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
