//! Static chain and wallet provider registry
//!
//! Chains and providers are closed sets. Every table keyed by them (dependency
//! versions, env file content, compatibility) is an exhaustive `match`, so a
//! new variant cannot be added without the compiler pointing at each table.

pub mod dependencies;

use clap::ValueEnum;
use std::fmt;

pub use dependencies::{chain_dependencies, provider_dependencies, DependencySet, REMOVED_DEPENDENCIES};

/// Target blockchain ecosystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Chain {
    Evm,
    Solana,
}

impl Chain {
    /// All chains in declaration order; the first one is the default
    pub const ALL: [Chain; 2] = [Chain::Evm, Chain::Solana];

    pub fn id(&self) -> &'static str {
        match self {
            Chain::Evm => "evm",
            Chain::Solana => "solana",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Evm => "Ethereum (EVM)",
            Chain::Solana => "Solana",
        }
    }

    /// Network name used in generated project descriptions
    pub fn network_name(&self) -> &'static str {
        match self {
            Chain::Evm => "Ethereum",
            Chain::Solana => "Solana",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Chain::Evm => "Ethereum, Polygon, Base, Arbitrum, etc.",
            Chain::Solana => "Solana blockchain",
        }
    }

    /// Identifiers of the providers that support this chain
    pub fn provider_ids(&self) -> Vec<&'static str> {
        providers_for_chain(*self).iter().map(|p| p.id()).collect()
    }

    pub fn from_id(id: &str) -> Option<Chain> {
        Self::ALL.into_iter().find(|c| c.id().eq_ignore_ascii_case(id))
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Wallet-connection integration for the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum WalletProvider {
    #[value(name = "rainbowkit")]
    RainbowKit,
    #[value(name = "connectkit")]
    ConnectKit,
    Privy,
    Dynamic,
    Reown,
    Thirdweb,
    #[value(name = "getpara")]
    GetPara,
    WalletAdapter,
}

impl WalletProvider {
    /// All providers in declaration order
    pub const ALL: [WalletProvider; 8] = [
        WalletProvider::RainbowKit,
        WalletProvider::ConnectKit,
        WalletProvider::Privy,
        WalletProvider::Dynamic,
        WalletProvider::Reown,
        WalletProvider::Thirdweb,
        WalletProvider::GetPara,
        WalletProvider::WalletAdapter,
    ];

    /// Identifier, also the template subdirectory name under each chain
    pub fn id(&self) -> &'static str {
        match self {
            WalletProvider::RainbowKit => "rainbowkit",
            WalletProvider::ConnectKit => "connectkit",
            WalletProvider::Privy => "privy",
            WalletProvider::Dynamic => "dynamic",
            WalletProvider::Reown => "reown",
            WalletProvider::Thirdweb => "thirdweb",
            WalletProvider::GetPara => "getpara",
            WalletProvider::WalletAdapter => "wallet-adapter",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WalletProvider::RainbowKit => "RainbowKit",
            WalletProvider::ConnectKit => "ConnectKit",
            WalletProvider::Privy => "Privy",
            WalletProvider::Dynamic => "Dynamic",
            WalletProvider::Reown => "Reown (AppKit)",
            WalletProvider::Thirdweb => "Thirdweb",
            WalletProvider::GetPara => "GetPara (Capsule)",
            WalletProvider::WalletAdapter => "Solana Wallet Adapter",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WalletProvider::RainbowKit => "Best UX for connecting wallets (recommended)",
            WalletProvider::ConnectKit => "Beautiful, customizable wallet connection UI",
            WalletProvider::Privy => "Email, social, and wallet login with embedded wallets",
            WalletProvider::Dynamic => "Multi-chain auth with embedded wallets and onramps",
            WalletProvider::Reown => "WalletConnect's official SDK (formerly Web3Modal)",
            WalletProvider::Thirdweb => {
                "Full-stack web3 development platform with embedded wallets"
            }
            WalletProvider::GetPara => "Embedded wallets with MPC key management",
            WalletProvider::WalletAdapter => "Standard Solana wallet connection (recommended)",
        }
    }

    /// Chains this provider supports, never empty
    pub fn chains(&self) -> &'static [Chain] {
        match self {
            WalletProvider::RainbowKit | WalletProvider::ConnectKit | WalletProvider::GetPara => {
                &[Chain::Evm]
            }
            WalletProvider::Privy
            | WalletProvider::Dynamic
            | WalletProvider::Reown
            | WalletProvider::Thirdweb => &[Chain::Evm, Chain::Solana],
            WalletProvider::WalletAdapter => &[Chain::Solana],
        }
    }

    pub fn from_id(id: &str) -> Option<WalletProvider> {
        Self::ALL.into_iter().find(|p| p.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for WalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Providers supporting `chain`, in declaration order
pub fn providers_for_chain(chain: Chain) -> Vec<WalletProvider> {
    WalletProvider::ALL
        .into_iter()
        .filter(|p| is_compatible(*p, chain))
        .collect()
}

/// First compatible provider for `chain`
pub fn default_provider(chain: Chain) -> Option<WalletProvider> {
    providers_for_chain(chain).into_iter().next()
}

pub fn is_compatible(provider: WalletProvider, chain: Chain) -> bool {
    provider.chains().contains(&chain)
}

/// Whether `name` is a provider identifier (used to tell provider subtrees
/// apart from shared directories inside a chain template)
pub fn is_provider_id(name: &str) -> bool {
    WalletProvider::ALL.iter().any(|p| p.id() == name)
}
