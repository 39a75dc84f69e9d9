//! Dependency versions for each chain and wallet provider
//!
//! Update versions here when upgrading dependencies.

use super::{Chain, WalletProvider};
use std::collections::BTreeMap;

/// Package name to version range
pub type DependencySet = BTreeMap<&'static str, &'static str>;

// EVM base
const WAGMI: (&str, &str) = ("wagmi", "^2.19.5");
const VIEM: (&str, &str) = ("viem", "^2.44.4");

// Solana base
const SOLANA_WEB3: (&str, &str) = ("@solana/web3.js", "^1.98.0");
const SOLANA_ADAPTER_REACT: (&str, &str) = ("@solana/wallet-adapter-react", "^0.15.35");
const SOLANA_ADAPTER_REACT_UI: (&str, &str) = ("@solana/wallet-adapter-react-ui", "^0.9.35");
const SOLANA_ADAPTER_WALLETS: (&str, &str) = ("@solana/wallet-adapter-wallets", "^0.19.32");

// Wallet providers
const RAINBOWKIT: (&str, &str) = ("@rainbow-me/rainbowkit", "^2.2.10");
const CONNECTKIT: (&str, &str) = ("connectkit", "^1.8.2");
const PRIVY_AUTH: (&str, &str) = ("@privy-io/react-auth", "^2.4.1");
const PRIVY_WAGMI: (&str, &str) = ("@privy-io/wagmi", "^1.0.2");
const DYNAMIC_ETHEREUM: (&str, &str) = ("@dynamic-labs/ethereum", "^4.0.0");
const DYNAMIC_SOLANA: (&str, &str) = ("@dynamic-labs/solana", "^4.0.0");
const DYNAMIC_CORE: (&str, &str) = ("@dynamic-labs/sdk-react-core", "^4.0.0");
const DYNAMIC_WAGMI: (&str, &str) = ("@dynamic-labs/wagmi-connector", "^4.0.0");
const REOWN_APPKIT: (&str, &str) = ("@reown/appkit", "^1.6.1");
const REOWN_WAGMI: (&str, &str) = ("@reown/appkit-adapter-wagmi", "^1.6.1");
const REOWN_SOLANA: (&str, &str) = ("@reown/appkit-adapter-solana", "^1.6.1");
const THIRDWEB: (&str, &str) = ("thirdweb", "^5.80.0");
const GETPARA: (&str, &str) = ("@getpara/react-sdk", "^2.0.0");

/// Every package any chain or provider has ever added. Purged from the
/// manifest before the current selection is applied, so switching chain or
/// provider never leaves another provider's packages behind.
pub const REMOVED_DEPENDENCIES: &[&str] = &[
    // EVM
    "@rainbow-me/rainbowkit",
    "@privy-io/react-auth",
    "@privy-io/wagmi",
    "@dynamic-labs/ethereum",
    "@dynamic-labs/sdk-react-core",
    "@dynamic-labs/wagmi-connector",
    "@reown/appkit",
    "@reown/appkit-adapter-wagmi",
    "thirdweb",
    "@getpara/react-sdk",
    "connectkit",
    "wagmi",
    "viem",
    // Solana
    "@dynamic-labs/solana",
    "@reown/appkit-adapter-solana",
    "@solana/web3.js",
    "@solana/wallet-adapter-react",
    "@solana/wallet-adapter-react-ui",
    "@solana/wallet-adapter-wallets",
];

/// Base dependencies for a chain, independent of the wallet provider
pub fn chain_dependencies(chain: Chain) -> DependencySet {
    match chain {
        Chain::Evm => DependencySet::from([WAGMI, VIEM]),
        Chain::Solana => DependencySet::from([
            SOLANA_WEB3,
            SOLANA_ADAPTER_REACT,
            SOLANA_ADAPTER_REACT_UI,
            SOLANA_ADAPTER_WALLETS,
        ]),
    }
}

/// Extra dependencies a provider needs on a chain.
///
/// Pairs that are not compatible yield an empty set; callers are expected to
/// reject them before generating anything.
pub fn provider_dependencies(chain: Chain, provider: WalletProvider) -> DependencySet {
    use WalletProvider::*;

    let entries: &[(&str, &str)] = match (chain, provider) {
        (Chain::Evm, RainbowKit) => &[RAINBOWKIT],
        (Chain::Evm, ConnectKit) => &[CONNECTKIT],
        (Chain::Evm, Privy) => &[PRIVY_AUTH, PRIVY_WAGMI],
        (Chain::Evm, Dynamic) => &[DYNAMIC_ETHEREUM, DYNAMIC_CORE, DYNAMIC_WAGMI],
        (Chain::Evm, Reown) => &[REOWN_APPKIT, REOWN_WAGMI],
        (Chain::Evm, Thirdweb) => &[THIRDWEB],
        (Chain::Evm, GetPara) => &[GETPARA],
        // Uses the base Solana packages only
        (Chain::Solana, WalletAdapter) => &[],
        (Chain::Solana, Privy) => &[PRIVY_AUTH],
        (Chain::Solana, Dynamic) => &[DYNAMIC_SOLANA, DYNAMIC_CORE],
        (Chain::Solana, Reown) => &[REOWN_APPKIT, REOWN_SOLANA],
        (Chain::Solana, Thirdweb) => &[THIRDWEB],
        (Chain::Evm, WalletAdapter)
        | (Chain::Solana, RainbowKit | ConnectKit | GetPara) => &[],
    };

    entries.iter().copied().collect()
}
