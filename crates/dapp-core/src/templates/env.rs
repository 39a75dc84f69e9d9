//! .env.example generation

use crate::error::{Result, ScaffoldError};
use crate::registry::{Chain, WalletProvider};
use std::fs;
use std::path::Path;

pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Contents of `.env.example` for a chain and provider
pub fn env_example(chain: Chain, provider: WalletProvider) -> String {
    let (section, address_var, deployed) = match chain {
        Chain::Evm => (
            "# Contract configuration",
            "NEXT_PUBLIC_CONTRACT_ADDRESS=",
            "smart contract",
        ),
        Chain::Solana => (
            "# Program configuration",
            "NEXT_PUBLIC_PROGRAM_ID=",
            "program",
        ),
    };

    let (header, deployed) = match provider {
        WalletProvider::RainbowKit | WalletProvider::ConnectKit => (
            "# WalletConnect Project ID\n\
             # 1. Go to https://cloud.walletconnect.com\n\
             # 2. Sign up or log in\n\
             # 3. Create a new project\n\
             # 4. Copy the Project ID\n\
             NEXT_PUBLIC_WALLETCONNECT_PROJECT_ID=\n",
            "smart contract",
        ),
        WalletProvider::WalletAdapter => (
            "# Solana Configuration\n\
             # No API key required for standard wallet adapter\n",
            "program",
        ),
        WalletProvider::Privy => (
            "# Privy App ID\n\
             # 1. Go to https://dashboard.privy.io\n\
             # 2. Sign up or log in\n\
             # 3. Create a new app\n\
             # 4. Copy the App ID from Settings\n\
             NEXT_PUBLIC_PRIVY_APP_ID=\n",
            deployed,
        ),
        WalletProvider::Dynamic => (
            "# Dynamic Environment ID\n\
             # 1. Go to https://app.dynamic.xyz\n\
             # 2. Sign up or log in\n\
             # 3. Create a new project\n\
             # 4. Go to Developer > SDK & API Keys\n\
             # 5. Copy the Environment ID\n\
             NEXT_PUBLIC_DYNAMIC_ENVIRONMENT_ID=\n",
            deployed,
        ),
        WalletProvider::Reown => (
            "# Reown (WalletConnect) Project ID\n\
             # 1. Go to https://cloud.reown.com\n\
             # 2. Sign up or log in\n\
             # 3. Create a new project\n\
             # 4. Copy the Project ID\n\
             NEXT_PUBLIC_REOWN_PROJECT_ID=\n",
            deployed,
        ),
        WalletProvider::Thirdweb => (
            "# Thirdweb Client ID\n\
             # 1. Go to https://thirdweb.com/dashboard\n\
             # 2. Sign up or log in\n\
             # 3. Go to Settings > API Keys\n\
             # 4. Create a new API key\n\
             # 5. Copy the Client ID\n\
             NEXT_PUBLIC_THIRDWEB_CLIENT_ID=\n",
            deployed,
        ),
        WalletProvider::GetPara => (
            "# GetPara (Capsule) API Key\n\
             # 1. Go to https://developer.getpara.com\n\
             # 2. Sign up or log in\n\
             # 3. Create a new project\n\
             # 4. Copy the API Key\n\
             NEXT_PUBLIC_PARA_API_KEY=\n",
            "smart contract",
        ),
    };

    format!(
        "{}\n{}\n# Your deployed {} address\n{}\n",
        header, section, deployed, address_var
    )
}

/// Write `.env.example` into the project, replacing any existing file
pub fn write_env_example(project_dir: &Path, chain: Chain, provider: WalletProvider) -> Result<()> {
    let path = project_dir.join(ENV_EXAMPLE_FILE);
    fs::write(&path, env_example(chain, provider)).map_err(|e| ScaffoldError::io(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_walletconnect_providers_share_content() {
        assert_eq!(
            env_example(Chain::Evm, WalletProvider::RainbowKit),
            env_example(Chain::Evm, WalletProvider::ConnectKit)
        );
    }

    #[test]
    fn test_rainbowkit_exact_content() {
        assert_eq!(
            env_example(Chain::Evm, WalletProvider::RainbowKit),
            "# WalletConnect Project ID\n\
             # 1. Go to https://cloud.walletconnect.com\n\
             # 2. Sign up or log in\n\
             # 3. Create a new project\n\
             # 4. Copy the Project ID\n\
             NEXT_PUBLIC_WALLETCONNECT_PROJECT_ID=\n\
             \n\
             # Contract configuration\n\
             # Your deployed smart contract address\n\
             NEXT_PUBLIC_CONTRACT_ADDRESS=\n"
        );
    }

    #[test]
    fn test_address_framing_follows_chain() {
        let evm = env_example(Chain::Evm, WalletProvider::Privy);
        assert!(evm.contains("# Contract configuration"));
        assert!(evm.contains("# Your deployed smart contract address"));
        assert!(evm.contains("NEXT_PUBLIC_CONTRACT_ADDRESS="));

        let solana = env_example(Chain::Solana, WalletProvider::Privy);
        assert!(solana.contains("# Program configuration"));
        assert!(solana.contains("# Your deployed program address"));
        assert!(solana.contains("NEXT_PUBLIC_PROGRAM_ID="));
        assert!(solana.starts_with("# Privy App ID\n"));
    }

    #[test]
    fn test_wallet_adapter_needs_no_key() {
        let content = env_example(Chain::Solana, WalletProvider::WalletAdapter);
        assert!(content.contains("No API key required"));
        assert!(!content.contains("NEXT_PUBLIC_WALLETCONNECT_PROJECT_ID"));
    }

    #[test]
    fn test_write_overwrites_existing_file() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join(ENV_EXAMPLE_FILE), "STALE=1\n")?;

        write_env_example(tmp.path(), Chain::Solana, WalletProvider::Thirdweb)?;

        let content = fs::read_to_string(tmp.path().join(ENV_EXAMPLE_FILE))?;
        assert!(content.starts_with("# Thirdweb Client ID"));
        assert!(!content.contains("STALE"));
        Ok(())
    }
}
