//! package.json rewriting for the selected chain and wallet provider

use crate::error::{Result, ScaffoldError};
use crate::registry::{
    chain_dependencies, provider_dependencies, Chain, WalletProvider, REMOVED_DEPENDENCIES,
};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

/// Description written into the generated package.json
pub fn project_description(chain: Chain, provider: WalletProvider) -> String {
    format!(
        "A Next.js dApp built on {} with {}",
        chain.network_name(),
        provider.display_name()
    )
}

/// Rewrite `<project_dir>/package.json` for the given selection.
///
/// Sets name and description, purges every wallet/chain package ever
/// produced, applies the chain and provider sets, then sorts dependencies by
/// name. Other fields keep their order. Running it twice with the
/// same arguments produces identical bytes.
pub fn patch_manifest(
    project_dir: &Path,
    project_name: &str,
    chain: Chain,
    provider: WalletProvider,
) -> Result<()> {
    let path = project_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path).map_err(|e| ScaffoldError::io(&path, e))?;
    let mut manifest: Value = serde_json::from_str(&content)
        .map_err(|source| ScaffoldError::ManifestParse {
            path: path.clone(),
            source,
        })?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::ManifestShape {
            path: path.clone(),
            reason: "top level is not an object".to_string(),
        })?;

    root.insert("name".to_string(), Value::from(project_name));
    root.insert(
        "description".to_string(),
        Value::from(project_description(chain, provider)),
    );

    let dependencies = root
        .entry("dependencies")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::ManifestShape {
            path: path.clone(),
            reason: "\"dependencies\" is not an object".to_string(),
        })?;

    for name in REMOVED_DEPENDENCIES {
        dependencies.shift_remove(*name);
    }
    for (name, range) in chain_dependencies(chain)
        .into_iter()
        .chain(provider_dependencies(chain, provider))
    {
        dependencies.insert(name.to_string(), Value::from(range));
    }
    sort_keys(dependencies);

    let mut output =
        serde_json::to_string_pretty(&manifest).map_err(|source| ScaffoldError::ManifestParse {
            path: path.clone(),
            source,
        })?;
    output.push('\n');
    fs::write(&path, output).map_err(|e| ScaffoldError::io(&path, e))
}

/// Rebuild `map` with keys in ordinal (byte) order
fn sort_keys(map: &mut Map<String, Value>) {
    let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    map.extend(entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BASE_MANIFEST: &str = r#"{
  "name": "base",
  "version": "0.1.0",
  "private": true,
  "scripts": { "dev": "next dev" },
  "dependencies": {
    "next": "15.1.0",
    "react": "^19.0.0",
    "@rainbow-me/rainbowkit": "^1.0.0",
    "wagmi": "^1.0.0",
    "@tanstack/react-query": "^5.0.0"
  },
  "devDependencies": { "typescript": "^5" }
}"#;

    fn dependencies(dir: &Path) -> Map<String, Value> {
        let content = fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        value["dependencies"].as_object().unwrap().clone()
    }

    #[test]
    fn test_patch_sets_name_description_and_deps() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join(MANIFEST_FILE), BASE_MANIFEST)?;

        patch_manifest(tmp.path(), "my-dapp", Chain::Evm, WalletProvider::ConnectKit)?;

        let content = fs::read_to_string(tmp.path().join(MANIFEST_FILE))?;
        let value: Value = serde_json::from_str(&content)?;
        assert_eq!(value["name"], "my-dapp");
        assert_eq!(
            value["description"],
            "A Next.js dApp built on Ethereum with ConnectKit"
        );
        assert!(content.ends_with("}\n"));

        let deps = dependencies(tmp.path());
        assert_eq!(deps["wagmi"], "^2.19.5");
        assert_eq!(deps["viem"], "^2.44.4");
        assert_eq!(deps["connectkit"], "^1.8.2");
        assert_eq!(deps["next"], "15.1.0");
        assert!(!deps.contains_key("@rainbow-me/rainbowkit"));
        Ok(())
    }

    #[test]
    fn test_dependencies_are_sorted_and_other_fields_keep_order() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join(MANIFEST_FILE), BASE_MANIFEST)?;

        patch_manifest(tmp.path(), "app", Chain::Solana, WalletProvider::Dynamic)?;

        let keys: Vec<String> = dependencies(tmp.path()).keys().cloned().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        let content = fs::read_to_string(tmp.path().join(MANIFEST_FILE))?;
        let value: Value = serde_json::from_str(&content)?;
        let top: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            top,
            vec!["name", "version", "private", "scripts", "dependencies", "devDependencies", "description"]
        );
        Ok(())
    }

    #[test]
    fn test_patch_is_idempotent() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join(MANIFEST_FILE), BASE_MANIFEST)?;

        patch_manifest(tmp.path(), "app", Chain::Evm, WalletProvider::Privy)?;
        let first = fs::read(tmp.path().join(MANIFEST_FILE))?;
        patch_manifest(tmp.path(), "app", Chain::Evm, WalletProvider::Privy)?;
        let second = fs::read(tmp.path().join(MANIFEST_FILE))?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_switching_selection_leaves_no_stale_packages() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join(MANIFEST_FILE), BASE_MANIFEST)?;

        patch_manifest(tmp.path(), "app", Chain::Evm, WalletProvider::Dynamic)?;
        patch_manifest(tmp.path(), "app", Chain::Solana, WalletProvider::Reown)?;

        let deps = dependencies(tmp.path());
        for stale in ["wagmi", "viem", "@dynamic-labs/ethereum", "@dynamic-labs/wagmi-connector"] {
            assert!(!deps.contains_key(stale), "{} survived", stale);
        }
        assert!(deps.contains_key("@reown/appkit-adapter-solana"));
        assert!(deps.contains_key("@solana/web3.js"));
        assert!(deps.contains_key("react"));
        Ok(())
    }

    #[test]
    fn test_missing_dependencies_object_is_created() -> anyhow::Result<()> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join(MANIFEST_FILE), r#"{"name":"x"}"#)?;

        patch_manifest(tmp.path(), "app", Chain::Solana, WalletProvider::WalletAdapter)?;

        assert_eq!(dependencies(tmp.path()).len(), 4);
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(MANIFEST_FILE), "{ not json").unwrap();

        let result = patch_manifest(tmp.path(), "app", Chain::Evm, WalletProvider::RainbowKit);
        assert!(matches!(result, Err(ScaffoldError::ManifestParse { .. })));
    }

    #[test]
    fn test_non_object_dependencies_are_rejected() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(MANIFEST_FILE), r#"{"dependencies": []}"#).unwrap();

        let result = patch_manifest(tmp.path(), "app", Chain::Evm, WalletProvider::RainbowKit);
        assert!(matches!(result, Err(ScaffoldError::ManifestShape { .. })));
    }
}
