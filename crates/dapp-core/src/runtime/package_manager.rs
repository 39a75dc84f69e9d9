//! Package manager selection and commands

use clap::ValueEnum;
use std::fmt;

/// Environment variable npm-compatible launchers set to identify themselves
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Detect from a user agent such as `pnpm/8.6.0 npm/? node/v18.0.0`
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.starts_with("yarn") => PackageManager::Yarn,
            Some(ua) if ua.starts_with("pnpm") => PackageManager::Pnpm,
            Some(ua) if ua.starts_with("bun") => PackageManager::Bun,
            _ => PackageManager::Npm,
        }
    }

    /// Detect the package manager that launched this process
    pub fn detect() -> Self {
        Self::from_user_agent(std::env::var(USER_AGENT_ENV).ok().as_deref())
    }

    /// Program and arguments that install dependencies
    pub fn install_argv(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["npm", "install"],
            PackageManager::Yarn => &["yarn"],
            PackageManager::Pnpm => &["pnpm", "install"],
            PackageManager::Bun => &["bun", "install"],
        }
    }

    pub fn install_command(&self) -> String {
        self.install_argv().join(" ")
    }

    /// Command that starts the dev server
    pub fn run_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Yarn => "yarn dev",
            PackageManager::Pnpm => "pnpm dev",
            PackageManager::Bun => "bun dev",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_user_agent() {
        assert_eq!(PackageManager::from_user_agent(None), PackageManager::Npm);
        assert_eq!(
            PackageManager::from_user_agent(Some("yarn/1.22.19 npm/? node/v18.0.0")),
            PackageManager::Yarn
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("pnpm/8.6.0 npm/? node/v18.0.0")),
            PackageManager::Pnpm
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("bun/1.0.0 npm/? node/v18.0.0")),
            PackageManager::Bun
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("unknown-package-manager/1.0.0")),
            PackageManager::Npm
        );
        assert_eq!(PackageManager::from_user_agent(Some("")), PackageManager::Npm);
    }

    #[test]
    fn test_commands() {
        assert_eq!(PackageManager::Npm.install_command(), "npm install");
        assert_eq!(PackageManager::Yarn.install_command(), "yarn");
        assert_eq!(PackageManager::Pnpm.install_command(), "pnpm install");
        assert_eq!(PackageManager::Bun.install_command(), "bun install");

        assert_eq!(PackageManager::Npm.run_command(), "npm run dev");
        assert_eq!(PackageManager::Yarn.run_command(), "yarn dev");
        assert_eq!(PackageManager::Pnpm.run_command(), "pnpm dev");
        assert_eq!(PackageManager::Bun.run_command(), "bun dev");
    }
}
