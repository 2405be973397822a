use crate::hooks::ShellHook;
use crate::packages::resolve_packages;
use serde::Serialize;

pub const DEFAULT_DESCRIPTION: &str = "Dev Shell Flake";
pub const DEFAULT_NIXPKGS: &str = "nixpkgs/nixos-unstable";

/// Everything the flake template needs, assembled once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub name: String,
    pub description: String,
    pub packages: Vec<String>,
    pub system: String,
    pub language: String,
    pub nixpkgs: String,
}

impl Descriptor {
    /// Build a descriptor, merging `user_packages` with the language
    /// defaults. An empty description falls back to [`DEFAULT_DESCRIPTION`].
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        user_packages: Vec<String>,
        description: Option<String>,
        system: impl Into<String>,
    ) -> Self {
        let language = language.into();
        let packages = resolve_packages(user_packages, &language);
        let description = description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Descriptor {
            name: name.into(),
            description,
            packages,
            system: system.into(),
            language,
            nixpkgs: DEFAULT_NIXPKGS.to_string(),
        }
    }

    pub fn with_nixpkgs(mut self, nixpkgs: impl Into<String>) -> Self {
        self.nixpkgs = nixpkgs.into();
        self
    }

    pub fn shell_hook(&self) -> ShellHook {
        ShellHook::for_language(&self.language)
    }
}
