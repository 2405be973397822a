//! Per-language default packages and merging with user-supplied ones.

/// Packages every dev shell for a language gets, keyed by exact language name.
pub const LANGUAGE_PACKAGES: &[(&str, &[&str])] = &[
    ("go", &["go"]),
    ("python", &["python3"]),
    ("rust", &["rustc", "cargo", "rustfmt", "rust-analyzer", "clippy"]),
];

/// Default packages for `language`. Lookup is case-sensitive; unknown
/// languages have no defaults.
pub fn default_packages(language: &str) -> &'static [&'static str] {
    LANGUAGE_PACKAGES
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, pkgs)| *pkgs)
        .unwrap_or(&[])
}

/// Split the raw `-p` value. An empty string means no packages; otherwise
/// every comma separates an entry, including empty ones.
pub fn split_packages(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

/// User packages first, then the language defaults. Nothing is deduplicated.
pub fn resolve_packages(user: Vec<String>, language: &str) -> Vec<String> {
    let mut packages = user;
    packages.extend(default_packages(language).iter().map(|p| p.to_string()));
    packages
}
