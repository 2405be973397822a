//! Nix system identifiers (`<arch>-<os>`) for the host.

use std::env::consts;

/// Map an architecture name to its Nix spelling. Unknown names pass through.
pub fn nix_arch(arch: &str) -> &str {
    match arch {
        "amd64" | "x86_64" => "x86_64",
        "arm64" | "aarch64" => "aarch64",
        other => other,
    }
}

/// Map an operating system name to its Nix spelling. Unknown names pass through.
pub fn nix_os(os: &str) -> &str {
    match os {
        "linux" => "linux",
        "darwin" | "macos" => "darwin",
        other => other,
    }
}

pub fn nix_system(arch: &str, os: &str) -> String {
    format!("{}-{}", nix_arch(arch), nix_os(os))
}

/// The Nix system string of the machine running this process.
pub fn host_system() -> String {
    nix_system(consts::ARCH, consts::OS)
}
