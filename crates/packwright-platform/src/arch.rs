//! Architecture detection.

use std::fmt;

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X86_64,
    ARM,
    ARM64,
    Unknown,
}

impl Arch {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "i386" | "i686" | "x86" => Arch::X86,
            "x86_64" | "amd64" | "x64" => Arch::X86_64,
            "arm" | "armv7l" => Arch::ARM,
            "aarch64" | "arm64" => Arch::ARM64,
            _ => Arch::Unknown,
        }
    }

    /// Whether a constraint's `arch` attribute names this architecture.
    pub fn matches_tag(self, tag: &str) -> bool { self != Arch::Unknown && Arch::parse(tag) == self }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Arch::X86 => "x86",
            Arch::X86_64 => "x86_64",
            Arch::ARM => "arm",
            Arch::ARM64 => "aarch64",
            Arch::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Detect current architecture.
pub fn detect() -> Arch { Arch::parse(&sysinfo::System::cpu_arch()) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arch_aliases() {
        assert_eq!(Arch::parse("amd64"), Arch::X86_64);
        assert_eq!(Arch::parse("i686"), Arch::X86);
        assert_eq!(Arch::parse("arm64"), Arch::ARM64);
        assert_eq!(Arch::parse("sparc"), Arch::Unknown);
    }

    #[test]
    fn test_unknown_never_matches() {
        assert!(!Arch::Unknown.matches_tag("sparc"));
        assert!(Arch::X86_64.matches_tag("AMD64"));
    }
}
