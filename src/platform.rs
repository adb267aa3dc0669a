//! Host platform classification.
//!
//! The download pattern only distinguishes three operating systems, so the
//! classifier collapses whatever the host reports into a four-valued enum.

use std::str::FromStr;

/// Coarse operating-system category used for asset matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Mac,
    Unknown,
}

impl Platform {
    /// Classify a raw platform identifier string.
    ///
    /// Total function: lower-cases the input and runs chained substring
    /// checks. The check order ("win" before "linux" before "mac") is part
    /// of the contract.
    pub fn classify(raw: &str) -> Self {
        let lower = raw.to_lowercase();

        if lower.contains("win") {
            Platform::Windows
        } else if lower.contains("linux") {
            Platform::Linux
        } else if lower.contains("mac") {
            Platform::Mac
        } else {
            Platform::Unknown
        }
    }

    /// Classify the platform the binary is running on.
    pub fn detect() -> Self {
        Self::classify(std::env::consts::OS)
    }

    /// The lower-case token substituted into the asset match pattern.
    ///
    /// `None` for [`Platform::Unknown`], which disables matching.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Platform::Windows => Some("windows"),
            Platform::Linux => Some("linux"),
            Platform::Mac => Some("mac"),
            Platform::Unknown => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token().unwrap_or("unknown"))
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::classify(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_windows_any_case() {
        assert_eq!(Platform::classify("Win32"), Platform::Windows);
        assert_eq!(Platform::classify("WINDOWS"), Platform::Windows);
        assert_eq!(Platform::classify("windows"), Platform::Windows);
    }

    #[test]
    fn test_classify_linux() {
        assert_eq!(Platform::classify("Linux x86_64"), Platform::Linux);
        assert_eq!(Platform::classify("linux"), Platform::Linux);
    }

    #[test]
    fn test_classify_mac() {
        assert_eq!(Platform::classify("MacIntel"), Platform::Mac);
        assert_eq!(Platform::classify("macos"), Platform::Mac);
    }

    #[test]
    fn test_classify_win_beats_mac() {
        // "darwin" contains "win", and "win" is checked first
        assert_eq!(Platform::classify("darwin"), Platform::Windows);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Platform::classify("FreeBSD"), Platform::Unknown);
        assert_eq!(Platform::classify(""), Platform::Unknown);
        assert_eq!(Platform::classify("SunOS sparc"), Platform::Unknown);
    }

    #[test]
    fn test_detect_matches_build_target() {
        let platform = Platform::detect();

        #[cfg(target_os = "macos")]
        assert_eq!(platform, Platform::Mac);

        #[cfg(target_os = "linux")]
        assert_eq!(platform, Platform::Linux);

        #[cfg(target_os = "windows")]
        assert_eq!(platform, Platform::Windows);

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        assert_eq!(platform, Platform::Unknown);
    }

    #[test]
    fn test_token() {
        assert_eq!(Platform::Windows.token(), Some("windows"));
        assert_eq!(Platform::Linux.token(), Some("linux"));
        assert_eq!(Platform::Mac.token(), Some("mac"));
        assert_eq!(Platform::Unknown.token(), None);
    }

    #[test]
    fn test_from_str_is_total() {
        let p: Platform = "something else".parse().unwrap();
        assert_eq!(p, Platform::Unknown);

        let p: Platform = "Windows NT".parse().unwrap();
        assert_eq!(p, Platform::Windows);
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::Windows.to_string(), "windows");
        assert_eq!(Platform::Unknown.to_string(), "unknown");
    }
}
