use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Linux,
    MacOs,
    Windows,
    Other(&'static str),
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Platform::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &'static str) -> Self {
        match os {
            "android" => Platform::Android,
            "ios" => Platform::Ios,
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            other => Platform::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Other(os) => *os,
        }
    }

    pub fn is_android(&self) -> bool {
        *self == Platform::Android
    }

    pub fn is_ios(&self) -> bool {
        *self == Platform::Ios
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_os_round_trips_names() {
        for os in ["android", "ios", "linux", "macos", "windows", "freebsd"] {
            assert_eq!(Platform::from_os(os).as_str(), os);
        }
        assert_eq!(Platform::from_os("freebsd"), Platform::Other("freebsd"));
    }

    #[test]
    fn mobile_checks() {
        assert!(Platform::Android.is_android());
        assert!(!Platform::Android.is_ios());
        assert!(Platform::Ios.is_ios());
        assert!(!Platform::Linux.is_android());
    }

    #[test]
    fn current_matches_target() {
        assert_eq!(Platform::current().to_string(), std::env::consts::OS);
    }
}
