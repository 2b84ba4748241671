use crate::shared::VersionParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Maximum accepted length of a version string (guards against absurd input)
const MAX_VERSION_LENGTH: usize = 256;

/// One dot-separated pre-release identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(input: &str, raw: &str) -> Result<Self, VersionParseError> {
        if raw.is_empty() {
            return Err(VersionParseError::new(
                input,
                "empty pre-release identifier",
            ));
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(VersionParseError::new(
                input,
                format!("invalid character in pre-release identifier {:?}", raw),
            ));
        }
        if raw.chars().all(|c| c.is_ascii_digit()) {
            if raw.len() > 1 && raw.starts_with('0') {
                return Err(VersionParseError::new(
                    input,
                    format!("numeric pre-release identifier {} has a leading zero", raw),
                ));
            }
            raw.parse::<u64>().map(Identifier::Numeric).map_err(|_| {
                VersionParseError::new(input, format!("pre-release identifier {} overflows", raw))
            })
        } else {
            Ok(Identifier::AlphaNumeric(raw.to_string()))
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Semantic version value object
///
/// Accepts `[v]MAJOR.MINOR[.PATCH][-PRERELEASE][+BUILD]`. A missing patch
/// component reads as 0, which lets channel tokens like `4.16` compare
/// against release versions.
///
/// Precedence follows semver and ignores build metadata; two versions that
/// differ only in build metadata are ordered by the metadata string so that
/// equality always matches the normalized `Display` form used as a table
/// key. Core components are normalized (`04.16.1` prints as `4.16.1`);
/// numeric pre-release identifiers with a leading zero are rejected.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Vec<Identifier>,
    build: Option<String>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: None,
        }
    }

    /// Parses a version string
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError::new(input, "version is empty"));
        }
        if trimmed.len() > MAX_VERSION_LENGTH {
            return Err(VersionParseError::new(
                input,
                format!("version is longer than {} bytes", MAX_VERSION_LENGTH),
            ));
        }

        let unprefixed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let (rest, build) = match unprefixed.split_once('+') {
            Some((rest, build)) => {
                if build.is_empty()
                    || !build
                        .split('.')
                        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
                {
                    return Err(VersionParseError::new(input, "invalid build metadata"));
                }
                (rest, Some(build.to_string()))
            }
            None => (unprefixed, None),
        };

        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => {
                let identifiers = pre
                    .split('.')
                    .map(|raw| Identifier::parse(input, raw))
                    .collect::<Result<Vec<_>, _>>()?;
                (core, identifiers)
            }
            None => (rest, Vec::new()),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(VersionParseError::new(
                input,
                "expected MAJOR.MINOR or MAJOR.MINOR.PATCH",
            ));
        }

        let major = Self::parse_component(input, parts[0], "major")?;
        let minor = Self::parse_component(input, parts[1], "minor")?;
        let patch = match parts.get(2) {
            Some(raw) => Self::parse_component(input, raw, "patch")?,
            None => 0,
        };

        Ok(Self {
            major,
            minor,
            patch,
            pre,
            build,
        })
    }

    fn parse_component(input: &str, raw: &str, name: &str) -> Result<u64, VersionParseError> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(VersionParseError::new(
                input,
                format!("{} component is not a number", name),
            ));
        }
        raw.parse::<u64>()
            .map_err(|_| VersionParseError::new(input, format!("{} component overflows", name)))
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                // a release outranks its own pre-releases
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            let pre: Vec<String> = self.pre.iter().map(ToString::to_string).collect();
            write!(f, "-{}", pre.join("."))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_full_version() {
        let version = v("4.16.2");
        assert_eq!(version.major(), 4);
        assert_eq!(version.minor(), 16);
        assert_eq!(version.patch(), 2);
        assert!(!version.is_prerelease());
        assert_eq!(version.to_string(), "4.16.2");
    }

    #[test]
    fn test_parse_channel_token_without_patch() {
        let version = v("4.16");
        assert_eq!(version.to_string(), "4.16.0");
        assert_eq!(version, v("4.16.0"));
    }

    #[test]
    fn test_parse_strips_leading_v() {
        assert_eq!(v("v4.17.1").to_string(), "4.17.1");
        assert_eq!(v("V4.17.1").to_string(), "4.17.1");
    }

    #[test]
    fn test_parse_prerelease_and_build() {
        let version = v("4.18.0-rc.1+metadata.7");
        assert!(version.is_prerelease());
        assert_eq!(version.to_string(), "4.18.0-rc.1+metadata.7");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("4").is_err());
        assert!(Version::parse("4.x").is_err());
        assert!(Version::parse("4.16.1.2").is_err());
        assert!(Version::parse("4.16.1-").is_err());
        assert!(Version::parse("4.16.1+").is_err());
        assert!(Version::parse("4..1").is_err());
    }

    #[test]
    fn test_ordering_numeric_components() {
        assert!(v("4.16.2") < v("4.16.10"));
        assert!(v("4.9.0") < v("4.16.0"));
        assert!(v("3.99.99") < v("4.0.0"));
    }

    #[test]
    fn test_ordering_prerelease_precedence() {
        assert!(v("4.16.0-rc.1") < v("4.16.0"));
        assert!(v("4.16.0-ec.2") < v("4.16.0-rc.1"));
        assert!(v("4.16.0-rc.2") < v("4.16.0-rc.10"));
        assert!(v("4.16.0-rc.1") < v("4.16.0-rc.1.1"));
        assert!(v("4.16.0-1") < v("4.16.0-alpha"));
    }

    #[test]
    fn test_build_metadata_only_breaks_ties() {
        assert_ne!(v("4.16.1+a"), v("4.16.1+b"));
        assert!(v("4.16.1") < v("4.16.1+a"));
        assert!(v("4.16.1+zzz") < v("4.16.2"));
        assert!(v("4.16.0+build") > v("4.16.0-rc.1"));
    }

    #[test]
    fn test_equality_matches_display() {
        for (a, b) in [
            ("4.16.1+a", "4.16.1+b"),
            ("v4.16.1", "4.16.1"),
            ("4.16", "4.16.0"),
            ("4.16.0-rc.1", "4.16.0-rc.1+x"),
        ] {
            assert_eq!(v(a) == v(b), v(a).to_string() == v(b).to_string(), "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_leading_zero_prerelease_rejected() {
        let err = Version::parse("4.16.0-rc.01").unwrap_err();
        assert!(err.reason.contains("leading zero"));
        assert_eq!(v("4.16.0-rc.0").to_string(), "4.16.0-rc.0");
        assert_eq!(v("4.16.0-0ab").to_string(), "4.16.0-0ab");
    }

    #[test]
    fn test_serde_round_trip_as_string() {
        let version: Version = serde_json::from_str("\"4.16.3\"").unwrap();
        assert_eq!(version, v("4.16.3"));
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"4.16.3\"");
        assert!(serde_json::from_str::<Version>("\"not-a-version\"").is_err());
    }
}
