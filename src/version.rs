//! MySQL server version strings.
//!
//! A version looks like `8.0.29-21.3`: `8` is the major, `0` the minor, `29`
//! the patch and `21.3` the release suffix carried by Percona builds. Only the
//! numeric triple takes part in ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, TableParserError};

/// Shape check only; digit widths and the major allow-list live in [`VersionPolicy`].
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-(.*))?$").unwrap());

/// Which version strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPolicy {
    /// Accepted major versions. Empty accepts any major.
    pub allowed_majors: Vec<u32>,
    /// Maximum number of digits in the major component.
    pub max_major_digits: usize,
    /// Maximum number of digits in the minor component.
    pub max_minor_digits: usize,
    /// Maximum number of digits in the patch component.
    pub max_patch_digits: usize,
}

impl Default for VersionPolicy {
    /// The 5.x / 8.x grammar the toolkit has always accepted.
    fn default() -> Self {
        Self {
            allowed_majors: vec![5, 8],
            max_major_digits: 1,
            max_minor_digits: 1,
            max_patch_digits: 2,
        }
    }
}

impl VersionPolicy {
    /// A policy that accepts any `major.minor.patch` of up to two digits each.
    pub fn permissive() -> Self {
        Self {
            allowed_majors: Vec::new(),
            max_major_digits: 2,
            max_minor_digits: 2,
            max_patch_digits: 2,
        }
    }

    pub fn validate(&self, v: &str) -> bool {
        self.parse(v).is_ok()
    }

    pub fn parse(&self, v: &str) -> Result<Version> {
        let caps = VERSION_RE
            .captures(v)
            .ok_or_else(|| TableParserError::invalid_version(v))?;

        let widths = [
            self.max_major_digits,
            self.max_minor_digits,
            self.max_patch_digits,
        ];
        let mut triple = [0u32; 3];
        for (slot, (idx, max_digits)) in triple.iter_mut().zip((1..=3usize).zip(widths)) {
            let digits = &caps[idx];
            if digits.len() > max_digits {
                return Err(TableParserError::invalid_version(v));
            }
            *slot = digits
                .parse()
                .map_err(|_| TableParserError::invalid_version(v))?;
        }

        if !self.allowed_majors.is_empty() && !self.allowed_majors.contains(&triple[0]) {
            return Err(TableParserError::invalid_version(v));
        }

        Ok(Version {
            major: triple[0],
            minor: triple[1],
            patch: triple[2],
            release: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

/// A parsed server version.
///
/// Equality includes the release suffix; use [`Version::compare`] for the
/// suffix-agnostic ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub release: Option<String>,
}

impl Version {
    /// Orders by `(major, minor, patch)` only.
    pub fn compare(&self, other: &Version) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }

    /// `minor.patch`, e.g. `0.30` for `8.0.30`.
    pub fn minor_string(&self) -> String {
        format!("{}.{}", self.minor, self.patch)
    }

    /// The suffix with its leading dash, or an empty string.
    pub fn release_string(&self) -> String {
        self.release
            .as_deref()
            .map(|r| format!("-{r}"))
            .unwrap_or_default()
    }

    /// `8.0.30` becomes `80030`.
    pub fn normalized(&self) -> String {
        format!("{}{:02}{:02}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = TableParserError;

    fn from_str(s: &str) -> Result<Self> {
        VersionPolicy::default().parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}{}",
            self.major,
            self.minor,
            self.patch,
            self.release_string()
        )
    }
}

/// Checks a version string against the default policy.
pub fn validate(v: &str) -> bool {
    VersionPolicy::default().validate(v)
}

pub fn major(v: &str) -> Result<String> {
    Ok(v.parse::<Version>()?.major.to_string())
}

pub fn minor(v: &str) -> Result<String> {
    Ok(v.parse::<Version>()?.minor_string())
}

pub fn release(v: &str) -> Result<String> {
    Ok(v.parse::<Version>()?.release_string())
}

pub fn normalize(v: &str) -> Result<String> {
    Ok(v.parse::<Version>()?.normalized())
}

/// Compares two version strings, ignoring release suffixes.
pub fn compare(v1: &str, v2: &str) -> Result<Ordering> {
    let v1: Version = v1.parse()?;
    let v2: Version = v2.parse()?;
    Ok(v1.compare(&v2))
}
