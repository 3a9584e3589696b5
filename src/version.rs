use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// The `(major, minor, patch)` triple shared by an official release tag and
/// its associated dev tags. Used as the grouping and sort key for release
/// lineages; ordering is the numeric tuple order, not string order
/// (`1.10.0 > 1.9.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionKey {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        VersionKey {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A parsed version tag.
///
/// `dev = None` is an official release tag (`1.6.2`); `dev = Some(n)` is the
/// nth development pre-release of that base version (`1.6.2-dev.10`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub dev: Option<u32>,
}

/// The shared tag grammar. Matches tags like `1.6.2` and `1.6.2-dev.1`,
/// full match only.
fn tag_grammar() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-dev\.(\d+))?$").expect("tag grammar is a valid regex")
    })
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32, dev: Option<u32>) -> Self {
        Version {
            major,
            minor,
            patch,
            dev,
        }
    }

    /// Whether this is an official release (`X.Y.Z`, no dev suffix).
    pub fn is_official(&self) -> bool {
        self.dev.is_none()
    }

    /// The release lineage this version belongs to.
    pub fn key(&self) -> VersionKey {
        VersionKey::new(self.major, self.minor, self.patch)
    }

    /// The next development version after this one.
    ///
    /// - `1.2.3-dev.4` -> `1.2.3-dev.5` (same base, dev number incremented)
    /// - `1.2.3` -> `1.2.4-dev.1` (patch bumped, first dev iteration)
    pub fn next_dev(&self) -> Version {
        match self.dev {
            Some(n) => Version::new(self.major, self.minor, self.patch, Some(n + 1)),
            None => Version::new(self.major, self.minor, self.patch + 1, Some(1)),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(n) = self.dev {
            write!(f, "-dev.{}", n)?;
        }
        Ok(())
    }
}

/// Parses a version from a git tag string.
///
/// Accepts exactly the forms `MAJOR.MINOR.PATCH` and
/// `MAJOR.MINOR.PATCH-dev.N`; anything else (prefixes like `v1.2.3`, short
/// forms like `1.2`, other pre-release identifiers like `1.2.3-rc.1`) is
/// rejected.
///
/// # Arguments
/// * `tag` - Tag string to parse
///
/// # Returns
/// * `Some(Version)` - Successfully parsed version
/// * `None` - If the tag doesn't match the grammar; callers silently skip
///   such tags
pub fn parse_tag(tag: &str) -> Option<Version> {
    let caps = tag_grammar().captures(tag)?;

    let major = caps[1].parse::<u32>().ok()?;
    let minor = caps[2].parse::<u32>().ok()?;
    let patch = caps[3].parse::<u32>().ok()?;
    let dev = match caps.get(4) {
        Some(m) => Some(m.as_str().parse::<u32>().ok()?),
        None => None,
    };

    Some(Version::new(major, minor, patch, dev))
}
