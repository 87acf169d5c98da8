//! The running application's version and the update-check rule.

use std::cmp::Ordering;
use std::fmt;

use super::source::VersionSource;
use super::triplet::VersionTriplet;

/// The running application's own version, the reference point for
/// update checks.
///
/// Construct one at startup from the build version and pass it by
/// reference wherever an update decision is made.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use prefstore_core::version::AppVersion;
///
/// let app = AppVersion::new("1.2.0");
///
/// // Greater means the candidate is newer than the running version.
/// assert_eq!(app.compare_to("1.2.1"), Ordering::Greater);
/// assert_eq!(app.compare_to("1.2.0"), Ordering::Equal);
/// assert_eq!(app.compare_to("1.1"), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppVersion {
    current: VersionTriplet,
}

impl AppVersion {
    /// Creates the holder from a raw version string.
    ///
    /// Parsing is lenient (see [`VersionTriplet::parse`]); a malformed
    /// build version becomes `0.0.0` rather than failing startup.
    pub fn new(version: &str) -> Self {
        Self {
            current: VersionTriplet::parse(version),
        }
    }

    /// Creates the holder from an already-parsed triplet.
    pub const fn from_triplet(current: VersionTriplet) -> Self {
        Self { current }
    }

    /// The running version as a triplet.
    pub const fn current(&self) -> VersionTriplet {
        self.current
    }

    /// Compares a candidate version string against the running version.
    ///
    /// The result orders the *candidate* relative to the running
    /// version: `Ordering::Greater` means the candidate is newer and an
    /// update exists. The candidate is parsed leniently, so a garbage
    /// string compares as `0.0.0`.
    pub fn compare_to(&self, candidate: &str) -> Ordering {
        VersionTriplet::parse(candidate).cmp(&self.current)
    }

    /// Queries `source` and reports whether a newer version is published.
    ///
    /// Returns `Some(latest)` when the source produced a version that is
    /// strictly newer than the running one. Returns `None` when the
    /// source is unavailable (empty string) or reports an equal or older
    /// version. Never fails.
    pub fn update_available(&self, source: &dyn VersionSource) -> Option<VersionTriplet> {
        let raw = source.latest_version();
        if raw.is_empty() {
            return None;
        }
        let latest = VersionTriplet::parse(&raw);
        (latest > self.current).then_some(latest)
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.current.fmt(f)
    }
}
