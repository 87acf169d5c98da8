//! Version source collaborators.
//!
//! An update check needs the latest published version from somewhere
//! outside the application: a release feed, a tag list, a file inside a
//! downloaded archive. Those transports belong to the embedding
//! application; this crate only consumes the string they produce, and
//! [`VersionSource`] is the seam between the two.
//!
//! The failure contract is part of the trait: a source that cannot
//! produce a version returns the empty string rather than an error.
//! "No version information available" is an expected condition (the
//! machine is offline, the feed is down) and must not abort the caller.

/// Supplies the latest published application version as a raw string.
///
/// Implementations are expected to swallow their own failures and
/// return `""`, the sentinel for "no version information available".
/// The string is otherwise passed to the lenient
/// [`VersionTriplet`](super::VersionTriplet) parser, so it does not
/// need to be well-formed.
pub trait VersionSource {
    /// Returns the latest known version string, or `""` when unavailable.
    fn latest_version(&self) -> String;
}

/// A version source with a fixed answer.
///
/// Used in tests and by embedders that resolve the version ahead of
/// time through some other channel.
#[derive(Debug, Clone)]
pub struct FixedVersionSource {
    version: String,
}

impl FixedVersionSource {
    /// Creates a source that always reports `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Creates a source that reports no version information.
    pub fn unavailable() -> Self {
        Self {
            version: String::new(),
        }
    }
}

impl VersionSource for FixedVersionSource {
    fn latest_version(&self) -> String {
        self.version.clone()
    }
}
