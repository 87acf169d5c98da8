//! Semantic version triplet: lenient parsing and lexicographic ordering.
//!
//! Version strings arrive from places the application does not control
//! (a release feed, a `VERSION` file inside a downloaded archive, a
//! hand-edited preference), so the parser never fails: a missing or
//! non-numeric component is read as `0`. A malformed string degrades to
//! a zero-biased comparison instead of aborting the caller's update
//! check.

use std::fmt;

/// A three-part semantic version.
///
/// Ordering compares `major`, then `minor`, then `patch`; the derived
/// `Ord` follows field declaration order, which is exactly the rule
/// used to decide whether one release is newer than another.
///
/// # Examples
///
/// ```rust
/// use prefstore_core::version::VersionTriplet;
///
/// let current = VersionTriplet::parse("1.9.9");
/// let candidate = VersionTriplet::parse("2.0.0");
/// assert!(candidate > current);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionTriplet {
    /// Major version: incompatible API or file-format changes.
    pub major: u32,
    /// Minor version: backwards-compatible additions.
    pub minor: u32,
    /// Patch level: backwards-compatible fixes.
    pub patch: u32,
}

impl VersionTriplet {
    /// Creates a triplet from explicit components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a version string leniently. Never fails.
    ///
    /// The text is split on `.` and up to three leading components are
    /// read as non-negative integers. Anything that does not parse as
    /// one, including a missing component, becomes `0`:
    ///
    /// - `"1.4"` parses as `1.4.0`
    /// - `"1.0.3a"` parses as `1.0.0` (the `3a` component is not numeric)
    /// - `""` parses as `0.0.0`
    ///
    /// Components past the third are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prefstore_core::version::VersionTriplet;
    ///
    /// assert_eq!(VersionTriplet::parse("1.4"), VersionTriplet::new(1, 4, 0));
    /// assert_eq!(VersionTriplet::parse("1.0.3a"), VersionTriplet::new(1, 0, 0));
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut parts = [0u32; 3];
        for (slot, component) in parts.iter_mut().zip(text.split('.')) {
            *slot = component.parse().unwrap_or(0);
        }
        Self {
            major: parts[0],
            minor: parts[1],
            patch: parts[2],
        }
    }
}

impl fmt::Display for VersionTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_parse_full_triplet() {
        assert_eq!(VersionTriplet::parse("1.2.3"), VersionTriplet::new(1, 2, 3));
    }

    #[test]
    fn test_parse_missing_patch_defaults_to_zero() {
        // Arrange & Act
        let version = VersionTriplet::parse("1.4");

        // Assert
        assert_eq!(version, VersionTriplet::new(1, 4, 0));
    }

    #[test]
    fn test_parse_non_numeric_component_becomes_zero() {
        // "3a" is not a number, so the patch component reads as 0.
        assert_eq!(
            VersionTriplet::parse("1.0.3a"),
            VersionTriplet::new(1, 0, 0)
        );
    }

    #[test]
    fn test_parse_empty_string_is_all_zeros() {
        assert_eq!(VersionTriplet::parse(""), VersionTriplet::new(0, 0, 0));
    }

    #[test]
    fn test_parse_garbage_is_all_zeros() {
        assert_eq!(
            VersionTriplet::parse("weekly-build"),
            VersionTriplet::new(0, 0, 0)
        );
    }

    #[test]
    fn test_parse_ignores_extra_components() {
        assert_eq!(
            VersionTriplet::parse("1.2.3.4"),
            VersionTriplet::new(1, 2, 3)
        );
    }

    #[test]
    fn test_parse_negative_component_becomes_zero() {
        // Components are non-negative; "-2" fails to parse as u32.
        assert_eq!(
            VersionTriplet::parse("1.-2.3"),
            VersionTriplet::new(1, 0, 3)
        );
    }

    #[test]
    fn test_parse_whitespace_component_becomes_zero() {
        assert_eq!(
            VersionTriplet::parse(" 1.2.3"),
            VersionTriplet::new(0, 2, 3)
        );
    }

    #[test]
    fn test_ordering_is_major_then_minor_then_patch() {
        let cases = [
            ("2.0.0", "1.9.9", Ordering::Greater),
            ("1.3.0", "1.2.9", Ordering::Greater),
            ("1.2.4", "1.2.3", Ordering::Greater),
            ("1.2.3", "1.2.3", Ordering::Equal),
            ("0.9.9", "1.0.0", Ordering::Less),
        ];

        for (left, right, expected) in cases {
            let ordering = VersionTriplet::parse(left).cmp(&VersionTriplet::parse(right));
            assert_eq!(ordering, expected, "comparing {left} to {right}");
        }
    }

    #[test]
    fn test_default_is_zero_version() {
        assert_eq!(VersionTriplet::default(), VersionTriplet::new(0, 0, 0));
    }

    #[test]
    fn test_display_round_trip() {
        let version = VersionTriplet::new(3, 14, 159);

        assert_eq!(version.to_string(), "3.14.159");
        assert_eq!(VersionTriplet::parse(&version.to_string()), version);
    }
}
