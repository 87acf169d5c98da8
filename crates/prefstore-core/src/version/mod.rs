//! Application version utilities.
//!
//! Self-contained: nothing in here touches the preference registry.
//! The update flow is a straight line through three pieces:
//!
//! 1. a [`VersionSource`] collaborator produces a raw version string
//!    (or `""` when it cannot),
//! 2. the lenient [`VersionTriplet`] parser normalises the string into
//!    three numeric components,
//! 3. [`AppVersion`] applies the one ordering rule that decides whether
//!    an update is available.
//!
//! Every step degrades instead of failing, so an update check can run
//! unconditionally at startup without a fallible path.

pub mod app;
pub mod source;
pub mod triplet;

pub use app::AppVersion;
pub use source::{FixedVersionSource, VersionSource};
pub use triplet::VersionTriplet;
