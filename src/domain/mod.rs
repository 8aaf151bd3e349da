//! Domain logic - pure semantic-version rules independent of any I/O

pub mod list;
pub mod prerelease;
pub mod version;

pub use list::VersionList;
pub use prerelease::PreRelease;
pub use version::{BumpKind, Version};
