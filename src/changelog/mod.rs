//! Rendering the new changelog section and merging it into the document.

pub mod merge;
pub mod render;

pub use merge::{CHANGELOG_HEADER, merge, merge_into_file};
pub use render::{ReleaseMetadata, render_fragment};
