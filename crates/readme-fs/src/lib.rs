//! Filesystem primitives for readme-sync
//!
//! Provides normalized path handling, atomic text I/O and content checksums.

pub mod checksum;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::compute_content_checksum;
pub use error::{Error, Result};
pub use path::NormalizedPath;
