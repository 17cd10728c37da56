//! Sentinel-delimited region handling for readme-sync.
//!
//! A README carries one auto-managed region bounded by two literal marker
//! lines:
//!
//! ```text
//! <!-- _README:START -->
//! fragment content
//! <!-- _README:END -->
//! ```
//!
//! Regions are located with range semantics: a region opens on any line that
//! contains the start sentinel and closes on the next following line that
//! contains the end sentinel. Stripping removes every such span, including a
//! start sentinel that is never closed (in which case everything up to the end
//! of the file goes with it). Text that merely mentions a sentinel string is
//! therefore treated as a marker.

pub mod error;
pub mod parser;
pub mod sentinel;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{Region, find_regions, has_region, region_body};
pub use sentinel::{DEFAULT_END, DEFAULT_START, Sentinels};
pub use writer::{append_region, normalize_fragment, splice, strip_regions};
