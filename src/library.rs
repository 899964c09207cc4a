//! Track model, the built-in sample playlist and directory scanning.

mod model;
mod samples;
mod scan;

pub use model::*;
pub use samples::sample_tracks;
pub use scan::{is_media_file, scan};
