mod marker;

pub use marker::{entered_urls, MARKER_FILE};
