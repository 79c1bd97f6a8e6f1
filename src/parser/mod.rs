// URL parsing: structural segmentation of HTTP(S) links
pub mod url_segmenter;

pub use url_segmenter::segment;
