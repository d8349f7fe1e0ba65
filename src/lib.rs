//! Poster composition from a folder of photos.
//!
//! Two planners share a canvas compositor: [`grid`] lays every image out on a
//! near-square grid, [`mosaic`] tiles the canvas edge-to-edge with cover-fit
//! crops. Scanning, decoding, and writing are thin collaborators around them.

pub mod canvas;
pub mod config;
pub mod cover;
pub mod error;
pub mod grid;
pub mod layout;
pub mod loader;
pub mod mosaic;
pub mod scan;
pub mod writer;

pub use error::Error;
