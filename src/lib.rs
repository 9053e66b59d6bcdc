//! Windows path inspection without touching the filesystem.
//!
//! See [`filepath`] for the helpers.

pub mod filepath;

pub use filepath::{base_name, is_path_absolute};
