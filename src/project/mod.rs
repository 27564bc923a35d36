//! Loading menu files from disk and saving them back.

pub mod file_loader;
mod loader;
mod options;
mod saver;

pub use loader::MenuLoader;
pub use options::{DuplicatePolicy, LoadOptions, SaveOptions};
pub use saver::{save, write_atomic};
