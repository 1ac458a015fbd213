//! Resource providers for markdown image references.
//!
//! - [`FilesystemResourceProvider`]: reads images next to the markdown source
//! - [`InMemoryResourceProvider`]: re-exported from quire-traits

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use quire_traits::InMemoryResourceProvider;
