pub mod media;
pub mod resource;

pub use media::{ImageFormat, ImageInfo};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
