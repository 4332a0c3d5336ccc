//! Domain types.

mod upload;

pub use upload::UploadRequest;
