pub mod task;

pub use task::{UploadType, Uploader};
