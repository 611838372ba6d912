pub mod document;
pub mod error;
pub mod types;

pub use document::ScriptDocument;
pub use error::FrameError;
pub use types::*;
