mod engine;
mod model;
mod substitute;

pub use engine::{FrameEngine, FrameEngineOptions};
pub use model::{FirstWordModel, ModelCall, ScriptedModel};
pub use substitute::substitute;
