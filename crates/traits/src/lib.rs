pub mod engine;
pub mod registry;

pub use engine::{EngineError, RenderEngine};
pub use registry::{FontRegistry, RegistryError};
