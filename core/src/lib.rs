pub mod client;
pub mod engine;
pub mod session;

pub use client::{GeminiBackend, GenerationClient, StubClient};
pub use engine::{Engine, EngineSpawnOk, Event, Op};
pub use session::{GeneratorStatus, ViewSession};
