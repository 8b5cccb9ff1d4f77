//! Core application primitives (orchestrator, digest)

pub mod digest;
pub mod runtime;

pub use digest::*;
pub use runtime::*;
