pub mod generation;
pub mod identity;
pub mod project;

// Re-export commonly used types
pub use generation::{GenerationRequest, GenerationResult};
pub use identity::BuildIdentity;
pub use project::{Dependency, ProjectContext};
