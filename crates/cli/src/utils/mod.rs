pub mod project;

pub use project::{Session, project_dir};
