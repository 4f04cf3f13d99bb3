//! Generator command construction

pub mod generator_command;

// Re-export commonly used types
pub use generator_command::{
    CLASSPATH_FLAG, CLASSPATH_SEPARATOR, GeneratorCommand, PROPERTY_FLAG, join_classpath,
};
