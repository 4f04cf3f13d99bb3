use std::path::PathBuf;

/// Inputs for one forked generation run. Built per invocation and dropped
/// once the child process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub package_name: String,
    pub output_path: PathBuf,
    pub display_name: String,
    pub classpath_entries: Vec<String>,
}

impl GenerationRequest {
    pub fn new(
        package_name: impl Into<String>,
        output_path: impl Into<PathBuf>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            output_path: output_path.into(),
            display_name: display_name.into(),
            classpath_entries: Vec::new(),
        }
    }

    pub fn with_classpath(mut self, entries: impl IntoIterator<Item = String>) -> Self {
        self.classpath_entries.extend(entries);
        self
    }
}

/// Outcome of a generation run that exited normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub exit_code: i32,
    /// Combined stdout/stderr, in the order the child emitted it
    pub captured_output_lines: Vec<String>,
}

impl GenerationResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
