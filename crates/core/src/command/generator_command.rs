use std::path::{Path, PathBuf};
use std::process::Command;

pub const CLASSPATH_FLAG: &str = "--classpath";
pub const PROPERTY_FLAG: &str = "-D";

/// Separator between classpath entries on this platform
pub const CLASSPATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// A fully spelled-out generator invocation.
///
/// Arguments are kept as an ordered list and handed to the OS as-is; the
/// shell form is only ever used for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    /// Variables removed from the inherited environment
    pub cleared_env: Vec<String>,
}

impl GeneratorCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            cleared_env: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn with_classpath<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.push(CLASSPATH_FLAG.to_string());
        self.args.push(join_classpath(entries));
        self
    }

    /// Append a `-Dkey=value` property argument
    pub fn with_property(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.args
            .push(format!("{PROPERTY_FLAG}{key}={}", value.as_ref()));
        self
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.args.push(entry_point.into());
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn without_env(mut self, key: impl Into<String>) -> Self {
        self.cleared_env.push(key.into());
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.program.display().to_string());
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    /// Build the `std::process::Command` for this invocation. Stdio is left
    /// to the caller.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for key in &self.cleared_env {
            cmd.env_remove(key);
        }
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

/// Join classpath entries with the platform separator, skipping blanks
pub fn join_classpath<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter(|e| !e.as_ref().trim().is_empty())
        .map(|e| e.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(CLASSPATH_SEPARATOR)
}

fn quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}
