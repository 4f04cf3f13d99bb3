//! Forked generator execution
//!
//! One call launches one child process, forwards its combined stdout/stderr
//! to a [`LineSink`] line by line on the calling thread, then waits for it
//! to exit. There is no retry, timeout or cancellation.

use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::Stdio;
use tracing::{debug, info};

use crate::command::GeneratorCommand;
use crate::error::{Error, Result};
use crate::spec_stub::{EntryPoint, properties};
use crate::types::{GenerationRequest, GenerationResult};

/// Number of trailing output lines carried by a failed run
pub const FAILURE_TAIL_LINES: usize = 20;

/// Subcommand that turns the omod-scout binary into a generator runtime
pub const RUNTIME_SUBCOMMAND: &str = "exec";

/// Log filter variable; the runtime's stderr shares the captured pipe
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Receives child output one line at a time, in arrival order
pub trait LineSink {
    fn line(&mut self, line: &str);
}

impl<F: FnMut(&str)> LineSink for F {
    fn line(&mut self, line: &str) {
        self(line)
    }
}

/// Launches a generator entry point in a separate process
#[derive(Debug, Clone)]
pub struct ChildProcessGenerator {
    program: PathBuf,
    runtime_args: Vec<String>,
    generator_entry: Option<String>,
    entry_point: String,
    working_dir: Option<PathBuf>,
    cleared_env: Vec<String>,
}

impl ChildProcessGenerator {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            runtime_args: Vec::new(),
            generator_entry: None,
            entry_point: EntryPoint::OPENAPI_STUB_ID.to_string(),
            working_dir: None,
            cleared_env: Vec::new(),
        }
    }

    /// Fork the running binary, with itself as the first classpath entry
    pub fn for_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|source| Error::ProcessLaunchFailure {
            command: "<current executable>".to_string(),
            source,
        })?;
        let entry = exe.display().to_string();
        Ok(Self::new(exe)
            .with_runtime_arg(RUNTIME_SUBCOMMAND)
            .with_generator_entry(entry)
            .without_env(LOG_FILTER_VAR))
    }

    /// Keep `key` out of the child's environment
    pub fn without_env(mut self, key: impl Into<String>) -> Self {
        self.cleared_env.push(key.into());
        self
    }

    /// Argument passed to the runtime before the classpath
    pub fn with_runtime_arg(mut self, arg: impl Into<String>) -> Self {
        self.runtime_args.push(arg.into());
        self
    }

    /// Classpath entry placed ahead of the request's own entries
    pub fn with_generator_entry(mut self, entry: impl Into<String>) -> Self {
        self.generator_entry = Some(entry.into());
        self
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The exact command [`generate`](Self::generate) would launch
    pub fn command_for(&self, request: &GenerationRequest) -> GeneratorCommand {
        let classpath = self
            .generator_entry
            .iter()
            .chain(request.classpath_entries.iter());

        let mut command = GeneratorCommand::new(self.program.clone())
            .with_args(self.runtime_args.iter().cloned())
            .with_classpath(classpath)
            .with_property(properties::MODULE_PACKAGE, &request.package_name)
            .with_property(
                properties::OUTPUT_FILE,
                request.output_path.display().to_string(),
            )
            .with_property(properties::PROJECT_NAME, &request.display_name)
            .with_entry_point(self.entry_point.clone());

        for key in &self.cleared_env {
            command = command.without_env(key.clone());
        }
        if let Some(ref dir) = self.working_dir {
            command = command.with_working_dir(dir.clone());
        }
        command
    }

    /// Run the generator to completion.
    ///
    /// Fails with [`Error::ProcessLaunchFailure`] when the process cannot be
    /// started or its output cannot be read, and with
    /// [`Error::ExternalProcessFailure`] when it exits non-zero.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        sink: &mut impl LineSink,
    ) -> Result<GenerationResult> {
        let command = self.command_for(request);
        let shell_cmd = command.to_shell_command();
        info!("Executing command: {}", shell_cmd);
        if let Some(dir) = command.working_dir() {
            debug!("Working directory: {:?}", dir);
        }

        let (reader, writer) = io::pipe().map_err(|e| launch_failure(&shell_cmd, e))?;
        let mut child = {
            let stderr_writer = writer
                .try_clone()
                .map_err(|e| launch_failure(&shell_cmd, e))?;
            let mut cmd = command.to_command();
            cmd.stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr_writer);
            cmd.spawn().map_err(|e| launch_failure(&shell_cmd, e))?
            // `cmd` drops here, releasing our copies of the write end so the
            // read loop sees EOF when the child exits
        };

        let mut captured = Vec::new();
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = decode_line(&buf);
                    sink.line(&line);
                    captured.push(line);
                }
                Err(e) => {
                    // Nobody is draining the pipe any more; don't leave the child blocked on it
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(launch_failure(&shell_cmd, e));
                }
            }
        }

        let status = child.wait().map_err(|e| launch_failure(&shell_cmd, e))?;
        // Terminated by a signal: no exit code to report
        let exit_code = status.code().unwrap_or(-1);
        debug!(
            "Generator exited with code {} after {} lines",
            exit_code,
            captured.len()
        );

        if exit_code != 0 {
            let tail_start = captured.len().saturating_sub(FAILURE_TAIL_LINES);
            return Err(Error::ExternalProcessFailure {
                exit_code,
                last_lines: captured.split_off(tail_start),
            });
        }

        Ok(GenerationResult {
            exit_code,
            captured_output_lines: captured,
        })
    }
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

fn launch_failure(command: &str, source: io::Error) -> Error {
    Error::ProcessLaunchFailure {
        command: command.to_string(),
        source,
    }
}
