use anyhow::Result;
use omod_scout_core::command::CLASSPATH_SEPARATOR;
use omod_scout_core::{EntryPoint, GeneratorProperties};
use std::io;
use tracing::debug;

/// Runtime side of forked generation.
///
/// Progress goes to stdout. Any failure prints one line to stderr and exits
/// with status 1, which the parent reports as a failed generation.
pub fn exec_command(classpath: &str, properties: &[String], entry_point: &str) -> Result<()> {
    if let Err(e) = run_entry_point(classpath, properties, entry_point) {
        eprintln!("{entry_point} failed: {e}");
        std::process::exit(1);
    }
    Ok(())
}

fn run_entry_point(
    classpath: &str,
    properties: &[String],
    entry_point: &str,
) -> omod_scout_core::Result<()> {
    let entry = EntryPoint::from_id(entry_point)?;
    let props = properties
        .iter()
        .map(|pair| GeneratorProperties::parse_pair(pair))
        .collect::<omod_scout_core::Result<GeneratorProperties>>()?;

    let entries = classpath
        .split(CLASSPATH_SEPARATOR)
        .filter(|e| !e.is_empty())
        .count();
    debug!("Running {} with {} classpath entries", entry, entries);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    entry.run(&props, &mut out)
}
