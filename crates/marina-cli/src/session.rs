//! One interactive session: load, menu loop, save.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use marina_persistence::{load, save};
use tracing::{info, info_span, warn};

use crate::shell::Shell;

/// Load the data file, run the menu over `input`/`output`, and save on the
/// way out.
///
/// Load notices go to `output` ahead of the menu; skipped lines and save
/// problems go to `errors`. Save failures are reported but do not fail the
/// session.
pub fn run_session<R, W, E>(data_file: &Path, input: R, mut output: W, mut errors: E) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let span = info_span!("session", data_file = %data_file.display());
    let _guard = span.enter();

    let outcome = load(data_file);
    if outcome.is_fresh() {
        writeln!(
            output,
            "Could not open file {} for reading. Starting with empty database.",
            data_file.display()
        )
        .context("write to terminal")?;
    }
    for rejected in &outcome.rejected {
        writeln!(errors, "Skipped line {}: {}", rejected.line, rejected.reason)
            .context("write to terminal")?;
    }

    let mut shell = Shell::new(outcome.registry, input, &mut output);
    let session = shell.run();
    let registry = shell.into_registry();

    match save(data_file, &registry) {
        Ok(summary) => {
            if summary.skipped > 0 {
                writeln!(
                    errors,
                    "{} boat(s) with an unknown placement were not saved.",
                    summary.skipped
                )
                .context("write to terminal")?;
            }
            info!(written = summary.written, "session saved");
        }
        Err(error) => {
            warn!(%error, "save failed");
            writeln!(errors, "{}", error.user_message()).context("write to terminal")?;
        }
    }

    session.context("write to terminal")
}
