//! Data file loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use marina_core::{BoatRegistry, RegistryError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where a loaded registry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Records were read from the data file.
    File,
    /// The file could not be opened; the registry starts empty.
    Fresh,
}

/// Why a line of the data file was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The line could not be read at all (for example, invalid UTF-8).
    #[error("unreadable line: {0}")]
    Unreadable(String),
}

/// A data file line that did not become a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the data file.
    pub line: u64,
    pub reason: RejectReason,
}

/// Result of [`load`].
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub registry: BoatRegistry,
    pub source: LoadSource,
    pub rejected: Vec<RejectedLine>,
}

impl LoadOutcome {
    fn fresh() -> Self {
        Self {
            registry: BoatRegistry::new(),
            source: LoadSource::Fresh,
            rejected: Vec::new(),
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.source == LoadSource::Fresh
    }
}

/// Load the registry from a data file.
///
/// A file that cannot be opened is not an error: the outcome is an empty
/// registry marked [`LoadSource::Fresh`].
pub fn load(path: &Path) -> LoadOutcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            info!(
                path = %path.display(),
                %error,
                "could not open data file, starting with an empty database"
            );
            return LoadOutcome::fresh();
        }
    };
    let outcome = load_from_reader(file);
    info!(
        path = %path.display(),
        boats = outcome.registry.len(),
        rejected = outcome.rejected.len(),
        "loaded boat data"
    );
    outcome
}

/// Load the registry from any reader holding data file text.
pub fn load_from_reader<R: Read>(reader: R) -> LoadOutcome {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(None)
        .from_reader(reader);

    let mut registry = BoatRegistry::new();
    let mut rejected = Vec::new();
    let mut record = StringRecord::new();
    let mut last_line = 0u64;

    loop {
        let line = reader.position().line();
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map_or(line, |pos| pos.line());
                last_line = line;
                if record.iter().all(|field| field.trim().is_empty()) {
                    continue;
                }
                if let Err(error) = registry.add_fields(record.iter()) {
                    warn!(line, %error, "skipping boat line");
                    rejected.push(RejectedLine {
                        line,
                        reason: error.into(),
                    });
                }
            }
            Err(error) if matches!(error.kind(), csv::ErrorKind::Io(_)) => {
                warn!(%error, "stopped reading boat data");
                break;
            }
            Err(error) => {
                let line = error
                    .position()
                    .map_or(last_line + 1, |pos| pos.line());
                last_line = line;
                warn!(line, %error, "skipping unreadable line");
                rejected.push(RejectedLine {
                    line,
                    reason: RejectReason::Unreadable(error.to_string()),
                });
            }
        }
    }

    debug!(boats = registry.len(), "registry hydrated");
    LoadOutcome {
        registry,
        source: LoadSource::File,
        rejected,
    }
}
