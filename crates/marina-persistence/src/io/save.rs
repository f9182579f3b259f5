//! Data file saving.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use marina_core::BoatRegistry;
use marina_model::{BoatRecord, PlacementKind, format_amount};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{PersistenceError, Result};

/// Counts from a completed save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub written: usize,
    /// Records with an unknown placement, which are never persisted.
    pub skipped: usize,
}

#[derive(Serialize)]
struct BoatRow<'a> {
    name: &'a str,
    length: i32,
    placement: PlacementKind,
    detail: String,
    amount_owed: String,
}

impl<'a> From<&'a BoatRecord> for BoatRow<'a> {
    fn from(record: &'a BoatRecord) -> Self {
        Self {
            name: &record.name,
            length: record.length,
            placement: record.kind(),
            detail: record.placement.to_string(),
            amount_owed: format_amount(record.amount_owed),
        }
    }
}

/// Overwrite `path` with one line per record, in storage order.
pub fn save(path: &Path, registry: &BoatRegistry) -> Result<SaveSummary> {
    let file = File::create(path).map_err(|source| PersistenceError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source,
    })?;
    let summary = write_registry(file, registry).map_err(|source| PersistenceError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        written = summary.written,
        skipped = summary.skipped,
        "saved boat data"
    );
    Ok(summary)
}

/// Write the registry as data file text.
pub fn write_registry<W: Write>(writer: W, registry: &BoatRegistry) -> csv::Result<SaveSummary> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut summary = SaveSummary::default();
    for record in registry {
        if !record.kind().is_known() {
            warn!(name = %record.name, "boat with unknown placement not saved");
            summary.skipped += 1;
            continue;
        }
        writer.serialize(BoatRow::from(record))?;
        summary.written += 1;
    }
    writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(lines: &[&str]) -> BoatRegistry {
        let mut registry = BoatRegistry::new();
        for line in lines {
            registry.parse_and_add(line).unwrap();
        }
        registry
    }

    fn render(registry: &BoatRegistry) -> (String, SaveSummary) {
        let mut buffer = Vec::new();
        let summary = write_registry(&mut buffer, registry).unwrap();
        (String::from_utf8(buffer).unwrap(), summary)
    }

    #[test]
    fn writes_each_placement_detail() {
        let registry = registry_with(&[
            "Eagle,40,slip,23,1500",
            "Big Brother,35,LAND,B,12.5",
            "Tow Me,20,Trailor,ABC123,0",
            "Box,15,storage,7,-3.333",
        ]);
        let (text, summary) = render(&registry);
        assert_eq!(
            text,
            "Eagle,40,slip,23,1500.00\n\
             Big Brother,35,land,B,12.50\n\
             Tow Me,20,trailor,ABC123,0.00\n\
             Box,15,storage,7,-3.33\n"
        );
        assert_eq!(
            summary,
            SaveSummary {
                written: 4,
                skipped: 0
            }
        );
    }

    #[test]
    fn keeps_storage_order() {
        let registry = registry_with(&["Zulu,10,slip,1,0", "alpha,10,slip,2,0"]);
        let (text, _) = render(&registry);
        assert_eq!(text, "Zulu,10,slip,1,0.00\nalpha,10,slip,2,0.00\n");
    }

    #[test]
    fn unknown_placements_are_skipped() {
        let registry = registry_with(&["Lost,10,mooring,4,1.00", "Kept,12,land,D,2.00"]);
        let (text, summary) = render(&registry);
        assert_eq!(text, "Kept,12,land,D,2.00\n");
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.written, 1);
    }

    #[test]
    fn unwritable_path_reports_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("boats.csv");
        let result = save(&path, &BoatRegistry::new());
        assert!(matches!(
            result,
            Err(PersistenceError::Io {
                operation: "write",
                ..
            })
        ));
    }
}
