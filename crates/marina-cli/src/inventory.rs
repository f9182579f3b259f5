//! Inventory listing for the console.

use marina_core::BoatRegistry;
use marina_model::{BoatRecord, PlacementDetail, format_amount};

/// One inventory line, without a trailing newline.
///
/// Layout: name padded to 20 columns, length right-aligned in 2, a
/// placement column, then the balance right-aligned in 8.
pub fn inventory_line(record: &BoatRecord) -> String {
    format!(
        "{:<20} {:>2}' {}Owes ${:>8}",
        record.name,
        record.length,
        placement_column(&record.placement),
        format_amount(record.amount_owed)
    )
}

/// Every record in name order, one line each.
pub fn render_inventory(registry: &BoatRegistry) -> Vec<String> {
    registry
        .list_sorted()
        .into_iter()
        .map(inventory_line)
        .collect()
}

fn placement_column(placement: &PlacementDetail) -> String {
    match placement {
        PlacementDetail::Slip { number } => format!("   slip   # {number}   "),
        PlacementDetail::Land { bay } => format!("  land      {bay}   "),
        PlacementDetail::Trailor { license } => format!("trailor {license}   "),
        PlacementDetail::Storage { number } => format!("storage   # {number}   "),
        PlacementDetail::Unknown => "unknown   ".to_string(),
    }
}
