//! Monthly per-foot fees.

use marina_model::{BoatRecord, Decimal, PlacementKind};

/// Fee per foot of boat length per month.
///
/// Boats with an unknown placement are not billed.
pub fn monthly_rate(kind: PlacementKind) -> Decimal {
    match kind {
        PlacementKind::Slip => Decimal::new(1250, 2),
        PlacementKind::Land => Decimal::new(1400, 2),
        PlacementKind::Trailor => Decimal::new(2500, 2),
        PlacementKind::Storage => Decimal::new(1120, 2),
        PlacementKind::Unknown => Decimal::ZERO,
    }
}

/// One month's charge for a record: `length * rate(placement)`.
pub fn monthly_charge(record: &BoatRecord) -> Decimal {
    Decimal::from(record.length) * monthly_rate(record.kind())
}

#[cfg(test)]
mod tests {
    use marina_model::PlacementDetail;

    use super::*;

    #[test]
    fn rates_per_kind() {
        assert_eq!(monthly_rate(PlacementKind::Slip).to_string(), "12.50");
        assert_eq!(monthly_rate(PlacementKind::Land).to_string(), "14.00");
        assert_eq!(monthly_rate(PlacementKind::Trailor).to_string(), "25.00");
        assert_eq!(monthly_rate(PlacementKind::Storage).to_string(), "11.20");
        assert!(monthly_rate(PlacementKind::Unknown).is_zero());
    }

    #[test]
    fn charge_scales_with_length() {
        let record = BoatRecord::new(
            "Wren",
            26,
            PlacementDetail::Storage { number: 4 },
            Decimal::ZERO,
        );
        assert_eq!(monthly_charge(&record), Decimal::new(29120, 2));
    }
}
