//! The in-memory boat collection.

use marina_model::{BoatRecord, Decimal, compare_names};
use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::rates::monthly_charge;

/// Most boats the marina can hold.
pub const MAX_BOATS: usize = 120;

/// Owned, ordered collection of boat records.
///
/// Storage order is insertion order minus removals; it is what gets saved.
/// [`BoatRegistry::list_sorted`] gives the name-sorted view used for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoatRegistry {
    boats: Vec<BoatRecord>,
}

impl BoatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.boats.len() >= MAX_BOATS
    }

    /// Records in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoatRecord> {
        self.boats.iter()
    }

    /// Insert a record, failing when the marina is full or when the record
    /// could not be saved and read back unchanged.
    pub fn add(&mut self, record: BoatRecord) -> Result<()> {
        self.ensure_room()?;
        record.validate()?;
        debug!(name = %record.name, placement = %record.kind(), "boat added");
        self.boats.push(record);
        Ok(())
    }

    /// Parse a `name,length,placement,detail,amount` line and add it.
    ///
    /// Capacity is checked before parsing. A rejected line leaves the
    /// registry untouched.
    pub fn parse_and_add(&mut self, line: &str) -> Result<()> {
        self.add_fields(line.split(','))
    }

    /// Like [`BoatRegistry::parse_and_add`] for a line that is already split.
    pub fn add_fields<'a, I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.ensure_room()?;
        let record = BoatRecord::from_fields(fields).inspect_err(|error| {
            debug!(%error, "rejected boat line");
        })?;
        self.add(record)
    }

    /// Remove the first record whose name matches, ignoring ASCII case.
    pub fn remove(&mut self, name: &str) -> Result<BoatRecord> {
        let index = self
            .boats
            .iter()
            .position(|boat| boat.matches_name(name))
            .ok_or_else(|| not_found(name))?;
        let removed = self.boats.remove(index);
        debug!(name = %removed.name, "boat removed");
        Ok(removed)
    }

    /// First record whose name matches, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&BoatRecord> {
        self.boats.iter().find(|boat| boat.matches_name(name))
    }

    /// Reduce a boat's balance by `amount`.
    ///
    /// The payment is applied in full or not at all. Returns the new balance.
    pub fn apply_payment(&mut self, name: &str, amount: Decimal) -> Result<Decimal> {
        let boat = self
            .boats
            .iter_mut()
            .find(|boat| boat.matches_name(name))
            .ok_or_else(|| not_found(name))?;
        if amount < Decimal::ZERO {
            warn!(name = %boat.name, %amount, "negative payment rejected");
            return Err(RegistryError::NegativePayment { amount });
        }
        if amount > boat.amount_owed {
            warn!(name = %boat.name, %amount, owed = %boat.amount_owed, "overpayment rejected");
            return Err(RegistryError::Overpayment {
                amount,
                owed: boat.amount_owed,
            });
        }
        boat.amount_owed -= amount;
        debug!(name = %boat.name, %amount, owed = %boat.amount_owed, "payment applied");
        Ok(boat.amount_owed)
    }

    /// Add one month's fees to every record. Returns the total accrued.
    ///
    /// A balance that would leave the decimal range is held at the nearest
    /// bound.
    pub fn accrue_monthly_charges(&mut self) -> Decimal {
        let mut total = Decimal::ZERO;
        for boat in &mut self.boats {
            let charge = monthly_charge(boat);
            boat.amount_owed = match boat.amount_owed.checked_add(charge) {
                Some(owed) => owed,
                None => {
                    warn!(name = %boat.name, %charge, "balance out of range, capped");
                    if charge.is_sign_negative() {
                        Decimal::MIN
                    } else {
                        Decimal::MAX
                    }
                }
            };
            total = total.saturating_add(charge);
        }
        debug!(boats = self.boats.len(), %total, "monthly charges accrued");
        total
    }

    /// All records ordered by name, ignoring ASCII case.
    ///
    /// The sort is stable, so equal names keep their storage order.
    pub fn list_sorted(&self) -> Vec<&BoatRecord> {
        let mut sorted: Vec<&BoatRecord> = self.boats.iter().collect();
        sorted.sort_by(|a, b| compare_names(&a.name, &b.name));
        sorted
    }

    fn ensure_room(&self) -> Result<()> {
        if self.is_full() {
            warn!(capacity = MAX_BOATS, "marina is full");
            return Err(RegistryError::CapacityExceeded {
                capacity: MAX_BOATS,
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BoatRegistry {
    type Item = &'a BoatRecord;
    type IntoIter = std::slice::Iter<'a, BoatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.boats.iter()
    }
}

fn not_found(name: &str) -> RegistryError {
    debug!(name, "no boat with that name");
    RegistryError::NotFound {
        name: name.to_string(),
    }
}
