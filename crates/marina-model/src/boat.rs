//! The boat record and its delimited line form.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::amount::parse_amount;
use crate::error::{ParseError, Result};
use crate::placement::{PlacementDetail, PlacementKind, clip};

/// Longest boat name kept; longer input is truncated.
pub const MAX_NAME_LEN: usize = 127;

/// One boat in the marina.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoatRecord {
    /// Display name, also the lookup key (case-insensitive, first match wins).
    pub name: String,
    /// Length in feet. Not range-checked.
    pub length: i32,
    pub placement: PlacementDetail,
    pub amount_owed: Decimal,
}

impl BoatRecord {
    /// Build a record, trimming the name and truncating it to
    /// [`MAX_NAME_LEN`] characters.
    pub fn new(
        name: &str,
        length: i32,
        placement: PlacementDetail,
        amount_owed: Decimal,
    ) -> Self {
        Self {
            name: clip(name, MAX_NAME_LEN),
            length,
            placement,
            amount_owed,
        }
    }

    pub fn kind(&self) -> PlacementKind {
        self.placement.kind()
    }

    /// Case-insensitive exact comparison against `name`.
    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Parse a comma-separated line `name,length,placement,detail,amount`.
    pub fn parse_line(line: &str) -> Result<Self> {
        Self::from_fields(line.split(','))
    }

    /// Build a record from already-split fields.
    ///
    /// Fields past the fifth are ignored. Unrecognised or blank placement
    /// text produces a [`PlacementDetail::Unknown`] record instead of an
    /// error, and the detail of such a record may be blank too.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter().map(str::trim);
        let mut present =
            |field: &'static str| fields.next().ok_or(ParseError::MissingField { field });

        let name = filled(present("name")?, "name")?;
        let length_text = filled(present("length")?, "length")?;
        let kind = PlacementKind::parse(present("placement")?);
        let detail_text = present("detail")?;
        let amount_text = filled(present("amount owed")?, "amount owed")?;

        let length = length_text
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidLength {
                value: length_text.to_string(),
            })?;
        let placement = PlacementDetail::parse(kind, detail_text)?;
        let amount_owed = parse_amount(amount_text)?;

        let record = Self::new(name, length, placement, amount_owed);
        record.validate()?;
        Ok(record)
    }

    /// Check that the record can be written to the data file and read back
    /// unchanged.
    ///
    /// The name and any trailor license or land bay must be non-blank,
    /// carry no surrounding whitespace and hold no comma or line break.
    pub fn validate(&self) -> Result<()> {
        storable("name", &self.name)?;
        match &self.placement {
            PlacementDetail::Trailor { license } => storable("detail", license),
            PlacementDetail::Land { bay } => storable("detail", bay.encode_utf8(&mut [0; 4])),
            PlacementDetail::Slip { .. }
            | PlacementDetail::Storage { .. }
            | PlacementDetail::Unknown => Ok(()),
        }
    }
}

/// ASCII case-insensitive equality used for every name lookup.
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// ASCII case-insensitive ordering used for inventory display.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

fn filled<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(ParseError::MissingField { field });
    }
    Ok(value)
}

fn storable(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ParseError::MissingField { field });
    }
    if value.trim() != value || value.contains([',', '\r', '\n']) {
        return Err(ParseError::UnsavableText {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
