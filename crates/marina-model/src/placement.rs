//! Where a boat is kept.
//!
//! [`PlacementKind`] names the storage category. [`PlacementDetail`] carries
//! the category-specific payload, and because the kind is derived from the
//! detail variant, a record can never hold a slip number while claiming to
//! sit on a trailor.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// Longest trailor license kept; longer input is truncated.
pub const MAX_LICENSE_LEN: usize = 15;

/// Storage category of a boat.
///
/// `Unknown` is the parse-failure sentinel. It is never written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    Slip,
    Land,
    Trailor,
    Storage,
    Unknown,
}

impl PlacementKind {
    /// The four real categories, in menu order.
    pub const KNOWN: [PlacementKind; 4] = [
        PlacementKind::Slip,
        PlacementKind::Land,
        PlacementKind::Trailor,
        PlacementKind::Storage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementKind::Slip => "slip",
            PlacementKind::Land => "land",
            PlacementKind::Trailor => "trailor",
            PlacementKind::Storage => "storage",
            PlacementKind::Unknown => "unknown",
        }
    }

    /// Case-insensitive match against the known categories.
    ///
    /// Anything else, including `"unknown"` itself, yields
    /// [`PlacementKind::Unknown`].
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(text))
            .unwrap_or(PlacementKind::Unknown)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PlacementKind::Unknown)
    }
}

impl fmt::Display for PlacementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementKind {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Category-specific placement data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementDetail {
    /// Slip number in the water.
    Slip { number: i32 },
    /// Bay letter on land.
    Land { bay: char },
    /// License plate of the boat's trailor.
    Trailor { license: String },
    /// Storage bay number.
    Storage { number: i32 },
    /// Placement text was not recognised; no detail is kept.
    Unknown,
}

impl PlacementDetail {
    /// Build a trailor placement, trimming the license and truncating it to
    /// [`MAX_LICENSE_LEN`] characters.
    pub fn trailor(license: &str) -> Self {
        PlacementDetail::Trailor {
            license: clip(license, MAX_LICENSE_LEN),
        }
    }

    pub fn kind(&self) -> PlacementKind {
        match self {
            PlacementDetail::Slip { .. } => PlacementKind::Slip,
            PlacementDetail::Land { .. } => PlacementKind::Land,
            PlacementDetail::Trailor { .. } => PlacementKind::Trailor,
            PlacementDetail::Storage { .. } => PlacementKind::Storage,
            PlacementDetail::Unknown => PlacementKind::Unknown,
        }
    }

    /// Interpret detail text for the given kind.
    ///
    /// The detail of an `Unknown` kind is ignored. For known kinds the text
    /// must be non-blank, and slip/storage numbers must be whole numbers.
    pub fn parse(kind: PlacementKind, text: &str) -> Result<Self> {
        if !kind.is_known() {
            return Ok(PlacementDetail::Unknown);
        }
        let text = text.trim();
        let Some(first) = text.chars().next() else {
            return Err(ParseError::MissingField { field: "detail" });
        };
        let number = || {
            text.parse::<i32>().map_err(|_| ParseError::InvalidDetail {
                kind,
                value: text.to_string(),
            })
        };
        match kind {
            PlacementKind::Slip => Ok(PlacementDetail::Slip { number: number()? }),
            PlacementKind::Land => Ok(PlacementDetail::Land { bay: first }),
            PlacementKind::Trailor => Ok(PlacementDetail::trailor(text)),
            PlacementKind::Storage => Ok(PlacementDetail::Storage { number: number()? }),
            PlacementKind::Unknown => Ok(PlacementDetail::Unknown),
        }
    }
}

/// Trim `text` and keep at most `max` characters of it.
pub(crate) fn clip(text: &str, max: usize) -> String {
    let kept: String = text.trim().chars().take(max).collect();
    kept.trim_end().to_string()
}

/// The detail as persisted: the number, the bay letter, or the license.
impl fmt::Display for PlacementDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementDetail::Slip { number } | PlacementDetail::Storage { number } => {
                write!(f, "{number}")
            }
            PlacementDetail::Land { bay } => write!(f, "{bay}"),
            PlacementDetail::Trailor { license } => f.write_str(license),
            PlacementDetail::Unknown => Ok(()),
        }
    }
}
