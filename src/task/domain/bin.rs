//! The five named bins of a matrix.

use super::ParseBinError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, ordered list of tasks within a matrix.
///
/// `Unassigned` is the inbox new tasks land in; the other four are the
/// quadrants of the Eisenhower matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bin {
    /// Tasks not yet prioritized.
    Unassigned,
    /// Urgent and important.
    DoFirst,
    /// Important but not urgent.
    Schedule,
    /// Urgent but not important.
    Delegate,
    /// Neither urgent nor important.
    Eliminate,
}

impl Bin {
    /// Every bin, in persisted document order.
    pub const ALL: [Self; 5] = [
        Self::Unassigned,
        Self::DoFirst,
        Self::Schedule,
        Self::Delegate,
        Self::Eliminate,
    ];

    /// The four quadrant bins.
    pub const QUADRANTS: [Self; 4] = [Self::DoFirst, Self::Schedule, Self::Delegate, Self::Eliminate];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unassigned => "unassigned",
            Self::DoFirst => "doFirst",
            Self::Schedule => "schedule",
            Self::Delegate => "delegate",
            Self::Eliminate => "eliminate",
        }
    }

    /// Returns `true` for the four quadrant bins.
    #[must_use]
    pub const fn is_quadrant(self) -> bool {
        !matches!(self, Self::Unassigned)
    }
}

impl TryFrom<&str> for Bin {
    type Error = ParseBinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "unassigned" => Ok(Self::Unassigned),
            "doFirst" => Ok(Self::DoFirst),
            "schedule" => Ok(Self::Schedule),
            "delegate" => Ok(Self::Delegate),
            "eliminate" => Ok(Self::Eliminate),
            _ => Err(ParseBinError(value.to_owned())),
        }
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
