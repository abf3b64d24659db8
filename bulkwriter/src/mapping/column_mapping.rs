use std::fmt::{Display, Formatter};

/// How one source field lines up with one destination column.
///
/// The source ordinal indexes the [`Row`](crate::common::Row) handed to the
/// bulk copy; the destination ordinal indexes the columns of the destination
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnMapping {
    source_ordinal: usize,
    destination_ordinal: usize,
}

impl ColumnMapping {
    pub fn new(source_ordinal: usize, destination_ordinal: usize) -> Self {
        ColumnMapping {
            source_ordinal,
            destination_ordinal,
        }
    }

    pub fn source_ordinal(&self) -> usize {
        self.source_ordinal
    }

    pub fn destination_ordinal(&self) -> usize {
        self.destination_ordinal
    }
}

impl Display for ColumnMapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source_ordinal, self.destination_ordinal)
    }
}
