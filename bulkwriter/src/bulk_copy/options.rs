use std::fmt::{Display, Formatter};

/// Transfer options passed to the bulk copy collaborator.
///
/// `KeepIdentity` preserves source-supplied identity values; with `Default` the
/// destination generates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BulkCopyOptions {
    #[default]
    Default,
    KeepIdentity,
}

impl BulkCopyOptions {
    pub fn keep_identity(&self) -> bool {
        matches!(self, BulkCopyOptions::KeepIdentity)
    }
}

impl Display for BulkCopyOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BulkCopyOptions::Default => write!(f, "Default"),
            BulkCopyOptions::KeepIdentity => write!(f, "KeepIdentity"),
        }
    }
}
