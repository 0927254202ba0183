use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a path or a block.
///
/// Backend-assigned identities are always `Real`. Anything produced locally while
/// splitting or cloning is `Synthetic` and lives only in memory, so the two spaces
/// can never collide and no sentinel value is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Id {
    Real(u64),
    Synthetic(u64),
}

pub type PathId = Id;
pub type BlockId = Id;

impl Id {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Id::Synthetic(_))
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Id::Real(_))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Real(n) => write!(f, "{}", n),
            Id::Synthetic(n) => write!(f, "~{}", n),
        }
    }
}
