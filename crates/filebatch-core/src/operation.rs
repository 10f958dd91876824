//! Batch operation kinds.

use serde::{Deserialize, Serialize};

/// The bulk operation applied to a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Copy,
    Move,
    Delete,
}

// These labels prefix every per-item error message; keep them stable.
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copy => write!(f, "Copy"),
            Self::Move => write!(f, "Move"),
            Self::Delete => write!(f, "Delete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(OperationKind::Copy.to_string(), "Copy");
        assert_eq!(OperationKind::Move.to_string(), "Move");
        assert_eq!(OperationKind::Delete.to_string(), "Delete");
    }
}
