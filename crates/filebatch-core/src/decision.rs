//! User recovery decisions for failed batch items.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use thiserror::Error;

/// How the user wants a batch to proceed after an item failed.
///
/// The ordinals are stable: `0 = Ignore`, `1 = IgnoreAll`, `2 = Stop`. They
/// only appear at the console prompt, everything else passes the enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum ErrorDecision {
    /// Skip this item and keep asking on future errors.
    Ignore,
    /// Skip this item and silently skip every later failure.
    IgnoreAll,
    /// Abort the remaining batch.
    Stop,
}

/// Returned when a numeric choice does not map to an [`ErrorDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error decision: {0}")]
pub struct InvalidDecision(pub u8);

impl ErrorDecision {
    /// Stable numeric ordinal of this decision.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Ignore => 0,
            Self::IgnoreAll => 1,
            Self::Stop => 2,
        }
    }

    /// Human-readable label shown next to the ordinal in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ignore => "Ignore and continue",
            Self::IgnoreAll => "Always ignore errors",
            Self::Stop => "Stop operation",
        }
    }
}

impl TryFrom<u8> for ErrorDecision {
    type Error = InvalidDecision;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ignore),
            1 => Ok(Self::IgnoreAll),
            2 => Ok(Self::Stop),
            other => Err(InvalidDecision(other)),
        }
    }
}

/// Error parsing a decision from user text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDecisionError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error(transparent)]
    OutOfRange(#[from] InvalidDecision),
}

impl FromStr for ErrorDecision {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed
            .parse()
            .map_err(|_| ParseDecisionError::NotANumber(trimmed.to_string()))?;
        Ok(Self::try_from(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_ordinals_are_stable() {
        let ordinals: Vec<u8> = ErrorDecision::iter().map(ErrorDecision::ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }

    #[test]
    fn test_try_from_ordinal() {
        for decision in ErrorDecision::iter() {
            assert_eq!(ErrorDecision::try_from(decision.ordinal()), Ok(decision));
        }
        assert_eq!(ErrorDecision::try_from(3), Err(InvalidDecision(3)));
    }

    #[test]
    fn test_parse_from_text() {
        assert_eq!(" 1\n".parse::<ErrorDecision>(), Ok(ErrorDecision::IgnoreAll));
        assert!(matches!(
            "abc".parse::<ErrorDecision>(),
            Err(ParseDecisionError::NotANumber(_))
        ));
        assert!(matches!(
            "7".parse::<ErrorDecision>(),
            Err(ParseDecisionError::OutOfRange(InvalidDecision(7)))
        ));
        assert!("-1".parse::<ErrorDecision>().is_err());
    }
}
