//! Textual vertex ids used by the persisted graph format.
//!
//! Persisted graphs name vertices by integer tuples written as text, e.g. `"(3, 0)"`.
//! Single integers may appear bare (`"3"`) or as one-element tuples (`"(3,)"`, `"(3)"`).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer-tuple vertex identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct VertexLabel(Vec<i64>);

impl VertexLabel {
    /// Creates a label from its components.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLabel`] if `parts` is empty; `"()"` has no parseable form.
    pub fn new(parts: Vec<i64>) -> Result<Self> {
        if parts.is_empty() {
            return Err(Error::InvalidLabel {
                label: "()".to_owned(),
                reason: "a label needs at least one component".to_owned(),
            });
        }
        Ok(Self(parts))
    }

    /// Single-integer label.
    pub fn single(value: i64) -> Self {
        Self(vec![value])
    }

    /// Tuple components.
    pub fn parts(&self) -> &[i64] {
        &self.0
    }
}

impl From<i64> for VertexLabel {
    fn from(value: i64) -> Self {
        Self::single(value)
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.0.as_slice() {
            return write!(f, "{only}");
        }
        f.write_str("(")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{part}")?;
        }
        f.write_str(")")
    }
}

impl FromStr for VertexLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidLabel {
            label: s.to_owned(),
            reason: reason.to_owned(),
        };

        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
            (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => return Err(invalid("unbalanced parentheses")),
        };

        let mut pieces: Vec<&str> = inner.split(',').map(str::trim).collect();
        // "(3,)" leaves one empty trailing piece
        if pieces.len() > 1 && pieces.last().is_some_and(|p| p.is_empty()) {
            pieces.pop();
        }

        let mut parts = Vec::with_capacity(pieces.len());
        for piece in pieces {
            if piece.is_empty() {
                return Err(invalid("empty component"));
            }
            let value = piece
                .parse::<i64>()
                .map_err(|e| invalid(&format!("component {piece:?}: {e}")))?;
            parts.push(value);
        }
        Ok(Self(parts))
    }
}

impl From<VertexLabel> for String {
    fn from(label: VertexLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for VertexLabel {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tuples_and_bare_integers() {
        assert_eq!("(3, 0)".parse::<VertexLabel>().unwrap().parts(), &[3, 0]);
        assert_eq!("(3,0)".parse::<VertexLabel>().unwrap().parts(), &[3, 0]);
        assert_eq!("3".parse::<VertexLabel>().unwrap().parts(), &[3]);
        assert_eq!("(3,)".parse::<VertexLabel>().unwrap().parts(), &[3]);
        assert_eq!("(-2)".parse::<VertexLabel>().unwrap().parts(), &[-2]);
        assert_eq!(" (1, 2, 3) ".parse::<VertexLabel>().unwrap().parts(), &[1, 2, 3]);
    }

    #[test]
    fn display_round_trips() {
        for text in ["(3, 0)", "7", "(1, 2, 3)", "-4"] {
            let label: VertexLabel = text.parse().unwrap();
            assert_eq!(label.to_string(), text);
        }
        assert_eq!("(3,)".parse::<VertexLabel>().unwrap().to_string(), "3");
    }

    #[test]
    fn rejects_malformed_labels() {
        for text in ["", "()", "(1, 2", "1, 2)", "(a, 1)", "(1,,2)", "1.5"] {
            let err = text.parse::<VertexLabel>().unwrap_err();
            assert!(matches!(err, Error::InvalidLabel { .. }), "{text:?} should be rejected");
        }
    }

    #[test]
    fn every_constructible_label_parses_back() {
        assert!(matches!(VertexLabel::new(Vec::new()), Err(Error::InvalidLabel { .. })));
        for parts in [vec![0], vec![-7, 3], vec![1, 2, 3, 4]] {
            let label = VertexLabel::new(parts).unwrap();
            assert_eq!(label.to_string().parse::<VertexLabel>().unwrap(), label);
        }
    }

    #[test]
    fn serializes_as_string() {
        let label = VertexLabel::new(vec![3, 0]).unwrap();
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"(3, 0)\"");
        let back: VertexLabel = serde_json::from_str("\"(3, 0)\"").unwrap();
        assert_eq!(back, label);
        assert!(serde_json::from_str::<VertexLabel>("\"(x)\"").is_err());
    }
}
