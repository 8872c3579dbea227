//! Entity table load errors.
//!
//! The codec itself never fails; only building an [`EntityTable`](crate::EntityTable)
//! from its JSON source can.

use std::fmt;

#[derive(Debug)]
pub enum TableError {
    /// The source is not a JSON array of `{name, codepoints}` records.
    Json(serde_json::Error),
    EmptyName {
        index: usize,
    },
    /// Names must be ASCII alphanumeric, without the `&` and `;` delimiters.
    InvalidName {
        name: String,
    },
    DuplicateName {
        name: String,
    },
    /// Empty list, more than two code points, or a value that is not a Unicode scalar.
    InvalidCodepoints {
        name: String,
    },
    Empty,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Json(err) => write!(f, "malformed entity table: {err}"),
            TableError::EmptyName { index } => write!(f, "entity #{index} has an empty name"),
            TableError::InvalidName { name } => write!(f, "invalid entity name: {name:?}"),
            TableError::DuplicateName { name } => write!(f, "duplicate entity name: {name:?}"),
            TableError::InvalidCodepoints { name } => {
                write!(f, "entity {name:?} has invalid code points")
            }
            TableError::Empty => f.write_str("entity table has no entries"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_names_the_offending_entity() {
        let err = TableError::DuplicateName {
            name: "amp".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate entity name: \"amp\"");
        assert!(err.source().is_none());
    }

    #[test]
    fn json_errors_expose_their_source() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err = TableError::from(json_err);
        assert!(err.to_string().starts_with("malformed entity table: "));
        assert!(err.source().is_some());
    }
}
