use std::fmt;
use itertools::Itertools;
use thiserror::Error;

use crate::scan::TokenKind;

// What the parser was looking at when it gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    EndOfInput
}

impl Found {
    pub fn at(input: &str, position: usize) -> Self {
        match input.get(position..).and_then(|rest| rest.chars().next()) {
            Some(c) => Found::Char(c),
            None => Found::EndOfInput
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "\"{}\"", c),
            Found::EndOfInput => f.write_str("end of input")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("unexpected {} at {}, expected {}", .found, .position, .expected.iter().join(", "))]
    Unexpected { position: usize, found: Found, expected: Vec<TokenKind> },
    #[error("unmatched left parenthesis at {open}: found {found} at {position}")]
    UnmatchedParen { open: usize, position: usize, found: Found },
    #[error("unexpected character at {position}: {found}")]
    Trailing { position: usize, found: Found },
    #[error("parentheses nested deeper than {limit} at {position}")]
    TooDeep { position: usize, limit: usize },
}

impl SyntaxError {
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::Unexpected { position, .. }
            | SyntaxError::UnmatchedParen { position, .. }
            | SyntaxError::Trailing { position, .. }
            | SyntaxError::TooDeep { position, .. } => *position
        }
    }

    pub fn found(&self) -> Found {
        match self {
            SyntaxError::Unexpected { found, .. }
            | SyntaxError::UnmatchedParen { found, .. }
            | SyntaxError::Trailing { found, .. } => *found,
            SyntaxError::TooDeep { .. } => Found::Char('(')
        }
    }
}

// Failure of a single evaluation. The session stays usable afterwards.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("SyntaxError: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("AssignmentError: value cannot be assigned (\"=\" at {position})")]
    Assignment { position: usize },
}

impl EvalError {
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::Syntax(_) => "SyntaxError",
            EvalError::Assignment { .. } => "AssignmentError"
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn found_reads_the_char_at_an_offset() {
        assert_eq!(Found::at("2 $ 3", 2), Found::Char('$'));
        assert_eq!(Found::at("2 + ", 4), Found::EndOfInput);
        assert_eq!(Found::at("", 0), Found::EndOfInput);
    }

    #[test]
    fn messages_carry_kind_and_detail() {
        let err = EvalError::from(SyntaxError::Unexpected {
            position: 2,
            found: Found::Char('$'),
            expected: vec![TokenKind::LParen, TokenKind::Identifier, TokenKind::Number]
        });
        assert_eq!(err.kind(), "SyntaxError");
        assert_eq!(err.to_string(), "SyntaxError: unexpected \"$\" at 2, expected \"(\", identifier, number");

        let err = EvalError::Assignment { position: 6 };
        assert_eq!(err.kind(), "AssignmentError");
        assert_eq!(err.to_string(), "AssignmentError: value cannot be assigned (\"=\" at 6)");
    }
}
