use std::str::FromStr;
use tracing::debug;

use crate::env::VariableTable;
use crate::error::{EvalError, Found, SyntaxError};
use crate::scan::{scan, TokenKind};
use crate::value::Value;

// Recursive descent over the grammar
//   assign := sum ("=" sum)?
//   sum    := term (("+" | "-") term)*
//   term   := factor (("*" | "/") factor)*
//   factor := value ("^" value)*
//   value  := "(" sum ")" | identifier | number
// Tokens are matched directly against the input at the cursor; spaces are only skipped
// where space() is called. The cursor never moves backwards.
struct Parser<'a> {
    input: &'a str,
    position: usize,
    // open parentheses around the cursor
    depth: usize,
    table: &'a mut VariableTable
}

// Deepest parenthesis nesting accepted; each level costs several stack frames
pub const MAX_DEPTH: usize = 128;

impl<'a> Parser<'a> {
    // Consume a token of the given kind at the cursor, if there is one
    fn eat(&mut self, kind: TokenKind) -> Option<&'a str> {
        let m = scan(kind, self.input, self.position)?;
        self.position = m.end;
        Some(m.text)
    }

    fn space(&mut self) {
        self.eat(TokenKind::Space);
    }

    fn found(&self) -> Found {
        Found::at(self.input, self.position)
    }

    fn assign(&mut self) -> Result<Value, EvalError> {
        let lhs = self.sum()?;
        self.space();
        let equals = self.position;
        if self.eat(TokenKind::Assign).is_some() {
            self.space();
            let rhs = self.sum()?;
            lhs.assign(&rhs, self.table).map_err(|_| EvalError::Assignment { position: equals })
        } else {
            // Every plain evaluation is recorded as `ans`, even a bare read of a variable
            Ok(lhs.into_answer(self.table))
        }
    }

    fn sum(&mut self) -> Result<Value, EvalError> {
        let mut result = self.term()?;
        self.space();
        while let Some(op) = self.eat(TokenKind::AddSub) {
            self.space();
            let next = self.term()?;
            result = match op {
                "+" => result + next,
                _ => result - next
            };
            self.space();
        }
        Ok(result)
    }

    fn term(&mut self) -> Result<Value, EvalError> {
        let mut result = self.factor()?;
        self.space();
        while let Some(op) = self.eat(TokenKind::MulDiv) {
            self.space();
            let next = self.factor()?;
            result = match op {
                "*" => result * next,
                _ => result / next
            };
            self.space();
        }
        Ok(result)
    }

    // Note that this folds left: 2^3^2 is (2^3)^2
    fn factor(&mut self) -> Result<Value, EvalError> {
        let mut result = self.value()?;
        self.space();
        while self.eat(TokenKind::Exponent).is_some() {
            self.space();
            let next = self.value()?;
            result = result.pow(next);
            self.space();
        }
        Ok(result)
    }

    fn value(&mut self) -> Result<Value, EvalError> {
        let start = self.position;
        if self.eat(TokenKind::LParen).is_some() {
            if self.depth == MAX_DEPTH {
                return Err(SyntaxError::TooDeep { position: start, limit: MAX_DEPTH }.into())
            }
            self.depth += 1;
            self.space();
            // parentheses keep the inner value as is, binding included
            let inner = self.sum()?;
            self.depth -= 1;
            self.space();
            if self.eat(TokenKind::RParen).is_none() {
                return Err(SyntaxError::UnmatchedParen { open: start, position: self.position, found: self.found() }.into())
            }
            Ok(inner)
        } else if let Some(name) = self.eat(TokenKind::Identifier) {
            Ok(Value::lookup(name, self.table))
        } else if let Some(n) = self.eat(TokenKind::Number).and_then(|literal| f64::from_str(literal).ok()) {
            Ok(Value::Unbound(n))
        } else {
            Err(SyntaxError::Unexpected {
                position: start,
                found: Found::at(self.input, start),
                expected: vec![TokenKind::LParen, TokenKind::Identifier, TokenKind::Number]
            }.into())
        }
    }
}

// Parse and evaluate one line against the table. Assignments made by completed parts of
// the line stay in the table even if the line as a whole fails.
pub fn parse(input: &str, table: &mut VariableTable) -> Result<Value, EvalError> {
    let mut parser = Parser {
        input,
        position: 0,
        depth: 0,
        table
    };
    let result = parser.assign()?;
    if parser.position != input.len() {
        let err = SyntaxError::Trailing { position: parser.position, found: parser.found() };
        debug!(%err, "input left after expression");
        return Err(err.into())
    }
    Ok(result)
}
