use std::fmt;
use tracing::debug;
#[cfg(target_family="wasm")]
use wasm_bindgen::prelude::*;

#[cfg(target_family="wasm")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub mod config;
pub mod env;
pub mod error;
pub mod logger;
mod parse;
pub mod scan;
pub mod util;
pub mod value;

pub use env::{VariableTable, ANSWER};
pub use error::{EvalError, Found, SyntaxError};
pub use value::Value;

// A successfully evaluated line, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedValue {
    value: Value,
    rendered: String
}

impl FormattedValue {
    pub fn magnitude(&self) -> f64 {
        self.value.magnitude()
    }

    pub fn name(&self) -> Option<&str> {
        self.value.name()
    }
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

// One interactive session: a variable table that persists across evaluated lines
#[derive(Debug, Clone, Default)]
pub struct Session {
    variables: VariableTable
}

impl Session {
    pub fn new() -> Self {
        Session { variables: VariableTable::new() }
    }

    // Evaluate a single line. Errors only affect this line; the session can keep going.
    pub fn evaluate(&mut self, line: &str) -> Result<FormattedValue, EvalError> {
        match parse::parse(line, &mut self.variables) {
            Ok(value) => {
                let rendered = value.render_to_string(&self.variables);
                debug!(line, result = %rendered, "evaluated");
                Ok(FormattedValue { value, rendered })
            },
            Err(e) => {
                debug!(line, error = %e, "evaluation failed");
                Err(e)
            }
        }
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }
}

#[cfg(target_family="wasm")]
thread_local! {
    static JS_SESSION: std::cell::RefCell<Option<Session>> = std::cell::RefCell::new(None);
}

#[cfg(target_family="wasm")]
#[wasm_bindgen]
pub fn init_session() {
    JS_SESSION.with(|s| *s.borrow_mut() = Some(Session::new()));
}

// Evaluates against the current session, starting one if needed
#[cfg(target_family="wasm")]
#[wasm_bindgen]
pub fn evaluate_line(line: &str) -> String {
    JS_SESSION.with(|s| {
        let mut session = s.borrow_mut();
        match session.get_or_insert_with(Session::new).evaluate(line) {
            Ok(result) => result.to_string(),
            Err(e) => e.to_string()
        }
    })
}

#[cfg(target_family="wasm")]
#[wasm_bindgen]
pub fn deinit_session() {
    JS_SESSION.with(|s| std::mem::take(&mut *s.borrow_mut()));
}
