use inlinable_string::InlinableString;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::env::VariableTable;
use crate::util::write_number;

// Result of a (sub-)expression. A Bound value still refers to a variable slot and can be
// assigned to; any arithmetic produces an Unbound value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bound { name: InlinableString, magnitude: f64 },
    Unbound(f64),
}

impl Value {
    // A bare identifier reference, reading its current value from the table
    pub fn lookup(name: &str, table: &VariableTable) -> Self {
        Value::Bound { name: InlinableString::from(name), magnitude: table.get(name) }
    }

    pub fn magnitude(&self) -> f64 {
        match self {
            Value::Bound { magnitude, .. } => *magnitude,
            Value::Unbound(magnitude) => *magnitude
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Value::Bound { name, .. } => Some(name.as_ref()),
            Value::Unbound(_) => None
        }
    }

    // Left-to-right exponentiation; see Parser::factor for the fold direction
    pub fn pow(self, rhs: Value) -> Value {
        Value::Unbound(self.magnitude().powf(rhs.magnitude()))
    }

    // Store `rhs` into this value's slot. Fails (returning self untouched) if the value has
    // lost its binding.
    pub fn assign(self, rhs: &Value, table: &mut VariableTable) -> Result<Value, Value> {
        match self {
            Value::Bound { name, .. } => {
                let magnitude = rhs.magnitude();
                table.set(&name, magnitude);
                Ok(Value::Bound { name, magnitude })
            },
            unbound => Err(unbound)
        }
    }

    // Rebind the value to `ans` and record it, whatever it was bound to before
    pub fn into_answer(self, table: &mut VariableTable) -> Value {
        let magnitude = self.magnitude();
        table.set(crate::env::ANSWER, magnitude);
        Value::Bound { name: InlinableString::from(crate::env::ANSWER), magnitude }
    }

    pub fn render<W: fmt::Write>(&self, f: &mut W, table: &VariableTable) -> fmt::Result {
        match self {
            Value::Bound { name, magnitude } if table.contains(name) => {
                write!(f, "{} = ", name)?;
                write_number(f, *magnitude)
            },
            Value::Bound { name, .. } => write!(f, "{}", name),
            Value::Unbound(magnitude) => write_number(f, *magnitude)
        }
    }

    pub fn render_to_string(&self, table: &VariableTable) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.render(&mut out, table);
        out
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        Value::Unbound(self.magnitude() + rhs.magnitude())
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        Value::Unbound(self.magnitude() - rhs.magnitude())
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        Value::Unbound(self.magnitude() * rhs.magnitude())
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        Value::Unbound(self.magnitude() / rhs.magnitude())
    }
}

#[cfg(test)]
mod test {
    use super::Value;
    use crate::env::{VariableTable, ANSWER};

    #[test]
    fn arithmetic_drops_the_binding() {
        let mut table = VariableTable::new();
        table.set("x", 6.0);
        let x = || Value::lookup("x", &table);
        assert_eq!(x().name(), Some("x"));
        assert_eq!(x() + Value::Unbound(1.0), Value::Unbound(7.0));
        assert_eq!(x() - Value::Unbound(1.0), Value::Unbound(5.0));
        assert_eq!(x() * x(), Value::Unbound(36.0));
        assert_eq!(x() / Value::Unbound(4.0), Value::Unbound(1.5));
        assert_eq!(Value::Unbound(2.0).pow(Value::Unbound(10.0)), Value::Unbound(1024.0));
        assert_eq!((x() + Value::Unbound(0.0)).name(), None);
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        let v = Value::Unbound(1.0) / Value::Unbound(0.0);
        assert!(v.magnitude().is_infinite());
    }

    #[test]
    fn assign_writes_through() {
        let mut table = VariableTable::new();
        let x = Value::lookup("x", &table);
        assert_eq!(x.magnitude(), 0.0);
        let assigned = x.assign(&Value::Unbound(5.0), &mut table).unwrap();
        assert_eq!(assigned.name(), Some("x"));
        assert_eq!(assigned.magnitude(), 5.0);
        assert_eq!(table.get("x"), 5.0);

        let rejected = Value::Unbound(1.0).assign(&Value::Unbound(5.0), &mut table);
        assert_eq!(rejected, Err(Value::Unbound(1.0)));
    }

    #[test]
    fn into_answer_rebinds_to_ans() {
        let mut table = VariableTable::new();
        table.set("x", 3.0);
        let ans = Value::lookup("x", &table).into_answer(&mut table);
        assert_eq!(ans.name(), Some(ANSWER));
        assert_eq!(table.get(ANSWER), 3.0);
        assert_eq!(table.get("x"), 3.0);
    }

    #[test]
    fn rendering() {
        let mut table = VariableTable::new();
        table.set("x", 2.5);
        assert_eq!(Value::lookup("x", &table).render_to_string(&table), "x = 2.5");
        assert_eq!(Value::lookup("y", &table).render_to_string(&table), "y");
        assert_eq!(Value::Unbound(14.0).render_to_string(&table), "14");
    }
}
