use inlinable_string::InlinableString;
use std::collections::HashMap;
use itertools::Itertools;
use tracing::debug;

// Name under which every non-assignment evaluation records its result
pub const ANSWER: &str = "ans";

// Session-wide variable storage. Names are case sensitive; the last assignment wins
// and nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    bindings: HashMap<InlinableString, f64>
}

impl VariableTable {
    pub fn new() -> Self {
        VariableTable { bindings: HashMap::new() }
    }

    // Stored value, or 0 for a name that was never assigned
    pub fn get(&self, name: &str) -> f64 {
        self.bindings.get(name).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, name: &str, value: f64) {
        debug!(name, value, "variable set");
        self.bindings.insert(InlinableString::from(name), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    // All bindings, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.bindings.iter()
            .map(|(name, value)| (name.as_ref(), *value))
            .sorted_by(|a, b| a.0.cmp(b.0))
    }
}

#[cfg(test)]
mod test {
    use super::VariableTable;

    #[test]
    fn unseen_names_read_as_zero() {
        let table = VariableTable::new();
        assert_eq!(table.get("y"), 0.0);
        assert!(!table.contains("y"));
        assert!(table.is_empty());
    }

    #[test]
    fn last_assignment_wins() {
        let mut table = VariableTable::new();
        table.set("x", 1.0);
        table.set("x", 2.5);
        assert_eq!(table.get("x"), 2.5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut table = VariableTable::new();
        table.set("X", 3.0);
        assert!(table.contains("X"));
        assert!(!table.contains("x"));
        assert_eq!(table.get("x"), 0.0);
    }

    #[test]
    fn iterates_sorted_by_name() {
        let mut table = VariableTable::new();
        table.set("b", 2.0);
        table.set("ans", 0.0);
        table.set("a", 1.0);
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "ans", "b"]);
    }
}
