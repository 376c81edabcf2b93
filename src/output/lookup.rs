//! Id-keyed lookup tables for resolving foreign keys

use std::collections::HashMap;

use crate::platform::BlResource;

/// Records of one auxiliary collection keyed by id
#[derive(Debug)]
pub struct LookupTable<'a, T> {
    by_id: HashMap<&'a str, &'a T>,
}

impl<'a, T: BlResource> LookupTable<'a, T> {
    pub fn new(records: &'a [T]) -> Self {
        let by_id = records.iter().map(|r| (r.id(), r)).collect();
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a T> {
        self.by_id.get(id).copied()
    }

    /// Name of the referenced record, or `placeholder` when it is missing
    pub fn name_or(&self, id: Option<&str>, placeholder: &'a str) -> &'a str {
        id.and_then(|id| self.get(id))
            .map(|r| r.name())
            .unwrap_or(placeholder)
    }

    /// Resolve a list of ids to names, substituting `placeholder` per miss
    pub fn names_or(&self, ids: &[String], placeholder: &'a str) -> Vec<&'a str> {
        ids.iter()
            .map(|id| self.name_or(Some(id.as_str()), placeholder))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str, &'static str);

    impl BlResource for Named {
        fn id(&self) -> &str {
            self.0
        }

        fn name(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn test_name_or_hit_and_miss() {
        let records = [Named("1", "alice"), Named("2", "bob")];
        let table = LookupTable::new(&records);
        assert_eq!(table.name_or(Some("2"), "unknown"), "bob");
        assert_eq!(table.name_or(Some("9"), "unknown"), "unknown");
        assert_eq!(table.name_or(None, "Unknown"), "Unknown");
    }

    #[test]
    fn test_names_or_keeps_order() {
        let records = [Named("1", "alice"), Named("2", "bob")];
        let table = LookupTable::new(&records);
        let ids = vec!["2".to_string(), "7".to_string(), "1".to_string()];
        assert_eq!(
            table.names_or(&ids, "unknown"),
            vec!["bob", "unknown", "alice"]
        );
    }

    #[test]
    fn test_empty_table() {
        let records: [Named; 0] = [];
        let table = LookupTable::new(&records);
        assert_eq!(table.name_or(Some("1"), "unknown"), "unknown");
    }
}
