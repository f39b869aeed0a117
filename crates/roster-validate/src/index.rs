//! Email lookup index.

use std::collections::HashMap;

use roster_model::Record;

/// Maps each email to its record for one validation run.
///
/// When an email appears on several rows the last row wins. Occurrence
/// counts are kept so the duplicate check can report the collision.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex<'a> {
    by_email: HashMap<&'a str, &'a Record>,
    occurrences: HashMap<&'a str, usize>,
}

impl<'a> RosterIndex<'a> {
    /// Index records in input order.
    pub fn build(records: &'a [Record]) -> Self {
        let mut index = Self {
            by_email: HashMap::with_capacity(records.len()),
            occurrences: HashMap::with_capacity(records.len()),
        };
        for record in records {
            index.by_email.insert(record.email.as_str(), record);
            *index.occurrences.entry(record.email.as_str()).or_default() += 1;
        }
        index
    }

    pub fn get(&self, email: &str) -> Option<&'a Record> {
        self.by_email.get(email).copied()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.by_email.contains_key(email)
    }

    /// How many rows carry this email.
    pub fn occurrences(&self, email: &str) -> usize {
        self.occurrences.get(email).copied().unwrap_or(0)
    }

    /// Number of emails that appear on more than one row.
    pub fn duplicate_count(&self) -> usize {
        self.occurrences.values().filter(|&&count| count > 1).count()
    }

    /// Number of distinct emails.
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}
