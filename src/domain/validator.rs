use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

// Accumulates at most one error message per field key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    // True when no check has failed.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    // Records `message` for `key` unless the key already failed; the first
    // recorded message wins.
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(key.into()).or_insert_with(|| message.into());
    }

    pub fn check(&mut self, condition: bool, key: impl Into<String>, message: impl Into<String>) {
        if !condition {
            self.add_error(key, message);
        }
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

// Single pass over `values`; stops at the first repeat.
pub fn has_duplicates<T>(values: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().any(|value| !seen.insert(value))
}

pub fn is_in<T>(value: &T, allowed: &[T]) -> bool
where
    T: PartialEq,
{
    allowed.contains(value)
}

// Regular expression that must match the whole input, not a substring.
#[derive(Clone, Debug)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(&format!(r"\A(?:{pattern})\z")).map(Self)
    }
}

pub fn matches_pattern(value: &str, pattern: &Pattern) -> bool {
    pattern.0.is_match(value)
}
