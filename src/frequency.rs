//! Occurrence counting and mode detection.
//!
//! Counting is keyed by value equality (`Eq + Hash`), never by display text, so for
//! [`UniversalValue`](crate::UniversalValue) the integer `2` and the float `2.0`
//! land in the same bucket. Results are reported in ascending `Ord` order regardless
//! of the chain's current orientation.

use std::collections::HashMap;
use std::hash::Hash;

use crate::list::OrderedList;

/// Occurrence counts built from a single pass over borrowed values.
#[derive(Debug, Clone)]
pub struct FrequencyTable<'a, T> {
    counts: HashMap<&'a T, usize>,
}

impl<'a, T: Eq + Hash> FrequencyTable<'a, T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Counts one more occurrence of `value`.
    pub fn record(&mut self, value: &'a T) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of recorded occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Highest occurrence count, or zero when empty.
    pub fn max_frequency(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

impl<T: Ord + Hash + Clone> FrequencyTable<'_, T> {
    /// Every value whose count equals the maximum, ascending.
    pub fn modes(&self) -> Modes<T> {
        let max_frequency = self.max_frequency();
        let mut values: Vec<&T> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count == max_frequency)
            .map(|(&value, _)| value)
            .collect();
        values.sort();

        Modes {
            values: values.into_iter().cloned().collect(),
            max_frequency,
        }
    }

    /// Every distinct value with its count, ascending by value.
    pub fn into_ascending(self) -> Vec<(T, usize)> {
        let mut entries: Vec<(&T, usize)> = self.counts.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(value, count)| (value.clone(), count))
            .collect()
    }
}

impl<T: Eq + Hash> Default for FrequencyTable<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Eq + Hash> FromIterator<&'a T> for FrequencyTable<'a, T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.record(value);
        }
        table
    }
}

/// The most frequent value(s) of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Modes<T> {
    /// Values sharing the highest count, ascending.
    pub values: Vec<T>,
    /// That count; zero for an empty list.
    pub max_frequency: usize,
}

impl<T> Modes<T> {
    /// Returns true when the source list was empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Splits into `(values, max_frequency)`.
    pub fn into_parts(self) -> (Vec<T>, usize) {
        (self.values, self.max_frequency)
    }
}

impl<T> Default for Modes<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            max_frequency: 0,
        }
    }
}

impl<T: Ord + Hash + Clone> OrderedList<T> {
    /// Counts occurrences in one forward pass.
    pub fn frequencies(&self) -> FrequencyTable<'_, T> {
        self.forward().collect()
    }

    /// Values with the highest occurrence count, ascending, plus that count.
    ///
    /// An empty list yields no values and a count of zero.
    pub fn get_modes(&self) -> Modes<T> {
        self.frequencies().modes()
    }

    /// Every distinct value paired with its count, ascending by value.
    pub fn get_frequencies_ascending(&self) -> Vec<(T, usize)> {
        self.frequencies().into_ascending()
    }
}
