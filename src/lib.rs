//! # ordlist
//!
//! A sorted doubly-linked list over heterogeneous scalar values.
//!
//! The crate has two layers:
//!
//! - [`UniversalValue`]: an immutable tagged scalar (integer, float, timestamp or
//!   free text) classified once from user input, carrying its raw text for display
//!   and a total order usable for sorting.
//! - [`OrderedList`]: a doubly-linked sequence kept in ascending order on insertion,
//!   with bidirectional traversal, in-place link reversal, tail removal and
//!   frequency/mode aggregation. It is generic over any `Ord` value type.
//!
//! ## Features
//!
//! - **Sum-type values**: only the active variant carries a payload
//! - **Arena-backed links**: forward and backward links are slot indices, so the
//!   chain has no reference cycles and no `unsafe`
//! - **Lazy traversal**: [`OrderedList::forward`] and [`OrderedList::backward`]
//!   walk the links on demand
//! - **Value-keyed frequencies**: `2` and `2.0` share one bucket because hashing
//!   follows value equality, not raw text
//!
//! ## Quick Start
//!
//! ```rust
//! use ordlist::{OrderedList, UniversalValue};
//!
//! let mut list = OrderedList::new();
//! for raw in ["3", "1", "2", "3", "1", "3"] {
//!     list.add_sorted(UniversalValue::parse(raw));
//! }
//!
//! let ascending: Vec<String> = list.forward().map(ToString::to_string).collect();
//! assert_eq!(ascending, ["1", "1", "2", "3", "3", "3"]);
//!
//! let modes = list.get_modes();
//! assert_eq!(modes.max_frequency, 3);
//! assert_eq!(modes.values, [UniversalValue::parse("3")]);
//!
//! list.sort_descending_in_place();
//! assert_eq!(list.first().map(UniversalValue::raw), Some("3"));
//! ```
//!
//! ## Logging
//!
//! With the `logging` feature enabled the crate emits `log` records for value
//! classification and structural changes of the chain.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod frequency;
pub mod list;
pub mod value;

pub use error::ConfigError;
pub use frequency::{FrequencyTable, Modes};
pub use list::{Iter, OrderedList, Orientation};
pub use value::{DateOrder, ParseConfig, ParseConfigBuilder, UniversalValue, ValueKind};

/// Alias spelling out the container's structure.
pub type OrderedDoublyLinkedList<T> = OrderedList<T>;
