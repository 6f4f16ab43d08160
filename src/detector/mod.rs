//! # Cycle Canonicalization Module
//!
//! Module walks that return to a node they already visited are candidate
//! cycles. The same cycle is usually discovered several times, once from each
//! of its members, and a walk may reach a cycle through an acyclic lead-in.
//! This module reduces such walks to a stable list of distinct cycles.
//!
//! ## Algorithm
//!
//! 1. Trim every walk to its *cyclic core*: from the first element that
//!    reappears later in the walk, up to but excluding the closing element.
//! 2. Identify cores by their lexicographically sorted members, so rotations
//!    such as `[a, b, c]` and `[b, c, a]` share one key.
//! 3. Keep the first core seen for every key, in traversal order.
//!
//! Overlapping cycles (`[a, b]` and `[a, b, c]`) are distinct and both kept.
//!
//! ## Example
//!
//! ```
//! use module_carousel::detector::reduce_cycles;
//!
//! let walks = vec![
//!     vec!["a".to_string(), "b".to_string(), "c".to_string(), "a".to_string()],
//!     vec!["b".to_string(), "c".to_string(), "a".to_string(), "b".to_string()],
//!     vec!["c".to_string(), "a".to_string(), "b".to_string(), "c".to_string()],
//! ];
//!
//! let cycles = reduce_cycles(&walks);
//! assert_eq!(cycles, vec![vec!["a", "b", "c"]]);
//! ```

mod canonicalizer;

pub use canonicalizer::{canonical_key, cyclic_core, reduce_cycles};
