//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation
//! - `legality.rs` - Legal move filter against the attack oracle
//! - `edge_cases.rs` - Special positions and moves
//! - `search.rs` - Search results and killer ordering
//! - `proptest.rs` - Property-based tests

mod legality;
mod perft;
