//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generator node counts
//! - `draw.rs` - Game status (mate, stalemate, 50-move, repetition, material)
//! - `make_unmake.rs` - Make/unmake and apply/undo correctness
//! - `edge_cases.rs` - Special moves and positions
//! - `san.rs` - Notation attached to generated moves
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod proptest;
mod san;
