//! Internal test modules - whitebox acceptance tests with crate access.
//!
//! Each module exercises one of the engine's contract areas end to end,
//! including the concrete scenarios the contracts are specified by.

mod acceptance_layout;
