//! User interface and presentation
//!
//! Presenters derive everything they show from the board's query
//! operations; they never hold view state of their own.

pub mod presenters;
