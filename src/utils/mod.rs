//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Foreground process execution
//! - `io` - File I/O with consistent error handling

pub mod command;
pub mod io;
