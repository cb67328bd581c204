//! File I/O for the command line front end.
//!
//! This module loads YAML/JSON documents from disk or stdin and renders
//! values for printing. Nothing is ever written back to disk.

pub mod loader;
pub mod output;
