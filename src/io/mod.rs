//! I/O module
//!
//! Handles command input parsing.
//!
//! # Components
//!
//! - `line_format` - Command language parsing (line to Command conversion)
//! - `line_reader` - Streaming command reader with iterator interface

pub mod line_format;
pub mod line_reader;

pub use line_format::parse_line;
pub use line_reader::CommandReader;
