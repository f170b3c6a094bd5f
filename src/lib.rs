//! excise - cut the Favorites Gallery section out of a page source file
//!
//! The page is read line by line, the line holding `{/* Favorites Gallery */}`
//! and everything up to the `{/* Menu List */}` line is dropped, and the file
//! is written back in place. Untouched lines keep their exact bytes.
//!
//! # Layout
//!
//! 1. **Excise** - line sequence, marker scan and the in-memory cut
//! 2. **Refactor** - file-level editing and optional undo scripts
//! 3. **Reporting** - terminal or JSON outcome
//! 4. **Config** - optional YAML/TOML settings

pub mod config;
pub mod excise;
pub mod refactor;
pub mod report;

pub use config::Config;
pub use excise::{excise_lines, Excision, LineSequence, MarkerScan, Markers, Span};
pub use refactor::{ExciseError, FileEditor, FileExcision, UndoScript};
pub use report::{ReportFormat, Reporter};
