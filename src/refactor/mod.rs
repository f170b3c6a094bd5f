mod editor;
mod undo;

pub use editor::{ExciseError, FileEditor, FileExcision};
pub use undo::{UndoError, UndoScript};
