mod editor;
mod item;
mod modal;

pub use editor::NoteEditor;
pub use item::NoteItem;
pub use modal::NoteModal;
