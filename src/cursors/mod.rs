pub mod text;

pub use crate::cursor::Cursor;
pub use text::TextCursor;
