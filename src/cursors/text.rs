use crate::cursor::Cursor;
use crate::error::{CodeLoc, SyntaxError};

/// Cursor over UTF-8 text, stepping one `char` at a time
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextCursor<'code> {
    /// Cursor pointing at a character boundary inside the text
    Valid {
        data: &'code str,
        /// Byte offset in `data`, always on a char boundary
        position: usize,
    },
    /// Cursor at end of input - no more characters to read
    EndOfFile { data: &'code str },
}

impl<'code> TextCursor<'code> {
    pub fn new(data: &'code str) -> Self {
        Self::at(data, 0)
    }

    fn at(data: &'code str, position: usize) -> Self {
        if position >= data.len() {
            TextCursor::EndOfFile { data }
        } else {
            TextCursor::Valid { data, position }
        }
    }

    /// Location of the cursor, for error reporting
    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.source(), self.position())
    }

    /// Cursor positioned at the end of the same source
    pub fn end(self) -> Self {
        TextCursor::EndOfFile {
            data: self.source(),
        }
    }
}

impl<'code> Cursor<'code> for TextCursor<'code> {
    type Element = char;
    type Error = SyntaxError<'code>;

    fn value(&self) -> Result<Self::Element, Self::Error> {
        match self {
            TextCursor::Valid { data, position } => data
                .get(*position..)
                .and_then(|rest| rest.chars().next())
                .ok_or_else(|| SyntaxError::new("any character", self.loc())),
            TextCursor::EndOfFile { .. } => Err(SyntaxError::new("any character", self.loc())),
        }
    }

    fn next(self) -> Self {
        match self {
            TextCursor::Valid { data, position } => {
                let width = data
                    .get(position..)
                    .and_then(|rest| rest.chars().next())
                    .map_or(0, char::len_utf8);
                if width == 0 {
                    TextCursor::EndOfFile { data }
                } else {
                    Self::at(data, position + width)
                }
            }
            TextCursor::EndOfFile { data } => TextCursor::EndOfFile { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            TextCursor::Valid { position, .. } => *position,
            TextCursor::EndOfFile { data } => data.len(),
        }
    }

    fn source(&self) -> &'code str {
        match self {
            TextCursor::Valid { data, .. } => data,
            TextCursor::EndOfFile { data } => data,
        }
    }

    fn inner(self) -> (&'code str, usize) {
        match self {
            TextCursor::Valid { data, position } => (data, position),
            TextCursor::EndOfFile { data } => (data, data.len()),
        }
    }
}
