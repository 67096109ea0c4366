use crate::cursors::TextCursor;
use crate::error::SyntaxError;

/// Core parser trait for parser combinators
pub trait Parser<'code>: Sized {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the cursor after it on success,
    /// or Err if the parse fails. The caller's cursor is never affected: a
    /// failed parse leaves it where it was, and the error says whether input
    /// had been consumed before the failure.
    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>>;
}
