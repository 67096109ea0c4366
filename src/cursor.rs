use std::error::Error;

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable snapshot of a position in the input. Advancing it
/// produces a new cursor; the old one stays valid, which is what lets a parser
/// go back to a saved position after a failed alternative.
pub trait Cursor<'code>: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over
    type Element;

    /// Error type returned when cursor operations fail
    type Error: Error;

    /// Get the element at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the input
    fn value(&self) -> Result<Self::Element, Self::Error>;

    /// Advance the cursor past the current element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Byte offset of the cursor in the source
    ///
    /// For end-of-input cursors this is the length of the source
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the input
    fn eos(&self) -> bool {
        self.value().is_err()
    }

    /// The whole source the cursor walks over
    fn source(&self) -> &'code str;

    /// The unparsed suffix of the source
    fn remaining(&self) -> &'code str {
        let source = self.source();
        source.get(self.position()..).unwrap_or("")
    }

    /// Consume the cursor and return its source and position
    fn inner(self) -> (&'code str, usize);
}
