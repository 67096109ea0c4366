use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser combinator that makes a parser optional
///
/// Returns `Some` with the inner output on success. On any failure it succeeds
/// with `None` at the original position, consuming nothing.
///
/// Example:
/// ```
/// use carconf::optional::optional;
/// use carconf::text::is_char;
/// use carconf::{Cursor, Parser, TextCursor};
///
/// let (secure, cursor) = optional(is_char('s')).parse(TextCursor::new("s://")).unwrap();
/// assert_eq!(secure, Some('s'));
/// assert_eq!(cursor.position(), 1);
///
/// let (secure, cursor) = optional(is_char('s')).parse(TextCursor::new("://")).unwrap();
/// assert_eq!(secure, None);
/// assert_eq!(cursor.position(), 0);
/// ```
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}
