use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser combinator that backtracks on failure
///
/// Runs the inner parser; if it fails, the failure is reported as if no input
/// had been consumed. The caller keeps its pre-attempt cursor, so an enclosing
/// `choice` retries its next alternative from exactly where this one started.
/// The failure keeps the location where the inner parser actually gave up.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        self.parser.parse(cursor).map_err(SyntaxError::backtracked)
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::sequence::AndExt;
    use crate::text::{is_char, is_string};

    #[test]
    fn test_attempt_success_consumes() {
        let cursor = TextCursor::new("/options/1");
        let (_, cursor) = attempt(is_string("/options/")).parse(cursor).unwrap();
        assert_eq!(cursor.remaining(), "1");
    }

    #[test]
    fn test_attempt_clears_consumed() {
        let cursor = TextCursor::new("/packs/,");
        let parser = is_string("/packs/").and(is_char('p'));

        let error = parser.parse(cursor).unwrap_err();
        assert!(error.consumed());

        let error = parser.attempt().parse(cursor).unwrap_err();
        assert!(!error.consumed());
        assert_eq!(error.position(), 7);
    }

    #[test]
    fn test_attempt_leaves_caller_cursor() {
        let cursor = TextCursor::new("/packs/,");
        let parser = attempt(is_string("/packs/").and(is_char('p')));

        assert!(parser.parse(cursor).is_err());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.value().unwrap(), '/');
    }
}
