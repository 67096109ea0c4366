use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser combinator that performs positive lookahead
///
/// Succeeds with the inner parser's output if it would match at the current
/// position. Never consumes any input regardless of outcome: on success the
/// returned cursor is the one passed in, and a failure is reported as
/// non-consuming.
pub struct LookAhead<P> {
    parser: P,
}

impl<P> LookAhead<P> {
    pub fn new(parser: P) -> Self {
        LookAhead { parser }
    }
}

impl<'code, P> Parser<'code> for LookAhead<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        match self.parser.parse(cursor) {
            Ok((value, _)) => Ok((value, cursor)),
            Err(error) => Err(error.backtracked()),
        }
    }
}

/// Convenience function to create a LookAhead parser
pub fn look_ahead<'code, P>(parser: P) -> LookAhead<P>
where
    P: Parser<'code>,
{
    LookAhead::new(parser)
}
