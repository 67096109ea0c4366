use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Applies `parser` until it fails, pushing every value into `results`
///
/// A failure that consumed nothing ends the repetition; a failure that did
/// consume input is returned. Stops as well when the parser succeeds without
/// moving, since it would keep doing so forever.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut cursor: TextCursor<'code>,
    results: &mut Vec<P::Output>,
) -> Result<TextCursor<'code>, SyntaxError<'code>>
where
    P: Parser<'code>,
{
    loop {
        match parser.parse(cursor) {
            Ok((value, next_cursor)) => {
                let progressed = next_cursor.position() > cursor.position();
                results.push(value);
                cursor = next_cursor;
                if !progressed {
                    return Ok(cursor);
                }
            }
            Err(error) if error.consumed() => return Err(error),
            Err(_) => return Ok(cursor),
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        let mut results = Vec::new();
        let cursor = repeat(&self.parser, cursor, &mut results)?;
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        // First parse must succeed
        let (first_value, cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        let cursor = repeat(&self.parser, cursor, &mut results)?;
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}
