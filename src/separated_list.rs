use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses items interleaved with separators and returns the items, dropping
/// the separators.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
///
/// # Note
/// - `sep_by` accepts an empty list, `sep_by1` requires at least one element
/// - A separator must be followed by an element: trailing separators are an error
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
    allow_empty: bool,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS, allow_empty: bool) -> Self {
        SeparatedList {
            parser,
            separator,
            allow_empty,
        }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        let start = cursor.position();

        let (first_value, mut cursor) = match self.parser.parse(cursor) {
            Ok(success) => success,
            Err(error) if self.allow_empty && !error.consumed() => {
                return Ok((Vec::new(), cursor));
            }
            Err(error) => return Err(error),
        };
        let mut results = vec![first_value];

        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, new_cursor)) => new_cursor,
                Err(error) if error.consumed() => return Err(error),
                Err(_) => break,
            };

            // An element is required after a separator
            let (value, next_cursor) = self
                .parser
                .parse(after_separator)
                .map_err(|error| error.consuming_if(after_separator.position() > start))?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Zero or more `parser` separated by `separator`
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator, true)
}

/// One or more `parser` separated by `separator`
pub fn sep_by1<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator, false)
}
