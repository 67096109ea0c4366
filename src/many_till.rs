use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser that repeatedly applies another parser until a stop parser matches
///
/// Before every application of `parser`, `stop` is tried at the current
/// position without consuming anything. Repetition ends at the first position
/// where `stop` succeeds, and that input is left for whatever comes next.
/// If `parser` fails before `stop` ever matches, the whole parse fails.
pub struct ManyTill<P, S> {
    parser: P,
    stop: S,
}

impl<P, S> ManyTill<P, S> {
    pub fn new(parser: P, stop: S) -> Self {
        Self { parser, stop }
    }
}

impl<'code, P, S> Parser<'code> for ManyTill<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        let start = cursor.position();
        let mut result = Vec::new();
        let mut current_cursor = cursor;

        loop {
            let stop_error = match self.stop.parse(current_cursor) {
                Ok(_) => return Ok((result, current_cursor)),
                Err(error) => error.backtracked(),
            };

            match self.parser.parse(current_cursor) {
                Ok((item, new_cursor)) if new_cursor.position() > current_cursor.position() => {
                    result.push(item);
                    current_cursor = new_cursor;
                }
                // No progress and no stop: repeating would never end
                Ok(_) => {
                    return Err(stop_error.consuming_if(current_cursor.position() > start));
                }
                Err(error) => {
                    let error = if error.consumed() {
                        error
                    } else {
                        stop_error.merge(error)
                    };
                    return Err(error.consuming_if(current_cursor.position() > start));
                }
            }
        }
    }
}

/// Convenience function to create a ManyTill parser
pub fn many_till<'code, P, S>(parser: P, stop: S) -> ManyTill<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    ManyTill::new(parser, stop)
}
