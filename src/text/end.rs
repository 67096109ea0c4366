use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser that succeeds only when no input is left, consuming nothing
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    type Output = ();

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(SyntaxError::new("end of input", cursor.loc()))
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

/// Parser that consumes everything that is left and never fails
pub struct SkipRest;

impl<'code> Parser<'code> for SkipRest {
    type Output = ();

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        Ok(((), cursor.end()))
    }
}

/// Convenience function to create a SkipRest parser
pub fn skip_rest() -> SkipRest {
    SkipRest
}
