use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// On a mismatch nothing is consumed: the failure is reported at the start of
/// the literal, naming the character that did not match.
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Failure at the start of the literal, naming what was found from there
    /// up to and including the first character that did not match
    fn mismatch<'code>(
        &self,
        start: TextCursor<'code>,
        stop: TextCursor<'code>,
        found: Option<char>,
    ) -> SyntaxError<'code> {
        let matched = start
            .source()
            .get(start.position()..stop.position())
            .unwrap_or("");
        let found = match (matched.is_empty(), found) {
            (true, Some(ch)) => format!("{:?}", ch),
            (true, None) => "end of input".to_string(),
            (false, Some(ch)) => format!("{:?}", format!("{matched}{ch}")),
            (false, None) => format!("{:?} then end of input", matched),
        };
        SyntaxError::new(format!("{:?}", self.expected), start.loc()).with_unexpected(found)
    }
}

impl<'code> Parser<'code> for IsStringParser {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        let mut current_cursor = cursor;

        for expected_char in self.expected.chars() {
            match current_cursor.value() {
                Ok(ch) if ch == expected_char => current_cursor = current_cursor.next(),
                Ok(ch) => return Err(self.mismatch(cursor, current_cursor, Some(ch))),
                Err(_) => return Err(self.mismatch(cursor, current_cursor, None)),
            }
        }

        Ok((self.expected.clone(), current_cursor))
    }
}

/// Convenience function to create an IsStringParser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}
