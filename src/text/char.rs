use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser that consumes and returns a single character
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        let ch = cursor.value()?;
        Ok((ch, cursor.next()))
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that matches a specific character
pub struct IsChar(char);

impl<'code> Parser<'code> for IsChar {
    type Output = char;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        match cursor.value() {
            Ok(ch) if ch == self.0 => Ok((ch, cursor.next())),
            _ => Err(SyntaxError::new(format!("{:?}", self.0), cursor.loc())),
        }
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> IsChar {
    IsChar(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_char() {
        let cursor = TextCursor::new("hello");
        let parser = any_char();

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'h');

        let (ch, _) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'e');
    }

    #[test]
    fn test_any_char_unicode() {
        let cursor = TextCursor::new("åäö");
        let parser = any_char();

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'å');
        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'ä');
        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'ö');
        assert!(cursor.eos());
    }

    #[test]
    fn test_any_char_at_end() {
        let cursor = TextCursor::new("");
        let error = any_char().parse(cursor).unwrap_err();

        assert_eq!(error.expectation(), "any character");
        assert!(!error.consumed());
    }

    #[test]
    fn test_is_char_success() {
        let cursor = TextCursor::new("/de");
        let (ch, cursor) = is_char('/').parse(cursor).unwrap();

        assert_eq!(ch, '/');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_is_char_failure() {
        let cursor = TextCursor::new(".value");
        let error = is_char('/').parse(cursor).unwrap_err();

        assert_eq!(error.position(), 0);
        assert_eq!(error.expectation(), "'/'");
        assert_eq!(error.unexpected(), "'.'");
        assert!(!error.consumed());
    }

    #[test]
    fn test_is_char_at_end() {
        let cursor = TextCursor::new("ab").next().next();
        let error = is_char('/').parse(cursor).unwrap_err();

        assert_eq!(error.position(), 2);
        assert_eq!(error.unexpected(), "end of input");
    }
}
