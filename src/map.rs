use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::OrExt;
    use crate::cursor::Cursor;
    use crate::many::many1;
    use crate::text::{alphanumeric, is_char};

    #[derive(Debug, PartialEq)]
    enum Token {
        Slash,
        Word(String),
    }

    #[test]
    fn test_map_char_to_string() {
        let cursor = TextCursor::new("de");
        let parser = many1(alphanumeric()).map(|chars| chars.into_iter().collect::<String>());

        let (word, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(word, "de");
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let slash = is_char('/').map(|_| Token::Slash);
        let word = many1(alphanumeric()).map(|chars| Token::Word(chars.into_iter().collect()));
        let parser = slash.or(word);

        let (token, _) = parser.parse(TextCursor::new("abc")).unwrap();
        assert_eq!(token, Token::Word("abc".to_string()));

        let (token, _) = parser.parse(TextCursor::new("/")).unwrap();
        assert_eq!(token, Token::Slash);
    }

    #[test]
    fn test_map_preserves_errors() {
        let cursor = TextCursor::new("xyz");
        let parser = is_char('A').map(|ch| ch.to_ascii_lowercase());

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.expectation(), "'A'");
    }

    #[test]
    fn test_function_syntax() {
        let cursor = TextCursor::new("9");
        let parser = map(alphanumeric(), |ch| ch.to_digit(10));

        let (digit, _) = parser.parse(cursor).unwrap();
        assert_eq!(digit, Some(9));
    }
}
