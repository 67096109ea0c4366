use super::char::any_char;
use crate::filter::FilterExt;
use crate::label::LabelExt;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser for one character satisfying `predicate`
///
/// Fails with `description` as the expectation, both on a character that does
/// not qualify and at end of input.
pub fn char_class<'code, F>(
    predicate: F,
    description: impl Into<Cow<'static, str>>,
) -> impl Parser<'code, Output = char>
where
    F: Fn(&char) -> bool,
{
    let description = description.into();
    any_char()
        .filter(predicate, description.clone())
        .label(description)
}

/// Parser for one Unicode letter or digit
pub fn alphanumeric<'code>() -> impl Parser<'code, Output = char> {
    char_class(|c: &char| c.is_alphanumeric(), "letter or digit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::TextCursor;

    #[test]
    fn test_ascii_alphanumeric() {
        for ch in ('a'..='z').chain('A'..='Z').chain('0'..='9') {
            let input = ch.to_string();
            let cursor = TextCursor::new(&input);

            let (result, _) = alphanumeric().parse(cursor).unwrap();
            assert_eq!(result, ch, "Failed for: {}", ch);
        }
    }

    #[test]
    fn test_unicode_alphanumeric() {
        for input in ["ä", "ß", "Ω", "中", "٥"] {
            let cursor = TextCursor::new(input);
            assert!(alphanumeric().parse(cursor).is_ok(), "Expected success for: {}", input);
        }
    }

    #[test]
    fn test_non_alphanumeric_fail() {
        for input in [".", ",", "/", "+", "-", " ", "🦀"] {
            let cursor = TextCursor::new(input);
            let error = alphanumeric().parse(cursor).unwrap_err();

            assert_eq!(error.expectation(), "letter or digit", "Wrong error for: {}", input);
            assert_eq!(error.position(), 0);
            assert!(!error.consumed());
        }
    }

    #[test]
    fn test_char_class_at_end() {
        let cursor = TextCursor::new("");
        let error = char_class(|c: &char| *c == '+', "plus sign")
            .parse(cursor)
            .unwrap_err();

        assert_eq!(error.expectation(), "plus sign");
        assert_eq!(error.unexpected(), "end of input");
    }

    #[test]
    fn test_char_class_custom_predicate() {
        let parser = char_class(|c: &char| c.is_ascii_digit() || *c == '-', "digit or '-'");

        let (ch, cursor) = parser.parse(TextCursor::new("-1")).unwrap();
        assert_eq!(ch, '-');
        let (ch, _) = parser.parse(cursor).unwrap();
        assert_eq!(ch, '1');

        assert!(parser.parse(TextCursor::new("x")).is_err());
    }
}
