use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that names what a parser expects
///
/// When the inner parser fails right where it started without consuming
/// anything, its expectations are replaced by the label, so `many1(digit)`
/// reports `expected number` instead of `expected digit`. Failures deeper in
/// the input keep their own, more specific, expectations.
pub struct Label<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, label: Cow<'static, str>) -> Self {
        Label { parser, label }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
        self.parser.parse(cursor).map_err(|error| {
            if !error.consumed() && error.position() == cursor.position() {
                error.relabel(self.label.clone())
            } else {
                error
            }
        })
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, label: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, label.into())
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, label.into())
}
