use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser combinator that runs a tuple of parsers one after another
///
/// Each parser starts where the previous one stopped. The output is a flat
/// tuple of all outputs: `sequence((a, b, c))` yields `(a, b, c)`. Tuples of
/// two to five parsers are supported.
///
/// The first failure aborts the sequence. If an earlier element had already
/// consumed input, the failure is marked as consuming, so an enclosing
/// `choice` will not try its other branches unless the sequence is wrapped
/// in `attempt`.
///
/// Example:
/// ```
/// use carconf::sequence::sequence;
/// use carconf::text::{is_char, is_string};
/// use carconf::{Parser, TextCursor};
///
/// let cursor = TextCursor::new("/packs/p7");
/// let ((prefix, p, seven), _) = sequence((is_string("/packs/"), is_char('p'), is_char('7')))
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(prefix, "/packs/");
/// assert_eq!((p, seven), ('p', '7'));
/// ```
pub struct Sequence<T> {
    parsers: T,
}

impl<T> Sequence<T> {
    pub fn new(parsers: T) -> Self {
        Sequence { parsers }
    }
}

macro_rules! impl_sequence {
    ($($parser:ident => $output:ident),+) => {
        impl<'code, $($parser),+> Parser<'code> for Sequence<($($parser,)+)>
        where
            $($parser: Parser<'code>,)+
        {
            type Output = ($(<$parser as Parser<'code>>::Output,)+);

            #[allow(non_snake_case)]
            fn parse(
                &self,
                cursor: TextCursor<'code>,
            ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
                let ($($parser,)+) = &self.parsers;
                let start = cursor.position();
                $(
                    let ($output, cursor) = $parser
                        .parse(cursor)
                        .map_err(|error| error.consuming_if(cursor.position() > start))?;
                )+
                Ok((($($output,)+), cursor))
            }
        }
    };
}

impl_sequence!(P1 => o1, P2 => o2);
impl_sequence!(P1 => o1, P2 => o2, P3 => o3);
impl_sequence!(P1 => o1, P2 => o2, P3 => o3, P4 => o4);
impl_sequence!(P1 => o1, P2 => o2, P3 => o3, P4 => o4, P5 => o5);

/// Convenience function to create a Sequence parser from a tuple of parsers
pub fn sequence<T>(parsers: T) -> Sequence<T> {
    Sequence::new(parsers)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> Sequence<(Self, P)>
    where
        P: Parser<'code>,
    {
        Sequence::new((self, other))
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
