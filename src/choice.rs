use crate::cursors::TextCursor;
use crate::error::SyntaxError;
use crate::parser::Parser;

/// Parser combinator that tries a tuple of alternatives in order
///
/// The first alternative that succeeds wins. An alternative that fails after
/// consuming input commits the whole choice to its failure; wrap alternatives
/// in `attempt` to keep trying the others from the original position.
///
/// When every alternative fails without consuming, the failure that got
/// furthest is reported. Failures at the same position are merged, so the
/// error lists everything that would have been accepted there.
pub struct Choice<T> {
    parsers: T,
}

impl<T> Choice<T> {
    pub fn new(parsers: T) -> Self {
        Choice { parsers }
    }
}

macro_rules! impl_choice {
    ($first:ident $(, $rest:ident)+) => {
        impl<'code, $first, $($rest),+> Parser<'code> for Choice<($first, $($rest,)+)>
        where
            $first: Parser<'code>,
            $($rest: Parser<'code, Output = <$first as Parser<'code>>::Output>,)+
        {
            type Output = <$first as Parser<'code>>::Output;

            #[allow(non_snake_case)]
            fn parse(
                &self,
                cursor: TextCursor<'code>,
            ) -> Result<(Self::Output, TextCursor<'code>), SyntaxError<'code>> {
                let ($first, $($rest,)+) = &self.parsers;
                let error = match $first.parse(cursor) {
                    Ok(success) => return Ok(success),
                    Err(error) if error.consumed() => return Err(error),
                    Err(error) => error,
                };
                $(
                    let error = match $rest.parse(cursor) {
                        Ok(success) => return Ok(success),
                        Err(other) if other.consumed() => return Err(other),
                        Err(other) => error.merge(other),
                    };
                )+
                Err(error)
            }
        }
    };
}

impl_choice!(P1, P2);
impl_choice!(P1, P2, P3);
impl_choice!(P1, P2, P3, P4);
impl_choice!(P1, P2, P3, P4, P5);

/// Convenience function to create a Choice parser from a tuple of alternatives
pub fn choice<T>(parsers: T) -> Choice<T> {
    Choice::new(parsers)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Choice<(Self, P)>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Choice::new((self, other))
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
