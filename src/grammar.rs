//! Grammar of configurator URLs
//!
//! ```text
//! url            = "http" ["s"] "://" host part "/vehicle" part* customization+ any*
//! part           = "/" value
//! customization  = ("/packs/" | "/accessories/" | "/options/") value ("," value)*
//! value          = (letter | digit | "+" | "-")+
//! ```
//!
//! Every rule is a function returning a parser, so rules compose like any
//! other combinator and can be tested one by one.

use crate::attempt::attempt;
use crate::choice::choice;
use crate::configuration::{Configuration, Customization, CustomizationKind, Settings};
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::label::LabelExt;
use crate::look_ahead::look_ahead;
use crate::many::many1;
use crate::many_till::many_till;
use crate::map::MapExt;
use crate::optional::optional;
use crate::parser::Parser;
use crate::separated_list::sep_by1;
use crate::sequence::{AndExt, sequence};
use crate::text::{char_class, end_of_input, is_char, is_string, skip_rest};

fn is_value_char(c: &char) -> bool {
    c.is_alphanumeric() || *c == '+' || *c == '-'
}

/// One or more letters, digits, `+` or `-`
pub fn value<'code>() -> impl Parser<'code, Output = String> {
    many1(char_class(is_value_char, "letter, digit, '+' or '-'"))
        .map(|chars| chars.into_iter().collect::<String>())
        .label("value")
}

/// A path segment: `/` followed by a value
pub fn part<'code>() -> impl Parser<'code, Output = String> {
    is_char('/').and(value()).map(|(_, value)| value)
}

/// Scheme, host and the country segment; yields the country code
pub fn country<'code>(host: &str) -> impl Parser<'code, Output = String> + use<'code> {
    sequence((
        is_string("http"),
        optional(is_char('s')),
        is_string(format!("://{host}")),
        part(),
    ))
    .map(|(_, _, _, country)| country)
}

/// Values separated by commas, at least one
pub fn comma_delimited<'code>() -> impl Parser<'code, Output = Vec<String>> {
    sep_by1(value(), is_char(','))
}

fn section<'code>(kind: CustomizationKind) -> impl Parser<'code, Output = Customization> {
    is_string(kind.prefix())
        .and(comma_delimited())
        .map(move |(_, values)| Customization::new(kind, values))
}

pub fn options<'code>() -> impl Parser<'code, Output = Customization> {
    section(CustomizationKind::Options)
}

pub fn packs<'code>() -> impl Parser<'code, Output = Customization> {
    section(CustomizationKind::Packs)
}

pub fn accessories<'code>() -> impl Parser<'code, Output = Customization> {
    section(CustomizationKind::Accessories)
}

/// Any one customization section
///
/// Each branch backtracks on failure, so a half-matched section leaves the
/// input untouched for the next branch or for whatever follows.
pub fn customization<'code>() -> impl Parser<'code, Output = Customization> {
    choice((attempt(packs()), attempt(accessories()), attempt(options())))
}

/// `/vehicle` and the segments up to the first customization
pub fn vehicle<'code>() -> impl Parser<'code, Output = Vec<String>> {
    is_string("/vehicle")
        .and(many_till(part(), look_ahead(customization())))
        .map(|(_, parts)| parts)
}

/// Whatever follows the customizations, e.g. rendering parameters
pub fn trailer<'code>() -> impl Parser<'code, Output = ()> {
    skip_rest()
}

/// A complete configurator URL
pub fn url<'code>(settings: &Settings) -> impl Parser<'code, Output = Configuration> + use<'code> {
    sequence((
        country(&settings.host),
        vehicle(),
        many1(customization()),
        trailer(),
        end_of_input(),
    ))
    .map(
        |(country, vehicle_parts, customizations, (), ())| Configuration {
            country,
            vehicle_parts,
            customizations,
        },
    )
}

/// Parse a configurator URL on the default host
pub fn parse_configuration(input: &str) -> Result<Configuration, ParseError> {
    parse_configuration_with(input, &Settings::default())
}

/// Parse a configurator URL with custom settings
pub fn parse_configuration_with(
    input: &str,
    settings: &Settings,
) -> Result<Configuration, ParseError> {
    match url(settings).parse(TextCursor::new(input)) {
        Ok((configuration, _)) => {
            log::debug!(
                "parsed configuration for {}: {} vehicle part(s), {} customization(s)",
                configuration.country,
                configuration.vehicle_parts.len(),
                configuration.customizations.len()
            );
            Ok(configuration)
        }
        Err(error) => {
            log::trace!("rejected {:?}: {}", input, error);
            Err(error.into())
        }
    }
}
