//! # carconf - Configurator URL parser
//!
//! Parses vehicle-configurator URLs such as
//! `https://example.org/de/vehicle/trabant/options/1,4711/packs/p7` into a
//! [`Configuration`], built on a small parser combinator core.
//!
//! The core provides composable, type-safe parsers that can be combined to
//! build complex parsing logic from simple building blocks. The library
//! emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Rich error reporting**: Line, column, expectations and source context
//! - **Explicit backtracking**: A failure records whether it consumed input;
//!   `attempt` turns a consuming failure into a recoverable one
//! - **Composability**: Grammar rules are plain functions returning parsers
//!
//! ```
//! let configuration = carconf::parse_configuration(
//!     "http://example.org/de/vehicle/x/options/1",
//! )
//! .unwrap();
//! assert_eq!(configuration.country, "de");
//! ```

pub mod attempt;
pub mod choice;
pub mod configuration;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod filter;
pub mod grammar;
pub mod label;
pub mod look_ahead;
pub mod many;
pub mod many_till;
pub mod map;
pub mod optional;
pub mod parser;
pub mod separated_list;
pub mod sequence;
pub mod text;

pub use attempt::{AttemptExt, attempt};
pub use choice::{OrExt, choice};
pub use configuration::{Configuration, Customization, CustomizationKind, Settings};
pub use cursor::Cursor;
pub use cursors::TextCursor;
pub use error::{CodeLoc, ParseError, SyntaxError};
pub use filter::FilterExt;
pub use grammar::{parse_configuration, parse_configuration_with};
pub use label::LabelExt;
pub use look_ahead::look_ahead;
pub use many::{many, many1};
pub use many_till::many_till;
pub use map::MapExt;
pub use optional::optional;
pub use parser::Parser;
pub use separated_list::{sep_by, sep_by1};
pub use sequence::{AndExt, sequence};
