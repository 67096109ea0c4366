use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The three kinds of customization section a configurator URL can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomizationKind {
    Options,
    Packs,
    Accessories,
}

impl CustomizationKind {
    /// The path prefix that introduces a section of this kind
    pub fn prefix(self) -> &'static str {
        match self {
            CustomizationKind::Options => "/options/",
            CustomizationKind::Packs => "/packs/",
            CustomizationKind::Accessories => "/accessories/",
        }
    }
}

impl fmt::Display for CustomizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CustomizationKind::Options => "options",
            CustomizationKind::Packs => "packs",
            CustomizationKind::Accessories => "accessories",
        };
        f.write_str(name)
    }
}

/// One customization section, e.g. `/packs/p7,p9`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customization {
    pub kind: CustomizationKind,
    /// Never empty
    pub values: Vec<String>,
}

impl Customization {
    pub fn new(kind: CustomizationKind, values: Vec<String>) -> Self {
        Self { kind, values }
    }
}

/// A fully parsed vehicle configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Country code, the first path segment
    pub country: String,
    /// Segments after `/vehicle` up to the first customization
    pub vehicle_parts: Vec<String>,
    /// Customizations in source order, at least one
    pub customizations: Vec<Customization>,
}

impl Configuration {
    /// Values of every section of the given kind, in source order
    pub fn values_of(&self, kind: CustomizationKind) -> impl Iterator<Item = &str> {
        self.customizations
            .iter()
            .filter(move |customization| customization.kind == kind)
            .flat_map(|customization| customization.values.iter().map(String::as_str))
    }
}

impl FromStr for Configuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::grammar::parse_configuration(s)
    }
}

/// Knobs of the URL grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Host literal expected after the scheme
    pub host: Cow<'static, str>,
}

impl Settings {
    pub fn with_host(host: impl Into<Cow<'static, str>>) -> Self {
        Self { host: host.into() }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_host("example.org")
    }
}
