//! End-to-end parsing of configurator URLs

use carconf::{
    Configuration, Customization, CustomizationKind, ParseError, Settings, parse_configuration,
    parse_configuration_with,
};
use rstest::rstest;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_full_configuration() {
    let configuration = parse_configuration(
        "https://example.org/de/vehicle/trabant/5-doors/0815+universal/options/1,4711,815/packs/p7/accessories/a,b,c/width/1024/height/768/exterior-45.jpg",
    )
    .unwrap();

    assert_eq!(
        configuration,
        Configuration {
            country: "de".to_string(),
            vehicle_parts: strings(&["trabant", "5-doors", "0815+universal"]),
            customizations: vec![
                Customization::new(CustomizationKind::Options, strings(&["1", "4711", "815"])),
                Customization::new(CustomizationKind::Packs, strings(&["p7"])),
                Customization::new(CustomizationKind::Accessories, strings(&["a", "b", "c"])),
            ],
        }
    );
}

#[rstest]
#[case("http://example.org/de/vehicle/x/options/1", "de", &["x"], 1)]
#[case("https://example.org/uk/vehicle/a/b/c/packs/p1,p2", "uk", &["a", "b", "c"], 1)]
#[case("https://example.org/fr/vehicle/packs/p1/options/o1", "fr", &[], 2)]
#[case("https://example.org/it/vehicle/v/accessories/r/accessories/s", "it", &["v"], 2)]
#[case("https://example.org/de/vehicle/x/options/1/anything/goes.here?q=1", "de", &["x"], 1)]
#[case("https://example.org/de/vehicle/x/options/1/options/", "de", &["x"], 1)]
fn test_accepted_urls(
    #[case] input: &str,
    #[case] country: &str,
    #[case] vehicle_parts: &[&str],
    #[case] customizations: usize,
) {
    let configuration = parse_configuration(input).unwrap();

    assert_eq!(configuration.country, country);
    assert_eq!(configuration.vehicle_parts, strings(vehicle_parts));
    assert_eq!(configuration.customizations.len(), customizations);
}

#[rstest]
#[case("http://not-the-example.org/de", 4, "\"://example.org\"", "\"://n\"")]
#[case(
    "https://example.org/de/vehicle/ford/prefect",
    43,
    "\"/packs/\", \"/accessories/\", \"/options/\" or '/'",
    "end of input"
)]
#[case(
    "https://example.org/de/vehicle/bad.value/options/1",
    34,
    "\"/packs/\", \"/accessories/\", \"/options/\" or '/'",
    "'.'"
)]
#[case("", 0, "\"http\"", "end of input")]
#[case("ftp://example.org/de", 0, "\"http\"", "'f'")]
#[case("https://example.org/de/car/x/options/1", 22, "\"/vehicle\"", "\"/c\"")]
#[case("https://example.org/de/vehicle/x/options/", 41, "value", "end of input")]
#[case("https://example.org//vehicle/x/options/1", 20, "value", "'/'")]
#[case(
    "https://example.org/de/vehicle/x/options/1,",
    42,
    "\"/packs/\", \"/accessories/\", \"/options/\" or '/'",
    "','"
)]
fn test_rejected_urls(
    #[case] input: &str,
    #[case] offset: usize,
    #[case] expected: &str,
    #[case] found: &str,
) {
    let error = parse_configuration(input).unwrap_err();

    assert_eq!(error.offset, offset);
    assert_eq!(error.expected, expected);
    assert_eq!(error.found, found);
}

#[test]
fn test_error_display() {
    let error = parse_configuration("http://not-the-example.org/de").unwrap_err();

    assert_eq!(
        error.to_string(),
        "syntax error at line 1, column 5: expected \"://example.org\", found \"://n\""
    );
    assert_eq!(
        error.context,
        "  > 1 | http://not-the-example.org/de\n            ^--- here"
    );
}

#[test]
fn test_error_is_std_error() {
    fn describe(error: &dyn std::error::Error) -> String {
        error.to_string()
    }

    let error: ParseError = parse_configuration("nope").unwrap_err();
    assert!(describe(&error).starts_with("syntax error at line 1, column 1"));
}

#[test]
fn test_from_str() {
    let configuration: Configuration = "https://example.org/de/vehicle/x/packs/p7".parse().unwrap();
    assert_eq!(configuration.values_of(CustomizationKind::Packs).collect::<Vec<_>>(), vec!["p7"]);
}

#[rstest]
#[case("cars.test", "https://cars.test/se/vehicle/v/options/1", true)]
#[case("cars.test", "https://example.org/se/vehicle/v/options/1", false)]
#[case("example.org", "https://example.org/se/vehicle/v/options/1", true)]
fn test_configured_host(#[case] host: &'static str, #[case] input: &str, #[case] accepted: bool) {
    let settings = Settings::with_host(host);
    assert_eq!(parse_configuration_with(input, &settings).is_ok(), accepted);
}

#[test]
fn test_json_output() {
    let configuration = parse_configuration("http://example.org/de/vehicle/x/options/1").unwrap();
    let json = serde_json::to_string(&configuration).unwrap();

    assert_eq!(
        json,
        r#"{"country":"de","vehicle_parts":["x"],"customizations":[{"kind":"options","values":["1"]}]}"#
    );
}
