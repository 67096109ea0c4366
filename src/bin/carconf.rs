//! Command-line interface for carconf
//! Parses configurator URLs and prints the resulting configurations.
//!
//! Usage:
//!   carconf [--host `<host>`] [--format json|debug] [`<url>`...]
//!
//! Without URL arguments, one URL is read per non-empty line of stdin.

use carconf::{Configuration, Settings, parse_configuration_with};
use clap::{Arg, ArgAction, Command};
use std::io::{self, BufRead, Write};

/// How parsed configurations are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Debug,
}

impl Format {
    fn from_name(name: &str) -> Self {
        match name {
            "debug" => Format::Debug,
            _ => Format::Json,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("carconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse vehicle configurator URLs")
        .arg(
            Arg::new("host")
                .long("host")
                .help("Host the URLs must be addressed to")
                .default_value("example.org"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["json", "debug"])
                .default_value("json"),
        )
        .arg(
            Arg::new("urls")
                .help("URLs to parse; read from stdin when omitted")
                .action(ArgAction::Append)
                .index(1),
        )
        .get_matches();

    let settings = match matches.get_one::<String>("host") {
        Some(host) => Settings::with_host(host.clone()),
        None => Settings::default(),
    };
    let format = matches
        .get_one::<String>("format")
        .map_or(Format::Json, |name| Format::from_name(name));

    let urls: Vec<String> = match matches.get_many::<String>("urls") {
        Some(urls) => urls.cloned().collect(),
        None => read_urls(io::stdin().lock()).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }),
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&urls, &settings, format, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            std::process::exit(1);
        }
    }
}

/// One URL per non-empty line, trimmed
fn read_urls<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            urls.push(line.to_string());
        }
    }
    Ok(urls)
}

fn render(configuration: &Configuration, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Json => serde_json::to_string(configuration),
        Format::Debug => Ok(format!("{:#?}", configuration)),
    }
}

/// Parse and print every URL, stopping at the first one that fails
///
/// Returns whether all URLs parsed.
fn run<W: Write, E: Write>(
    urls: &[String],
    settings: &Settings,
    format: Format,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    for url in urls {
        match parse_configuration_with(url, settings) {
            Ok(configuration) => {
                let rendered = render(&configuration, format).map_err(io::Error::other)?;
                writeln!(out, "{}", rendered)?;
            }
            Err(error) => {
                writeln!(err, "{}: {}", url, error)?;
                writeln!(err)?;
                writeln!(err, "{}", error.context)?;
                return Ok(false);
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_read_urls_skips_blank_lines() {
        let input = "  http://example.org/de/vehicle/x/options/1  \n\n   \nsecond\n";
        let result = read_urls(input.as_bytes()).unwrap();

        assert_eq!(result, urls(&["http://example.org/de/vehicle/x/options/1", "second"]));
    }

    #[test]
    fn test_read_urls_empty() {
        assert!(read_urls("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_format_names() {
        assert_eq!(Format::from_name("json"), Format::Json);
        assert_eq!(Format::from_name("debug"), Format::Debug);
    }

    #[test]
    fn test_run_json() {
        let input = urls(&[
            "http://example.org/de/vehicle/x/options/1",
            "http://example.org/fr/vehicle/y/packs/p7",
        ]);
        let mut out = Vec::new();
        let mut err = Vec::new();

        let ok = run(&input, &Settings::default(), Format::Json, &mut out, &mut err).unwrap();
        assert!(ok);
        assert!(err.is_empty());

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"country":"de","vehicle_parts":["x"],"customizations":[{"kind":"options","values":["1"]}]}"#
        );
        assert!(lines[1].contains(r#""kind":"packs""#));
    }

    #[test]
    fn test_run_debug() {
        let input = urls(&["http://example.org/de/vehicle/x/options/1"]);
        let mut out = Vec::new();
        let mut err = Vec::new();

        assert!(run(&input, &Settings::default(), Format::Debug, &mut out, &mut err).unwrap());

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Configuration {"));
        assert!(out.contains("country: \"de\""));
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let input = urls(&[
            "http://example.org/de/vehicle/x/options/1",
            "http://not-the-example.org/de",
            "http://example.org/fr/vehicle/y/packs/p7",
        ]);
        let mut out = Vec::new();
        let mut err = Vec::new();

        let ok = run(&input, &Settings::default(), Format::Json, &mut out, &mut err).unwrap();
        assert!(!ok);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 1);

        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("http://not-the-example.org/de: syntax error at line 1, column 5"));
        assert!(err.contains("^--- here"));
    }

    #[test]
    fn test_run_with_custom_host() {
        let input = urls(&["https://cars.test/se/vehicle/v/options/1"]);
        let mut out = Vec::new();
        let mut err = Vec::new();

        let settings = Settings::with_host("cars.test");
        assert!(run(&input, &settings, Format::Json, &mut out, &mut err).unwrap());
        assert!(!run(&input, &Settings::default(), Format::Json, &mut out, &mut err).unwrap());
    }
}
