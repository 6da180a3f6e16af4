//! Value parsers for CLI arguments

use placemark_core::error::PlacemarkError;
use placemark_core::format::OutputFormat;

/// clap value parser for `--format`
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
        .map_err(|e: PlacemarkError| e.to_string())
}
