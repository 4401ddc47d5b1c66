use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

static PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    // Optional "US" country prefix, optional "RE" reissue marker, the numeric
    // body with leading zeros stripped, optional kind code (letter + digit).
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^US(?:RE)?0*(\d+)(?:[AB]\d?)?$").expect("publication number pattern")
    })
}

/// Turn `US7654321B2` into `07654321`.
///
/// The numeric body is zero-padded on the left to exactly 8 digits. Anything
/// that does not match the recognized grammar is a
/// [`Error::BadPublicationNumber`], never a truncated result.
pub fn pad_publication_number(pn: &str) -> Result<String> {
    let caps = pattern()
        .captures(pn)
        .ok_or_else(|| Error::BadPublicationNumber(pn.to_string()))?;
    Ok(format!("{:0>8}", &caps[1]))
}
