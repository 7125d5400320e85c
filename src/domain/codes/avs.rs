//! Address Verification System result codes.

use serde::Serialize;

/// How closely the billing address matched the issuer's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvsMatch {
    Exact,
    Partial,
    NoMatch,
    /// The issuer could not or did not perform the check.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvsResult {
    pub code: char,
    pub classification: AvsMatch,
    pub description: &'static str,
}

const fn avs(code: char, classification: AvsMatch, description: &'static str) -> AvsResult {
    AvsResult {
        code,
        classification,
        description,
    }
}

pub static AVS_RESULTS: &[AvsResult] = &[
    avs(
        'X',
        AvsMatch::Exact,
        "Exact match, 9 digit zip - Street Address, and 9 digit ZIP Code match",
    ),
    avs(
        'Y',
        AvsMatch::Exact,
        "Exact match, 5 digit zip - Street Address, and 5 digit ZIP Code match",
    ),
    avs(
        'A',
        AvsMatch::Partial,
        "Partial match - Street Address matches, ZIP Code does not",
    ),
    avs(
        'W',
        AvsMatch::Partial,
        "Partial match - ZIP Code matches, Street Address does not",
    ),
    avs('Z', AvsMatch::Partial, "Partial match - 5 digit ZIP Code match only"),
    avs('N', AvsMatch::NoMatch, "No match - No Address or ZIP Code match"),
    avs(
        'U',
        AvsMatch::Unavailable,
        "Unavailable - Address information is unavailable for that account number, or the card issuer does not support",
    ),
    avs(
        'G',
        AvsMatch::Unavailable,
        "Service Not supported, non-US Issuer does not participate",
    ),
    avs('R', AvsMatch::Unavailable, "Retry - Issuer system unavailable, retry later"),
    avs('E', AvsMatch::Unavailable, "Not a mail or phone order"),
    avs('S', AvsMatch::Unavailable, "Service not supported"),
    avs(
        'Q',
        AvsMatch::Unavailable,
        "Bill to address did not pass edit checks/Card Association can't verify the authentication of an address",
    ),
    avs(
        'D',
        AvsMatch::Exact,
        "International street address and postal code match",
    ),
    avs(
        'B',
        AvsMatch::Partial,
        "International street address match, postal code not verified due to incompatable formats",
    ),
    avs(
        'C',
        AvsMatch::NoMatch,
        "International street address and postal code not verified due to incompatable formats",
    ),
    avs(
        'P',
        AvsMatch::Partial,
        "International postal code match, street address not verified due to incompatable format",
    ),
    avs('1', AvsMatch::Partial, "Cardholder name matches"),
    avs(
        '2',
        AvsMatch::Exact,
        "Cardholder name, billing address, and postal code match",
    ),
    avs('3', AvsMatch::Partial, "Cardholder name and billing postal code match"),
    avs('4', AvsMatch::Partial, "Cardholder name and billing address match"),
    avs(
        '5',
        AvsMatch::Partial,
        "Cardholder name incorrect, billing address and postal code match",
    ),
    avs(
        '6',
        AvsMatch::Partial,
        "Cardholder name incorrect, billing postal code matches",
    ),
    avs(
        '7',
        AvsMatch::Partial,
        "Cardholder name incorrect, billing address matches",
    ),
    avs(
        '8',
        AvsMatch::NoMatch,
        "Cardholder name, billing address, and postal code are all incorrect",
    ),
];

/// Codes returned for international cards.
pub static INTL_AVS_RESULTS: &[(char, &str)] = &[
    ('G', "Global non-AVS participant"),
    ('B', "Address matches only"),
    ('C', "Address and Postal Code do not match"),
    ('D', "Address and Postal Code match"),
    ('F', "Address and Postal Code match (UK only)"),
    ('I', "Address information not verified for international transaction"),
    ('M', "Address and Postal Code match"),
    ('P', "Postal Code matches only"),
];

fn single_char(code: &str) -> Option<char> {
    let mut chars = code.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

pub fn lookup(code: &str) -> Option<&'static AvsResult> {
    let code = single_char(code)?;
    AVS_RESULTS.iter().find(|result| result.code == code)
}

pub fn lookup_international(code: &str) -> Option<&'static str> {
    let code = single_char(code)?;
    INTL_AVS_RESULTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, description)| *description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(lookup("Y").unwrap().classification, AvsMatch::Exact);
        assert_eq!(lookup("Z").unwrap().classification, AvsMatch::Partial);
        assert_eq!(lookup("N").unwrap().classification, AvsMatch::NoMatch);
        assert_eq!(lookup("R").unwrap().classification, AvsMatch::Unavailable);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("x").unwrap().code, 'X');
    }

    #[test]
    fn test_lookup_rejects_multi_char_codes() {
        assert!(lookup("XY").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("H").is_none());
    }

    #[test]
    fn test_international_table() {
        assert_eq!(
            lookup_international("F"),
            Some("Address and Postal Code match (UK only)")
        );
        assert!(lookup_international("X").is_none());
    }
}
