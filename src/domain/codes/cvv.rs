//! CVV2/CVC2/CID verification result codes.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CvvMatch {
    Match,
    NoMatch,
    /// Not processed, not present or not supported by the issuer.
    NotVerified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CvvResult {
    pub code: char,
    pub classification: CvvMatch,
    pub description: &'static str,
}

pub static CVV_RESULTS: &[CvvResult] = &[
    CvvResult {
        code: 'M',
        classification: CvvMatch::Match,
        description: "Card is Authentic",
    },
    CvvResult {
        code: 'N',
        classification: CvvMatch::NoMatch,
        description: "CVV2 does not match",
    },
    CvvResult {
        code: 'P',
        classification: CvvMatch::NotVerified,
        description: "Card expiration not provided or card does not have valid CVD code",
    },
    CvvResult {
        code: 'S',
        classification: CvvMatch::NotVerified,
        description: "Merchant indicated that CVV2 is not present on card",
    },
    CvvResult {
        code: 'U',
        classification: CvvMatch::NotVerified,
        description: "Card issuer is not certified and/or has not provided visa encryption keys",
    },
    CvvResult {
        code: 'I',
        classification: CvvMatch::NoMatch,
        description: "CVV2 code is invalid or empty",
    },
];

pub fn lookup(code: &str) -> Option<&'static CvvResult> {
    let code = code.trim();
    let mut chars = code.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_ascii_uppercase(),
        _ => return None,
    };
    CVV_RESULTS.iter().find(|result| result.code == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_codes() {
        assert_eq!(lookup("M").unwrap().classification, CvvMatch::Match);
        assert_eq!(lookup("N").unwrap().classification, CvvMatch::NoMatch);
        assert_eq!(lookup("u").unwrap().classification, CvvMatch::NotVerified);
    }

    #[test]
    fn test_unknown_code() {
        assert!(lookup("Q").is_none());
        assert!(lookup("").is_none());
    }
}
