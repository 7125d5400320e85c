use super::codes::{self, AvsMatch, BankResponse, BankResponseCategory, CvvMatch, gateway};
use super::ports::RawResponse;
use crate::error::{GatewayError, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// HTTP statuses the gateway uses for a processed transaction.
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 202];

static PARENTHESIZED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9]+)\)").expect("static pattern is valid"));

/// The transaction result fields the gateway returns at the top level of its
/// JSON response.
///
/// The gateway is loose about types (numbers vs strings, `1` vs `true`), so
/// every field is normalized while decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Receipt {
    #[serde(default, deserialize_with = "flag")]
    pub transaction_approved: bool,
    #[serde(default, deserialize_with = "flag")]
    pub transaction_error: bool,
    #[serde(default, deserialize_with = "text")]
    pub transaction_tag: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub authorization_num: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub retrieval_ref_no: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub sequence_no: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub transarmor_token: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub avs: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub cvv2: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub bank_resp_code: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub bank_message: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub exact_resp_code: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub exact_message: Option<String>,
    /// Customer transaction record (printable receipt).
    #[serde(default, deserialize_with = "text")]
    pub ctr: Option<String>,
}

fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim(), "1" | "true" | "TRUE" | "True"),
        _ => false,
    })
}

fn text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// One gateway response: the raw HTTP exchange plus its decoded view.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionResponse {
    status: u16,
    body: String,
    json: Map<String, Value>,
    receipt: Receipt,
}

impl TransactionResponse {
    /// Decodes the body. A body that is not a JSON object leaves the decoded
    /// view empty.
    pub fn from_raw(raw: RawResponse) -> Self {
        let json = match serde_json::from_str::<Value>(&raw.body) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let receipt = serde_json::from_value(Value::Object(json.clone())).unwrap_or_default();

        Self {
            status: raw.status,
            body: raw.body,
            json,
            receipt,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn raw_body(&self) -> &str {
        &self.body
    }

    /// The decoded JSON object; empty when the body could not be decoded.
    pub fn json(&self) -> &Map<String, Value> {
        &self.json
    }

    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    /// Applies the classification rules in order:
    ///
    /// 1. No decodable JSON: a `(NN)` code in the raw body is a gateway error,
    ///    anything else an HTTP error carrying the status and raw body.
    /// 2. A status outside [`SUCCESS_STATUSES`] is an HTTP error.
    /// 3. A bank response code whose category is not `S` is a bank decline.
    /// 4. An exact response code other than `00` fails under the bank code and
    ///    bank table name, carrying the exact code and its description.
    pub fn classify(&self) -> Result<()> {
        if self.json.is_empty() {
            if let Some(code) = extract_code(&self.body) {
                let (code, message) = gateway::resolve(code);
                return Err(GatewayError::GatewayResponse { code, message });
            }
            return Err(GatewayError::HttpStatus {
                status: self.status,
                body: self.body.clone(),
            });
        }

        if !SUCCESS_STATUSES.contains(&self.status) {
            return Err(GatewayError::HttpStatus {
                status: self.status,
                body: self.body.clone(),
            });
        }

        if let Some(entry) = self.bank_response()
            && !entry.category.is_successful()
        {
            return Err(GatewayError::BankDecline {
                code: entry.code.to_string(),
                name: entry.name.to_string(),
                category: entry.category,
            });
        }

        let exact = self.exact_resp_code().unwrap_or_default();
        if exact != gateway::TRANSACTION_NORMAL {
            let exact_message = match gateway::lookup(exact) {
                Some(description) => description.to_string(),
                None => match self.exact_message() {
                    Some(message) if !exact.is_empty() => message.to_string(),
                    _ => gateway::OTHER_ERROR_MESSAGE.to_string(),
                },
            };
            let bank = self.bank_response();
            let code = match (bank, self.bank_resp_code()) {
                (Some(entry), _) => entry.code.to_string(),
                (None, Some(code)) => code.to_string(),
                (None, None) => gateway::OTHER_ERROR_CODE.to_string(),
            };
            // Without a bank table entry the exact description is the best name.
            let name = bank.map_or_else(|| exact_message.clone(), |entry| entry.name.to_string());
            return Err(GatewayError::ExactResponse {
                code,
                name,
                category: bank.map(|entry| entry.category),
                exact_code: exact.to_string(),
                exact_message,
            });
        }

        Ok(())
    }

    pub fn is_error(&self) -> bool {
        self.classify().is_err()
    }

    pub fn is_success(&self) -> bool {
        !self.is_error()
    }

    pub fn is_approved(&self) -> bool {
        self.receipt.transaction_approved
    }

    pub fn is_transaction_error(&self) -> bool {
        self.receipt.transaction_error
    }

    pub fn avs(&self) -> Option<&str> {
        self.receipt.avs.as_deref()
    }

    pub fn avs_match(&self) -> Option<AvsMatch> {
        self.avs()
            .and_then(codes::avs::lookup)
            .map(|result| result.classification)
    }

    pub fn avs_description(&self) -> Option<&'static str> {
        self.avs()
            .and_then(codes::avs::lookup)
            .map(|result| result.description)
    }

    pub fn intl_avs_description(&self) -> Option<&'static str> {
        self.avs().and_then(codes::avs::lookup_international)
    }

    pub fn cvv2(&self) -> Option<&str> {
        self.receipt.cvv2.as_deref()
    }

    pub fn cvv2_match(&self) -> Option<CvvMatch> {
        self.cvv2()
            .and_then(codes::cvv::lookup)
            .map(|result| result.classification)
    }

    pub fn cvv2_description(&self) -> Option<&'static str> {
        self.cvv2()
            .and_then(codes::cvv::lookup)
            .map(|result| result.description)
    }

    pub fn ctr(&self) -> Option<&str> {
        self.receipt.ctr.as_deref()
    }

    pub fn authorization_num(&self) -> Option<&str> {
        self.receipt.authorization_num.as_deref()
    }

    pub fn retrieval_ref_no(&self) -> Option<&str> {
        self.receipt.retrieval_ref_no.as_deref()
    }

    pub fn sequence_no(&self) -> Option<&str> {
        self.receipt.sequence_no.as_deref()
    }

    pub fn transarmor_token(&self) -> Option<&str> {
        self.receipt.transarmor_token.as_deref()
    }

    pub fn transaction_tag(&self) -> Option<&str> {
        self.receipt.transaction_tag.as_deref()
    }

    pub fn bank_resp_code(&self) -> Option<&str> {
        self.receipt.bank_resp_code.as_deref()
    }

    pub fn bank_message(&self) -> Option<&str> {
        self.receipt.bank_message.as_deref()
    }

    pub fn exact_resp_code(&self) -> Option<&str> {
        self.receipt.exact_resp_code.as_deref()
    }

    pub fn exact_message(&self) -> Option<&str> {
        self.receipt.exact_message.as_deref()
    }

    pub fn bank_response(&self) -> Option<&'static BankResponse> {
        self.bank_resp_code().and_then(codes::bank::lookup)
    }

    pub fn bank_response_name(&self) -> Option<&'static str> {
        self.bank_response().map(|entry| entry.name)
    }

    pub fn bank_response_category(&self) -> Option<BankResponseCategory> {
        self.bank_response().map(|entry| entry.category)
    }

    pub fn bank_response_action(&self) -> Option<&'static str> {
        self.bank_response().map(|entry| entry.action)
    }

    pub fn bank_response_comments(&self) -> Option<&'static str> {
        self.bank_response().map(|entry| entry.comments)
    }
}

/// First `(digits)` group in a free-text error body.
fn extract_code(body: &str) -> Option<&str> {
    PARENTHESIZED_CODE
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: Value) -> TransactionResponse {
        TransactionResponse::from_raw(RawResponse::new(status, body.to_string()))
    }

    fn approved() -> Value {
        json!({
            "transaction_approved": 1,
            "transaction_error": 0,
            "transaction_tag": 902006933,
            "authorization_num": "ET4653",
            "retrieval_ref_no": "7770007",
            "sequence_no": "000127",
            "transarmor_token": "8938737759041111",
            "avs": "Y",
            "cvv2": "M",
            "bank_resp_code": "100",
            "bank_message": "Approved",
            "exact_resp_code": "00",
            "exact_message": "Transaction Normal",
            "ctr": "=========== TRANSACTION RECORD ==========",
        })
    }

    #[test]
    fn test_approved_response_is_success() {
        let resp = response(201, approved());
        assert!(!resp.is_error());
        assert!(resp.is_success());
        assert!(resp.classify().is_ok());
        assert!(resp.is_approved());
        assert!(!resp.is_transaction_error());
        assert_eq!(resp.bank_response_name(), Some("Approved"));
        assert_eq!(
            resp.bank_response_category(),
            Some(BankResponseCategory::Successful)
        );
    }

    #[test]
    fn test_receipt_accessors() {
        let resp = response(201, approved());
        assert_eq!(resp.authorization_num(), Some("ET4653"));
        assert_eq!(resp.retrieval_ref_no(), Some("7770007"));
        assert_eq!(resp.sequence_no(), Some("000127"));
        assert_eq!(resp.transarmor_token(), Some("8938737759041111"));
        assert_eq!(resp.transaction_tag(), Some("902006933"));
        assert_eq!(resp.bank_message(), Some("Approved"));
        assert_eq!(resp.exact_message(), Some("Transaction Normal"));
        assert_eq!(resp.avs_match(), Some(AvsMatch::Exact));
        assert_eq!(resp.cvv2_match(), Some(CvvMatch::Match));
        assert_eq!(resp.cvv2_description(), Some("Card is Authentic"));
        assert_eq!(resp.bank_response_action(), Some("N/A"));
        assert_eq!(resp.bank_response_comments(), Some("Successfully approved"));
        assert!(resp.ctr().unwrap().contains("TRANSACTION RECORD"));
    }

    #[test]
    fn test_bank_decline() {
        let mut body = approved();
        body["transaction_approved"] = json!(false);
        body["bank_resp_code"] = json!("530");
        body["bank_message"] = json!("Do Not Honor");
        let resp = response(201, body);

        assert!(resp.is_error());
        assert_eq!(resp.bank_response_name(), Some("Do Not Honor"));
        match resp.classify() {
            Err(GatewayError::BankDecline {
                code,
                name,
                category,
            }) => {
                assert_eq!(code, "530");
                assert_eq!(name, "Do Not Honor");
                assert_eq!(category, BankResponseCategory::Decline);
            }
            other => panic!("expected bank decline, got {other:?}"),
        }
    }

    #[test]
    fn test_numeric_bank_code_is_normalized() {
        let mut body = approved();
        body["bank_resp_code"] = json!(521);
        let resp = response(201, body);
        assert_eq!(resp.bank_resp_code(), Some("521"));
        assert_eq!(resp.bank_response_name(), Some("Insufficient funds"));
    }

    #[test]
    fn test_exact_code_failure_reports_bank_code_and_name() {
        let resp = response(201, json!({"bank_resp_code": "100", "exact_resp_code": "08"}));
        let err = resp.classify().unwrap_err();
        assert_eq!(err.code(), "100");
        assert_eq!(err.message(), "Approved");
        match err {
            GatewayError::ExactResponse {
                category,
                exact_code,
                exact_message,
                ..
            } => {
                assert_eq!(category, Some(BankResponseCategory::Successful));
                assert_eq!(exact_code, "08");
                assert_eq!(exact_message, "CVV2/CID/CVC2 Data not verified");
            }
            other => panic!("expected exact response error, got {other:?}"),
        }
    }

    #[test]
    fn test_exact_fraud_code_keeps_description() {
        let mut body = approved();
        body["exact_resp_code"] = json!("F2");
        let resp = response(201, body);
        match resp.classify() {
            Err(GatewayError::ExactResponse {
                code,
                name,
                exact_code,
                exact_message,
                ..
            }) => {
                assert_eq!(code, "100");
                assert_eq!(name, "Approved");
                assert_eq!(exact_code, "F2");
                assert_eq!(
                    exact_message,
                    "Card/Check Number check failed - Fraud suspected"
                );
            }
            other => panic!("expected exact response error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_exact_code_without_bank_code() {
        let body = json!({"exact_resp_code": "99", "exact_message": "Something odd"});
        let err = response(201, body).classify().unwrap_err();
        assert_eq!(err.code(), "42");
        assert_eq!(err.message(), "Something odd");
    }

    #[test]
    fn test_unknown_bank_code_with_failed_exact_code() {
        let body = json!({"bank_resp_code": "999", "exact_resp_code": "F1"});
        let err = response(201, body).classify().unwrap_err();
        assert_eq!(err.code(), "999");
        assert_eq!(err.message(), "Address check failed - Fraud suspected");
    }

    #[test]
    fn test_missing_exact_code_fails_under_bank_values() {
        let resp = response(201, json!({"bank_resp_code": "100"}));
        let err = resp.classify().unwrap_err();
        assert_eq!(err.code(), "100");
        assert_eq!(err.message(), "Approved");
    }

    #[test]
    fn test_missing_bank_and_exact_codes_is_other_error() {
        let resp = response(201, json!({"transaction_approved": 0}));
        let err = resp.classify().unwrap_err();
        assert_eq!(err.code(), "42");
        assert_eq!(err.message(), "Other Error");
    }

    #[test]
    fn test_reject_or_decline_category_is_a_decline() {
        let mut body = approved();
        body["bank_resp_code"] = json!("741");
        let resp = response(201, body);
        match resp.classify() {
            Err(GatewayError::BankDecline { code, category, .. }) => {
                assert_eq!(code, "741");
                assert_eq!(category, BankResponseCategory::RejectOrDecline);
            }
            other => panic!("expected bank decline, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_bank_code_defers_to_exact_code() {
        let mut body = approved();
        body["bank_resp_code"] = json!("999");
        let resp = response(201, body);
        assert_eq!(resp.bank_response(), None);
        assert!(resp.classify().is_ok());
    }

    #[test]
    fn test_unparsable_body_uses_http_status() {
        let resp = TransactionResponse::from_raw(RawResponse::new(500, "Internal Server Error"));
        assert!(resp.json().is_empty());
        let err = resp.classify().unwrap_err();
        assert!(matches!(err, GatewayError::HttpStatus { status: 500, .. }));
        assert_eq!(err.code(), "500");
        assert_eq!(err.message(), "Internal Server Error");
    }

    #[test]
    fn test_parenthesized_code_in_raw_body() {
        let resp = TransactionResponse::from_raw(RawResponse::new(
            400,
            "Bad Request (22) - Invalid Credit Card Number",
        ));
        let err = resp.classify().unwrap_err();
        assert!(matches!(err, GatewayError::GatewayResponse { .. }));
        assert_eq!(err.code(), "22");
        assert_eq!(err.message(), "Invalid Credit Card Number");
    }

    #[test]
    fn test_unmapped_parenthesized_code_falls_back() {
        let resp = TransactionResponse::from_raw(RawResponse::new(400, "Bad Request (99)"));
        let err = resp.classify().unwrap_err();
        assert_eq!(err.code(), "42");
        assert_eq!(err.message(), "Other Error");
    }

    #[test]
    fn test_empty_object_is_not_a_response() {
        let resp = response(201, json!({}));
        assert!(matches!(
            resp.classify(),
            Err(GatewayError::HttpStatus { status: 201, .. })
        ));
    }

    #[test]
    fn test_json_body_with_error_status() {
        let resp = response(401, json!({"error": "Unauthorized"}));
        assert!(matches!(
            resp.classify(),
            Err(GatewayError::HttpStatus { status: 401, .. })
        ));
    }

    #[test]
    fn test_nested_fields_are_not_searched() {
        let body = json!({
            "exact_resp_code": "00",
            "bank_resp_code": "100",
            "details": {"bank_resp_code": "530"},
        });
        let resp = response(201, body);
        assert_eq!(resp.bank_resp_code(), Some("100"));
        assert!(resp.is_success());
    }

    #[test]
    fn test_flag_variants() {
        let resp = response(
            201,
            json!({"transaction_approved": "1", "transaction_error": true}),
        );
        assert!(resp.is_approved());
        assert!(resp.is_transaction_error());
    }
}
