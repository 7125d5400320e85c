use crate::domain::credentials::Credentials;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value, json};
use std::fmt;

/// The two-digit transaction type sent as `transaction_type`.
///
/// Codes the gateway does not know are passed through as [`TransactionType::Other`];
/// the gateway itself rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransactionType {
    #[default]
    Purchase,
    PreAuth,
    PreAuthCompletion,
    ForcedPost,
    Refund,
    PreAuthOnly,
    PayPalOrder,
    Void,
    TaggedPreAuthCompletion,
    TaggedVoid,
    TaggedRefund,
    CashOut,
    Activation,
    BalanceInquiry,
    Reload,
    Deactivation,
    Other(String),
}

impl TransactionType {
    pub fn code(&self) -> &str {
        match self {
            TransactionType::Purchase => "00",
            TransactionType::PreAuth => "01",
            TransactionType::PreAuthCompletion => "02",
            TransactionType::ForcedPost => "03",
            TransactionType::Refund => "04",
            TransactionType::PreAuthOnly => "05",
            TransactionType::PayPalOrder => "07",
            TransactionType::Void => "13",
            TransactionType::TaggedPreAuthCompletion => "32",
            TransactionType::TaggedVoid => "33",
            TransactionType::TaggedRefund => "34",
            TransactionType::CashOut => "83",
            TransactionType::Activation => "85",
            TransactionType::BalanceInquiry => "86",
            TransactionType::Reload => "88",
            TransactionType::Deactivation => "89",
            TransactionType::Other(code) => code,
        }
    }
}

impl From<&str> for TransactionType {
    fn from(code: &str) -> Self {
        match code {
            "00" => TransactionType::Purchase,
            "01" => TransactionType::PreAuth,
            "02" => TransactionType::PreAuthCompletion,
            "03" => TransactionType::ForcedPost,
            "04" => TransactionType::Refund,
            "05" => TransactionType::PreAuthOnly,
            "07" => TransactionType::PayPalOrder,
            "13" => TransactionType::Void,
            "32" => TransactionType::TaggedPreAuthCompletion,
            "33" => TransactionType::TaggedVoid,
            "34" => TransactionType::TaggedRefund,
            "83" => TransactionType::CashOut,
            "85" => TransactionType::Activation,
            "86" => TransactionType::BalanceInquiry,
            "88" => TransactionType::Reload,
            "89" => TransactionType::Deactivation,
            other => TransactionType::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionType {
    fn from(code: String) -> Self {
        TransactionType::from(code.as_str())
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for TransactionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(TransactionType::from(code))
    }
}

/// Merchant details printed on the cardholder's statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftDescriptor {
    pub dba_name: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country_code: String,
    pub mid: String,
    pub mcc: String,
    pub merchant_contact_info: String,
}

impl Default for SoftDescriptor {
    fn default() -> Self {
        Self {
            dba_name: String::new(),
            street: String::new(),
            city: String::new(),
            region: String::new(),
            postal_code: String::new(),
            country_code: "US".to_string(),
            mid: String::new(),
            mcc: String::new(),
            merchant_contact_info: String::new(),
        }
    }
}

impl From<&SoftDescriptor> for Value {
    fn from(descriptor: &SoftDescriptor) -> Self {
        json!({
            "dba_name": descriptor.dba_name,
            "street": descriptor.street,
            "city": descriptor.city,
            "region": descriptor.region,
            "postal_code": descriptor.postal_code,
            "country_code": descriptor.country_code,
            "mid": descriptor.mid,
            "mcc": descriptor.mcc,
            "merchant_contact_info": descriptor.merchant_contact_info,
        })
    }
}

/// The fields of a transaction that has not been sent yet.
///
/// Fields keep their insertion order; setting a field twice replaces the value
/// in place. The transaction type is kept apart from the fields because it
/// survives a send while the fields do not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRequest {
    transaction_type: TransactionType,
    fields: Map<String, Value>,
}

impl TransactionRequest {
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            fields: Map::new(),
        }
    }

    pub fn transaction_type(&self) -> &TransactionType {
        &self.transaction_type
    }

    pub fn set_transaction_type(&mut self, transaction_type: impl Into<TransactionType>) -> &mut Self {
        self.transaction_type = transaction_type.into();
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn extend<K, V, I>(&mut self, fields: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in fields {
            self.fields.insert(name.into(), value.into());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Moves the fields out, leaving an empty field set with the same
    /// transaction type behind.
    pub fn take(&mut self) -> TransactionRequest {
        TransactionRequest {
            transaction_type: self.transaction_type.clone(),
            fields: std::mem::take(&mut self.fields),
        }
    }

    /// Builds the JSON object sent to the gateway.
    ///
    /// Identity fields come first. A caller field with the same name replaces
    /// the identity value without moving it.
    pub fn payload(&self, credentials: &Credentials) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("gateway_id".into(), credentials.gateway_id().into());
        payload.insert("password".into(), credentials.password().into());
        payload.insert(
            "transaction_type".into(),
            self.transaction_type.code().into(),
        );
        for (name, value) in &self.fields {
            payload.insert(name.clone(), value.clone());
        }
        payload
    }

    pub fn ecommerce_flag(&mut self, flag: impl Into<String>) -> &mut Self {
        self.set("ecommerce_flag", flag.into())
    }

    pub fn cc_number(&mut self, number: impl Into<String>) -> &mut Self {
        self.set("cc_number", number.into())
    }

    pub fn credit_card_type(&mut self, card_type: impl Into<String>) -> &mut Self {
        self.set("credit_card_type", card_type.into())
    }

    pub fn cardholder_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.set("cardholder_name", name.into())
    }

    /// Check transactions carry the customer name in the cardholder field.
    pub fn customer_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.cardholder_name(name)
    }

    pub fn check_number(&mut self, number: impl Into<String>) -> &mut Self {
        self.set("check_number", number.into())
    }

    pub fn check_type(&mut self, check_type: impl Into<String>) -> &mut Self {
        self.set("check_type", check_type.into())
    }

    pub fn account_number(&mut self, number: impl Into<String>) -> &mut Self {
        self.set("account_number", number.into())
    }

    /// Bank routing number.
    pub fn bank_id(&mut self, routing_number: impl Into<String>) -> &mut Self {
        self.set("bank_id", routing_number.into())
    }

    pub fn customer_id_number(&mut self, number: impl Into<String>) -> &mut Self {
        self.set("customer_id_number", number.into())
    }

    pub fn customer_id_type(&mut self, id_type: impl Into<String>) -> &mut Self {
        self.set("customer_id_type", id_type.into())
    }

    pub fn client_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.set("client_email", email.into())
    }

    /// Expiry as `MMYY`.
    pub fn cc_expiry(&mut self, expiry: impl Into<String>) -> &mut Self {
        self.set("cc_expiry", expiry.into())
    }

    pub fn amount(&mut self, amount: Decimal) -> &mut Self {
        self.set("amount", amount.to_string())
    }

    pub fn transarmor_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.set("transarmor_token", token.into())
    }

    pub fn authorization_num(&mut self, number: impl Into<String>) -> &mut Self {
        self.set("authorization_num", number.into())
    }

    pub fn transaction_tag(&mut self, tag: u64) -> &mut Self {
        self.set("transaction_tag", tag)
    }

    /// Address verification string: `street|zip|city|state|country`.
    pub fn cc_verification_str1(&mut self, address: impl Into<String>) -> &mut Self {
        self.set("cc_verification_str1", address.into())
    }

    /// Sets the CVV and marks it as present.
    pub fn cc_verification_str2(&mut self, cvv: impl Into<String>) -> &mut Self {
        self.set("cc_verification_str2", cvv.into());
        self.set("cvd_presence_ind", "1")
    }

    pub fn cavv(&mut self, cavv: impl Into<String>) -> &mut Self {
        self.set("cavv", cavv.into())
    }

    pub fn xid(&mut self, xid: impl Into<String>) -> &mut Self {
        self.set("xid", xid.into())
    }

    pub fn zip_code(&mut self, zip: impl Into<String>) -> &mut Self {
        self.set("zip_code", zip.into())
    }

    pub fn currency_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.set("currency_code", code.into())
    }

    pub fn reference_no(&mut self, number: impl Into<String>) -> &mut Self {
        self.set("reference_no", number.into())
    }

    pub fn customer_ref(&mut self, number: impl Into<String>) -> &mut Self {
        self.set("customer_ref", number.into())
    }

    pub fn soft_descriptor(&mut self, descriptor: &SoftDescriptor) -> &mut Self {
        self.set("soft_descriptor", Value::from(descriptor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn credentials() -> Credentials {
        Credentials::new("AD1234-56", "secret", "key", "123")
    }

    #[test]
    fn test_transaction_type_codes() {
        assert_eq!(TransactionType::default().code(), "00");
        assert_eq!(TransactionType::TaggedRefund.code(), "34");
        assert_eq!(TransactionType::from("13"), TransactionType::Void);
        assert_eq!(
            TransactionType::from("99"),
            TransactionType::Other("99".to_string())
        );
        assert_eq!(TransactionType::from("99").code(), "99");
    }

    #[test]
    fn test_transaction_type_serializes_as_code() {
        let json = serde_json::to_string(&TransactionType::Refund).unwrap();
        assert_eq!(json, "\"04\"");
        let parsed: TransactionType = serde_json::from_str("\"85\"").unwrap();
        assert_eq!(parsed, TransactionType::Activation);
    }

    #[test]
    fn test_last_write_wins_in_place() {
        let mut request = TransactionRequest::default();
        request.set("amount", "1.00").set("cc_number", "4111").set("amount", "2.00");

        let keys: Vec<&String> = request.fields().keys().collect();
        assert_eq!(keys, vec!["amount", "cc_number"]);
        assert_eq!(request.get("amount"), Some(&Value::from("2.00")));
    }

    #[test]
    fn test_payload_puts_identity_first() {
        let mut request = TransactionRequest::new(TransactionType::Refund);
        request.cc_number("4111111111111111").amount(dec!(10.50));

        let payload = request.payload(&credentials());
        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["gateway_id", "password", "transaction_type", "cc_number", "amount"]
        );
        assert_eq!(payload["transaction_type"], "04");
        assert_eq!(payload["amount"], "10.50");
    }

    #[test]
    fn test_caller_field_overwrites_identity_in_place() {
        let mut request = TransactionRequest::default();
        request.set("amount", "1.00").set("gateway_id", "OTHER-01");

        let payload = request.payload(&credentials());
        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["gateway_id", "password", "transaction_type", "amount"]);
        assert_eq!(payload["gateway_id"], "OTHER-01");
    }

    #[test]
    fn test_take_keeps_transaction_type() {
        let mut request = TransactionRequest::new(TransactionType::Void);
        request.set("amount", "1.00");

        let taken = request.take();
        assert_eq!(taken.len(), 1);
        assert!(request.is_empty());
        assert_eq!(request.transaction_type(), &TransactionType::Void);
    }

    #[test]
    fn test_cvv_sets_presence_indicator() {
        let mut request = TransactionRequest::default();
        request.cc_verification_str2("123");
        assert_eq!(request.get("cc_verification_str2"), Some(&Value::from("123")));
        assert_eq!(request.get("cvd_presence_ind"), Some(&Value::from("1")));
    }

    #[test]
    fn test_soft_descriptor_is_nested_object() {
        let mut request = TransactionRequest::default();
        let descriptor = SoftDescriptor {
            dba_name: "ACME".to_string(),
            city: "Springfield".to_string(),
            ..Default::default()
        };
        request.soft_descriptor(&descriptor);

        let value = request.get("soft_descriptor").unwrap();
        assert_eq!(value["dba_name"], "ACME");
        assert_eq!(value["city"], "Springfield");
        assert_eq!(value["country_code"], "US");
    }

    #[test]
    fn test_extend_bulk_fields() {
        let mut request = TransactionRequest::default();
        request.extend([("amount", "5.00"), ("cc_expiry", "1230")]);
        assert_eq!(request.len(), 2);
        assert_eq!(request.get("cc_expiry"), Some(&Value::from("1230")));
    }
}
