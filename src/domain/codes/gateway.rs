//! Gateway ("exact") response codes.
//!
//! `00` means the request was processed normally; everything else is a
//! malformed request, a merchant configuration problem, a gateway host problem
//! or a fraud filter hit.

/// The code reported when a code is missing from the table.
pub const OTHER_ERROR_CODE: &str = "42";
pub const OTHER_ERROR_MESSAGE: &str = "Other Error";

pub const TRANSACTION_NORMAL: &str = "00";

pub static GATEWAY_RESPONSES: &[(&str, &str)] = &[
    ("00", "Transaction Normal"),
    // invalid data in the transaction
    ("22", "Invalid Credit Card Number"),
    ("25", "Invalid Expiry Date"),
    ("26", "Invalid Amount"),
    ("27", "Invalid Card Holder"),
    ("28", "Invalid Authorization No"),
    ("31", "Invalid Verification String"),
    ("32", "Invalid Transaction Code"),
    ("57", "Invalid Reference No"),
    (
        "58",
        "Invalid AVS String, The length of the AVS String has exceeded the max. 40 characters",
    ),
    ("60", "Invalid Customer Reference Number"),
    ("63", "Invalid Duplicate"),
    ("64", "Invalid Refund"),
    ("68", "Restricted Card Number"),
    ("69", "Invalid Transaction Tag"),
    ("72", "Data within the transaction is incorrect"),
    ("93", "Invalid authorization number entered on a pre-auth completion"),
    // merchant configuration at the financial institution
    ("11", "Invalid Sequence No"),
    ("12", "Message Timed-out at Host"),
    ("21", "BCE Function Error"),
    ("23", "Invalid Response from First Data"),
    ("30", "Invalid Date From Host"),
    // gateway host or merchant configuration
    ("10", "Invalid Transaction Description"),
    ("14", "Invalid Gateway ID"),
    ("15", "Invalid Transaction Number"),
    ("16", "Connection Inactive"),
    ("17", "Unmatched Transaction"),
    ("18", "Invalid Reversal Response"),
    ("19", "Unable to Send Socket Transaction"),
    ("20", "Unable to Write Transaction to File"),
    ("24", "Unable to Void Transaction"),
    ("37", "Payment Type Not Supported By Merchant"),
    ("40", "Unable to Connect"),
    ("41", "Unable to Send Logon"),
    ("42", "Unable to Send Trans"),
    ("43", "Invalid Logon"),
    ("52", "Terminal not Activated"),
    ("53", "Terminal/Gateway Mismatch"),
    ("54", "Invalid Processing Center"),
    ("55", "No Processors Available"),
    ("56", "Database Unavailable"),
    ("61", "Socket Error"),
    ("62", "Host not Ready"),
    // final transaction states
    ("08", "CVV2/CID/CVC2 Data not verified"),
    ("44", "Address not Verified"),
    ("70", "Transaction Placed in Queue"),
    ("73", "Transaction Received from Bank"),
    ("76", "Reversal Pending"),
    ("77", "Reversal Complete"),
    ("79", "Reversal Sent to Bank"),
    // merchant fraud filters
    ("F1", "Address check failed - Fraud suspected"),
    ("F2", "Card/Check Number check failed - Fraud suspected"),
    ("F3", "Country Check Failed - Fraud Suspected"),
    ("F4", "Customer Reference Check Failed - Fraud Suspected"),
    ("F5", "Email Address check failed - Fraud suspected"),
    ("F6", "IP Address check failed - Fraud suspected"),
];

pub fn lookup(code: &str) -> Option<&'static str> {
    GATEWAY_RESPONSES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, description)| *description)
}

/// Resolves a code to `(code, description)`, degrading unknown codes to
/// [`OTHER_ERROR_CODE`] / [`OTHER_ERROR_MESSAGE`].
pub fn resolve(code: &str) -> (String, String) {
    match lookup(code) {
        Some(description) => (code.to_string(), description.to_string()),
        None => (
            OTHER_ERROR_CODE.to_string(),
            OTHER_ERROR_MESSAGE.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_code() {
        assert_eq!(lookup("22"), Some("Invalid Credit Card Number"));
        assert_eq!(lookup("F3"), Some("Country Check Failed - Fraud Suspected"));
        assert_eq!(lookup(TRANSACTION_NORMAL), Some("Transaction Normal"));
    }

    #[test]
    fn test_resolve_falls_back_to_other_error() {
        assert_eq!(
            resolve("99"),
            ("42".to_string(), "Other Error".to_string())
        );
        assert_eq!(
            resolve("26"),
            ("26".to_string(), "Invalid Amount".to_string())
        );
    }
}
