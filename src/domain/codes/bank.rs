//! Bank response codes returned by the issuing bank or authorization network.

use serde::Serialize;
use std::fmt;

/// The outcome class of a bank response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BankResponseCategory {
    /// `S`: the request was approved or accepted.
    Successful,
    /// `R`: the request was rejected before reaching the issuer.
    Reject,
    /// `D`: the issuer declined the request.
    Decline,
    /// `R/D`: the code is used for both rejects and declines.
    RejectOrDecline,
}

impl BankResponseCategory {
    /// The single-letter tag the gateway documentation uses.
    pub fn as_str(&self) -> &'static str {
        match self {
            BankResponseCategory::Successful => "S",
            BankResponseCategory::Reject => "R",
            BankResponseCategory::Decline => "D",
            BankResponseCategory::RejectOrDecline => "R/D",
        }
    }

    pub fn is_successful(&self) -> bool {
        *self == BankResponseCategory::Successful
    }
}

impl fmt::Display for BankResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankResponse {
    pub code: &'static str,
    pub category: BankResponseCategory,
    pub name: &'static str,
    /// Suggested merchant action (`Fix`, `Resend`, `Cust`, `Call`, ...).
    pub action: &'static str,
    pub comments: &'static str,
}

const fn bank(
    code: &'static str,
    category: BankResponseCategory,
    name: &'static str,
    action: &'static str,
    comments: &'static str,
) -> BankResponse {
    BankResponse {
        code,
        category,
        name,
        action,
        comments,
    }
}

/// Looks up a three-digit bank response code.
///
/// Codes that arrive without their leading zeros (`"0"`) are padded first.
pub fn lookup(code: &str) -> Option<&'static BankResponse> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    let padded = format!("{code:0>3}");
    BANK_RESPONSES.iter().find(|entry| entry.code == padded)
}

use BankResponseCategory::*;

pub static BANK_RESPONSES: &[BankResponse] = &[
    bank("000", Decline, "No Answer", "Resend", "First Data received no answer from auth network"),
    bank("100", Successful, "Approved", "N/A", "Successfully approved"),
    bank("101", Successful, "Validated", "N/A", "Account Passed edit checks"),
    bank("102", Successful, "Verified", "N/A", "Account Passed external negative file"),
    bank("103", Successful, "Pre-Noted", "N/A", "Passed Pre-Note"),
    bank("104", Successful, "No Reason to Decline", "N/A", "Successfully approved"),
    bank("105", Successful, "Received and Stored", "N/A", "Successfully approved"),
    bank(
        "106",
        Successful,
        "Provided Auth",
        "N/A",
        "Successfully approved Note: Indicates customized code was used in processing",
    ),
    bank(
        "107",
        Successful,
        "Request Received",
        "N/A",
        "Successfully approved Note: Indicates customized code was used in processing",
    ),
    bank("108", Successful, "Approved for Activation", "N/A", "Successfully Activated"),
    bank(
        "109",
        Successful,
        "Previously Processed Transaction",
        "N/A",
        "Transaction was not re-authorized with the Debit Network because it was previously processed",
    ),
    bank(
        "110",
        Successful,
        "BIN Alert",
        "N/A",
        "Successfully approved Note: Indicates customized code was used in processing",
    ),
    bank(
        "111",
        Successful,
        "Approved for Partial",
        "N/A",
        "Successfully approved Note: Indicates customized code was used in processing",
    ),
    bank(
        "164",
        Successful,
        "Conditional Approval",
        "Wait",
        "Conditional Approval - Hold shipping for 24 hours",
    ),
    bank(
        "201",
        Reject,
        "Invalid CC Number",
        "Fix",
        "Bad check digit, length, or other credit card problem",
    ),
    bank(
        "202",
        Reject,
        "Bad Amount Nonnumeric Amount",
        "If",
        "Amount sent was zero, unreadable, over ceiling limit, or exceeds maximum allowable amount.",
    ),
    bank("203", Reject, "Zero Amount", "Fix", "Amount sent was zero"),
    bank("204", Reject, "Other Error", "Fix", "Unidentifiable error"),
    bank(
        "205",
        Reject,
        "Bad Total Auth Amount",
        "Fix",
        "The sum of the authorization amount from extended data information does not equal detail record authorization Amount. Amount sent was zero, unreadable, over ceiling limit, or exceeds Maximum allowable amount.",
    ),
    bank("218", Reject, "Invalid SKU Number", "Fix", "Non‐numeric value was sent"),
    bank("219", Reject, "Invalid Credit Plan", "Fix", "Non‐numeric value was sent"),
    bank("220", Reject, "Invalid Store Number", "Fix", "Non‐numeric value was sent"),
    bank("225", Reject, "Invalid Field Data", "Fix", "Data within transaction is incorrect"),
    bank(
        "227",
        Reject,
        "Missing Companion Data",
        "Fix",
        "Specific and relevant data within transaction is absent",
    ),
    bank(
        "229",
        Reject,
        "Percents do not total 100",
        "Fix",
        "FPO monthly payments do not total 100 Note: FPO only",
    ),
    bank(
        "230",
        Reject,
        "Payments do not total 100",
        "Fix",
        "FPO monthly payments do not total 100 Note: FPO only",
    ),
    bank("231", Reject, "Invalid Division Number", "Fix", "Division number incorrect"),
    bank(
        "233",
        Reject,
        "Does not match MOP",
        "Fix",
        "Credit card number does not match method of payment type or invalid BIN",
    ),
    bank(
        "234",
        Reject,
        "Duplicate Order Number",
        "Fix",
        "Unique to authorization recycle transactions. Order number already exists in system Note: Auth Recycle only",
    ),
    bank("235", Reject, "FPO Locked", "Resend", "FPO change not allowed Note: FPO only"),
    bank(
        "236",
        Reject,
        "Auth Recycle Host System Down",
        "Resend",
        "Authorization recycle host system temporarily unavailable Note: Auth Recycle only",
    ),
    bank(
        "237",
        Reject,
        "FPO Not Approved",
        "Call",
        "Division does not participate in FPO. Contact your First Data Representative for information on getting set up for FPO Note: FPO only",
    ),
    bank(
        "238",
        Reject,
        "Invalid Currency",
        "Fix",
        "Currency does not match First Data merchant setup for division",
    ),
    bank(
        "239",
        Reject,
        "Invalid MOP for Division",
        "Fix",
        "Method of payment is invalid for the division",
    ),
    bank("240", Reject, "Auth Amount for Division", "Fix", "Used by FPO"),
    bank("241", Reject, "Illegal Action", "Fix", "Invalid action attempted"),
    bank(
        "243",
        Reject,
        "Invalid Purchase Level 3",
        "Fix",
        "Data is inaccurate or missing, or the BIN is ineligible for P‐card",
    ),
    bank(
        "244",
        Reject,
        "Invalid Encryption Format",
        "Fix",
        "Invalid encryption flag. Data is Inaccurate.",
    ),
    bank(
        "245",
        Reject,
        "Missing or Invalid Secure Payment Data",
        "Fix",
        "Visa or MasterCard authentication data not in appropriate Base 64 encoding format or data provided on A non‐e‐Commerce transaction.",
    ),
    bank(
        "246",
        Reject,
        "Merchant not MasterCard Secure code Enabled",
        "Call",
        "Division does not participate in MasterCard Secure Code. Contact your First Data Representative for information on getting setup for MasterCard SecureCode.",
    ),
    bank("247", Reject, "Check conversion Data Error", "Fix", "Proper data elements were not sent"),
    bank(
        "248",
        Reject,
        "Blanks not passed in reserved field",
        "Fix",
        "Blanks not passed in Reserved Field",
    ),
    bank("249", Reject, "Invalid (MCC)", "Fix", "Invalid Merchant Category (MCC) sent"),
    bank(
        "251",
        Reject,
        "Invalid Start Date",
        "Fix",
        "Incorrect start date or card may require an issue number, but a start date was submitted.",
    ),
    bank("252", Reject, "Invalid Issue Number", "Fix", "Issue number invalid for this BIN."),
    bank(
        "253",
        Reject,
        "Invalid Tran. Type",
        "Fix",
        "If an “R” (Retail Indicator) is sent for a transaction with a MOTO Merchant Category Code (MCC)",
    ),
    bank(
        "257",
        Reject,
        "Missing Cust Service Phone",
        "Fix",
        "Card was authorized, but AVS did not match. The 100 was overwritten with a 260 per the merchant’s request Note: Conditional deposits only",
    ),
    bank(
        "258",
        Reject,
        "Not Authorized to Send Record",
        "Call",
        "Division does not participate in Soft Merchant Descriptor. Contact your First Data Representative for information on getting set up for Soft Merchant Descriptor.",
    ),
    bank(
        "260",
        Decline,
        "Soft AVS",
        "Cust",
        "Authorization network could not reach the bank which issued the card",
    ),
    bank(
        "261",
        Reject,
        "Account Not Eligible For Division’s Setup",
        "N/A",
        "Account number not eligible for division’s Account Updater program setup",
    ),
    bank(
        "262",
        Reject,
        "Authorization Code Response Date Invalid",
        "Fix",
        "Authorization code and/or response date are invalid. Note: MOP = MC, MD, VI only",
    ),
    bank(
        "263",
        Reject,
        "Partial Authorization Not Allowed or Partial Authorization Request Note Valid",
        "Fix",
        "Action code or division does not allow partial authorizations or partial authorization request is not valid.",
    ),
    bank(
        "264",
        Reject,
        "Duplicate Deposit Transaction",
        "N/A",
        "Transaction is a duplicate of a previously deposited transaction. Transaction will not be processed.",
    ),
    bank("265", Reject, "Missing QHP Amount", "Fix", "Missing QHP Amount"),
    bank("266", Reject, "Invalid QHP Amount", "Fix", "QHP amount greater than transaction amount"),
    bank(
        "274",
        Reject,
        "Transaction Not Supported",
        "N/A",
        "The requested transaction type is blocked from being used with this card. Note:  This may be the result of either an association rule, or a merchant boarding option.",
    ),
    bank(
        "301",
        Decline,
        "Issuer unavailable",
        "Resend",
        "Authorization network could not reach the bank which issued the card",
    ),
    bank("302", Decline, "Credit Floor", "Cust", "Insufficient funds"),
    bank(
        "303",
        Decline,
        "Processor Decline",
        "Cust",
        "Generic decline – No other information is being provided by the Issuer",
    ),
    bank(
        "304",
        Decline,
        "Not On File",
        "Cust",
        "No card record, or invalid/nonexistent to account specified",
    ),
    bank(
        "305",
        Decline,
        "Already Reversed",
        "N/A",
        "Transaction previously reversed. Note: MOP = any Debit MOP, SV, MC, MD, VI only",
    ),
    bank(
        "306",
        Decline,
        "Amount Mismatch",
        "Fix",
        "Requested reversal amount does not match original approved authorization amount. Note: MOP = MC, MD, VI only",
    ),
    bank(
        "307",
        Decline,
        "Authorization Not Found",
        "Fix",
        "Transaction cannot be matched to an authorization that was stored in the database. Note: MOP = MC, MD, VI only",
    ),
    bank(
        "351",
        Reject,
        "TransArmor Service Unavailable",
        "Resend",
        "TransArmor Service temporarily unavailable.",
    ),
    bank("352", Decline, "Expired Lock", "Cust", "ValueLink - Lock on funds has expired."),
    bank(
        "353",
        Reject,
        "TransArmor Invalid Token or PAN",
        "Fix",
        "TransArmor Service encountered a problem converting the given Token or PAN with the given Token Type.",
    ),
    bank(
        "354",
        Reject,
        "TransArmor Invalid Result",
        "Cust",
        "TransArmor Service encountered a problem with the resulting Token/PAN.",
    ),
    bank("401", Decline, "Call", "Voice", "Issuer wants voice contact with cardholder"),
    bank("402", Decline, "Default Call", "Voice", "Decline"),
    bank("501", Decline, "Pickup", "Cust", "Card Issuer wants card returned"),
    bank(
        "502",
        Decline,
        "Lost/Stolen",
        "Cust",
        "Card reported as lost/stolen Note: Does not apply to American Express",
    ),
    bank(
        "503",
        Decline,
        "Fraud/ Security Violation",
        "Cust",
        "CID did not match Note: Discover only",
    ),
    bank("505", Decline, "Negative File", "Cust", "On negative file"),
    bank("508", Decline, "Excessive PIN try", "Cust", "Allowable number of PIN tries exceeded"),
    bank("509", Decline, "Over the limit", "Cust", "Exceeds withdrawal or activity amount limit"),
    bank(
        "510",
        Decline,
        "Over Limit Frequency",
        "Cust",
        "Exceeds withdrawal or activity count limit",
    ),
    bank("519", Decline, "On negative file", "Cust", "Account number appears on negative file"),
    bank("521", Decline, "Insufficient funds", "Cust", "Insufficient funds/over credit limit"),
    bank("522", Decline, "Card is expired", "Cust", "Card has expired"),
    bank("524", Decline, "Altered Data", "Fix", "Altered Data\\Magnetic stripe incorrect"),
    bank("525", Reject, "Server unavailable", "Wait", "Re-submit the transaction in 30 seconds"),
    bank(
        "530",
        Decline,
        "Do Not Honor",
        "Cust",
        "Generic Decline – No other information is being provided by the issuer. Note: This is a hard decline for BML (will never pass with recycle attempts)",
    ),
    bank(
        "531",
        Decline,
        "CVV2/VAK Failure",
        "Cust",
        "Issuer has declined auth request because CVV2 or VAK failed",
    ),
    bank(
        "534",
        Decline,
        "Do Not Honor - High Fraud",
        "Cust",
        "The transaction has failed PayPal or Google Checkout risk models",
    ),
    bank(
        "570",
        Decline,
        "Stop payment order one time recurring/ installment",
        "Fix",
        "Cardholder has requested this one recurring/installment payment be stopped.",
    ),
    bank(
        "571",
        Decline,
        "Revocation of Authorization for All Recurring / Installments",
        "Cust",
        "Cardholder has requested all recurring/installment payments be stopped",
    ),
    bank(
        "572",
        Decline,
        "Revocation of All Authorizations – Closed Account",
        "Cust",
        "Cardholder has requested that all authorizations be stopped for this account due to closed account. Note: Visa only",
    ),
    bank("580", Decline, "Account previously activated", "Cust", "Account previously activated"),
    bank("581", Decline, "Unable to void", "Fix", "Unable to void"),
    bank("582", Decline, "Block activation failed", "Fix", "Reserved for Future Use"),
    bank("583", Decline, "Block Activation Failed", "Fix", "Reserved for Future Use"),
    bank(
        "584",
        Decline,
        "Issuance Does Not Meet Minimum Amount",
        "Fix",
        "Issuance does not meet minimum amount",
    ),
    bank(
        "585",
        Decline,
        "No Original Authorization Found",
        "N/A",
        "No original authorization found",
    ),
    bank(
        "586",
        Decline,
        "Outstanding Authorization, Funds on Hold",
        "N/A",
        "Outstanding Authorization, funds on hold",
    ),
    bank("587", Decline, "Activation Amount Incorrect", "Fix", "Activation amount incorrect"),
    bank("588", Decline, "Block Activation Failed", "Fix", "Reserved for Future Use"),
    bank("589", Decline, "CVD Value Failure", "Cust", "Magnetic stripe CVD value failure"),
    bank("590", Decline, "Maximum Redemption Limit Met", "Cust", "Maximum redemption limit met"),
    bank(
        "591",
        Decline,
        "Invalid CC Number",
        "Cust",
        "Bad check digit, length or other credit card problem. Issuer generated",
    ),
    bank(
        "592",
        Decline,
        "Bad Amount",
        "Fix",
        "Amount sent was zero or unreadable. Issuer generated",
    ),
    bank(
        "594",
        Decline,
        "Other Error",
        "Fix",
        "We are unable to verify your checking account or identity information. Please review the information you entered to ensure that all information is correct.",
    ),
    bank("595", Decline, "New Card Issued", "Cust", "New Card Issued"),
    bank(
        "596",
        Decline,
        "Suspected Fraud",
        "Cust",
        "Issuer has flagged account as suspected fraud",
    ),
    bank("599", Decline, "Refund Not Allowed", "N/A", "Refund Not Allowed"),
    bank(
        "602",
        Decline,
        "Invalid Institution Code",
        "Fix",
        "Card is bad, but passes MOD 10 check digit routine, wrong BIN",
    ),
    bank(
        "603",
        Decline,
        "Invalid Institution",
        "Cust",
        "Institution not valid (i.e. possible merger)",
    ),
    bank(
        "605",
        Decline,
        "Invalid Expiration Date",
        "Cust",
        "Card has expired or bad date sent. Confirm proper date",
    ),
    bank(
        "606",
        Decline,
        "Invalid Transaction Type",
        "Cust",
        "Issuer does not allow this type of transaction",
    ),
    bank("607", Decline, "Invalid Amount", "Fix", "Amount not accepted by network"),
    bank(
        "610",
        Decline,
        "BIN Block",
        "Cust",
        "Merchant has requested First Data not process credit cards with this BIN",
    ),
    bank("704", Successful, "FPO Accepted", "N/A", "Stored in FPO database"),
    bank(
        "740",
        Reject,
        "Match Failed",
        "Fix",
        "Unable to validate the debit. Authorization Record - based on amount, action code, and MOP (Batch response reason code for Debit Only)",
    ),
    bank(
        "741",
        RejectOrDecline,
        "Validation Failed",
        "Fix",
        "Unable to validate the Debit Authorization Record - based on amount, action code, and MOP (Batch response reason code for Debit Only)",
    ),
    bank(
        "750",
        RejectOrDecline,
        "Invalid Transit Routing Number",
        "Fix",
        "EC - ABA transit routing number is invalid, failed check digit",
    ),
    bank(
        "751",
        RejectOrDecline,
        "Transit Routing Number Unknown",
        "Fix",
        "Transit routing number not on list of current acceptable numbers.",
    ),
    bank("752", Reject, "Missing Name", "Fix", "Pertains to deposit transactions only"),
    bank("753", Reject, "Invalid Account Type", "Fix", "Pertains to deposit transactions only"),
    bank(
        "754",
        RejectOrDecline,
        "Account Closed",
        "Cust",
        "Bank account has been closed For PayPal and GoogleCheckout – the customer’s account was closed / restricted",
    ),
    bank("755", Reject, "Subscriber Number Does Not Exist", "Cust", "No Account/Unable to Locate"),
    bank("758", Reject, "Subscriber Number Not Active", "Cust", "Account Frozen"),
    bank(
        "760",
        RejectOrDecline,
        "ACH Non-Participant",
        "Cust",
        "EC – Banking Institution does not accept ACH transactions",
    ),
    bank("776", Decline, "Duplicate Check", "Cust", "Duplicate Transaction"),
    bank("777", Decline, "Original transaction was not approved", "Cust", "Original not approved"),
    bank("787", Decline, "Rejected Code 3 (Risk)", "Cust", "Decline High Risk"),
    bank(
        "788",
        Decline,
        "Refund or partial amount is > original sale amount",
        "Fix",
        "Refund Greater than original sale",
    ),
    bank("802", Decline, "Positive ID", "Voice", "Issuer requires further information"),
    bank("806", Decline, "Restraint", "Cust", "Card has been restricted"),
    bank("811", Decline, "Invalid Security Code", "Fix", "American Express CID is incorrect"),
    bank("813", Decline, "Invalid PIN", "Cust", "PIN for online debit transactions is incorrect"),
    bank("825", Decline, "No Account", "Cust", "Account does not exist"),
    bank(
        "833",
        Decline,
        "Invalid Merchant",
        "Fix",
        "Service Established (SE) number is incorrect, closed or Issuer does not allow this type of transaction",
    ),
    bank(
        "834",
        Reject,
        "Unauthorized User",
        "Fix",
        "Method of payment is invalid for the division",
    ),
    bank(
        "902",
        Decline,
        "Process Unavailable",
        "Resend/ Call/ Cust.",
        "System error/malfunction with Issuer For Debit – The link is down or setup issue; contact your First Data Representative.",
    ),
    bank("903", Decline, "Invalid Expiration", "Cust", "Invalid or expired expiration date"),
    bank("904", Decline, "Invalid Effective", "Cust./ Resend", "Card not active"),
    bank(
        "997",
        Decline,
        "Acquirer Error",
        "Call",
        "Acquiring bank configuration problem. Contact your First Data representative.",
    ),
];
