/// Raw values of the four request form fields, captured when the user
/// submits. Rebuilt from the inputs on every attempt; never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    /// Raw text of the address field.
    pub address: String,
    /// Raw text of the amount field (decimal, major units).
    pub amount: String,
    /// Optional free-text memo attached to the request.
    pub memo: String,
    /// Optional message shown to the payer after they complete payment.
    pub ack_memo: String,
}

/// Defaulting rules applied when optional fields are left blank.
///
/// The form core is parameterized by these strings so a placement with
/// different copy configures them instead of duplicating the submit flow.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDefaults {
    /// Sentinel written to the payload if a blank address ever reaches
    /// construction. Validation rejects blank addresses before this applies.
    pub fallback_address: String,
    /// Placeholder memo used when the memo field is blank.
    pub memo: String,
    /// Placeholder ack memo used when that field is blank.
    pub ack_memo: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            fallback_address: "invalidAddress".to_string(),
            memo: "default memo".to_string(),
            ack_memo: "default ackmemo".to_string(),
        }
    }
}
