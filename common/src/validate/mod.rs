//! Validation rules for the payment request form.
//!
//! `validate` applies every rule in one pass and collects per-field
//! messages, so multiple fields can fail a single submission. The address
//! check is a pluggable surface-level predicate; the core never validates
//! checksums or keys, that is the server's job.

use regex::Regex;

use crate::model::amount::{AmountError, parse_minor_units};
use crate::model::form::FormInput;

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    BitcoinAddress,
    Amount,
}

impl Field {
    /// Fixed priority order for surfacing errors to the user.
    pub const DISPLAY_ORDER: [Field; 2] = [Field::BitcoinAddress, Field::Amount];

    /// User-facing label, also the key under which messages are reported.
    pub fn label(&self) -> &'static str {
        match self {
            Field::BitcoinAddress => "Bitcoin Address",
            Field::Amount => "Amount",
        }
    }
}

/// Ordered collection of validation messages, grouped per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(Field, Vec<String>)>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a message under `field`, preserving insertion order.
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        if let Some((_, messages)) = self.entries.iter_mut().find(|(f, _)| *f == field) {
            messages.push(message.into());
        } else {
            self.entries.push((field, vec![message.into()]));
        }
    }

    /// Every message recorded for `field`, in the order the rules fired.
    pub fn messages(&self, field: Field) -> &[String] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    /// The first message of each failing field, in display priority order.
    /// This is exactly what the notification layer shows per submission.
    pub fn banner_messages(&self) -> Vec<(&'static str, &str)> {
        Field::DISPLAY_ORDER
            .iter()
            .filter_map(|field| {
                self.messages(*field)
                    .first()
                    .map(|message| (field.label(), message.as_str()))
            })
            .collect()
    }
}

/// Outcome of validating one submission attempt. `Invalid` always carries at
/// least one message.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldErrors),
}

/// Validates the raw form input, collecting every applicable error.
///
/// Pure function over its input; `is_plausible_address` is only consulted
/// for non-blank addresses.
pub fn validate<F>(input: &FormInput, is_plausible_address: F) -> ValidationResult
where
    F: Fn(&str) -> bool,
{
    let mut errors = FieldErrors::default();

    let address = input.address.trim();
    if address.is_empty() {
        errors.push(Field::BitcoinAddress, "Bitcoin address is required");
    } else if !is_plausible_address(address) {
        errors.push(Field::BitcoinAddress, "Invalid Bitcoin address");
    }

    match parse_minor_units(&input.amount) {
        Ok(_) => {}
        Err(AmountError::Blank) => errors.push(Field::Amount, "Amount is required"),
        Err(AmountError::NotANumber) => errors.push(Field::Amount, "Amount must be a number"),
        Err(AmountError::NotPositive) => {
            errors.push(Field::Amount, "Amount must be greater than zero")
        }
        Err(AmountError::TooPrecise) => {
            errors.push(Field::Amount, "Amount has too many decimal places")
        }
        Err(AmountError::OutOfRange) => errors.push(Field::Amount, "Amount is too large"),
    }

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}

/// Surface-level shape check for Bitcoin addresses: legacy base58 (`1...`
/// or `3...`) or lowercase bech32 (`bc1`/`tb1`/`bcrt1`). Deliberately
/// permissive; the server performs the real decoding.
pub fn plausible_bitcoin_address(address: &str) -> bool {
    let legacy = Regex::new(r"^[13][a-km-zA-HJ-NP-Z1-9]{24,33}$").unwrap();
    let bech32 = Regex::new(r"^(bc1|tb1|bcrt1)[ac-hj-np-z02-9]{8,87}$").unwrap();
    legacy.is_match(address) || bech32.is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(address: &str, amount: &str) -> FormInput {
        FormInput {
            address: address.to_string(),
            amount: amount.to_string(),
            memo: String::new(),
            ack_memo: String::new(),
        }
    }

    fn errors(result: ValidationResult) -> FieldErrors {
        match result {
            ValidationResult::Invalid(errors) => errors,
            ValidationResult::Valid => panic!("expected Invalid"),
        }
    }

    const GENESIS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";

    #[test]
    fn accepts_valid_input() {
        let result = validate(&input(GENESIS, "1.5"), plausible_bitcoin_address);
        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn blank_address_is_reported() {
        let errors = errors(validate(&input("", "5"), plausible_bitcoin_address));
        assert_eq!(
            errors.messages(Field::BitcoinAddress),
            ["Bitcoin address is required"]
        );
        assert!(errors.messages(Field::Amount).is_empty());
    }

    #[test]
    fn implausible_address_is_reported() {
        let errors = errors(validate(&input("not-an-address", "5"), plausible_bitcoin_address));
        assert_eq!(
            errors.messages(Field::BitcoinAddress),
            ["Invalid Bitcoin address"]
        );
    }

    #[test]
    fn amount_failures_are_reported_individually() {
        for (raw, message) in [
            ("", "Amount is required"),
            ("ten", "Amount must be a number"),
            ("0", "Amount must be greater than zero"),
            ("-3", "Amount must be greater than zero"),
            ("0.0000001", "Amount has too many decimal places"),
        ] {
            let errors = errors(validate(&input(GENESIS, raw), plausible_bitcoin_address));
            assert_eq!(errors.messages(Field::Amount), [message], "input {raw:?}");
        }
    }

    #[test]
    fn collects_failures_from_both_fields() {
        let errors = errors(validate(&input("", ""), plausible_bitcoin_address));
        assert!(!errors.messages(Field::BitcoinAddress).is_empty());
        assert!(!errors.messages(Field::Amount).is_empty());
    }

    #[test]
    fn banner_shows_first_message_per_field_in_priority_order() {
        let mut errors = FieldErrors::default();
        errors.push(Field::Amount, "first amount message");
        errors.push(Field::Amount, "second amount message");
        errors.push(Field::BitcoinAddress, "address message");

        assert_eq!(
            errors.banner_messages(),
            [
                ("Bitcoin Address", "address message"),
                ("Amount", "first amount message"),
            ]
        );
    }

    #[test]
    fn custom_predicate_is_honored() {
        let result = validate(&input("anything", "1"), |_| true);
        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn plausibility_check_accepts_common_shapes() {
        assert!(plausible_bitcoin_address(GENESIS));
        assert!(plausible_bitcoin_address("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy"));
        assert!(plausible_bitcoin_address(
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"
        ));
    }

    #[test]
    fn plausibility_check_rejects_malformed_shapes() {
        assert!(!plausible_bitcoin_address("hello"));
        assert!(!plausible_bitcoin_address("1short"));
        // 0, O, I and l are not in the base58 alphabet.
        assert!(!plausible_bitcoin_address("10OIl1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert!(!plausible_bitcoin_address("bc1"));
    }
}
