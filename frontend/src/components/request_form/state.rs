//! Component state for the payment request form.

use common::model::form::FormInput;

/// UI stage of the request flow. The form is editable in `Form`, locked
/// while a request is in flight in `Submitting`, and replaced by the
/// shareable link in `Result`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Form,
    Submitting,
    Result { uri: String },
}

/// State container for the request form component.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct RequestFormComponent {
    /// Current text of the address field.
    pub address: String,
    /// Current text of the amount field (decimal, major units).
    pub amount: String,
    /// Current text of the memo field.
    pub memo: String,
    /// Current text of the ack memo field.
    pub ack_memo: String,
    /// Whether the optional memo fields are disclosed.
    pub advanced_open: bool,
    /// Current UI stage; decides which panel is rendered.
    pub stage: Stage,
}

impl RequestFormComponent {
    pub fn new() -> Self {
        Self {
            address: String::new(),
            amount: String::new(),
            memo: String::new(),
            ack_memo: String::new(),
            advanced_open: false,
            stage: Stage::Form,
        }
    }

    /// Snapshot of the field values for one validation + submit cycle.
    pub fn form_input(&self) -> FormInput {
        FormInput {
            address: self.address.clone(),
            amount: self.amount.clone(),
            memo: self.memo.clone(),
            ack_memo: self.ack_memo.clone(),
        }
    }

    /// Clears every field. Used when returning from the result view so the
    /// next request starts from a blank form.
    pub fn clear_fields(&mut self) {
        self.address.clear();
        self.amount.clear();
        self.memo.clear();
        self.ack_memo.clear();
    }
}
