//! Properties for the payment request form component.

use common::model::form::RequestDefaults;
use yew::prelude::*;

/// Configuration passed by the parent. One form core serves every
/// placement; placements differ only in their default copy and whether
/// panel changes fade.
#[derive(Properties, PartialEq, Clone)]
pub struct RequestFormProps {
    /// Placeholder strings applied to blank optional fields when the wire
    /// payload is built.
    #[prop_or_default]
    pub defaults: RequestDefaults,

    /// Whether panel transitions fade in or switch instantly.
    #[prop_or(true)]
    pub fade: bool,
}
