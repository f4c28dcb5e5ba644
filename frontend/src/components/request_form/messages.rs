use common::requests::SubmitError;

#[derive(Clone)]
pub enum Msg {
    UpdateAddress(String),
    UpdateAmount(String),
    UpdateMemo(String),
    UpdateAckMemo(String),
    ToggleAdvanced,
    Submit,
    SubmitFinished(Result<String, SubmitError>),
    CopyUri,
    GoBack,
}
