#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed turn data: {0}")]
    Parse(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing item to remove!")]
    MissingRemoveTarget,

    #[error("missing a label for the new turn entry!")]
    MissingLabel,
}
