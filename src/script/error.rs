use thiserror::Error;

use crate::workspace::error::WorkspaceError;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("no element '{0}' on the current screen")]
    UnknownElement(String),

    #[error("alias '{0}' is already bound")]
    DuplicateAlias(String),

    #[error(transparent)]
    Rejected(#[from] WorkspaceError),

    #[error("failed to parse edit script: {0}")]
    Parse(#[from] serde_yaml::Error),
}
