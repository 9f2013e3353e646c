use thiserror::Error;

use crate::design::element_model::ScreenId;

/// Workspace operations that were rejected. The workspace is left exactly as
/// it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("cannot delete '{0}': it is the only screen")]
    LastScreen(ScreenId),

    #[error("no screen with id '{0}'")]
    ScreenNotFound(ScreenId),
}
