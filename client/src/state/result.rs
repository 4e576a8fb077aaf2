//! The analysis currently shown on `/result`.

use gateway::types::UploadResult;

/// Set by the dashboard after an upload or by history's "view" action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultState {
    pub current: Option<UploadResult>,
}
