//! Resolution of CLI settings that do not come straight from clap.

use std::path::PathBuf;

use crate::CliError;

pub const SESSION_DIR_NAME: &str = "plagiguard";

/// Explicit `--session-dir` wins; otherwise `<config dir>/plagiguard`.
pub fn session_dir(explicit: Option<PathBuf>, config_dir: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(dir) = explicit.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    config_dir.map(|d| d.join(SESSION_DIR_NAME)).ok_or(CliError::NoSessionDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = session_dir(Some("/tmp/pg".into()), Some("/home/a/.config".into())).expect("dir");
        assert_eq!(dir, PathBuf::from("/tmp/pg"));
    }

    #[test]
    fn falls_back_to_config_dir() {
        let dir = session_dir(None, Some("/home/a/.config".into())).expect("dir");
        assert_eq!(dir, PathBuf::from("/home/a/.config/plagiguard"));
    }

    #[test]
    fn empty_explicit_dir_is_ignored() {
        let dir = session_dir(Some(PathBuf::new()), Some("/cfg".into())).expect("dir");
        assert_eq!(dir, PathBuf::from("/cfg/plagiguard"));
    }

    #[test]
    fn no_dir_at_all_is_an_error() {
        assert!(matches!(session_dir(None, None), Err(CliError::NoSessionDir)));
    }
}
