//! Exit code definitions for CLI commands.
//!
//! - 0: Success
//! - 1: General error
//! - 3: Invalid arguments or configuration
//! - 4: Track not found
//! - 5: I/O failure

use std::process::ExitCode;

use crate::config::ConfigError;
use crate::data::DataError;
use crate::export::ExportError;

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    /// Success
    Ok = 0,
    /// General error
    Error = 1,
    /// Invalid arguments or configuration
    Args = 3,
    /// Track not found
    NotFound = 4,
    /// I/O failure
    Io = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// Maps an error to the appropriate exit code.
pub fn exit_code_for_error(err: &anyhow::Error) -> Exit {
    if let Some(data_err) = err.downcast_ref::<DataError>() {
        return match data_err {
            DataError::TrackNotFound { .. } => Exit::NotFound,
            DataError::Read { .. } => Exit::Io,
            DataError::Parse(_) => Exit::Error,
        };
    }

    if err.downcast_ref::<ConfigError>().is_some() {
        return Exit::Args;
    }

    if err.downcast_ref::<ExportError>().is_some() {
        return Exit::Io;
    }

    Exit::Error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(Exit::Ok as u8, 0);
        assert_eq!(Exit::Error as u8, 1);
        assert_eq!(Exit::Args as u8, 3);
        assert_eq!(Exit::NotFound as u8, 4);
        assert_eq!(Exit::Io as u8, 5);
    }

    #[test]
    fn test_track_not_found_maps_to_code_4() {
        let err = DataError::TrackNotFound {
            id: "TCC_9999_XXX_000".into(),
        };
        let anyhow_err = anyhow::Error::new(err);
        assert_eq!(exit_code_for_error(&anyhow_err), Exit::NotFound);
    }

    #[test]
    fn test_data_read_maps_to_io() {
        let err = DataError::Read {
            path: "/no/such/file.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let anyhow_err = anyhow::Error::new(err);
        assert_eq!(exit_code_for_error(&anyhow_err), Exit::Io);
    }

    #[test]
    fn test_data_parse_maps_to_general_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ bad").unwrap_err();
        let anyhow_err = anyhow::Error::new(DataError::Parse(parse_err));
        assert_eq!(exit_code_for_error(&anyhow_err), Exit::Error);
    }

    #[test]
    fn test_config_error_maps_to_args() {
        let anyhow_err = anyhow::Error::new(ConfigError::InvalidPageWindow);
        assert_eq!(exit_code_for_error(&anyhow_err), Exit::Args);

        let anyhow_err = anyhow::Error::new(ConfigError::UnknownTheme("x".into()));
        assert_eq!(exit_code_for_error(&anyhow_err), Exit::Args);
    }

    #[test]
    fn test_export_error_maps_to_io() {
        let err = ExportError::Write {
            path: "/nonexistent/itcc_tracks.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let anyhow_err = anyhow::Error::new(err);
        assert_eq!(exit_code_for_error(&anyhow_err), Exit::Io);
    }

    #[test]
    fn test_unknown_error_maps_to_general() {
        let anyhow_err = anyhow::anyhow!("something else entirely");
        assert_eq!(exit_code_for_error(&anyhow_err), Exit::Error);
    }
}
