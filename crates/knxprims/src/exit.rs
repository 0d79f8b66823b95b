use std::fmt;

use knxprims_frame::FrameError;

// Exit codes follow sysexits-style conventions.
pub const SUCCESS: i32 = 0;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(USAGE, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    let code = if err.is_decode_error() {
        DATA_INVALID
    } else {
        INTERNAL
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn hex_error(err: hex::FromHexError) -> CliError {
    CliError::new(DATA_INVALID, format!("invalid hex input: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_map_to_data_invalid() {
        let err = frame_error(
            "decode failed",
            FrameError::Truncated {
                needed: 1,
                remaining: 0,
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("decode failed: truncated frame"));
    }

    #[test]
    fn write_errors_map_to_internal() {
        let err = frame_error(
            "encode failed",
            FrameError::Write {
                written: 3,
                source: std::io::Error::from(std::io::ErrorKind::WriteZero),
            },
        );
        assert_eq!(err.code, INTERNAL);
    }
}
