/// Errors that can occur while decoding or encoding tunnelling frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The buffer ended before a fixed-size field could be read.
    #[error("truncated frame (needed {needed} bytes, {remaining} remaining)")]
    Truncated { needed: usize, remaining: usize },

    /// The connection request info block declared a length other than 4.
    #[error("invalid connection request info structure length {0} (expected 4)")]
    InvalidConnReqLength(u8),

    /// The connection request info block declared a connection type other than 4.
    #[error("invalid connection type {0:#04x} (expected 0x04 tunnel connection)")]
    InvalidConnectionType(u8),

    /// A host info block declared a length other than 8.
    #[error("invalid host info structure length {0} (expected 8)")]
    InvalidHostInfoLength(u8),

    /// The sink failed after accepting `written` bytes.
    #[error("frame write failed after {written} bytes: {source}")]
    Write {
        written: usize,
        #[source]
        source: std::io::Error,
    },
}

impl FrameError {
    /// Bytes already handed to the sink before a write failure, if any.
    pub fn written(&self) -> Option<usize> {
        match self {
            FrameError::Write { written, .. } => Some(*written),
            _ => None,
        }
    }

    /// Returns true for errors caused by malformed or short input.
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, FrameError::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
