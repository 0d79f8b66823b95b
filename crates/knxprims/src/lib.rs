//! KNXnet/IP tunnelling primitives.
//!
//! # Crate Structure
//!
//! - [`frame`] — Bit-exact codec for the connection-lifecycle frames
//!   (connect, connection state, disconnect)
//!
//! Enabling the `cli` feature builds the `knxprims` binary, an offline tool
//! that decodes, encodes and describes frames.

/// Re-export frame codec types.
pub mod frame {
    pub use knxprims_frame::*;
}
