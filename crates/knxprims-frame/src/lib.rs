//! Bit-exact codec for KNXnet/IP tunnelling connection-lifecycle frames.
//!
//! Six frame bodies are covered: connection request/response, connection
//! state request/response and disconnect request/response. Every body has a
//! fixed layout built from single bytes and the 8-byte [`HostInfo`] endpoint
//! descriptor. Decoding reports how many bytes were consumed; encoding writes
//! to any `std::io::Write` sink and reports how many bytes were written.
//!
//! The outer envelope (header and service dispatch), sockets and the tunnel
//! session state machine live elsewhere.

pub mod codes;
pub mod connect;
pub mod connstate;
pub mod disconnect;
pub mod error;
pub mod hostinfo;
pub mod message;
pub mod reader;
pub mod service;
pub mod writer;

pub use codes::{ConnResStatus, ConnState, TunnelLayer};
pub use connect::{ConnReq, ConnRes};
pub use connstate::{ConnStateReq, ConnStateRes};
pub use disconnect::{DiscReq, DiscRes};
pub use error::{FrameError, Result};
pub use hostinfo::{HostInfo, HostProtocol};
pub use message::Message;
pub use reader::{FieldReader, Unpack};
pub use service::{
    service_name, ServiceId, CONN_REQ, CONN_RES, CONN_STATE_REQ, CONN_STATE_RES, DISC_REQ,
    DISC_RES,
};
pub use writer::{FieldWriter, Pack};
