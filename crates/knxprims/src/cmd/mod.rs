use std::net::SocketAddrV4;

use clap::{Args, Subcommand, ValueEnum};
use knxprims_frame::{
    ServiceId, CONN_REQ, CONN_RES, CONN_STATE_REQ, CONN_STATE_RES, DISC_REQ, DISC_RES,
};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod describe;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a hex-encoded frame body.
    Decode(DecodeArgs),
    /// Encode a frame body from field values and print it as hex.
    Encode(EncodeArgs),
    /// Describe a one-byte status, state, layer or protocol code.
    Describe(DescribeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Describe(args) => describe::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Frame body selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ServiceArg {
    ConnReq,
    ConnRes,
    ConnStateReq,
    ConnStateRes,
    DiscReq,
    DiscRes,
}

impl ServiceArg {
    pub fn service_id(self) -> ServiceId {
        match self {
            ServiceArg::ConnReq => CONN_REQ,
            ServiceArg::ConnRes => CONN_RES,
            ServiceArg::ConnStateReq => CONN_STATE_REQ,
            ServiceArg::ConnStateRes => CONN_STATE_RES,
            ServiceArg::DiscReq => DISC_REQ,
            ServiceArg::DiscRes => DISC_RES,
        }
    }
}

/// Code table selector for `describe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CodeKind {
    Layer,
    ConnStatus,
    ConnState,
    Protocol,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frame body type.
    pub service: ServiceArg,
    /// Frame body as hex (whitespace, ':' and a leading 0x are ignored).
    pub hex: String,
    /// Fail if bytes remain after the frame body.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Frame body type.
    pub service: ServiceArg,
    /// Tunnel channel.
    #[arg(long, short = 'c', default_value = "0", value_parser = parse_byte)]
    pub channel: u8,
    /// Status byte (response status, connection state or free-form request status).
    #[arg(long, short = 's', default_value = "0", value_parser = parse_byte)]
    pub status: u8,
    /// Tunnel layer for connection requests.
    #[arg(long, default_value = "0x02", value_parser = parse_byte)]
    pub layer: u8,
    /// Control endpoint (ADDR:PORT).
    #[arg(long, default_value = "0.0.0.0:0")]
    pub control: SocketAddrV4,
    /// Data endpoint for connection requests (ADDR:PORT). Defaults to the control endpoint.
    #[arg(long)]
    pub tunnel: Option<SocketAddrV4>,
    /// Describe endpoints as TCP instead of UDP.
    #[arg(long)]
    pub tcp: bool,
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Code table.
    pub kind: CodeKind,
    /// Code value (decimal or 0x-prefixed hex).
    #[arg(value_parser = parse_byte)]
    pub code: u8,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Parse a byte given as decimal or `0x`-prefixed hex.
pub fn parse_byte(input: &str) -> Result<u8, String> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => input.parse::<u8>(),
    };
    parsed.map_err(|_| format!("not a byte value: {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex_bytes() {
        assert_eq!(parse_byte("39"), Ok(39));
        assert_eq!(parse_byte("0x27"), Ok(0x27));
        assert_eq!(parse_byte("0XfF"), Ok(0xFF));
        assert!(parse_byte("256").is_err());
        assert!(parse_byte("0x").is_err());
        assert!(parse_byte("abc").is_err());
    }

    #[test]
    fn service_args_map_to_ids() {
        assert_eq!(ServiceArg::ConnReq.service_id(), CONN_REQ);
        assert_eq!(ServiceArg::DiscRes.service_id(), DISC_RES);
    }
}
