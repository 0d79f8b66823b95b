use knxprims_frame::{ConnReq, ConnRes, ConnStateReq, ConnStateRes, DiscReq, DiscRes, Message};
use tracing::{debug, warn};

use crate::cmd::{DecodeArgs, ServiceArg};
use crate::exit::{frame_error, hex_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_report, FrameFields, FrameReport, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let data = parse_hex(&args.hex)?;
    if data.is_empty() {
        return Err(CliError::usage("frame hex must not be empty"));
    }
    let report = decode_report(args.service, &data)?;

    if report.trailing > 0 {
        if args.strict {
            return Err(CliError::new(
                DATA_INVALID,
                format!("{} trailing bytes after {} body", report.trailing, report.service),
            ));
        }
        warn!(trailing = report.trailing, "ignoring bytes after frame body");
    }

    print_report(&report, format);
    Ok(SUCCESS)
}

pub fn decode_report(service: ServiceArg, data: &[u8]) -> CliResult<FrameReport> {
    debug!(service = %service.service_id(), bytes = data.len(), "decoding frame body");
    match service {
        ServiceArg::ConnReq => decode_as::<ConnReq>(data),
        ServiceArg::ConnRes => decode_as::<ConnRes>(data),
        ServiceArg::ConnStateReq => decode_as::<ConnStateReq>(data),
        ServiceArg::ConnStateRes => decode_as::<ConnStateRes>(data),
        ServiceArg::DiscReq => decode_as::<DiscReq>(data),
        ServiceArg::DiscRes => decode_as::<DiscRes>(data),
    }
}

fn decode_as<M: Message + FrameFields>(data: &[u8]) -> CliResult<FrameReport> {
    let (message, consumed) =
        M::unpack(data).map_err(|err| frame_error("decode failed", err))?;
    debug!(consumed, total = data.len(), "decoded frame body");
    Ok(FrameReport::new(
        M::SERVICE,
        &data[..consumed],
        data.len() - consumed,
        message.fields(),
    ))
}

/// Parse hex input, ignoring whitespace, `:` separators and a leading `0x`.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(digits).map_err(hex_error)
}
