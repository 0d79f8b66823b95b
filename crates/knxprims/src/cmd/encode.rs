use std::net::SocketAddrV4;

use bytes::BytesMut;
use knxprims_frame::{
    service_name, ConnReq, ConnRes, ConnResStatus, ConnState, ConnStateReq, ConnStateRes, DiscReq, DiscRes,
    HostInfo, Message, TunnelLayer,
};
use tracing::debug;

use crate::cmd::{EncodeArgs, ServiceArg};
use crate::exit::{frame_error, CliError, CliResult, SUCCESS};
use crate::output::{print_report, FrameFields, FrameReport, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let report = encode_report(&args)?;
    print_report(&report, format);
    Ok(SUCCESS)
}

pub fn encode_report(args: &EncodeArgs) -> CliResult<FrameReport> {
    if args.tunnel.is_some() && args.service != ServiceArg::ConnReq {
        return Err(CliError::usage(format!(
            "--tunnel only applies to conn-req, not {}",
            service_name(args.service.service_id())
        )));
    }

    let host = |addr: SocketAddrV4| {
        if args.tcp {
            HostInfo::tcp(addr)
        } else {
            HostInfo::udp(addr)
        }
    };
    let control = host(args.control);

    match args.service {
        ServiceArg::ConnReq => encode_as(&ConnReq::new(
            control,
            args.tunnel.map(host).unwrap_or(control),
            TunnelLayer(args.layer),
        )),
        ServiceArg::ConnRes => encode_as(&ConnRes {
            channel: args.channel,
            status: ConnResStatus(args.status),
            control,
        }),
        ServiceArg::ConnStateReq => encode_as(&ConnStateReq {
            channel: args.channel,
            status: args.status,
            control,
        }),
        ServiceArg::ConnStateRes => encode_as(&ConnStateRes {
            channel: args.channel,
            status: ConnState(args.status),
        }),
        ServiceArg::DiscReq => encode_as(&DiscReq {
            channel: args.channel,
            status: args.status,
            control,
        }),
        ServiceArg::DiscRes => encode_as(&DiscRes {
            channel: args.channel,
            status: args.status,
        }),
    }
}

fn encode_as<M: Message + FrameFields>(message: &M) -> CliResult<FrameReport> {
    let mut buf = BytesMut::with_capacity(M::WIRE_SIZE);
    let written = message
        .encode(&mut buf)
        .map_err(|err| frame_error("encode failed", err))?;
    debug!(written, "encoded frame body");
    Ok(FrameReport::new(M::SERVICE, &buf, 0, message.fields()))
}
