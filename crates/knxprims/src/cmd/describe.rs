use knxprims_frame::{ConnResStatus, ConnState, HostProtocol, TunnelLayer};
use serde::Serialize;

use crate::cmd::{CodeKind, DescribeArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_line, OutputFormat};

#[derive(Debug, Serialize)]
struct CodeOutput {
    kind: &'static str,
    code: u8,
    description: String,
}

pub fn run(args: DescribeArgs, format: OutputFormat) -> CliResult<i32> {
    let output = CodeOutput {
        kind: kind_name(args.kind),
        code: args.code,
        description: describe(args.kind, args.code),
    };

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table | OutputFormat::Pretty => println!(
            "{} {:#04x}: {}",
            output.kind, output.code, output.description
        ),
        OutputFormat::Raw => print_line(&output.description),
    }
    Ok(SUCCESS)
}

pub fn describe(kind: CodeKind, code: u8) -> String {
    match kind {
        CodeKind::Layer => TunnelLayer(code).describe(),
        CodeKind::ConnStatus => ConnResStatus(code).describe(),
        CodeKind::ConnState => ConnState(code).describe(),
        CodeKind::Protocol => HostProtocol(code).describe(),
    }
}

fn kind_name(kind: CodeKind) -> &'static str {
    match kind {
        CodeKind::Layer => "layer",
        CodeKind::ConnStatus => "conn-status",
        CodeKind::ConnState => "conn-state",
        CodeKind::Protocol => "protocol",
    }
}
