use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use knxprims_frame::{
    ConnReq, ConnRes, ConnStateReq, ConnStateRes, DiscReq, DiscRes, HostInfo, ServiceId,
};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One decoded field of a frame body.
#[derive(Debug, Serialize)]
pub struct FieldRow {
    pub name: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FieldRow {
    fn byte(name: &'static str, value: u8) -> Self {
        Self {
            name,
            value: format!("{value:#04x}"),
            detail: None,
        }
    }

    fn code(name: &'static str, value: u8, detail: String) -> Self {
        Self {
            name,
            value: format!("{value:#04x}"),
            detail: Some(detail),
        }
    }

    fn host(name: &'static str, info: &HostInfo) -> Self {
        Self {
            name,
            value: info.to_string(),
            detail: Some(info.protocol.describe()),
        }
    }
}

/// Field listing for the CLI views.
pub trait FrameFields {
    fn fields(&self) -> Vec<FieldRow>;
}

impl FrameFields for ConnReq {
    fn fields(&self) -> Vec<FieldRow> {
        vec![
            FieldRow::host("control", &self.control),
            FieldRow::host("tunnel", &self.tunnel),
            FieldRow::code("layer", self.layer.0, self.layer.describe()),
        ]
    }
}

impl FrameFields for ConnRes {
    fn fields(&self) -> Vec<FieldRow> {
        vec![
            FieldRow::byte("channel", self.channel),
            FieldRow::code("status", self.status.0, self.status.describe()),
            FieldRow::host("control", &self.control),
        ]
    }
}

impl FrameFields for ConnStateReq {
    fn fields(&self) -> Vec<FieldRow> {
        vec![
            FieldRow::byte("channel", self.channel),
            FieldRow::byte("status", self.status),
            FieldRow::host("control", &self.control),
        ]
    }
}

impl FrameFields for ConnStateRes {
    fn fields(&self) -> Vec<FieldRow> {
        vec![
            FieldRow::byte("channel", self.channel),
            FieldRow::code("status", self.status.0, self.status.describe()),
        ]
    }
}

impl FrameFields for DiscReq {
    fn fields(&self) -> Vec<FieldRow> {
        vec![
            FieldRow::byte("channel", self.channel),
            FieldRow::byte("status", self.status),
            FieldRow::host("control", &self.control),
        ]
    }
}

impl FrameFields for DiscRes {
    fn fields(&self) -> Vec<FieldRow> {
        vec![
            FieldRow::byte("channel", self.channel),
            FieldRow::byte("status", self.status),
        ]
    }
}

/// A decoded or freshly encoded frame body, ready for printing.
#[derive(Debug, Serialize)]
pub struct FrameReport {
    pub service: &'static str,
    pub service_id: u16,
    pub length: usize,
    pub trailing: usize,
    pub hex: String,
    pub fields: Vec<FieldRow>,
}

impl FrameReport {
    pub fn new(
        service: ServiceId,
        wire: &[u8],
        trailing: usize,
        fields: Vec<FieldRow>,
    ) -> Self {
        Self {
            service: knxprims_frame::service_name(service),
            service_id: service.0,
            length: wire.len(),
            trailing,
            hex: hex::encode(wire),
            fields,
        }
    }
}

pub fn print_report(report: &FrameReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE", "DETAIL"]);
            for field in &report.fields {
                table.add_row(vec![
                    field.name.to_string(),
                    field.value.clone(),
                    field.detail.clone().unwrap_or_default(),
                ]);
            }
            println!(
                "{} ({:#06x}) length={} trailing={}",
                report.service, report.service_id, report.length, report.trailing
            );
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let fields: Vec<String> = report
                .fields
                .iter()
                .map(|field| match &field.detail {
                    Some(detail) => format!("{}={} ({detail})", field.name, field.value),
                    None => format!("{}={}", field.name, field.value),
                })
                .collect();
            println!(
                "service={} length={} trailing={} {}",
                report.service,
                report.length,
                report.trailing,
                fields.join(" ")
            );
        }
        OutputFormat::Raw => print_line(&report.hex),
    }
}

pub fn print_line(text: &str) {
    let mut out = std::io::stdout();
    let _ = writeln!(out, "{text}");
    let _ = out.flush();
}
