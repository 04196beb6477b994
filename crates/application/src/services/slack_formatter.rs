use super::messages::error_message;
use crate::ports::PresentationFormatter;
use ferrous_dig_domain::{LookupError, LookupErrorKind, PresentationBlock, Record, RecordType};

/// Renders results as Slack Block Kit blocks.
///
/// Records become compact `context` blocks. MX blocks carry no type label.
/// Failures other than NoData/NotFound become a full `section` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlackBlockFormatter;

impl SlackBlockFormatter {
    pub fn new() -> Self {
        Self
    }

    fn record_block(hostname: &str, record_type: RecordType, record: &Record) -> PresentationBlock {
        match record {
            Record::Address { address, ttl } => PresentationBlock::context([
                hostname.to_string(),
                format!("Type: *{}*", record_type),
                format!("TTL: {}", ttl),
                format!("IP: `{}`", address),
            ]),
            Record::Mail { exchange, priority } => PresentationBlock::context([
                hostname.to_string(),
                format!("`{}`", exchange),
                format!("Priority: `{}`", priority),
            ]),
            Record::Text { value } => PresentationBlock::context([
                hostname.to_string(),
                format!("Type: *{}*", RecordType::TXT),
                format!("`{}`", value),
            ]),
            Record::NameServer { nameserver } => PresentationBlock::context([
                hostname.to_string(),
                format!("Type: *{}*", RecordType::NS),
                format!("`{}`", nameserver),
            ]),
        }
    }
}

impl PresentationFormatter for SlackBlockFormatter {
    type Block = PresentationBlock;

    fn render_records(
        &self,
        hostname: &str,
        record_type: RecordType,
        records: &[Record],
    ) -> Vec<PresentationBlock> {
        records
            .iter()
            .map(|record| Self::record_block(hostname, record_type, record))
            .collect()
    }

    fn render_error(
        &self,
        hostname: &str,
        record_type: RecordType,
        error: &LookupError,
    ) -> PresentationBlock {
        let text = error_message(hostname, record_type, error);
        match error.kind {
            LookupErrorKind::NoData | LookupErrorKind::NotFound => {
                PresentationBlock::context([text])
            }
            LookupErrorKind::Other => PresentationBlock::section(text),
        }
    }
}
