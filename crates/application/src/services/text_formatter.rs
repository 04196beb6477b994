use super::messages::error_message;
use crate::ports::PresentationFormatter;
use ferrous_dig_domain::{LookupError, Record, RecordType};

/// Renders results as tab separated lines for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl PresentationFormatter for PlainTextFormatter {
    type Block = String;

    fn render_records(
        &self,
        hostname: &str,
        record_type: RecordType,
        records: &[Record],
    ) -> Vec<String> {
        records
            .iter()
            .map(|record| match record {
                Record::Address { address, ttl } => {
                    format!("{}\t{}\tTTL {}\t{}", hostname, record_type, ttl, address)
                }
                Record::Mail { exchange, priority } => {
                    format!("{}\t{}\tpriority {}", hostname, exchange, priority)
                }
                Record::Text { value } => format!("{}\tTXT\t\"{}\"", hostname, value),
                Record::NameServer { nameserver } => format!("{}\tNS\t{}", hostname, nameserver),
            })
            .collect()
    }

    fn render_error(&self, hostname: &str, record_type: RecordType, error: &LookupError) -> String {
        error_message(hostname, record_type, error)
    }
}
