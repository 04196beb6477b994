use ferrous_dig_domain::{LookupError, LookupResult, Record, RecordType};

/// Renders lookup results for an output surface.
pub trait PresentationFormatter: Send + Sync {
    type Block: Send;

    /// One block per record, in the given order.
    fn render_records(
        &self,
        hostname: &str,
        record_type: RecordType,
        records: &[Record],
    ) -> Vec<Self::Block>;

    fn render_error(
        &self,
        hostname: &str,
        record_type: RecordType,
        error: &LookupError,
    ) -> Self::Block;

    fn render(&self, result: &LookupResult, hostname: &str) -> Vec<Self::Block> {
        let record_type = result.request.record_type;
        match &result.outcome {
            Ok(records) => self.render_records(hostname, record_type, records),
            Err(error) => vec![self.render_error(hostname, record_type, error)],
        }
    }
}
