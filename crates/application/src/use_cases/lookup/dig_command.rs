use super::LookupRecordsUseCase;
use crate::ports::PresentationFormatter;
use ferrous_dig_domain::{CommandResponse, LookupError, LookupRequest, RecordType};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Arguments of one `dig` invocation as they arrive from the caller.
#[derive(Debug, Clone, Default)]
pub struct DigCommand {
    pub hostname: String,
    /// Record type tag, case-insensitive; absent or unknown means `A`
    pub record_type: Option<String>,
}

impl DigCommand {
    pub fn new(hostname: impl Into<String>, record_type: Option<String>) -> Self {
        Self {
            hostname: hostname.into(),
            record_type,
        }
    }
}

/// Resolves and renders a `dig` command.
///
/// Always produces a response: lookup failures and invalid arguments are
/// rendered as error blocks.
pub struct DigCommandUseCase<F> {
    lookup: Arc<LookupRecordsUseCase>,
    formatter: F,
}

impl<F: PresentationFormatter> DigCommandUseCase<F> {
    pub fn new(lookup: Arc<LookupRecordsUseCase>, formatter: F) -> Self {
        Self { lookup, formatter }
    }

    #[instrument(skip_all, fields(hostname = %command.hostname))]
    pub async fn execute(&self, command: DigCommand) -> CommandResponse<F::Block> {
        let type_tag = command.record_type.as_deref();

        let request = match LookupRequest::from_command(&command.hostname, type_tag) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Rejected dig command");
                let block = self.formatter.render_error(
                    &command.hostname,
                    RecordType::parse_lenient(type_tag),
                    &LookupError::other(e.to_string()),
                );
                return CommandResponse::in_channel(vec![block]);
            }
        };

        let result = self.lookup.execute(request).await;
        let blocks = self.formatter.render(&result, &result.request.hostname);

        info!(
            record_type = %result.request.record_type,
            blocks = blocks.len(),
            "Dig command completed"
        );

        CommandResponse::in_channel(blocks)
    }
}
