use crate::ports::RecordResolver;
use crate::services::{ErrorClassifier, RecordNormalizer};
use ferrous_dig_domain::{LookupRequest, LookupResult, RecordType};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Dispatches a lookup to the resolver operation matching its record type.
///
/// Exactly one resolver call is made per request. Resolver failures are
/// classified and returned inside the [`LookupResult`], never propagated.
pub struct LookupRecordsUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl LookupRecordsUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(
        skip_all,
        fields(hostname = %request.hostname, record_type = %request.record_type)
    )]
    pub async fn execute(&self, request: LookupRequest) -> LookupResult {
        let hostname = request.hostname.as_ref();

        let outcome = match request.record_type {
            RecordType::A => self
                .resolver
                .resolve_a(hostname)
                .await
                .map(RecordNormalizer::addresses),
            RecordType::AAAA => self
                .resolver
                .resolve_aaaa(hostname)
                .await
                .map(RecordNormalizer::addresses),
            RecordType::MX => self
                .resolver
                .resolve_mx(hostname)
                .await
                .map(RecordNormalizer::mail_exchangers),
            RecordType::TXT => self
                .resolver
                .resolve_txt(hostname)
                .await
                .map(RecordNormalizer::texts),
            RecordType::NS => self
                .resolver
                .resolve_ns(hostname)
                .await
                .map(RecordNormalizer::nameservers),
        };

        match outcome {
            Ok(records) => {
                debug!(count = records.len(), "Lookup succeeded");
                LookupResult::success(request, records)
            }
            Err(e) => {
                let error = ErrorClassifier::classify(&e);
                warn!(
                    code = e.code.as_deref().unwrap_or("none"),
                    kind = ?error.kind,
                    error = %e,
                    "Lookup failed"
                );
                LookupResult::failure(request, error)
            }
        }
    }
}
