use ferrous_dig_application::ports::{PresentationFormatter, RecordResolver};
use ferrous_dig_application::use_cases::{DigCommandUseCase, LookupRecordsUseCase};
use ferrous_dig_domain::Config;
use ferrous_dig_infrastructure::dns::SystemRecordResolver;
use std::sync::Arc;

/// Shared services built once at startup.
pub struct Services {
    pub lookup: Arc<LookupRecordsUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver: Arc<dyn RecordResolver> =
            Arc::new(SystemRecordResolver::from_config(&config.resolver)?);

        Ok(Self {
            lookup: Arc::new(LookupRecordsUseCase::new(resolver)),
        })
    }

    pub fn dig_command<F: PresentationFormatter>(&self, formatter: F) -> DigCommandUseCase<F> {
        DigCommandUseCase::new(Arc::clone(&self.lookup), formatter)
    }
}
