use ferrous_dig_application::services::SlackBlockFormatter;
use ferrous_dig_application::use_cases::DigCommandUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dig: Arc<DigCommandUseCase<SlackBlockFormatter>>,
}
