use ferrous_dig_application::use_cases::DigCommand;
use ferrous_dig_domain::{CommandResponse, PresentationBlock};
use serde::Deserialize;

/// Body of `POST /dig`
#[derive(Debug, Clone, Deserialize)]
pub struct DigRequest {
    pub hostname: String,
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
}

impl From<DigRequest> for DigCommand {
    fn from(req: DigRequest) -> Self {
        DigCommand::new(req.hostname, req.record_type)
    }
}

/// Slack slash command payload (`application/x-www-form-urlencoded`).
/// Only `text` is used: `<hostname> [type]`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlashCommandForm {
    #[serde(default)]
    pub text: String,
}

impl From<SlashCommandForm> for DigCommand {
    fn from(form: SlashCommandForm) -> Self {
        let mut args = form.text.split_whitespace();
        let hostname = args.next().unwrap_or_default().to_string();
        let record_type = args.next().map(str::to_string);
        DigCommand::new(hostname, record_type)
    }
}

pub type DigResponse = CommandResponse<PresentationBlock>;
