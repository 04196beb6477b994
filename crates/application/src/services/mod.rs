pub mod error_classifier;
pub mod messages;
pub mod record_normalizer;
pub mod slack_formatter;
pub mod text_formatter;

pub use error_classifier::ErrorClassifier;
pub use record_normalizer::RecordNormalizer;
pub use slack_formatter::SlackBlockFormatter;
pub use text_formatter::PlainTextFormatter;
