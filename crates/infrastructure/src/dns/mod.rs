pub mod answer_parser;
pub mod error_mapping;
pub mod resolver;

pub use answer_parser::AnswerParser;
pub use error_mapping::{error_code, to_resolver_error};
pub use resolver::SystemRecordResolver;
