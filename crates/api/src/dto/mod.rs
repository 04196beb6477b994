pub mod dig;

pub use dig::{DigRequest, DigResponse, SlashCommandForm};
