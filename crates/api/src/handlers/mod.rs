pub mod dig;
pub mod health;

pub use dig::{dig, slash_dig};
pub use health::health_check;
