pub mod align;
pub mod long;
pub mod permissions;
pub mod time;

pub use long::{total_line, LongFormatter};
