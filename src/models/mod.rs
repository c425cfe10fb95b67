mod category;
mod message;
mod stats;
mod temperature;

pub use category::Category;
pub use message::{Message, Role};
pub use stats::{SessionSummary, TurnStatistics};
pub use temperature::Temperature;
