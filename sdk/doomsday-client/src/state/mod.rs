pub mod layout;
pub mod platform;
pub mod event;
pub mod bet;
pub mod user_stats;
pub mod pool;

pub use layout::*;
pub use platform::*;
pub use event::*;
pub use bet::*;
pub use user_stats::*;
pub use pool::*;
