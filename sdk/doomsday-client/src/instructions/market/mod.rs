pub mod initialize_platform;
pub mod create_event;
pub mod place_bet;
pub mod resolve_event;
pub mod claim_winnings;
pub mod cancel_event;
pub mod claim_refund;
pub mod update_platform;

pub use initialize_platform::*;
pub use create_event::*;
pub use place_bet::*;
pub use resolve_event::*;
pub use claim_winnings::*;
pub use cancel_event::*;
pub use claim_refund::*;
pub use update_platform::*;
