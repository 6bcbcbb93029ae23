//! Move legality and state transitions.
//!
//! - `connectivity`: reachability over a cell set
//! - `validator`: ordered legality checks and the rejection taxonomy
//! - `engine`: the `RulesEngine` trait and the standard `ClaimRules`
//!
//! Nothing here holds state between calls.

pub mod connectivity;
pub mod validator;
pub mod engine;

pub use connectivity::are_connected;
pub use validator::{validate, RejectReason};
pub use engine::{ClaimRules, RulesEngine, TransitionError};
