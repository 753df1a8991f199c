//! Observer notifications.
//!
//! The board and the score composite publish what happens to them through
//! [`EventChannel`]s. Consumers (logging, UIs, tests) subscribe callbacks;
//! they observe only and never steer the game.
//!
//! For one attempted move, "change requested" always fires before
//! "cell changed". Nothing else is ordered across channels.

mod channel;
mod event;
pub mod logging;

pub use channel::{EventChannel, SubscriptionId};
pub use event::{CellChanged, ChangeRequested, GameOver};
