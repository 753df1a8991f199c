//! Turn scheduling.
//!
//! A [`TurnScheduler`] answers one question each loop iteration: which
//! seat acts next? Schedulers know nothing about the board or about
//! game over; the session stops asking once the game has ended.
//!
//! - [`RoundRobin`]: seats in order, wrapping around
//! - [`RandomOrder`]: a uniformly random seat every turn

mod random_order;
mod round_robin;

pub use random_order::RandomOrder;
pub use round_robin::RoundRobin;

use crate::core::PlayerId;

/// Picks the next acting player.
pub trait TurnScheduler {
    /// Number of seats this scheduler chooses from.
    fn player_count(&self) -> usize;

    /// Choose the seat for the next turn.
    ///
    /// Called once per turn, whether or not the previous move was accepted.
    fn select_player(&mut self) -> PlayerId;
}

impl<T: TurnScheduler + ?Sized> TurnScheduler for Box<T> {
    fn player_count(&self) -> usize {
        (**self).player_count()
    }

    fn select_player(&mut self) -> PlayerId {
        (**self).select_player()
    }
}
