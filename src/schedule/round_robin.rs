//! Strict rotation.

use super::TurnScheduler;
use crate::core::{EngineError, PlayerId, Result};

/// Seats in list order, wrapping after the last: A, B, A, B, ...
///
/// ```
/// use turnboard::core::PlayerId;
/// use turnboard::schedule::{RoundRobin, TurnScheduler};
///
/// let mut turns = RoundRobin::new(2).unwrap();
/// let order: Vec<_> = (0..4).map(|_| turns.select_player()).collect();
/// assert_eq!(order, vec![PlayerId(0), PlayerId(1), PlayerId(0), PlayerId(1)]);
/// ```
#[derive(Clone, Debug)]
pub struct RoundRobin {
    player_count: usize,
    next: usize,
}

impl RoundRobin {
    /// Rotate over `player_count` seats, starting with seat 0.
    pub fn new(player_count: usize) -> Result<Self> {
        if player_count == 0 {
            return Err(EngineError::NoPlayers);
        }
        if player_count > 255 {
            return Err(EngineError::invalid_config("at most 255 players supported"));
        }
        Ok(Self {
            player_count,
            next: 0,
        })
    }
}

impl TurnScheduler for RoundRobin {
    fn player_count(&self) -> usize {
        self.player_count
    }

    fn select_player(&mut self) -> PlayerId {
        let player = PlayerId::new(self.next as u8);
        self.next = (self.next + 1) % self.player_count;
        player
    }
}
