//! Random turn order.

use super::TurnScheduler;
use crate::core::{EngineError, GameRng, PlayerId, Result};

/// Every turn goes to a uniformly random seat. Seats may act several
/// times in a row.
#[derive(Clone, Debug)]
pub struct RandomOrder {
    player_count: usize,
    rng: GameRng,
}

impl RandomOrder {
    pub fn new(player_count: usize, rng: GameRng) -> Result<Self> {
        if player_count == 0 {
            return Err(EngineError::NoPlayers);
        }
        if player_count > 255 {
            return Err(EngineError::invalid_config("at most 255 players supported"));
        }
        Ok(Self { player_count, rng })
    }
}

impl TurnScheduler for RandomOrder {
    fn player_count(&self) -> usize {
        self.player_count
    }

    fn select_player(&mut self) -> PlayerId {
        PlayerId::new(self.rng.gen_range_usize(0..self.player_count) as u8)
    }
}
