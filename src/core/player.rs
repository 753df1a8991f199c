//! Player identification and per-player storage.
//!
//! ## PlayerId
//!
//! Index of a seat in the session's ordered player list. Schedulers
//! return a `PlayerId`; the session maps it to the acting player.
//!
//! ## PlayerMap
//!
//! `Vec`-backed storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};

/// Seat index, 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat storage with O(1) access.
///
/// ```
/// use turnboard::core::{PlayerId, PlayerMap};
///
/// let mut seats = PlayerMap::from_vec(vec!["X", "O"]).unwrap();
/// *seats.get_mut(PlayerId::new(1)) = "O'";
/// assert_eq!(seats.player_count(), 2);
/// assert_eq!(seats.iter().last(), Some((PlayerId::new(1), &"O'")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Take ownership of an ordered list; seat `i` becomes `PlayerId(i)`.
    ///
    /// Returns `None` for an empty list or more than 255 entries.
    pub fn from_vec(data: Vec<T>) -> Option<Self> {
        if data.is_empty() || data.len() > 255 {
            return None;
        }
        Some(Self { data })
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a mutable reference to a player's data.
    ///
    /// Panics if `player` is not a seat of this map; the session checks
    /// scheduler output against `player_count` first.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec!["x", "o"]).unwrap();
        assert_eq!(map.player_count(), 2);

        assert!(PlayerMap::<i32>::from_vec(Vec::new()).is_none());
        assert!(PlayerMap::from_vec(vec![0u8; 256]).is_none());
        assert!(PlayerMap::from_vec(vec![0u8; 255]).is_some());
    }

    #[test]
    fn test_player_map_get_mut() {
        let mut map = PlayerMap::from_vec(vec![10, 20, 30]).unwrap();
        *map.get_mut(PlayerId::new(2)) += 1;

        let values: Vec<i32> = map.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![10, 20, 31]);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_vec(vec![0, 1, 2]).unwrap();

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }
}
