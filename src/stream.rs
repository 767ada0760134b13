use crate::errors::RankError;
use crate::player::Player;

/// A source of players that can be read exactly once, front to back.
///
/// Implementors only need to report how many players are left and hand out the
/// next one. `remaining` must be accurate: the streaming ranker keeps calling
/// `next_player` while it is non-zero.
pub trait PlayerStream {
    /// Number of players that can still be read.
    fn remaining(&self) -> usize;

    /// Reads the next player.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::StreamExhausted`] when called with nothing remaining.
    /// Other implementations may surface their own fetch failures.
    fn next_player(&mut self) -> Result<Player, RankError>;
}

/// A [`PlayerStream`] over an owned, in-memory list of players.
///
/// # Examples
///
/// ```
/// # use leaderboard::player::Player;
/// # use leaderboard::stream::{PlayerStream, VectorPlayerStream};
/// let mut stream = VectorPlayerStream::new(vec![Player::new("GOLDMASK", 7)]);
/// assert_eq!(stream.remaining(), 1);
///
/// assert_eq!(stream.next_player().unwrap().level, 7);
/// assert_eq!(stream.remaining(), 0);
/// assert!(stream.next_player().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct VectorPlayerStream {
    players: Vec<Player>,
    index: usize,
}

impl VectorPlayerStream {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players, index: 0 }
    }
}

impl From<Vec<Player>> for VectorPlayerStream {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}

impl PlayerStream for VectorPlayerStream {
    fn remaining(&self) -> usize {
        self.players.len() - self.index
    }

    fn next_player(&mut self) -> Result<Player, RankError> {
        let player = self
            .players
            .get(self.index)
            .cloned()
            .ok_or(RankError::StreamExhausted)?;
        self.index += 1;
        Ok(player)
    }
}
