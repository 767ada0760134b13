use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::errors::RankError;

/// A ranked entity: a display name and an integer level.
///
/// Players are ordered by `level` first. Equal levels fall back to `name` so that
/// sorting and heap operations are reproducible across runs.
///
/// # Examples
///
/// ```
/// # use leaderboard::player::Player;
/// let low = Player::new("WYLDER", 994);
/// let high = Player::new("DUCHESS", 1399);
/// assert!(low < high);
/// assert!(Player::new("A", 5) < Player::new("B", 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
    pub level: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Parses a single `NAME,LEVEL` record.
    ///
    /// Surrounding whitespace around both fields is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use leaderboard::player::Player;
    /// let player = Player::from_record("RECLUSE, 994").unwrap();
    /// assert_eq!(player, Player::new("RECLUSE", 994));
    /// assert!(Player::from_record("RECLUSE").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RankError::ParseError`] if the record has no comma, an empty name,
    /// or a level that is not a non-negative integer.
    pub fn from_record(record: &str) -> Result<Player, RankError> {
        let (name, level) = record
            .rsplit_once(',')
            .ok_or_else(|| RankError::ParseError(format!("expected NAME,LEVEL in {:?}", record)))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(RankError::ParseError(format!("empty name in {:?}", record)));
        }

        let level = level
            .trim()
            .parse::<usize>()
            .map_err(|e| RankError::ParseError(format!("bad level in {:?}: {}", record, e)))?;

        Ok(Player::new(name, level))
    }
}

impl Ord for Player {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level
            .cmp(&other.level)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.level)
    }
}

/// The outcome of a single ranking call.
///
/// # Fields
///
/// * `top` - Selected players in ascending order. The top decile for the offline
///   rankers, the final window for the streaming ranker.
/// * `cutoffs` - Players read so far mapped to the minimum level needed to be in the
///   window at that point. Only the streaming ranker fills this in; it is always
///   empty for the offline rankers.
/// * `elapsed` - Time spent selecting and sorting, excluding any stream fetches.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingResult {
    pub top: Vec<Player>,
    pub cutoffs: BTreeMap<usize, usize>,
    pub elapsed: Duration,
}

impl RankingResult {
    /// Minimum level required at the checkpoint taken after `count` players, if one was recorded.
    pub fn cutoff_at(&self, count: usize) -> Option<usize> {
        self.cutoffs.get(&count).copied()
    }

    /// Lowest level among the selected players.
    pub fn min_level(&self) -> Option<usize> {
        self.top.first().map(|p| p.level)
    }
}
