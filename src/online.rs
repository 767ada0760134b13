//! The single-pass ranker.
//!
//! Memory is bounded by the reporting interval: only the current window of the best
//! `reporting_interval` players is ever held, as a min-heap whose root is the level a
//! newcomer has to beat.

use std::time::{Duration, Instant};

use crate::errors::RankError;
use crate::heap::{push_min_heap, replace_min};
use crate::player::{Player, RankingResult};
use crate::stream::PlayerStream;

/// Reads `stream` to exhaustion, keeping the `reporting_interval` highest players seen
/// and recording the window minimum every `reporting_interval` players.
///
/// The returned [`RankingResult`] holds:
/// * `top` - the final window in ascending order
/// * `cutoffs` - player count milestones mapped to the minimum level needed to be in
///   the window at that point, plus an entry for the total count even when it is not
///   a multiple of the interval
/// * `elapsed` - time spent ranking, not counting calls to `next_player`
///
/// `reporting_interval` must be positive; this is only checked in debug builds.
///
/// # Errors
///
/// Any error returned by `next_player` is passed straight back. No partial result is
/// produced in that case.
///
/// # Examples
///
/// ```
/// # use leaderboard::online::rank_incoming;
/// # use leaderboard::player::Player;
/// # use leaderboard::stream::VectorPlayerStream;
/// let players: Vec<Player> = (1..=132).map(|l| Player::new(format!("P{}", l), l)).collect();
/// let mut stream = VectorPlayerStream::new(players);
///
/// let result = rank_incoming(&mut stream, 50).unwrap();
/// assert_eq!(result.top.len(), 50);
/// assert_eq!(result.cutoffs.keys().copied().collect::<Vec<_>>(), vec![50, 100, 132]);
/// assert_eq!(result.cutoff_at(132), Some(83));
/// ```
pub fn rank_incoming<S>(stream: &mut S, reporting_interval: usize) -> Result<RankingResult, RankError>
where
    S: PlayerStream + ?Sized,
{
    debug_assert!(reporting_interval > 0, "reporting interval must be positive");

    let mut result = RankingResult::default();
    let mut window: Vec<Player> = Vec::with_capacity(reporting_interval);
    let mut elapsed = Duration::ZERO;
    let mut count = 0;

    while stream.remaining() > 0 {
        let player = stream.next_player()?;
        let start = Instant::now();
        count += 1;

        if window.len() < reporting_interval {
            push_min_heap(&mut window, player);
        } else if player.level > window[0].level {
            replace_min(&mut window, player);
        }

        if count % reporting_interval == 0 && !window.is_empty() {
            result.cutoffs.insert(count, window[0].level);
        }

        elapsed += start.elapsed();
    }

    let start = Instant::now();
    if let Some(min) = window.first() {
        result.cutoffs.insert(count, min.level);
    }
    window.sort();
    result.top = window;
    elapsed += start.elapsed();

    log::debug!(
        "rank_incoming read {} players, kept {}, recorded {} cutoffs in {:?}",
        count,
        result.top.len(),
        result.cutoffs.len(),
        elapsed
    );

    result.elapsed = elapsed;
    Ok(result)
}
