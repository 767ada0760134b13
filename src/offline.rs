//! Rankers that see the whole population at once.
//!
//! Both rankers take the players by mutable reference and leave them reordered:
//! the heap ranker leaves a partially heapsorted vector, the quickselect ranker a
//! partitioned one. Callers that need the original order must rank a copy.

use std::time::Instant;

use crate::heap::{make_max_heap, pop_max};
use crate::player::{Player, RankingResult};

/// Number of players in the top decile of a population of `n`, i.e. `floor(0.1 * n)`.
///
/// # Examples
///
/// ```
/// # use leaderboard::offline::decile_len;
/// assert_eq!(decile_len(132), 13);
/// assert_eq!(decile_len(9), 0);
/// ```
pub fn decile_len(n: usize) -> usize {
    n / 10
}

/// Selects and sorts the top 10% of `players` with an early-stopping heapsort.
///
/// The whole vector is turned into a max-heap, then the maximum is popped into the
/// tail `k` times. The tail then holds the top decile and is copied out and sorted
/// ascending. Runs in O(n + k log n) with no extra space beyond the result.
///
/// The order of `players` is modified.
///
/// # Examples
///
/// ```
/// # use leaderboard::offline::heap_rank;
/// # use leaderboard::player::Player;
/// let mut players: Vec<Player> = (1..=20).map(|l| Player::new(format!("P{}", l), l)).collect();
/// let result = heap_rank(&mut players);
///
/// let levels: Vec<usize> = result.top.iter().map(|p| p.level).collect();
/// assert_eq!(levels, vec![19, 20]);
/// assert!(result.cutoffs.is_empty());
/// ```
pub fn heap_rank(players: &mut [Player]) -> RankingResult {
    let start = Instant::now();

    let n = players.len();
    let k = decile_len(n);

    make_max_heap(players);
    for popped in 0..k {
        pop_max(&mut players[..n - popped]);
    }

    let mut top = players[n - k..].to_vec();
    top.sort();

    let elapsed = start.elapsed();
    log::debug!("heap_rank selected {} of {} players in {:?}", k, n, elapsed);

    RankingResult {
        top,
        elapsed,
        ..Default::default()
    }
}

/// Selects and sorts the top 10% of `players` with quickselect followed by quicksort.
///
/// Quickselect partitions until the boundary index `n - floor(0.1 * n)` is in place,
/// then only the slice at and after that index is quicksorted. Expected O(n) for the
/// selection plus O(k log k) for the sort; last-element pivoting makes already sorted
/// input the O(n²) worst case.
///
/// The order of `players` is modified.
///
/// # Examples
///
/// ```
/// # use leaderboard::offline::quick_select_rank;
/// # use leaderboard::player::Player;
/// let mut players: Vec<Player> = (1..=10).rev().map(|l| Player::new(format!("P{}", l), l)).collect();
/// let result = quick_select_rank(&mut players);
///
/// assert_eq!(result.top, vec![Player::new("P10", 10)]);
/// ```
pub fn quick_select_rank(players: &mut [Player]) -> RankingResult {
    let start = Instant::now();

    let n = players.len();
    let boundary = n - decile_len(n);

    if boundary < n {
        quick_select(players, boundary);
        quick_sort(&mut players[boundary..]);
    }
    let top = players[boundary..].to_vec();

    let elapsed = start.elapsed();
    log::debug!(
        "quick_select_rank selected {} of {} players in {:?}",
        n - boundary,
        n,
        elapsed
    );

    RankingResult {
        top,
        elapsed,
        ..Default::default()
    }
}

/// Lomuto partition of `players[low..=high]` around the level of `players[high]`.
///
/// Players whose level is less than or equal to the pivot's are moved in front of it,
/// so ties always land in the lower part. Returns the pivot's final index.
///
/// # Examples
///
/// ```
/// # use leaderboard::offline::partition;
/// # use leaderboard::player::Player;
/// let mut players = vec![
///     Player::new("a", 9),
///     Player::new("b", 2),
///     Player::new("c", 5),
///     Player::new("d", 5),
/// ];
/// let pivot = partition(&mut players, 0, 3);
///
/// assert_eq!(pivot, 2);
/// assert_eq!(players[pivot].name, "d");
/// assert_eq!(players[3].level, 9);
/// ```
pub fn partition(players: &mut [Player], low: usize, high: usize) -> usize {
    let pivot = players[high].level;
    let mut lower = low;
    for i in low..high {
        if players[i].level <= pivot {
            players.swap(lower, i);
            lower += 1;
        }
    }
    players.swap(lower, high);
    lower
}

/// Partitions `players` until the player at `k` is the one a full ascending sort would
/// put there, with nothing larger before it and nothing smaller after it.
///
/// Only the side containing `k` is partitioned further.
pub fn quick_select(players: &mut [Player], k: usize) {
    if players.is_empty() {
        return;
    }
    debug_assert!(k < players.len());

    let (mut low, mut high) = (0, players.len() - 1);
    while low < high {
        let pivot = partition(players, low, high);
        if pivot == k {
            return;
        } else if pivot < k {
            low = pivot + 1;
        } else {
            high = pivot - 1;
        }
    }
}

/// Sorts `players` ascending by level using Lomuto quicksort.
///
/// Pending ranges are kept on an explicit stack so sorted or reverse-sorted input
/// cannot exhaust the call stack.
pub fn quick_sort(players: &mut [Player]) {
    if players.len() < 2 {
        return;
    }

    let mut pending = vec![(0, players.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(players, low, high);
        if pivot > low {
            pending.push((low, pivot - 1));
        }
        pending.push((pivot + 1, high));
    }
}
