use std::time::Duration;

/// Provides functionality to format elapsed times into human-readable strings with appropriate units.
///
/// Ranking a few thousand players takes microseconds while ranking millions takes
/// seconds, so the unit is picked from the magnitude of the duration.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use leaderboard::traits::FormatElapsed;
///
/// assert_eq!(Duration::from_micros(3).format_elapsed(), "3.00 µs");
/// assert_eq!(Duration::from_millis(1500).format_elapsed(), "1.50 s");
/// ```
pub trait FormatElapsed {
    /// Formats the duration with one of the following units:
    /// - nanoseconds (0 ns to 999 ns)
    /// - microseconds (1.00 µs to 999.99 µs)
    /// - milliseconds (1.00 ms to 999.99 ms)
    /// - seconds (1.00 s and above)
    ///
    /// Values are formatted with two decimal places for µs and above,
    /// and no decimal places for nanoseconds.
    fn format_elapsed(&self) -> String;
}

impl FormatElapsed for Duration {
    fn format_elapsed(&self) -> String {
        const MICRO: u128 = 1_000;
        const MILLI: u128 = MICRO * 1_000;
        const SECOND: u128 = MILLI * 1_000;

        match self.as_nanos() {
            nanos if nanos >= SECOND => format!("{:.2} s", nanos as f64 / SECOND as f64),
            nanos if nanos >= MILLI => format!("{:.2} ms", nanos as f64 / MILLI as f64),
            nanos if nanos >= MICRO => format!("{:.2} µs", nanos as f64 / MICRO as f64),
            nanos => format!("{} ns", nanos),
        }
    }
}
