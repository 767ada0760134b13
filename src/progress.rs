use indicatif::{ProgressBar, ProgressStyle};

use crate::errors::RankError;
use crate::player::Player;
use crate::stream::PlayerStream;

/// Wraps a [`PlayerStream`] and advances a progress bar for every player read.
pub struct ProgressStream<S> {
    inner: S,
    bar: ProgressBar,
}

impl<S: PlayerStream> ProgressStream<S> {
    pub fn new(inner: S) -> Self {
        let bar = ProgressBar::new(inner.remaining() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{elapsed_precise}] {pos}/{len} players streamed")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { inner, bar }
    }

    /// Finishes the bar and hands back the wrapped stream.
    pub fn finish(self) -> S {
        self.bar.finish_and_clear();
        self.inner
    }
}

impl<S: PlayerStream> PlayerStream for ProgressStream<S> {
    fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    fn next_player(&mut self) -> Result<Player, RankError> {
        let player = self.inner.next_player()?;
        self.bar.inc(1);
        Ok(player)
    }
}
