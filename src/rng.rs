//! Seedable randomness for drawing secret words.
//!
//! The game never touches a global RNG. It asks a [`WordSource`] for the next
//! word, so a run can be replayed with `--seed` and tests can pin the word.

use crate::words::WordPool;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Anything that can pick the next secret word out of a pool.
pub trait WordSource
{
    /// Returns an index into `pool.words()`. The pool is never empty.
    fn pick(&mut self, pool: &WordPool) -> usize;
}

/// Uniform word source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng
{
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng
{
    #[must_use]
    pub fn new(seed: u64) -> Self
    {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from OS entropy, keeping the seed around so it can be logged.
    #[must_use]
    pub fn from_entropy() -> Self
    {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64
    {
        self.seed
    }

    #[cfg(test)]
    pub fn inner_mut(&mut self) -> &mut ChaCha8Rng
    {
        &mut self.inner
    }
}

impl WordSource for GameRng
{
    fn pick(&mut self, pool: &WordPool) -> usize
    {
        self.inner.gen_range(0..pool.len())
    }
}

/// Replays a fixed list of pool indices, wrapping around at the end.
#[cfg(test)]
pub struct Scripted
{
    picks: Vec<usize>,
    next: usize,
}

#[cfg(test)]
impl Scripted
{
    pub fn new(picks: Vec<usize>) -> Self
    {
        Self { picks, next: 0 }
    }
}

#[cfg(test)]
impl WordSource for Scripted
{
    fn pick(&mut self, pool: &WordPool) -> usize
    {
        let pick = self.picks[self.next % self.picks.len()] % pool.len();
        self.next += 1;
        pick
    }
}
