use crate::languages::Lives;
use crate::rng::WordSource;
use crate::words::WordPool;
use log::{debug, info};

pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Values derived from the secret, the guesses and the number of lives.
/// Recomputed on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status
{
    pub wrong_count: usize,
    pub is_won: bool,
    pub is_lost: bool,
    pub is_over: bool,
}

pub fn derive_status(secret: &str, guessed: &[char], lives: usize) -> Status
{
    let wrong_count = guessed.iter().filter(|letter| !secret.contains(**letter)).count();
    let is_lost = wrong_count >= lives.saturating_sub(1);
    let is_won = secret.chars().all(|letter| guessed.contains(&letter));
    Status {
        wrong_count,
        is_won,
        is_lost,
        is_over: is_won || is_lost,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome
{
    Correct,
    Wrong,
    AlreadyGuessed,
    GameOver,
    Ignored,
}

impl GuessOutcome
{
    pub fn changed_state(self) -> bool
    {
        matches!(self, GuessOutcome::Correct | GuessOutcome::Wrong)
    }
}

/// Holds one session: the current secret word and the letters guessed so far.
pub struct Game<S: WordSource>
{
    pool: WordPool,
    lives: Lives,
    source: S,
    secret: String,
    guessed: Vec<char>,
}

impl<S: WordSource> Game<S>
{
    pub fn new(pool: WordPool, lives: Lives, mut source: S) -> Self
    {
        let secret = draw_word(&pool, &mut source);
        debug!("first secret drawn ({} letters)", secret.len());
        Self {
            pool,
            lives,
            source,
            secret,
            guessed: Vec::new(),
        }
    }

    /// Draws a fresh word and clears the guesses. Callers only offer this once
    /// the current round is over.
    pub fn start_new_game(&mut self)
    {
        self.secret = draw_word(&self.pool, &mut self.source);
        self.guessed.clear();
        info!("new round started ({} letters)", self.secret.len());
    }

    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome
    {
        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::Ignored;
        }
        let letter = letter.to_ascii_lowercase();
        if self.guessed.contains(&letter) {
            return GuessOutcome::AlreadyGuessed;
        }
        if self.status().is_over {
            return GuessOutcome::GameOver;
        }

        self.guessed.push(letter);
        let outcome = if self.secret.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        };
        debug!("guess '{letter}' -> {outcome:?}");

        let status = self.status();
        if status.is_won {
            info!("round won after {} guesses", self.guessed.len());
        } else if status.is_lost {
            info!("round lost, word was '{}'", self.secret);
        }
        outcome
    }

    pub fn status(&self) -> Status
    {
        derive_status(&self.secret, &self.guessed, self.lives.len())
    }

    pub fn secret(&self) -> &str
    {
        &self.secret
    }

    pub fn guessed(&self) -> &[char]
    {
        &self.guessed
    }

    pub fn lives(&self) -> Lives
    {
        self.lives
    }

    #[cfg(test)]
    pub fn pool(&self) -> &WordPool
    {
        &self.pool
    }
}

fn draw_word<S: WordSource>(pool: &WordPool, source: &mut S) -> String
{
    let index = source.pick(pool).min(pool.len() - 1);
    pool.words()[index].clone()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::languages::LANGUAGES;
    use crate::rng::{GameRng, Scripted};
    use proptest::prelude::*;

    fn game_with(words: &[&str]) -> Game<Scripted>
    {
        let pool = WordPool::new(words).unwrap();
        let picks = (0..words.len()).collect();
        Game::new(pool, Lives::builtin().unwrap(), Scripted::new(picks))
    }

    #[test]
    fn go_is_won_by_guessing_both_letters()
    {
        let mut game = game_with(&["go"]);
        assert_eq!(game.guess_letter('g'), GuessOutcome::Correct);
        assert!(!game.status().is_over);
        assert_eq!(game.guess_letter('o'), GuessOutcome::Correct);

        let status = game.status();
        assert!(status.is_won);
        assert!(status.is_over);
        assert!(!status.is_lost);
        assert_eq!(status.wrong_count, 0);
    }

    #[test]
    fn eight_misses_lose_with_nine_lives()
    {
        let mut game = game_with(&["rust"]);
        for (i, letter) in "abcdefgh".chars().enumerate() {
            assert!(!game.status().is_over, "over before guess {i}");
            assert_eq!(game.guess_letter(letter), GuessOutcome::Wrong);
        }
        let status = game.status();
        assert!(status.is_lost);
        assert!(status.is_over);
        assert_eq!(status.wrong_count, LANGUAGES.len() - 1);
    }

    #[test]
    fn guesses_after_loss_are_rejected()
    {
        let mut game = game_with(&["cat"]);
        for letter in "xyzwvuqp".chars() {
            game.guess_letter(letter);
        }
        assert!(game.status().is_lost);

        let before = game.guessed().to_vec();
        assert_eq!(game.guess_letter('c'), GuessOutcome::GameOver);
        assert_eq!(game.guessed(), before.as_slice());
        assert!(game.status().is_lost);
    }

    #[test]
    fn guesses_after_win_are_rejected()
    {
        let mut game = game_with(&["go"]);
        game.guess_letter('g');
        game.guess_letter('o');
        assert_eq!(game.guess_letter('z'), GuessOutcome::GameOver);
        assert_eq!(game.guessed(), &['g', 'o']);
    }

    #[test]
    fn repeated_guess_is_a_no_op()
    {
        let mut game = game_with(&["cat"]);
        assert_eq!(game.guess_letter('x'), GuessOutcome::Wrong);
        assert_eq!(game.guess_letter('x'), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.guess_letter('X'), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.guessed(), &['x']);
        assert_eq!(game.status().wrong_count, 1);
    }

    #[test]
    fn non_letters_are_ignored()
    {
        let mut game = game_with(&["cat"]);
        assert_eq!(game.guess_letter('1'), GuessOutcome::Ignored);
        assert_eq!(game.guess_letter(' '), GuessOutcome::Ignored);
        assert!(game.guessed().is_empty());
    }

    #[test]
    fn guesses_keep_insertion_order()
    {
        let mut game = game_with(&["cat"]);
        for letter in ['t', 'q', 'a'] {
            game.guess_letter(letter);
        }
        assert_eq!(game.guessed(), &['t', 'q', 'a']);
    }

    #[test]
    fn new_game_clears_guesses_and_draws_from_pool()
    {
        let mut game = game_with(&["go", "rust"]);
        assert_eq!(game.secret(), "go");
        game.guess_letter('g');
        game.guess_letter('o');
        assert!(game.status().is_over);

        game.start_new_game();
        assert!(game.guessed().is_empty());
        assert_eq!(game.secret(), "rust");
        assert!(game.pool().contains(game.secret()));
        assert!(!game.status().is_over);
    }

    #[test]
    fn empty_secret_is_vacuously_won()
    {
        let status = derive_status("", &[], 9);
        assert!(status.is_won);
    }

    #[test]
    fn two_lives_lose_on_first_miss()
    {
        let status = derive_status("cat", &['z'], 2);
        assert!(status.is_lost);
        assert_eq!(status.wrong_count, 1);
    }

    proptest! {
        #[test]
        fn wrong_count_is_bounded_and_monotonic(
            seed in any::<u64>(),
            letters in proptest::collection::vec(proptest::char::range('a', 'z'), 0..60),
        ) {
            let pool = WordPool::builtin().unwrap();
            let lives = Lives::builtin().unwrap();
            let mut game = Game::new(pool, lives, GameRng::new(seed));
            let mut last_wrong = 0;

            for letter in letters {
                let before = game.guessed().to_vec();
                let was_over = game.status().is_over;
                let outcome = game.guess_letter(letter);
                let status = game.status();

                prop_assert!(status.wrong_count <= lives.max_wrong_guesses());
                prop_assert!(status.wrong_count >= last_wrong);
                prop_assert!(game.guessed().len() <= 26);
                if was_over || outcome == GuessOutcome::AlreadyGuessed {
                    prop_assert_eq!(game.guessed(), before.as_slice());
                }
                if status.is_won {
                    prop_assert!(game.secret().chars().all(|ch| game.guessed().contains(&ch)));
                    prop_assert!(!status.is_lost);
                }
                if status.is_lost {
                    prop_assert_eq!(status.wrong_count, lives.max_wrong_guesses());
                }
                last_wrong = status.wrong_count;
            }
        }

        #[test]
        fn new_game_always_resets(seed in any::<u64>(), rounds in 1usize..5) {
            let pool = WordPool::builtin().unwrap();
            let mut game = Game::new(pool, Lives::builtin().unwrap(), GameRng::new(seed));
            for _ in 0..rounds {
                for letter in ALPHABET.chars() {
                    game.guess_letter(letter);
                }
                prop_assert!(game.status().is_over);
                game.start_new_game();
                prop_assert!(game.guessed().is_empty());
                prop_assert!(game.pool().contains(game.secret()));
            }
        }
    }
}
