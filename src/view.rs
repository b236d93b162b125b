//! Pure render pass: everything the screen shows, computed from game state.
//!
//! Nothing here knows about terminals. The front end turns a [`View`] into
//! escape sequences; tests assert on the `View` directly.

use crate::game::{ALPHABET, Game, Status};
use crate::languages::{Language, farewell_text};
use crate::rng::WordSource;

pub const TITLE: &str = "Assembly Hangman";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterSlot
{
    /// Uppercase letter when revealed, `None` for a blank slot.
    pub shown: Option<char>,
    /// Set on a lost round for letters the player never found.
    pub missed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chip
{
    pub language: &'static Language,
    pub lost: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyMark
{
    Neutral,
    Correct,
    Wrong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key
{
    pub letter: char,
    pub mark: KeyMark,
    pub guessed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyboard
{
    pub keys: Vec<Key>,
    pub disabled: bool,
}

impl Keyboard
{
    /// Whether activating `letter` would reach the game at all.
    pub fn accepts(&self, letter: char) -> bool
    {
        !self.disabled
            && self
                .keys
                .iter()
                .any(|key| key.letter == letter && !key.guessed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner
{
    None,
    Won,
    Lost,
    Farewell(String),
}

impl Banner
{
    pub fn lines(&self) -> (&str, &str)
    {
        match self {
            Banner::None => ("", ""),
            Banner::Won => ("You win!", "Well done! \u{1F389}"),
            Banner::Lost => ("Game over!", "You lose! Better start learning Assembly \u{1F62D}"),
            Banner::Farewell(text) => ("", text.as_str()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View
{
    pub subtitle: String,
    pub status: Status,
    pub slots: Vec<LetterSlot>,
    pub chips: Vec<Chip>,
    pub keyboard: Keyboard,
    pub banner: Banner,
    pub live_region: String,
    pub show_new_game: bool,
    pub celebrate: bool,
}

pub fn render<S: WordSource>(game: &Game<S>) -> View
{
    let secret = game.secret();
    let guessed = game.guessed();
    let lives = game.lives();
    let status = game.status();

    let slots = secret
        .chars()
        .map(|letter| {
            let is_guessed = guessed.contains(&letter);
            LetterSlot {
                shown: (is_guessed || status.is_lost).then(|| letter.to_ascii_uppercase()),
                missed: status.is_lost && !is_guessed,
            }
        })
        .collect();

    let chips = lives
        .entries()
        .iter()
        .enumerate()
        .map(|(index, language)| Chip {
            language,
            lost: index < status.wrong_count,
        })
        .collect();

    let keys = ALPHABET
        .chars()
        .map(|letter| {
            let is_guessed = guessed.contains(&letter);
            let mark = match (is_guessed, secret.contains(letter)) {
                (false, _) => KeyMark::Neutral,
                (true, true) => KeyMark::Correct,
                (true, false) => KeyMark::Wrong,
            };
            Key {
                letter,
                mark,
                guessed: is_guessed,
            }
        })
        .collect();

    View {
        subtitle: format!(
            "Guess the word within {} attempts to keep the programming world safe from Assembly!",
            lives.max_wrong_guesses()
        ),
        status,
        slots,
        chips,
        keyboard: Keyboard {
            keys,
            disabled: status.is_over,
        },
        banner: banner(&status, |index| lives.get(index).map(|lang| lang.name)),
        live_region: live_region(secret, guessed),
        show_new_game: status.is_over,
        celebrate: status.is_won,
    }
}

fn banner<'a>(status: &Status, life_name: impl Fn(usize) -> Option<&'a str>) -> Banner
{
    if status.is_won {
        return Banner::Won;
    }
    if status.is_lost {
        return Banner::Lost;
    }
    if status.wrong_count == 0 {
        return Banner::None;
    }
    match life_name(status.wrong_count - 1) {
        Some(name) => Banner::Farewell(farewell_text(name)),
        None => Banner::None,
    }
}

fn live_region(secret: &str, guessed: &[char]) -> String
{
    let spoken: Vec<String> = secret
        .chars()
        .map(|letter| {
            if guessed.contains(&letter) {
                format!("{letter}.")
            } else {
                "blank.".to_string()
            }
        })
        .collect();
    format!("Current word: {}", spoken.join(" "))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::languages::Lives;
    use crate::rng::Scripted;
    use crate::words::WordPool;

    fn game_with(word: &str, guesses: &str) -> Game<Scripted>
    {
        let pool = WordPool::new(&[word]).unwrap();
        let mut game = Game::new(pool, Lives::builtin().unwrap(), Scripted::new(vec![0]));
        for letter in guesses.chars() {
            game.guess_letter(letter);
        }
        game
    }

    #[test]
    fn fresh_round_is_all_blank()
    {
        let view = render(&game_with("cat", ""));
        assert_eq!(view.slots.len(), 3);
        assert!(view.slots.iter().all(|slot| slot.shown.is_none() && !slot.missed));
        assert!(view.chips.iter().all(|chip| !chip.lost));
        assert_eq!(view.banner, Banner::None);
        assert!(!view.show_new_game);
        assert!(!view.keyboard.disabled);
        assert_eq!(view.live_region, "Current word: blank. blank. blank.");
        assert!(view.subtitle.contains("within 8 attempts"));
    }

    #[test]
    fn guessed_letters_are_revealed_uppercase()
    {
        let view = render(&game_with("cat", "tz"));
        let shown: Vec<Option<char>> = view.slots.iter().map(|slot| slot.shown).collect();
        assert_eq!(shown, vec![None, None, Some('T')]);
        assert_eq!(view.live_region, "Current word: blank. blank. t.");
    }

    #[test]
    fn keys_are_marked_by_guess_membership()
    {
        let view = render(&game_with("cat", "tz"));
        let key = |letter: char| {
            *view
                .keyboard
                .keys
                .iter()
                .find(|key| key.letter == letter)
                .unwrap()
        };
        assert_eq!(view.keyboard.keys.len(), 26);
        assert_eq!(key('t').mark, KeyMark::Correct);
        assert_eq!(key('z').mark, KeyMark::Wrong);
        assert_eq!(key('c').mark, KeyMark::Neutral);
        assert!(key('t').guessed);
        assert!(!key('c').guessed);
        assert!(view.keyboard.accepts('c'));
        assert!(!view.keyboard.accepts('t'));
    }

    #[test]
    fn wrong_guess_loses_a_chip_and_says_farewell()
    {
        let view = render(&game_with("cat", "zq"));
        let lost: Vec<bool> = view.chips.iter().map(|chip| chip.lost).collect();
        assert_eq!(lost[..3], [true, true, false]);
        assert_eq!(view.banner, Banner::Farewell(farewell_text("CSS")));
    }

    #[test]
    fn correct_guess_keeps_previous_farewell()
    {
        let view = render(&game_with("cat", "zc"));
        assert_eq!(view.banner, Banner::Farewell(farewell_text("HTML")));
    }

    #[test]
    fn win_shows_banner_and_new_game()
    {
        let view = render(&game_with("go", "go"));
        assert_eq!(view.banner, Banner::Won);
        assert!(view.celebrate);
        assert!(view.show_new_game);
        assert!(view.keyboard.disabled);
        assert!(!view.keyboard.accepts('x'));
        assert!(view.slots.iter().all(|slot| !slot.missed));
    }

    #[test]
    fn loss_reveals_everything_and_marks_misses()
    {
        let view = render(&game_with("rust", "uabcdefgh"));
        assert!(view.status.is_lost);
        assert_eq!(view.banner, Banner::Lost);
        assert!(!view.celebrate);
        assert!(view.show_new_game);

        let shown: String = view.slots.iter().filter_map(|slot| slot.shown).collect();
        assert_eq!(shown, "RUST");
        let missed: Vec<bool> = view.slots.iter().map(|slot| slot.missed).collect();
        assert_eq!(missed, vec![true, false, true, true]);
    }

    #[test]
    fn loss_never_shows_farewell_and_keeps_last_chip()
    {
        let view = render(&game_with("rust", "abcdefgh"));
        assert_eq!(view.banner, Banner::Lost);
        assert_eq!(view.chips.iter().filter(|chip| chip.lost).count(), 8);
        assert!(!view.chips[8].lost);
        assert_eq!(view.chips[8].language.name, "Assembly");
    }
}
