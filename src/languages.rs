use crate::error::HangmanError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb
{
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb
{
    pub const fn new(r: u8, g: u8, b: u8) -> Self
    {
        Self { r, g, b }
    }
}

const LIGHT: Rgb = Rgb::new(0xF9, 0xF4, 0xDA);
const DARK: Rgb = Rgb::new(0x1E, 0x1E, 0x1E);

/// One life: a language that gets eliminated by a wrong guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language
{
    pub name: &'static str,
    pub background: Rgb,
    pub foreground: Rgb,
}

pub const LANGUAGES: &[Language] = &[
    Language { name: "HTML", background: Rgb::new(0xE2, 0x68, 0x0F), foreground: LIGHT },
    Language { name: "CSS", background: Rgb::new(0x32, 0x8A, 0xF1), foreground: LIGHT },
    Language { name: "JavaScript", background: Rgb::new(0xF4, 0xEB, 0x13), foreground: DARK },
    Language { name: "React", background: Rgb::new(0x2E, 0xD3, 0xE9), foreground: DARK },
    Language { name: "TypeScript", background: Rgb::new(0x29, 0x8E, 0xC6), foreground: LIGHT },
    Language { name: "Node.js", background: Rgb::new(0x59, 0x91, 0x37), foreground: LIGHT },
    Language { name: "Python", background: Rgb::new(0xFF, 0xD7, 0x42), foreground: DARK },
    Language { name: "Ruby", background: Rgb::new(0xD0, 0x2B, 0x2B), foreground: LIGHT },
    Language { name: "Assembly", background: Rgb::new(0x2D, 0x51, 0x9F), foreground: LIGHT },
];

/// Ordered list of lives. The last entry is never lost before the round ends,
/// so a round allows `len() - 1` wrong guesses.
#[derive(Debug, Clone, Copy)]
pub struct Lives
{
    entries: &'static [Language],
}

impl Lives
{
    pub fn new(entries: &'static [Language]) -> Result<Self, HangmanError>
    {
        if entries.len() < 2 {
            return Err(HangmanError::TooFewLives(entries.len()));
        }
        Ok(Self { entries })
    }

    pub fn builtin() -> Result<Self, HangmanError>
    {
        Self::new(LANGUAGES)
    }

    pub fn entries(&self) -> &'static [Language]
    {
        self.entries
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn max_wrong_guesses(&self) -> usize
    {
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&'static Language>
    {
        self.entries.get(index)
    }
}

const FAREWELLS: &[(&str, &str)] = &[
    ("Farewell, ", ""),
    ("Adios, ", ""),
    ("R.I.P., ", ""),
    ("We'll miss you, ", ""),
    ("Oh no, not ", "!"),
    ("", " bites the dust"),
    ("Gone but not forgotten, ", ""),
    ("The end of ", " as we know it"),
    ("Off into the sunset, ", ""),
    ("", ", it's been real"),
    ("", ", your watch has ended"),
    ("", " has left the building"),
];

/// Flavor line for a language that was just eliminated. Same name, same line.
pub fn farewell_text(language: &str) -> String
{
    let seed = language
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as usize));
    let (prefix, suffix) = FAREWELLS[seed % FAREWELLS.len()];
    format!("{prefix}{language}{suffix}")
}

#[cfg(test)]
mod tests
{
    use super::*;

    static ONE_LIFE: [Language; 1] = [Language {
        name: "Solo",
        background: DARK,
        foreground: LIGHT,
    }];

    #[test]
    fn builtin_lives_allow_eight_wrong_guesses()
    {
        let lives = Lives::builtin().unwrap();
        assert_eq!(lives.len(), 9);
        assert_eq!(lives.max_wrong_guesses(), 8);
        assert_eq!(lives.get(8).map(|lang| lang.name), Some("Assembly"));
    }

    #[test]
    fn single_life_is_rejected()
    {
        assert!(matches!(Lives::new(&ONE_LIFE), Err(HangmanError::TooFewLives(1))));
        assert!(matches!(Lives::new(&[]), Err(HangmanError::TooFewLives(0))));
    }

    #[test]
    fn farewell_is_deterministic_and_mentions_language()
    {
        for language in LANGUAGES {
            let first = farewell_text(language.name);
            assert_eq!(first, farewell_text(language.name));
            assert!(first.contains(language.name), "{first}");
        }
    }

    #[test]
    fn farewell_uses_more_than_one_phrase()
    {
        let mut lines: Vec<String> = LANGUAGES
            .iter()
            .map(|lang| farewell_text(lang.name).replace(lang.name, "X"))
            .collect();
        lines.sort();
        lines.dedup();
        assert!(lines.len() > 1);
    }
}
