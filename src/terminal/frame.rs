//! Turns a [`View`] into terminal lines and remembers where the clickable
//! controls ended up.

use crate::languages::Rgb;
use crate::view::{Banner, Chip, Key, KeyMark, LetterSlot, TITLE, View};

/// Every composed line fits this many columns, so rows never wrap and
/// `hit_test` rows match what the terminal shows.
pub const FRAME_WIDTH: usize = 80;
pub const MARGIN: u16 = 2;
pub const KEYS_PER_ROW: usize = 13;
pub const KEY_WIDTH: u16 = 3;
pub const KEY_STRIDE: u16 = 4;
const CHIP_ROW_WIDTH: usize = 56;
const NEW_GAME_LABEL: &str = "[ New Game ]";

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const ITALIC: &str = "\x1b[3m";
const STRIKE: &str = "\x1b[9m";

const SLOT_BG: Rgb = Rgb::new(50, 50, 50);
const SLOT_FG: Rgb = Rgb::new(249, 244, 218);
const MISSED_FG: Rgb = Rgb::new(236, 93, 73);
const KEY_NEUTRAL: Rgb = Rgb::new(252, 186, 41);
const KEY_CORRECT: Rgb = Rgb::new(16, 169, 91);
const KEY_WRONG: Rgb = Rgb::new(236, 93, 73);
const KEY_FG: Rgb = Rgb::new(30, 30, 30);
const WON_BG: Rgb = Rgb::new(16, 169, 91);
const LOST_BG: Rgb = Rgb::new(186, 42, 42);
const FAREWELL_BG: Rgb = Rgb::new(122, 94, 167);
const BANNER_FG: Rgb = Rgb::new(249, 244, 218);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit
{
    Key(char),
    NewGame,
}

/// One composed screen plus the positions of its controls.
#[derive(Debug, Clone)]
pub struct Frame
{
    pub lines: Vec<String>,
    keyboard_top: u16,
    key_rows: Vec<Vec<char>>,
    new_game_row: Option<u16>,
}

impl Frame
{
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit>
    {
        if self.new_game_row == Some(row) {
            let end = MARGIN + NEW_GAME_LABEL.len() as u16;
            return (column >= MARGIN && column < end).then_some(Hit::NewGame);
        }

        let row_index = row.checked_sub(self.keyboard_top)? as usize;
        let keys = self.key_rows.get(row_index)?;
        let offset = column.checked_sub(MARGIN)?;
        if offset % KEY_STRIDE >= KEY_WIDTH {
            return None;
        }
        keys.get((offset / KEY_STRIDE) as usize).map(|letter| Hit::Key(*letter))
    }

    #[cfg(test)]
    pub fn height(&self) -> u16
    {
        self.lines.len() as u16
    }
}

pub fn compose(view: &View) -> Frame
{
    let pad = " ".repeat(MARGIN as usize);
    let mut lines = Vec::new();

    lines.push(format!("{pad}{BOLD}{TITLE}{RESET}"));
    for part in wrap(&view.subtitle, text_width()) {
        lines.push(format!("{pad}{DIM}{part}{RESET}"));
    }
    lines.push(String::new());

    let (heading, message) = view.banner.lines();
    let banner_bg = match view.banner {
        Banner::None => None,
        Banner::Won => Some(WON_BG),
        Banner::Lost => Some(LOST_BG),
        Banner::Farewell(_) => Some(FAREWELL_BG),
    };
    match banner_bg {
        Some(bg) => {
            let style = if matches!(view.banner, Banner::Farewell(_)) { ITALIC } else { BOLD };
            if heading.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{pad}{}{style} {heading} {RESET}", paint(bg, BANNER_FG)));
            }
            lines.push(format!("{pad}{}{style} {message} {RESET}", paint(bg, BANNER_FG)));
        }
        None => {
            lines.push(String::new());
            lines.push(String::new());
        }
    }
    lines.push(String::new());

    for row in chip_rows(&view.chips) {
        lines.push(format!("{pad}{row}"));
    }
    lines.push(String::new());

    let word: String = view.slots.iter().map(render_slot).collect::<Vec<_>>().join(" ");
    lines.push(format!("{pad}{word}"));
    lines.push(String::new());

    let keyboard_top = lines.len() as u16;
    let key_rows: Vec<Vec<char>> = view
        .keyboard
        .keys
        .chunks(KEYS_PER_ROW)
        .map(|row| row.iter().map(|key| key.letter).collect())
        .collect();
    for row in view.keyboard.keys.chunks(KEYS_PER_ROW) {
        let rendered: Vec<String> = row
            .iter()
            .map(|key| render_key(key, view.keyboard.disabled))
            .collect();
        lines.push(format!("{pad}{}", rendered.join(" ")));
    }
    lines.push(String::new());

    let new_game_row = if view.show_new_game {
        let row = lines.len() as u16;
        lines.push(format!("{pad}{}{BOLD}{NEW_GAME_LABEL}{RESET}", paint(KEY_NEUTRAL, KEY_FG)));
        Some(row)
    } else {
        lines.push(String::new());
        None
    };
    lines.push(String::new());

    for part in wrap(&view.live_region, text_width()) {
        lines.push(format!("{pad}{DIM}{part}{RESET}"));
    }
    let hint = if view.show_new_game {
        "Enter, Space or N starts a new game. Esc quits."
    } else {
        "Type or click letters to guess. Esc quits."
    };
    lines.push(format!("{pad}{DIM}{hint}{RESET}"));

    Frame {
        lines,
        keyboard_top,
        key_rows,
        new_game_row,
    }
}

fn text_width() -> usize
{
    FRAME_WIDTH - MARGIN as usize
}

/// Greedy word wrap. A single word longer than `width` gets a line of its own.
fn wrap(text: &str, width: usize) -> Vec<String>
{
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() { 0 } else { 1 } + word.chars().count();
        if !current.is_empty() && current.chars().count() + needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn chip_rows(chips: &[Chip]) -> Vec<String>
{
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut width = 0usize;
    for chip in chips {
        let chip_width = chip.language.name.chars().count() + 2;
        if width > 0 && width + 1 + chip_width > CHIP_ROW_WIDTH {
            rows.push(std::mem::take(&mut current));
            width = 0;
        }
        if width > 0 {
            current.push(' ');
            width += 1;
        }
        let style = if chip.lost { format!("{DIM}{STRIKE}") } else { String::new() };
        current.push_str(&format!(
            "{}{style} {} {RESET}",
            paint(chip.language.background, chip.language.foreground),
            chip.language.name
        ));
        width += chip_width;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn render_slot(slot: &LetterSlot) -> String
{
    let fg = if slot.missed { MISSED_FG } else { SLOT_FG };
    let letter = slot.shown.unwrap_or(' ');
    format!("{}{BOLD} {letter} {RESET}", paint(SLOT_BG, fg))
}

fn render_key(key: &Key, keyboard_disabled: bool) -> String
{
    let bg = match key.mark {
        KeyMark::Neutral => KEY_NEUTRAL,
        KeyMark::Correct => KEY_CORRECT,
        KeyMark::Wrong => KEY_WRONG,
    };
    let dim = if keyboard_disabled || key.guessed { DIM } else { "" };
    format!("{}{dim} {} {RESET}", paint(bg, KEY_FG), key.letter.to_ascii_uppercase())
}

pub fn paint(bg: Rgb, fg: Rgb) -> String
{
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m",
        bg.r, bg.g, bg.b, fg.r, fg.g, fg.b
    )
}
