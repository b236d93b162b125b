mod confetti;
mod frame;

use crate::error::HangmanError;
use crate::game::Game;
use crate::languages::Rgb;
use crate::rng::WordSource;
use crate::view::{View, render};
use confetti::{CelebrationLatch, Confetti};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use frame::{Frame, Hit, compose};
use log::{debug, info};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

const TICK_MS: u64 = 33;
const CONFETTI_PIECES: usize = 250;

struct TerminalGuard
{
    stdout: Stdout,
    mouse: bool,
}

impl TerminalGuard
{
    fn enter(mouse: bool) -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(Self { stdout, mouse })
    }

    fn stdout(&mut self) -> &mut Stdout
    {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        if self.mouse {
            let _ = execute!(self.stdout, DisableMouseCapture);
        }
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action
{
    Guess(char),
    NewGame,
    Quit,
    Resize(u16, u16),
}

/// Runs the interactive view until the player quits.
pub fn run<S: WordSource>(game: &mut Game<S>, mouse: bool) -> Result<(), HangmanError>
{
    let mut term = TerminalGuard::enter(mouse)?;
    let mut rng = rand::thread_rng();
    let mut latch = CelebrationLatch::default();
    let mut confetti: Option<Confetti> = None;

    let mut view = render(game);
    let mut frame = compose(&view);
    let mut dirty = true;
    let mut last_tick = Instant::now();

    loop {
        while event::poll(Duration::from_millis(0))? {
            let Some(action) = translate(&event::read()?, &view, &frame) else {
                continue;
            };
            match action {
                Action::Quit => {
                    info!("player quit");
                    return Ok(());
                }
                Action::Resize(cols, rows) => {
                    if let Some(burst) = confetti.as_mut() {
                        burst.resize(cols, rows);
                    }
                    dirty = true;
                }
                Action::Guess(letter) => {
                    if game.guess_letter(letter).changed_state() {
                        view = render(game);
                        frame = compose(&view);
                        dirty = true;
                    }
                }
                Action::NewGame => {
                    game.start_new_game();
                    confetti = None;
                    view = render(game);
                    frame = compose(&view);
                    dirty = true;
                }
            }
        }

        if latch.observe(view.celebrate) {
            let (cols, rows) = terminal::size().unwrap_or((80, 24));
            debug!("confetti burst on {cols}x{rows}");
            confetti = Some(Confetti::burst(&mut rng, cols, rows, CONFETTI_PIECES));
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
            if let Some(burst) = confetti.as_mut() {
                burst.tick();
                dirty = true;
                if burst.is_finished() {
                    confetti = None;
                }
            }
            if dirty {
                draw(term.stdout(), &frame, confetti.as_ref())?;
                dirty = false;
            }
            last_tick = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

fn translate(event: &Event, view: &View, frame: &Frame) -> Option<Action>
{
    match event {
        Event::Key(KeyEvent { code, modifiers, kind, .. }) => {
            if *kind == KeyEventKind::Release {
                return None;
            }
            match code {
                KeyCode::Esc => Some(Action::Quit),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Quit)
                }
                KeyCode::Enter | KeyCode::Char(' ') if view.show_new_game => {
                    Some(Action::NewGame)
                }
                KeyCode::Char(ch) if view.show_new_game && ch.eq_ignore_ascii_case(&'n') => {
                    Some(Action::NewGame)
                }
                KeyCode::Char(_) if !modifiers.difference(KeyModifiers::SHIFT).is_empty() => None,
                KeyCode::Char(ch) => {
                    let letter = ch.to_ascii_lowercase();
                    view.keyboard.accepts(letter).then_some(Action::Guess(letter))
                }
                _ => None,
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => match frame.hit_test(*column, *row)? {
            Hit::Key(letter) => view.keyboard.accepts(letter).then_some(Action::Guess(letter)),
            Hit::NewGame => view.show_new_game.then_some(Action::NewGame),
        },
        Event::Resize(cols, rows) => Some(Action::Resize(*cols, *rows)),
        _ => None,
    }
}

fn draw(stdout: &mut Stdout, frame: &Frame, confetti: Option<&Confetti>) -> Result<(), HangmanError>
{
    let output = format!("{}\r\n", frame.lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    stdout.write_all(output.as_bytes())?;

    if let Some(burst) = confetti {
        for particle in burst.visible() {
            let (x, y) = particle.cell();
            queue!(stdout, MoveTo(x, y))?;
            let color = paint_fg(particle.color);
            write!(stdout, "{color}{}\x1b[0m", particle.glyph)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn paint_fg(color: Rgb) -> String
{
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}
