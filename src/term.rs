use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{cursor, execute, queue, terminal};
use log::error;

use crate::render::{Frame, Rgb, Tile};

const FILLED_CELL: &str = "[]";
const EMPTY_CELL: &str = "  ";

/// Owns the terminal for the lifetime of the game. Dropping it gives the
/// terminal back in its original state, whichever way the game ended.
pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new(title: &str) -> Result<Self> {
        let mut term = TermManager { stdout: stdout(), active: false };
        term.setup(title)?;
        Ok(term)
    }

    fn setup(&mut self, title: &str) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        self.active = true;
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, SetTitle(title))
            .context("failed to prepare the cursor")?;
        execute!(self.stdout, terminal::Clear(terminal::ClearType::All)).context("failed to clear the screen")?;
        Ok(())
    }

    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Err(err) = terminal::disable_raw_mode() {
            error!("failed to disable raw mode: {}", err);
        }
        if let Err(err) = execute!(self.stdout, ResetColor, cursor::Show, cursor::EnableBlinking) {
            error!("failed to restore the cursor: {}", err);
        }
        if let Err(err) = execute!(self.stdout, LeaveAlternateScreen) {
            error!("failed to leave alternate screen: {}", err);
        }
    }

    /// Drains every pending key event without waiting for new ones.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).context("failed to poll input")? {
            if let Event::Key(ev) = read().context("failed to read input")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Writes the whole frame out, two terminal columns per cell.
    pub fn present(&mut self, frame: &Frame) -> Result<()> {
        for row in 0..frame.rows() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;

            for col in 0..frame.columns() {
                let (bg, fg, glyph) = match frame.tile_at(col, row) {
                    Tile::Empty(color) => (color, color, EMPTY_CELL),
                    Tile::Filled { body, border } => (body, border, FILLED_CELL),
                };
                queue!(
                    self.stdout,
                    SetBackgroundColor(to_color(bg)),
                    SetForegroundColor(to_color(fg)),
                    Print(glyph)
                )?;
            }
        }

        queue!(self.stdout, ResetColor)?;
        self.stdout.flush().context("failed to flush the frame")?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        self.restore();
    }
}

fn to_color((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}
