use crate::board::{Board, Cell};
use crate::render::{Paint, Renderer};
use crate::TermInt;
use std::{io::{self, Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, KeyEventKind, read, poll};

const CELL_CHARS: &str = "██";

/// Terminal drawing surface. Each board cell takes two columns so cells look
/// roughly square; the board sits inside a one-character border with the
/// status line underneath.
pub struct TermManager {
    board: Board,
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new(board: Board) -> Self {
        TermManager { board, stdout: stdout(), active: false }
    }

    /// Columns and rows the board needs, border and status line included.
    /// `None` when no terminal could be that large.
    pub fn required_size(board: &Board) -> Option<(TermInt, TermInt)> {
        let width = TermInt::try_from(board.columns().checked_mul(2)?.checked_add(2)?).ok()?;
        let height = TermInt::try_from(board.rows().checked_add(3)?).ok()?;
        Some((width, height))
    }

    pub fn fits(&self) -> io::Result<bool> {
        let (w, h) = terminal::size()?;
        Ok(match Self::required_size(&self.board) {
            Some((need_w, need_h)) => w >= need_w && h >= need_h,
            None => false,
        })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))?;
        self.draw_borders()
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn read_key_events_queue(&self) -> io::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    events.push(ev);
                }
            }
        }

        Ok(events)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn inner_size(&self) -> (TermInt, TermInt) {
        let clamp = |n: i32| TermInt::try_from(n).unwrap_or(TermInt::MAX - 3);
        (clamp(self.board.columns().saturating_mul(2)), clamp(self.board.rows()))
    }

    fn draw_borders(&mut self) -> io::Result<()> {
        let (width, height) = self.inner_size();
        let (end_x, end_y) = (width + 1, height + 1);

        for x in 0..=end_x {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    fn print_at(&mut self, pos: (TermInt, TermInt), ch: char) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
    }

    fn screen_pos(&self, cell: Cell) -> Option<(TermInt, TermInt)> {
        if !self.board.contains(cell) {
            return None;
        }
        let (col, row) = self.board.grid_position(cell);
        Some(((col * 2 + 1) as TermInt, (row + 1) as TermInt))
    }
}

fn color(paint: Paint) -> Color {
    match paint {
        Paint::Head => Color::Blue,
        Paint::Body => Color::Cyan,
        Paint::Food => Color::Red,
    }
}

impl Renderer for TermManager {
    fn clear_board(&mut self) -> io::Result<()> {
        let (width, height) = self.inner_size();
        let blank = " ".repeat(width as usize);
        for y in 1..=height {
            queue!(self.stdout, cursor::MoveTo(1, y), style::Print(&blank))?;
        }
        Ok(())
    }

    fn draw_cell(&mut self, cell: Cell, paint: Paint) -> io::Result<()> {
        if let Some((x, y)) = self.screen_pos(cell) {
            queue!(
                self.stdout,
                cursor::MoveTo(x, y),
                style::SetForegroundColor(color(paint)),
                style::Print(CELL_CHARS),
                style::ResetColor
            )?;
        }
        Ok(())
    }

    fn draw_overlay(&mut self, main: &str, sub: &str, extra: Option<&str>) -> io::Result<()> {
        let mut lines = vec![main, sub];
        lines.extend(extra);

        for (x, y, text) in message_box(self.inner_size(), &lines) {
            queue!(self.stdout, cursor::MoveTo(x, y), style::Print(text))?;
        }

        self.flush()
    }

    fn draw_status(&mut self, score: u32, high_score: u32) -> io::Result<()> {
        let (width, height) = self.inner_size();
        let line = format!("Score: {}   High score: {}", score, high_score);
        let padded_line = format!("{line: <width$}", line = line, width = width as usize + 2);
        queue!(self.stdout, cursor::MoveTo(0, height + 2), style::Print(padded_line))?;
        self.flush()
    }
}

/// A centred message box clipped to the inner board area, as
/// (column, row, text) in terminal coordinates. Blank margins above and
/// below are kept only when the board has the rows for them.
fn message_box(inner: (TermInt, TermInt), lines: &[&str]) -> Vec<(TermInt, TermInt, String)> {
    let (width, height) = (inner.0 as usize, inner.1 as usize);
    if width == 0 || height == 0 {
        return vec![];
    }

    let text_width = lines.iter().map(|x| x.chars().count()).max().unwrap_or(0);
    let box_width = (text_width + 2).min(width);

    let mut rows: Vec<String> = lines.iter().map(|line| line.chars().take(box_width).collect()).collect();
    if rows.len() + 2 <= height {
        rows.insert(0, String::new());
        rows.push(String::new());
    }
    rows.truncate(height);

    let left = 1 + (width - box_width) / 2;
    let top = 1 + (height - rows.len()) / 2;
    rows.into_iter()
        .enumerate()
        .map(|(i, line)| {
            let padded_line = format!("{line: ^width$}", line = line, width = box_width);
            (left as TermInt, (top + i) as TermInt, padded_line)
        })
        .collect()
}

impl Drop for TermManager {
    fn drop(&mut self) {
        // Never leave the terminal in raw mode.
        let _ = self.restore();
    }
}
