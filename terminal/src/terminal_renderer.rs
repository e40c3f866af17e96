use std::collections::VecDeque;
use std::io::{self, Stdout, Write};

use common::games::snake::{render_frame, FieldSize, GameRenderer, Point};
use common::log;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

/// Raw mode on an alternate screen with the cursor hidden. Dropping it puts
/// the terminal back the way it was.
pub struct RawScreen;

impl RawScreen {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            log!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log!("Failed to disable raw mode: {}", e);
        }
    }
}

/// Draws the field at the top left with a status line and the help text
/// underneath.
pub struct TerminalRenderer<W: Write> {
    field: FieldSize,
    out: W,
    status: String,
    help: &'static str,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout(field: FieldSize, help: &'static str) -> Self {
        Self::new(field, io::stdout(), help)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(field: FieldSize, out: W, help: &'static str) -> Self {
        Self {
            field,
            out,
            status: String::new(),
            help,
        }
    }

    pub fn set_status(&mut self, status: String) {
        self.status = status;
        if let Err(e) = self.queue_footer().and_then(|_| self.out.flush()) {
            log!("Failed to write to terminal: {}", e);
        }
    }

    fn draw_frame(&mut self, frame: &str) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for (row, line) in frame.lines().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.queue_footer()?;
        self.out.flush()
    }

    fn queue_footer(&mut self) -> io::Result<()> {
        let top = self.field.height.max(0) as u16 + 1;
        queue!(
            self.out,
            MoveTo(0, top),
            Clear(ClearType::CurrentLine),
            Print(&self.status),
            MoveTo(0, top + 1),
            Clear(ClearType::CurrentLine),
            Print(self.help)
        )
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameRenderer for TerminalRenderer<W> {
    fn render(&mut self, snake_body: &VecDeque<Point>, walls: &[Point], food: Point) {
        let frame = render_frame(&self.field, snake_body, walls, food);
        if let Err(e) = self.draw_frame(&frame) {
            log!("Failed to draw frame: {}", e);
        }
    }
}
