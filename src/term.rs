use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{ensure, Result};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::Color;
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

use crate::grid::Cell;

pub const SNAKE_COLOR: Color = Color::Green;
pub const FOOD_COLOR: Color = Color::Red;

// One grid cell spans two terminal columns so cells come out roughly square.
const CELL_COLUMNS: u16 = 2;
const CELL_BLOCK: &str = "██";
const EMPTY_BLOCK: &str = "  ";

/// The render surface: a bordered playfield on the alternate screen, drawn
/// cell by cell. Draw calls are queued; `present` flushes the frame.
pub struct Screen {
    grid_width: u16,
    grid_height: u16,
    stdout: Stdout,
}

impl Screen {
    pub fn new(grid_width: i16, grid_height: i16) -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        let need_cols = grid_width as u16 * CELL_COLUMNS + 2;
        let need_rows = grid_height as u16 + 2;
        ensure!(
            cols >= need_cols && rows >= need_rows,
            "terminal is {}x{} but the playfield needs {}x{}",
            cols,
            rows,
            need_cols,
            need_rows
        );

        Ok(Screen {
            grid_width: grid_width as u16,
            grid_height: grid_height as u16,
            stdout: stdout(),
        })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)?;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Collects every key event queued since the last call, without blocking.
    pub fn drain_events(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn draw_cell(&mut self, cell: Cell, color: Color) -> Result<()> {
        let (col, row) = self.cell_origin(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            style::SetForegroundColor(color),
            style::Print(CELL_BLOCK),
            style::ResetColor
        )?;
        Ok(())
    }

    pub fn erase_cell(&mut self, cell: Cell) -> Result<()> {
        let (col, row) = self.cell_origin(cell);
        queue!(self.stdout, cursor::MoveTo(col, row), style::Print(EMPTY_BLOCK))?;
        Ok(())
    }

    pub fn draw_border(&mut self) -> Result<()> {
        let end_x = self.grid_width * CELL_COLUMNS + 1;
        let end_y = self.grid_height + 1;

        for x in 0..=end_x {
            let ch = if x == 0 || x == end_x { '+' } else { '-' };
            queue!(self.stdout, cursor::MoveTo(x, 0), style::Print(ch))?;
            queue!(self.stdout, cursor::MoveTo(x, end_y), style::Print(ch))?;
        }

        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(end_x, y), style::Print('|'))?;
        }

        Ok(())
    }

    pub fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    // The playfield sits inside the border, at a one-column, one-row offset.
    fn cell_origin(&self, cell: Cell) -> (u16, u16) {
        (cell.x as u16 * CELL_COLUMNS + 1, cell.y as u16 + 1)
    }
}
