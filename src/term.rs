use std::io;
use std::io::Stdout;
use std::io::Write;

use crossterm::cursor;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;
use tracing::info;

use crate::draw::Canvas;
use crate::draw::Display;
use crate::draw::Surface;
use crate::draw::canvas::Glyph;
use crate::error::Error;
use crate::error::Result;
use crate::settings::Rgb;

/// Side length of a braille dot in surface units. A 20 unit tile is 4x4 dots, or 2x1 characters.
pub const UNITS_PER_DOT: u32 = 5;

/// Open the terminal as a drawing surface, keeping its last row for the generation counter.
pub fn open() -> Result<(TerminalSurface, StatusLine)> {
    let (cols, rows) = terminal::size().map_err(Error::NoSurface)?;

    let (canvas, row) = layout(cols, rows)?;
    info!(cols, rows, "opened terminal");

    let surface = TerminalSurface {
        canvas,
        out: io::stdout(),
    };

    let status = StatusLine {
        row,
        out: io::stdout(),
    };

    Ok((surface, status))
}

/// Split a `cols` by `rows` terminal into a canvas over every row but the last, and the row left
/// for the status line.
pub fn layout(cols: u16, rows: u16) -> Result<(Canvas, u16)> {
    if rows < 2 {
        return Err(Error::NoDisplay { rows });
    }

    let canvas = Canvas::new(cols as usize * 2, (rows - 1) as usize * 4, UNITS_PER_DOT);

    Ok((canvas, rows - 1))
}

/// Puts the terminal in raw mode on an alternate screen, and restores it when dropped.
pub struct TerminalGuard {
    _priv: (),
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().map_err(Error::NoSurface)?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { _priv: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // nothing left to report errors to
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// A [`Canvas`] drawn to the top of the terminal
pub struct TerminalSurface {
    canvas: Canvas,
    out: Stdout,
}

impl Surface for TerminalSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_fill(&mut self, color: Rgb) {
        self.canvas.set_fill(color);
    }

    fn set_stroke(&mut self, color: Rgb, width: f32) {
        self.canvas.set_stroke(color, width);
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.canvas.fill_rect(x, y, w, h);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.canvas.stroke_line(from, to);
    }

    fn present(&mut self) -> Result<()> {
        self.canvas.render();

        let mut out = self.out.lock();
        let mut current = None;

        for row in 0..self.canvas.rows() {
            queue!(out, cursor::MoveTo(0, row as u16))?;

            for col in 0..self.canvas.columns() {
                let Glyph { ch, color } = self.canvas.glyph(col, row);

                // only switch colors when they change, most of a frame is one color
                if color != current {
                    match color {
                        Some(Rgb { r, g, b }) => {
                            queue!(out, style::SetForegroundColor(Color::Rgb { r, g, b }))?
                        }
                        None => queue!(out, style::ResetColor)?,
                    }
                    current = color;
                }

                queue!(out, style::Print(ch))?;
            }
        }

        queue!(out, style::ResetColor)?;
        out.flush()?;

        Ok(())
    }
}

/// The generation counter, on the last row of the terminal
pub struct StatusLine {
    row: u16,
    out: Stdout,
}

impl Display for StatusLine {
    fn show(&mut self, text: &str) -> Result<()> {
        let mut out = self.out.lock();

        queue!(
            out,
            cursor::MoveTo(0, self.row),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(format!("Generation: {text}  (q to quit)")),
        )?;
        out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::layout;
    use crate::draw::Surface;
    use crate::error::Error;

    #[test]
    fn layout_no_rows() {
        assert!(matches!(layout(80, 0), Err(Error::NoDisplay { rows: 0 })));
    }

    #[test]
    fn layout_no_room_for_status_line() {
        assert!(matches!(layout(80, 1), Err(Error::NoDisplay { rows: 1 })));
    }

    #[test]
    fn layout_single_canvas_row() {
        let (canvas, row) = layout(80, 2).unwrap();

        assert_eq!(row, 1);
        assert_eq!(canvas.columns(), 80);
        assert_eq!(canvas.rows(), 1);
        assert_eq!(canvas.width(), 80 * 2 * 5);
        assert_eq!(canvas.height(), 4 * 5);
    }

    #[test]
    fn layout_full_terminal() {
        let (canvas, row) = layout(80, 24).unwrap();

        assert_eq!(row, 23);
        assert_eq!(canvas.rows(), 23);

        // 160x92 dots, or 40x23 tiles of 4x4 dots
        assert_eq!((canvas.width(), canvas.height()), (800, 460));
    }
}
