//! ANSI terminal sink.
//!
//! Acquiring a [`TerminalSink`] saves the cursor position and hides the
//! cursor. Dropping it resets colors, restores the cursor and flushes, so
//! the terminal is left as it was found.

use std::io::{self, Stdout, Write};

use crossterm::{cursor, queue, style, terminal};
use tracing::{debug, trace};

use crate::geometry::{Point, Size};
use crate::glyph::Color;
use crate::sink::{Cell, GridSink};

/// Paints cells onto a terminal through ANSI escape sequences
pub struct TerminalSink<W: Write> {
    out: W,
    size: Size,
    colors: Option<(Color, Color)>,
}

impl<W: Write> TerminalSink<W> {
    /// Take over `out`, treating it as a terminal of the given size
    pub fn acquire(mut out: W, size: Size) -> io::Result<Self> {
        queue!(out, cursor::SavePosition, cursor::Hide)?;
        debug!(height = size.height, width = size.width, "Terminal sink acquired");
        Ok(Self {
            out,
            size,
            colors: None,
        })
    }

    fn set_colors(&mut self, foreground: Color, background: Color) -> io::Result<()> {
        if self.colors == Some((foreground, background)) {
            return Ok(());
        }
        queue!(
            self.out,
            style::SetForegroundColor(to_crossterm_color(foreground)),
            style::SetBackgroundColor(to_crossterm_color(background))
        )?;
        self.colors = Some((foreground, background));
        Ok(())
    }
}

impl TerminalSink<Stdout> {
    /// Sink over standard output, sized to the current terminal window
    pub fn stdout() -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        Self::acquire(
            io::stdout(),
            Size::new(usize::from(rows), usize::from(columns)),
        )
    }
}

impl<W: Write> GridSink for TerminalSink<W> {
    fn dimensions(&self) -> Size {
        self.size
    }

    fn put(&mut self, point: Point, cell: Cell) -> io::Result<()> {
        let column = u16::try_from(point.x).map_err(|_| out_of_range(point))?;
        let row = u16::try_from(point.y).map_err(|_| out_of_range(point))?;
        self.set_colors(cell.foreground, cell.background)?;
        queue!(self.out, cursor::MoveTo(column, row), style::Print(cell.ch))?;
        trace!(x = point.x, y = point.y, ch = %cell.ch, "Queued cell");
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        let restored = queue!(
            self.out,
            style::ResetColor,
            cursor::RestorePosition,
            cursor::Show
        )
        .and_then(|()| self.out.flush());
        if let Err(err) = restored {
            debug!(error = %err, "Failed to restore terminal state");
        }
    }
}

fn out_of_range(point: Point) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("cell ({}, {}) is beyond terminal addressing", point.x, point.y),
    )
}

fn to_crossterm_color(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::DarkBlue => style::Color::DarkBlue,
        Color::DarkGreen => style::Color::DarkGreen,
        Color::DarkCyan => style::Color::DarkCyan,
        Color::DarkRed => style::Color::DarkRed,
        Color::DarkMagenta => style::Color::DarkMagenta,
        Color::DarkYellow => style::Color::DarkYellow,
        Color::Gray => style::Color::Grey,
        Color::DarkGray => style::Color::DarkGrey,
        Color::Blue => style::Color::Blue,
        Color::Green => style::Color::Green,
        Color::Cyan => style::Color::Cyan,
        Color::Red => style::Color::Red,
        Color::Magenta => style::Color::Magenta,
        Color::Yellow => style::Color::Yellow,
        Color::White => style::Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(ch: char) -> Cell {
        Cell { ch, ..Cell::BLANK }
    }

    #[test]
    fn test_put_writes_character() {
        let mut out = Vec::new();
        {
            let mut sink = TerminalSink::acquire(&mut out, Size::new(2, 4)).unwrap();
            sink.put(Point::new(1, 0), cell('X')).unwrap();
            sink.flush().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('X'));
        // MoveTo is 1-based: row 1, column 2
        assert!(text.contains("\x1b[1;2H"));
    }

    #[test]
    fn test_drop_restores_terminal() {
        let mut out = Vec::new();
        {
            let mut sink = TerminalSink::acquire(&mut out, Size::new(1, 1)).unwrap();
            sink.put(Point::new(0, 0), cell('#')).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?25l"), "cursor hidden on acquire");
        assert!(text.ends_with("\x1b[?25h"), "cursor shown on release");
        let reset = text.find("\x1b[0m").expect("colors reset on release");
        assert!(reset > text.find('#').unwrap());
    }

    #[test]
    fn test_colors_not_repeated() {
        let mut out = Vec::new();
        {
            let mut sink = TerminalSink::acquire(&mut out, Size::new(1, 3)).unwrap();
            for x in 0..3 {
                sink.put(Point::new(x, 0), cell('-')).unwrap();
            }
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\x1b[38;").count(), 1);
    }

    #[test]
    fn test_dimensions_are_fixed_at_acquire() {
        let sink = TerminalSink::acquire(Vec::new(), Size::new(24, 80)).unwrap();
        assert_eq!(sink.dimensions(), Size::new(24, 80));
    }
}
