//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Drawing goes into a [`FrameBuffer`]; on flush only the runs of cells that
//! changed since the previous flush are encoded and written.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, ScreenCell};
use crate::surface::Surface;
use crate::types::Color;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            active: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf().context("failed to enter the alternate screen")?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) if prev.size() == fb.size() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            Some(prev) => {
                encode_full_into(fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// A [`Surface`] backed by the real terminal.
///
/// Owns the terminal session: raw mode and the alternate screen are entered by
/// [`TerminalSurface::open`] and released on drop.
pub struct TerminalSurface {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl TerminalSurface {
    pub fn open() -> Result<Self> {
        let (width, height) = terminal::size().context("failed to query terminal size")?;
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            fb: FrameBuffer::new(width, height),
        })
    }

    /// Restore the terminal explicitly, reporting any failure.
    pub fn close(mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u16, u16) {
        self.fb.size()
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Color) {
        self.fb.set_cell(x, y, ch, fg, bg);
    }

    fn clear(&mut self, fg: Color, bg: Color) {
        self.fb.clear(fg, bg);
    }

    /// Writes nothing when no cell changed since the previous flush.
    fn flush(&mut self) -> Result<()> {
        if !self.fb.take_dirty() {
            return Ok(());
        }
        self.renderer.draw(&self.fb)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<(Color, Color)> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            print_cell(out, cell, &mut current)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<(Color, Color)> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            print_cell(out, cell, &mut current)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn print_cell(
    out: &mut Vec<u8>,
    cell: ScreenCell,
    current: &mut Option<(Color, Color)>,
) -> Result<()> {
    let colors = (cell.fg, cell.bg);
    if *current != Some(colors) {
        out.queue(SetForegroundColor(to_term_color(cell.fg)))?;
        out.queue(SetBackgroundColor(to_term_color(cell.bg)))?;
        *current = Some(colors);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn to_term_color(color: Color) -> TermColor {
    match color {
        Color::Default => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
        Color::Rgb(rgb) => TermColor::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
