//! Alternate-screen canvas used by trajectory playback

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, stdout, Write};
use std::time::Duration;

#[derive(Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    fg: Option<Color>,
    bold: bool,
}

const BLANK: Glyph = Glyph { ch: ' ', fg: None, bold: false };

/// Off-screen frame, row-major. Writes outside the visible area are dropped.
pub struct Canvas {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![BLANK; width as usize * height as usize],
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn blank(&mut self) {
        self.glyphs.fill(BLANK);
    }

    fn put(&mut self, x: i32, y: i32, glyph: Glyph) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.glyphs[y as usize * self.width as usize + x as usize] = glyph;
        }
    }

    /// One grid cell: `width` copies of `ch` starting at column `x`
    pub fn block(&mut self, x: i32, y: i32, width: i32, ch: char, fg: Color, bold: bool) {
        for dx in 0..width {
            self.put(x + dx, y, Glyph { ch, fg: Some(fg), bold });
        }
    }

    pub fn text(&mut self, x: i32, y: i32, s: &str, fg: Color, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x + i as i32, y, Glyph { ch, fg: Some(fg), bold });
        }
    }

    pub fn text_centered(&mut self, y: i32, s: &str, fg: Color, bold: bool) {
        let x = ((self.width as i32 - s.chars().count() as i32) / 2).max(0);
        self.text(x, y, s, fg, bold);
    }

    fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.glyphs.chunks(self.width.max(1) as usize).take(self.height as usize)
    }

    #[cfg(test)]
    pub(crate) fn char_at(&self, x: u16, y: u16) -> char {
        self.glyphs[y as usize * self.width as usize + x as usize].ch
    }
}

/// Raw-mode alternate screen holding a `Canvas`. The screen is restored on drop.
pub struct Terminal {
    canvas: Canvas,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self { canvas: Canvas::new(width, height) })
    }

    pub fn canvas(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Pick up a changed window size. The canvas is reallocated and the
    /// screen cleared so no stale rows are left behind.
    pub fn sync_size(&mut self) -> io::Result<()> {
        let current = self.canvas.size();
        let (w, h) = terminal::size().unwrap_or(current);
        if (w, h) != current {
            self.canvas = Canvas::new(w, h);
            execute!(stdout(), Clear(ClearType::All))?;
        }
        Ok(())
    }

    /// Write the canvas to the screen, emitting style changes only where
    /// the style differs from the previous glyph.
    pub fn present(&self) -> io::Result<()> {
        let mut out = stdout().lock();
        let mut style: Option<(Option<Color>, bool)> = None;

        for (y, row) in self.canvas.rows().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;
            for glyph in row {
                if style != Some((glyph.fg, glyph.bold)) {
                    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
                    if let Some(fg) = glyph.fg {
                        queue!(out, SetForegroundColor(fg))?;
                    }
                    if glyph.bold {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                    style = Some((glyph.fg, glyph.bold));
                }
                queue!(out, Print(glyph.ch))?;
            }
        }

        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        out.flush()
    }

    /// Wait up to `timeout` for a key press. Releases and repeats reported
    /// by some platforms are ignored.
    pub fn poll_key(&self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if poll(timeout)? {
            if let Event::Key(key) = read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
