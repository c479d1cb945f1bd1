//! ASCII line rasterizer for terminal rendering

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wirecol_core::LineRenderer;

/// Endpoints further than this outside the cell grid are treated as
/// degenerate projections (for example points behind the camera, which
/// the kernel deliberately does not clip) and skipped instead of walked.
const OFFSCREEN_LIMIT: i32 = 4096;

/// Plots wireframe segments into a character grid sized to the terminal.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Reset);
    }

    pub fn cell(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    fn plot(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = glyph;
        self.color_buffer[idx] = color;
    }

    /// Queue the whole grid to the terminal, one cursor move per row.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineRenderer for AsciiRenderer {
    /// Bresenham line between two pixel cells.
    fn draw_segment(&mut self, a: (i32, i32), b: (i32, i32), color: u32) {
        if a.0.abs() > OFFSCREEN_LIMIT
            || a.1.abs() > OFFSCREEN_LIMIT
            || b.0.abs() > OFFSCREEN_LIMIT
            || b.1.abs() > OFFSCREEN_LIMIT
        {
            return;
        }
        let (glyph, term_color) = style(color);
        let (mut x, mut y) = a;
        let dx = (b.0 - a.0).abs();
        let dy = -(b.1 - a.1).abs();
        let sx = if a.0 < b.0 { 1 } else { -1 };
        let sy = if a.1 < b.1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, glyph, term_color);
            if x == b.0 && y == b.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err -= dx;
                y += sy;
            }
        }
    }
}

/// Map a packed 0xRRGGBBAA color to a terminal color and glyph. Dim
/// colors get a lighter glyph so the objects stay readable over the grid.
fn style(color: u32) -> (char, Color) {
    let r = (color >> 24) as u8;
    let g = (color >> 16) as u8;
    let b = (color >> 8) as u8;
    let glyph = if r < 0x80 && g < 0x80 && b < 0x80 {
        '.'
    } else {
        '#'
    };
    (glyph, Color::Rgb { r, g, b })
}
