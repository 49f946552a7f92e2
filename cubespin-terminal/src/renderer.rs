//! ASCII wireframe rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use cubespin_core::projection::{VIEW_HEIGHT, VIEW_WIDTH};
use cubespin_core::ProjectionResult;
use nalgebra::Point2;
use std::io::Write;

const EDGE_CHAR: char = '#';
const CORNER_CHAR: char = '@';

/// Renders projected cube frames as character wireframes.
///
/// Frames arrive in viewport coordinates (400x200) and are scaled to the
/// character grid.
pub struct WireframeRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl WireframeRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.char_buffer[y * self.width + x])
        } else {
            None
        }
    }

    /// Map a viewport point to a fractional cell position
    pub fn to_cell(&self, p: Point2<f32>) -> (f32, f32) {
        let sx = (self.width.saturating_sub(1)) as f32 / VIEW_WIDTH;
        let sy = (self.height.saturating_sub(1)) as f32 / VIEW_HEIGHT;
        (p.x * sx, p.y * sy)
    }

    /// Draw every face of the frame as a closed quad
    pub fn render_frame(&mut self, frame: &ProjectionResult) {
        let cells: Vec<(f32, f32)> = frame
            .vertices
            .iter()
            .map(|&v| self.to_cell(v.into()))
            .collect();

        for face in &frame.point_order {
            for i in 0..face.len() {
                let from = face[i];
                let to = face[(i + 1) % face.len()];
                if let (Some(&a), Some(&b)) = (cells.get(from), cells.get(to)) {
                    self.draw_line(a, b, EDGE_CHAR);
                }
            }
        }

        for &(x, y) in &cells {
            if x.is_finite() && y.is_finite() {
                self.plot(x.round() as i64, y.round() as i64, CORNER_CHAR);
            }
        }
    }

    /// Bresenham line between two cell positions, clipped to the buffer
    pub fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), character: char) {
        if !(from.0.is_finite() && from.1.is_finite() && to.0.is_finite() && to.1.is_finite()) {
            return;
        }

        let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, character);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, character: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.char_buffer[y * self.width + x] = character;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];

                let color = match c {
                    CORNER_CHAR => Color::White,
                    EDGE_CHAR => Color::Magenta,
                    _ => Color::DarkGrey,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
