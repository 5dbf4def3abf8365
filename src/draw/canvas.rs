use crate::draw::Surface;
use crate::error::Result;
use crate::settings::Rgb;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Which layer inked a braille character. Fills take precedence over strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ink {
    Fill,
    Stroke,
}

/// A single character of the rendered frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,

    /// `None` if no dot of the character is set
    pub color: Option<Rgb>,
}

/// An in-memory drawing surface made out of braille dots. Every character holds 2x4 dots.
///
/// Drawing happens in surface units, `units_per_dot` of which make up the side of a dot. Anything
/// drawn outside of the canvas is clipped.
pub struct Canvas {
    /// Dots covered by a fill
    fill: Vec<bool>,

    /// Dots covered by a stroke
    stroke: Vec<bool>,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Ink of each character, parallel to `cp`
    ink: Vec<Option<Ink>>,

    /// The frame buffer.
    fb: String,

    /// Width of the canvas in dots
    w: usize,

    /// Height of the canvas in dots
    h: usize,

    units_per_dot: u32,

    fill_color: Rgb,
    stroke_color: Rgb,

    /// Stroke width in units
    line_width: f32,
}

impl Canvas {
    pub fn new(w: usize, h: usize, units_per_dot: u32) -> Self {
        assert!(units_per_dot > 0, "a dot must be at least one unit wide");

        // Let `w` and `h` refer to width and height of the dot buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        // Each braille character is 3 bytes, and newlines one byte.
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        let mut canvas = Self {
            fill: vec![false; w * h],
            stroke: vec![false; w * h],
            cp: vec![BRAILLE_EMPTY; bw * bh],
            ink: vec![None; bw * bh],
            fb,
            w,
            h,
            units_per_dot,
            fill_color: Rgb::new(255, 255, 255),
            stroke_color: Rgb::new(255, 255, 255),
            line_width: 1.0,
        };
        canvas.render();

        canvas
    }

    /// Width of the canvas in braille characters
    pub fn columns(&self) -> usize {
        self.w.div_ceil(2)
    }

    /// Height of the canvas in braille characters
    pub fn rows(&self) -> usize {
        self.h.div_ceil(4)
    }

    /// The character at `(col, row)` as of the last call to [`Canvas::render`]
    pub fn glyph(&self, col: usize, row: usize) -> Glyph {
        let i = row * self.columns() + col;

        let color = self.ink[i].map(|ink| match ink {
            Ink::Fill => self.fill_color,
            Ink::Stroke => self.stroke_color,
        });

        Glyph {
            ch: braille(self.cp[i]),
            color,
        }
    }

    /// Fundamentally, we have a framebuffer of every dot on the canvas, and we ask ourselves "Is
    /// this dot on or off?". Returns the frame as text, one line per row of characters.
    pub fn render(&mut self) -> &str {
        let bw = self.columns();

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);
        self.ink.fill(None);

        for n in 0..self.fill.len() {
            let (fill, stroke) = (self.fill[n], self.stroke[n]);
            if !fill && !stroke {
                continue;
            }

            let (x, y) = self.xy_to(n);
            let i = (y / 4) * bw + (x / 2);

            self.cp[i] += Self::get_hex_value(x, y);
            self.ink[i] = if fill {
                Some(Ink::Fill)
            } else {
                self.ink[i].or(Some(Ink::Stroke))
            };
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(braille(c));
        }
        self.fb.push('\n');

        &self.fb
    }

    /// Convert a unit coordinate to the dot it falls in
    fn to_dot(&self, v: f32) -> i64 {
        (v / self.units_per_dot as f32).floor() as i64
    }

    /// Turns on a single dot of `layer`, clipping anything out of bounds
    fn plot(layer: &mut [bool], w: usize, h: usize, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            return;
        }

        layer[y as usize * w + x as usize] = true;
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

fn braille(c: u32) -> char {
    char::from_u32(c).unwrap_or(' ')
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.w as u32 * self.units_per_dot
    }

    fn height(&self) -> u32 {
        self.h as u32 * self.units_per_dot
    }

    fn set_fill(&mut self, color: Rgb) {
        self.fill_color = color;
    }

    fn set_stroke(&mut self, color: Rgb, width: f32) {
        self.stroke_color = color;
        self.line_width = width;
    }

    fn clear(&mut self) {
        self.fill.fill(false);
        self.stroke.fill(false);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (x0, y0) = (self.to_dot(x).max(0), self.to_dot(y).max(0));
        let (x1, y1) = (
            self.to_dot(x + w).min(self.w as i64),
            self.to_dot(y + h).min(self.h as i64),
        );

        for y in y0..y1 {
            for x in x0..x1 {
                Self::plot(&mut self.fill, self.w, self.h, x, y);
            }
        }
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32)) {
        let (x0, y0) = (self.to_dot(from.0), self.to_dot(from.1));
        let (x1, y1) = (self.to_dot(to.0), self.to_dot(to.1));

        // lines thinner than a dot still take up a whole dot
        let thickness = ((self.line_width / self.units_per_dot as f32).round() as i64).max(1);

        let (dx, dy) = (x1 - x0, y1 - y0);
        let steps = dx.abs().max(dy.abs());

        for s in 0..=steps {
            let (x, y) = if steps == 0 {
                (x0, y0)
            } else {
                let t = s as f32 / steps as f32;
                (
                    x0 + (dx as f32 * t).round() as i64,
                    y0 + (dy as f32 * t).round() as i64,
                )
            };

            for ox in 0..thickness {
                for oy in 0..thickness {
                    Self::plot(&mut self.stroke, self.w, self.h, x + ox, y + oy);
                }
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        self.render();
        Ok(())
    }
}
