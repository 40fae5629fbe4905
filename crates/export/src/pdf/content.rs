//! Content stream builder
//!
//! Covers the operators a slide page needs: graphics state (`q`/`Q`/`cm`),
//! XObject painting (`Do`), fill colour (`rg`) and text objects
//! (`BT`/`ET`/`Tf`/`Tm`/`Tr`/`Tj`).

use super::objects::format_real;
use doc_model::Color;
use std::io::Write;

/// Text rendering modes (`Tr`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TextRenderingMode {
    Fill = 0,
    /// Selectable and searchable but not drawn
    Invisible = 3,
}

#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.line("q")
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.line("Q")
    }

    /// Concatenate a matrix onto the CTM (`cm`)
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.numbers(&[a, b, c, d, e, f], "cm")
    }

    pub fn draw_xobject(&mut self, name: &str) -> &mut Self {
        let _ = writeln!(self.data, "/{} Do", name);
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        let channel = |v: u8| v as f64 / 255.0;
        self.numbers(&[channel(color.r), channel(color.g), channel(color.b)], "rg")
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.line("BT")
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.line("ET")
    }

    pub fn set_font(&mut self, resource_name: &str, size: f64) -> &mut Self {
        let _ = writeln!(self.data, "/{} {} Tf", resource_name, format_real(size));
        self
    }

    /// Place the text cursor at `(x, y)` in page space (`Tm`)
    pub fn set_text_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.numbers(&[1.0, 0.0, 0.0, 1.0, x, y], "Tm")
    }

    pub fn set_text_rendering_mode(&mut self, mode: TextRenderingMode) -> &mut Self {
        let _ = writeln!(self.data, "{} Tr", mode as i32);
        self
    }

    /// Show already-encoded text (`Tj`)
    pub fn show_text(&mut self, encoded: &[u8]) -> &mut Self {
        self.data.push(b'(');
        for &byte in encoded {
            if matches!(byte, b'(' | b')' | b'\\') {
                self.data.push(b'\\');
            }
            self.data.push(byte);
        }
        self.line(") Tj")
    }

    fn numbers(&mut self, values: &[f64], op: &str) -> &mut Self {
        for value in values {
            let _ = write!(self.data, "{} ", format_real(*value));
        }
        self.line(op)
    }

    fn line(&mut self, s: &str) -> &mut Self {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
        self
    }
}
