//! Approximate text metrics and line wrapping
//!
//! Widths use average glyph advances of a Helvetica-like sans-serif face.
//! They are close enough for placing lines and wrapping; the final glyph
//! rendering is left to whatever draws the scene.

use doc_model::FontWeight;
use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

/// Estimated advance of `text` at `font_size`
pub fn approx_text_width(text: &str, font_size: f64, weight: FontWeight) -> f64 {
    let em: f64 = text
        .graphemes(true)
        .filter_map(|g| g.chars().next())
        .map(char_advance)
        .sum();
    let weight_factor = match weight {
        FontWeight::Bold => 1.06,
        FontWeight::Normal => 1.0,
        FontWeight::Light => 0.97,
    };
    em * font_size * weight_factor
}

fn char_advance(c: char) -> f64 {
    match c {
        ' ' => 0.28,
        'i' | 'j' | 'l' | '\'' | '.' | ',' | ':' | ';' | '!' | '|' => 0.25,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '-' => 0.35,
        'm' | 'w' | 'M' | 'W' | '—' | '@' => 0.85,
        'A'..='Z' => 0.67,
        '0'..='9' => 0.56,
        c if c.is_ascii() => 0.52,
        c if is_wide(c) => 1.0,
        _ => 0.6,
    }
}

/// CJK ideographs, kana, Hangul and fullwidth forms take a full em
fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6)
}

/// Greedy wrap into lines no wider than `max_width`.
///
/// Break opportunities follow UAX #14, so ideographic text wraps between
/// characters. Explicit newlines always break. A run with no break
/// opportunity that is wider than the line is split between graphemes.
pub fn wrap_text(text: &str, max_width: f64, font_size: f64, weight: FontWeight) -> Vec<String> {
    let measure = |s: &str| approx_text_width(s.trim_end(), font_size, weight);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut start = 0;
        for (offset, opportunity) in linebreaks(paragraph) {
            let segment = &paragraph[start..offset];
            start = offset;

            let candidate = format!("{}{}", current, segment);
            if current.trim_end().is_empty() || measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(current.trim_end().to_string());
                current = segment.to_string();
            }
            split_overlong(&mut current, &mut lines, max_width, &measure);

            if opportunity == BreakOpportunity::Mandatory && offset < paragraph.len() {
                lines.push(std::mem::take(&mut current).trim_end().to_string());
            }
        }
        lines.push(current.trim_end().to_string());
    }
    lines
}

/// Move grapheme-sized pieces of `current` onto `lines` until it fits
fn split_overlong(
    current: &mut String,
    lines: &mut Vec<String>,
    max_width: f64,
    measure: &impl Fn(&str) -> f64,
) {
    while measure(current) > max_width {
        let mut end = 0;
        for (index, grapheme) in current.grapheme_indices(true) {
            let next = index + grapheme.len();
            if end > 0 && measure(&current[..next]) > max_width {
                break;
            }
            end = next;
        }
        if end >= current.trim_end().len() {
            // A single grapheme wider than the line
            return;
        }
        lines.push(current[..end].to_string());
        *current = current[end..].to_string();
    }
}
