//! Row renderer for entry listings.
//!
//! The renderer owns its output buffer and rebuilds it from scratch on
//! every render, so no stray rows from a previous state can survive.
//! Interpolated data is sanitized (ANSI escapes and control characters
//! stripped) before it reaches the buffer.

use crate::models::interaction_type::InteractionType;
use crate::models::summary::EntrySummary;
use crate::utils::colors::{BLUE, CYAN, GREEN, MAGENTA, RESET};
use regex::Regex;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_PLACEHOLDER: &str = "No entries found";

const HEADERS: [&str; 7] = ["ID", "TITLE", "CONTACT", "COMPANY", "DATE", "TYPE", "STATUS"];

/// Per-column cap so one long note or company cannot blow up the layout.
const MAX_COL_WIDTH: usize = 40;

pub struct EntryTable {
    buffer: String,
    ansi: Regex,
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryTable {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            ansi: Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap(),
        }
    }

    /// Rebuild the buffer for the given page and return it.
    pub fn render(&mut self, items: &[EntrySummary]) -> &str {
        let rows: Vec<[String; 7]> = items.iter().map(|s| self.row_cells(s)).collect();

        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let mut out = String::new();

        for (i, h) in HEADERS.iter().enumerate() {
            out.push_str(&pad(h, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        let total_width: usize = widths.iter().sum::<usize>() + widths.len();
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        if rows.is_empty() {
            let placeholder_pad = total_width.saturating_sub(EMPTY_PLACEHOLDER.len()) / 2;
            out.push_str(&" ".repeat(placeholder_pad));
            out.push_str(EMPTY_PLACEHOLDER);
            out.push('\n');
        } else {
            for (row, item) in rows.iter().zip(items) {
                for (i, cell) in row.iter().enumerate() {
                    let padded = pad(cell, widths[i]);
                    // Type column gets its badge color; the codes are added
                    // after padding so they never skew the width math.
                    if i == 5 {
                        out.push_str(&format!("{}{}{}", type_color(item), padded, RESET));
                    } else {
                        out.push_str(&padded);
                    }
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        self.buffer = out;
        &self.buffer
    }

    fn row_cells(&self, s: &EntrySummary) -> [String; 7] {
        [
            s.id.to_string(),
            self.sanitize(&s.title),
            self.sanitize(&s.contact),
            self.sanitize(&s.company),
            self.sanitize(&s.date),
            badge_label(&s.interaction_type),
            self.sanitize(&s.lead_status),
        ]
    }

    /// Strip ANSI sequences, drop remaining control characters, cap the
    /// visible width.
    fn sanitize(&self, raw: &str) -> String {
        let stripped = self.ansi.replace_all(raw, "");
        let clean: String = stripped.chars().filter(|c| !c.is_control()).collect();

        if clean.width() <= MAX_COL_WIDTH {
            return clean;
        }

        let mut out = String::new();
        let mut w = 0;
        for c in clean.chars() {
            let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if w + cw > MAX_COL_WIDTH - 3 {
                break;
            }
            out.push(c);
            w += cw;
        }
        out.push_str("...");
        out
    }
}

/// Badge text: slug with underscores replaced by spaces.
fn badge_label(type_slug: &str) -> String {
    match InteractionType::from_db_str(type_slug) {
        Some(ty) => ty.label().to_string(),
        None => type_slug.replace('_', " "),
    }
}

fn type_color(item: &EntrySummary) -> &'static str {
    match item.interaction_type.as_str() {
        "email" => BLUE,
        "video_call" => MAGENTA,
        "in_person" => GREEN,
        "phone_call" => CYAN,
        _ => RESET,
    }
}

fn pad(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}
