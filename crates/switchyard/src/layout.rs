//! Column layout for help listings.
//!
//! A [`Grid`] is a list of rows of [`Cell`]s. Column widths are measured in
//! terminal columns (`unicode-width`), every column but the last is padded,
//! and rows never end in whitespace.

use unicode_width::UnicodeWidthStr;

use crate::output::{Output, Role};

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Spaces needed to pad `s` to `width` columns.
pub fn padding(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(display_width(s)))
}

/// One grid cell: a sequence of styled fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    parts: Vec<(String, Role)>,
}

impl Cell {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self::default().push(text, role)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a fragment.
    pub fn push(mut self, text: impl Into<String>, role: Role) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.parts.push((text, role));
        }
        self
    }

    pub fn width(&self) -> usize {
        self.parts.iter().map(|(text, _)| display_width(text)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The unstyled text.
    pub fn text(&self) -> String {
        self.parts.iter().map(|(text, _)| text.as_str()).collect()
    }
}

/// Rows of cells laid out in aligned columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    indent: usize,
    gap: usize,
}

impl Grid {
    /// `indent` leading spaces per row, `gap` spaces between columns.
    pub fn new(indent: usize, gap: usize) -> Self {
        Self {
            rows: Vec::new(),
            indent,
            gap,
        }
    }

    pub fn row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The widest cell of each column.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                let width = cell.width();
                match widths.get_mut(index) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// Writes every row, one line each.
    pub fn write_to(&self, out: &mut dyn Output) {
        let widths = self.column_widths();
        let indent = " ".repeat(self.indent);
        let gap = " ".repeat(self.gap);

        for row in &self.rows {
            // Cells past the last non-empty one would only add padding.
            let used = row
                .iter()
                .rposition(|cell| !cell.is_empty())
                .map_or(0, |last| last + 1);

            out.write(&indent, Role::Plain);
            for (index, cell) in row[..used].iter().enumerate() {
                for (text, role) in &cell.parts {
                    out.write(text, *role);
                }
                if index + 1 < used {
                    let width = widths.get(index).copied().unwrap_or(0);
                    out.write(&" ".repeat(width - cell.width()), Role::Plain);
                    out.write(&gap, Role::Plain);
                }
            }
            out.write("\n", Role::Plain);
        }
    }
}
