use std::{borrow::Cow, fmt::Write};

const CELL_PADDING: usize = 1;

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Renders the table with `+---+` rules. Cells beyond the header count
    /// are dropped.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(display_width(cell));
            }
        }

        let rule = horizontal_rule(&col_widths);
        let mut table = String::with_capacity(rule.len() * (self.rows.len() + 4));
        table.push_str(&rule);
        self.write_line(&mut table, self.headers, &col_widths, false);
        table.push_str(&rule);
        for row in &self.rows {
            self.write_line(&mut table, row.as_ref(), &col_widths, true);
        }
        if !self.rows.is_empty() {
            table.push_str(&rule);
        }
        table
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'_, str>], widths: &[usize], body: bool) {
        out.push('|');
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            let alignment = if body {
                self.alignments.get(i).copied().unwrap_or_default()
            } else {
                Alignment::Center
            };
            let (left, right) = split_padding(width - display_width(cell), alignment);
            let _ = write!(
                out,
                "{:pad_l$}{cell}{:pad_r$}|",
                "",
                "",
                pad_l = left + CELL_PADDING,
                pad_r = right + CELL_PADDING
            );
        }
        out.push('\n');
    }
}

fn horizontal_rule(widths: &[usize]) -> String {
    let mut rule = String::from("+");
    for width in widths {
        rule.push_str(&"-".repeat(width + CELL_PADDING * 2));
        rule.push('+');
    }
    rule.push('\n');
    rule
}

fn split_padding(slack: usize, alignment: Alignment) -> (usize, usize) {
    match alignment {
        Alignment::Left => (0, slack),
        Alignment::Center => (slack / 2, slack - slack / 2),
        Alignment::Right => (slack, 0),
    }
}

// Wide (CJK) characters take two terminal columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
