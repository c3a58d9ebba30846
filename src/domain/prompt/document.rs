//! Structured prompt document builder.
//!
//! A document is an ordered list of labelled sections. Absent or blank
//! values are dropped at insertion time and a section with no content is
//! never rendered, so the model never sees an empty heading or a
//! placeholder line.

use std::fmt::Write as _;

/// A Markdown-like table rendered inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Cells are padded with blanks or truncated to the
    /// header width.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells
            .into_iter()
            .map(|c| c.into().replace('|', "/"))
            .collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Columns with at least one non-blank cell.
    fn visible_columns(&self) -> Vec<usize> {
        (0..self.headers.len())
            .filter(|&i| self.rows.iter().any(|row| !row[i].trim().is_empty()))
            .collect()
    }

    fn render(&self, out: &mut String) {
        let columns = self.visible_columns();
        let pick = |cells: &[String]| {
            columns
                .iter()
                .map(|&i| cells[i].trim())
                .collect::<Vec<_>>()
                .join(" | ")
        };

        let _ = writeln!(out, "| {} |", pick(&self.headers));
        let _ = writeln!(
            out,
            "|{}|",
            columns.iter().map(|_| "---").collect::<Vec<_>>().join("|")
        );
        for row in &self.rows {
            let _ = writeln!(out, "| {} |", pick(row));
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Block {
    Field { label: String, value: String },
    Text(String),
    Bullets(Vec<String>),
    Table(Table),
}

/// A titled group of blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    title: String,
    blocks: Vec<Block>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Adds a `- **Label:** value` line when the value is present and non-blank.
    pub fn field<V: AsRef<str>>(mut self, label: &str, value: Option<V>) -> Self {
        if let Some(v) = non_blank(value.as_ref().map(AsRef::as_ref)) {
            self.blocks.push(Block::Field {
                label: label.to_string(),
                value: v.to_string(),
            });
        }
        self
    }

    /// Adds free text when present and non-blank.
    pub fn text<V: AsRef<str>>(mut self, value: Option<V>) -> Self {
        if let Some(v) = non_blank(value.as_ref().map(AsRef::as_ref)) {
            self.blocks.push(Block::Text(v.to_string()));
        }
        self
    }

    /// Adds a bulleted list, skipping blank items. An empty list adds nothing.
    pub fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<String> = items
            .into_iter()
            .filter_map(|i| non_blank(Some(i.as_ref())).map(str::to_string))
            .collect();
        if !items.is_empty() {
            self.blocks.push(Block::Bullets(items));
        }
        self
    }

    /// Adds a table when it has at least one row.
    pub fn table(mut self, table: Table) -> Self {
        if !table.is_empty() {
            self.blocks.push(Block::Table(table));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "## {}", self.title);
        for block in &self.blocks {
            match block {
                Block::Field { label, value } => {
                    let _ = writeln!(out, "- **{label}:** {value}");
                }
                Block::Text(text) => {
                    let _ = writeln!(out, "{text}");
                }
                Block::Bullets(items) => {
                    for item in items {
                        let _ = writeln!(out, "- {item}");
                    }
                }
                Block::Table(table) => table.render(out),
            }
        }
    }
}

/// Ordered prompt document: intro line, sections, closing instructions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptDocument {
    intro: Option<String>,
    sections: Vec<Section>,
    closing: Vec<String>,
}

impl PromptDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intro(mut self, text: impl Into<String>) -> Self {
        self.intro = Some(text.into());
        self
    }

    /// Appends a section; empty sections are dropped.
    pub fn section(mut self, section: Section) -> Self {
        if !section.is_empty() {
            self.sections.push(section);
        }
        self
    }

    /// Appends a closing instruction paragraph.
    pub fn closing(mut self, text: impl Into<String>) -> Self {
        self.closing.push(text.into());
        self
    }

    pub fn has_heading(&self, title: &str) -> bool {
        self.sections.iter().any(|s| s.title == title)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(intro) = &self.intro {
            let _ = writeln!(out, "{intro}");
            out.push('\n');
        }
        for section in &self.sections {
            section.render(&mut out);
            out.push('\n');
        }
        for paragraph in &self.closing {
            let _ = writeln!(out, "{paragraph}");
            out.push('\n');
        }
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let doc = PromptDocument::new().section(
            Section::new("Participant")
                .field("Name", Some("Alex"))
                .field::<&str>("NDIS Number", None)
                .field("Diagnosis", Some("   ")),
        );
        let text = doc.render();
        assert!(text.contains("- **Name:** Alex"));
        assert!(!text.contains("NDIS Number"));
        assert!(!text.contains("Diagnosis"));
    }

    #[test]
    fn section_with_no_content_has_no_heading() {
        let doc = PromptDocument::new()
            .section(Section::new("Trial Notes").text::<&str>(None))
            .section(Section::new("Goals").bullets(Vec::<String>::new()));
        assert!(!doc.has_heading("Trial Notes"));
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn tables_render_header_separator_and_rows() {
        let table = Table::new(["Tool", "Baseline"])
            .row(["COPM", "4"])
            .row(["Barthel"]);
        let text = PromptDocument::new()
            .section(Section::new("Scores").table(table))
            .render();
        assert_eq!(
            text,
            "## Scores\n| Tool | Baseline |\n|---|---|\n| COPM | 4 |\n| Barthel |  |"
        );
    }

    #[test]
    fn blank_columns_are_dropped() {
        let table = Table::new(["Tool", "Scale", "Baseline"])
            .row(["COPM", "", "4"])
            .row(["Barthel", "  ", "60"]);
        let text = PromptDocument::new()
            .section(Section::new("Scores").table(table))
            .render();
        assert_eq!(
            text,
            "## Scores\n| Tool | Baseline |\n|---|---|\n| COPM | 4 |\n| Barthel | 60 |"
        );
        assert!(!text.contains("Scale"));
        assert!(!text.contains(" - "));
    }

    #[test]
    fn table_cells_cannot_break_columns() {
        let text = PromptDocument::new()
            .section(Section::new("S").table(Table::new(["A"]).row(["x|y"])))
            .render();
        assert!(text.contains("| x/y |"));
    }

    #[test]
    fn sections_render_in_insertion_order() {
        let text = PromptDocument::new()
            .intro("Draft a report.")
            .section(Section::new("First").text(Some("one")))
            .section(Section::new("Second").bullets(["a", "b"]))
            .closing("Respond in JSON.")
            .render();
        assert_eq!(
            text,
            "Draft a report.\n\n## First\none\n\n## Second\n- a\n- b\n\nRespond in JSON."
        );
    }
}
