//! Paginated result grid: four results per row, each labeled with its id and
//! a head+tail preview of its text.

use crate::config::UiConfig;
use crate::summary::summarize;
use crate::types::Chunk;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

/// Results per grid row.
pub const GRID_COLUMNS: usize = 4;

/// Label for a result cell: `ID: <id>` then the preview on the next line.
pub fn button_label(chunk: &Chunk, preview_length: usize) -> String {
    format!("ID: {}\n{}", chunk.id, summarize(&chunk.text, preview_length))
}

/// Single-line label for menus.
pub fn menu_label(chunk: &Chunk, preview_length: usize) -> String {
    let preview = summarize(&chunk.text, preview_length);
    let flat: Vec<&str> = preview.split_whitespace().collect();
    format!("ID: {} | {}", chunk.id, flat.join(" "))
}

pub struct ResultGrid<'a> {
    chunks: &'a [Chunk],
    rows_per_page: usize,
    preview_length: usize,
}

impl<'a> ResultGrid<'a> {
    pub fn new(chunks: &'a [Chunk], ui: &UiConfig) -> Self {
        Self {
            chunks,
            rows_per_page: ui.rows_per_page.max(1),
            preview_length: ui.preview_length,
        }
    }

    pub fn page_size(&self) -> usize {
        GRID_COLUMNS * self.rows_per_page
    }

    /// Number of pages; zero when there are no results.
    pub fn page_count(&self) -> usize {
        self.chunks.len().div_ceil(self.page_size())
    }

    /// Results on `page` (zero-based). Out-of-range pages are empty.
    pub fn page(&self, page: usize) -> &'a [Chunk] {
        let start = page.saturating_mul(self.page_size());
        if start >= self.chunks.len() {
            return &[];
        }
        let end = (start + self.page_size()).min(self.chunks.len());
        &self.chunks[start..end]
    }

    pub fn preview_length(&self) -> usize {
        self.preview_length
    }

    /// Render one page as a table with a page footer.
    pub fn render_page(&self, page: usize) -> String {
        let chunks = self.page(page);
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        for row in chunks.chunks(GRID_COLUMNS) {
            let mut cells: Vec<String> = row
                .iter()
                .map(|chunk| button_label(chunk, self.preview_length))
                .collect();
            cells.resize(GRID_COLUMNS, String::new());
            table.add_row(cells);
        }
        format!(
            "{}\nPage {} of {} ({} results)",
            table,
            page + 1,
            self.page_count().max(1),
            self.chunks.len()
        )
    }

    /// Render every page, one after another.
    pub fn render_all(&self) -> String {
        (0..self.page_count())
            .map(|page| self.render_page(page))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
