//! Grid rendering.
//!
//! Draws one page of a layout plan: rows stacked vertically, split rows
//! (hero beside grid) side by side, and cells wrapped `columns` per line.

use super::constants::{MIN_CELL_LINES, PIXELS_PER_LINE};
use super::styles::GridStyles;
use crate::presentation::{
    ItemPresentation, ItemPresenter, LinkBuilder, Thumbnail, TimestampFormatter,
};
use crate::state::PageIndicator;
use crate::view_state::{LayoutPlan, RowRegion};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';
const VIDEO_MARKER: &str = "▶ ";

/// A plan row with its items already presented.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedRow {
    /// Horizontal region of the row.
    pub region: RowRegion,
    /// Items per visual line.
    pub columns: u32,
    /// Presented items in display order.
    pub cells: Vec<ItemPresentation>,
}

impl PresentedRow {
    /// Height of the row in terminal lines.
    pub fn lines(&self) -> u16 {
        let per_line = self.columns.max(1) as usize;
        let visual_lines = self.cells.len().div_ceil(per_line).max(1) as u16;
        visual_lines.saturating_mul(self.cell_lines())
    }

    fn cell_lines(&self) -> u16 {
        self.cells
            .iter()
            .map(|cell| cell_lines(cell.height_px))
            .max()
            .unwrap_or(MIN_CELL_LINES)
    }
}

/// Present every row of `plan`.
pub fn present_rows<L, T>(plan: &LayoutPlan<'_>, presenter: &ItemPresenter<L, T>) -> Vec<PresentedRow>
where
    L: LinkBuilder,
    T: TimestampFormatter,
{
    plan.rows
        .iter()
        .map(|row| PresentedRow {
            region: row.region,
            columns: row.cells.first().map_or(1, |cell| cell.hints.columns),
            cells: row.cells.iter().map(|cell| presenter.present(cell)).collect(),
        })
        .collect()
}

/// Terminal lines for a thumbnail of `height_px` pixels.
pub fn cell_lines(height_px: f64) -> u16 {
    let lines = (height_px / PIXELS_PER_LINE).round();
    if lines.is_finite() && lines > 0.0 {
        (lines.min(f64::from(u16::MAX)) as u16).max(MIN_CELL_LINES)
    } else {
        MIN_CELL_LINES
    }
}

/// Truncate `text` to at most `width` display columns, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Rows stacked vertically; adjacent split rows share one band.
enum Band<'a> {
    Single(&'a PresentedRow),
    Pair(&'a PresentedRow, &'a PresentedRow),
}

impl Band<'_> {
    fn lines(&self) -> u16 {
        match self {
            Band::Single(row) => row.lines(),
            Band::Pair(left, right) => left.lines().max(right.lines()),
        }
    }
}

fn bands(rows: &[PresentedRow]) -> Vec<Band<'_>> {
    let mut bands = Vec::with_capacity(rows.len());
    let mut index = 0;
    while index < rows.len() {
        let row = &rows[index];
        match rows.get(index + 1) {
            Some(next) if row.region.is_split() && next.region.is_split() => {
                bands.push(Band::Pair(row, next));
                index += 2;
            }
            _ => {
                bands.push(Band::Single(row));
                index += 1;
            }
        }
    }
    bands
}

fn span_percent(region: RowRegion) -> u16 {
    u16::from(region.md) * 100 / 12
}

/// Render the header line: section title, read-more link, and pagination.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    title: Option<&str>,
    read_more: Option<&str>,
    indicator: Option<PageIndicator>,
    styles: &GridStyles,
) {
    let mut left = Vec::new();
    if let Some(title) = title {
        left.push(Span::styled(
            truncate(title, usize::from(area.width) / 2),
            styles.title,
        ));
    }
    if let Some(url) = read_more {
        left.push(Span::styled(format!("  › {}", url), styles.muted));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), area);

    if let Some(indicator) = indicator {
        frame.render_widget(
            Paragraph::new(pagination_line(indicator, styles)).alignment(Alignment::Right),
            area,
        );
    }
}

/// Pagination controls: back arrow, one dot per page, forward arrow.
pub fn pagination_line(indicator: PageIndicator, styles: &GridStyles) -> Line<'static> {
    let arrow_style = |enabled: bool| if enabled { styles.active } else { styles.muted };

    let mut spans = vec![Span::styled("‹ ", arrow_style(indicator.can_retreat))];
    for current in indicator.dots() {
        if current {
            spans.push(Span::styled("● ", styles.active));
        } else {
            spans.push(Span::styled("○ ", styles.muted));
        }
    }
    spans.push(Span::styled("›", arrow_style(indicator.can_advance)));
    Line::from(spans)
}

/// Render presented rows into `area`.
pub fn render_rows(frame: &mut Frame, area: Rect, rows: &[PresentedRow], styles: &GridStyles) {
    if rows.is_empty() {
        let empty = Paragraph::new(Span::styled("Nothing to show", styles.muted))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let bands = bands(rows);
    let band_areas =
        Layout::vertical(bands.iter().map(|band| Constraint::Length(band.lines()))).split(area);

    for (band, band_area) in bands.iter().zip(band_areas.iter()) {
        match band {
            Band::Single(row) => render_row(frame, *band_area, row, styles),
            Band::Pair(left, right) => {
                let [left_area, right_area] = Layout::horizontal([
                    Constraint::Percentage(span_percent(left.region)),
                    Constraint::Percentage(span_percent(right.region)),
                ])
                .areas(*band_area);
                render_row(frame, left_area, left, styles);
                render_row(frame, right_area, right, styles);
            }
        }
    }
}

fn render_row(frame: &mut Frame, area: Rect, row: &PresentedRow, styles: &GridStyles) {
    let columns = row.columns.max(1);
    let cell_height = row.cell_lines();
    let visual_lines: Vec<&[ItemPresentation]> = row.cells.chunks(columns as usize).collect();

    let line_areas =
        Layout::vertical(visual_lines.iter().map(|_| Constraint::Length(cell_height))).split(area);

    for (cells, line_area) in visual_lines.iter().zip(line_areas.iter()) {
        let cell_areas =
            Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, columns))).split(*line_area);
        for (cell, cell_area) in cells.iter().zip(cell_areas.iter()) {
            render_cell(frame, *cell_area, cell, styles);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &ItemPresentation, styles: &GridStyles) {
    let inner_width = usize::from(area.width.saturating_sub(2));

    let (border_type, border_style) = match cell.thumbnail {
        Thumbnail::CoverPhoto => (BorderType::Double, styles.hero_border),
        Thumbnail::GridItem => (BorderType::Plain, styles.border),
    };
    let mut block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style);
    if let Some(title) = &cell.outer_title {
        block = block.title_bottom(Span::styled(truncate(title, inner_width), styles.headline));
    }

    let mut lines = Vec::new();
    if let Some(title) = &cell.inner_title {
        let mut spans = Vec::new();
        let mut width = inner_width;
        if cell.video.is_some() {
            spans.push(Span::styled(VIDEO_MARKER, styles.video));
            width = width.saturating_sub(VIDEO_MARKER.width());
        }
        spans.push(Span::styled(truncate(title, width), styles.headline));
        lines.push(Line::from(spans));
    } else if cell.video.is_some() {
        lines.push(Line::from(Span::styled(VIDEO_MARKER, styles.video)));
    }
    if let Some(timestamp) = &cell.timestamp {
        lines.push(Line::from(Span::styled(
            truncate(timestamp, inner_width),
            styles.timestamp,
        )));
    }
    if let Some(pill) = cell.pill.as_deref().filter(|pill| !pill.is_empty()) {
        lines.push(Line::from(Span::styled(
            truncate(&format!(" {} ", pill), inner_width),
            styles.pill,
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ColumnSpans;

    fn cell(id: &str, height_px: f64) -> ItemPresentation {
        ItemPresentation {
            id: id.to_string(),
            href: None,
            image_url: None,
            thumbnail: Thumbnail::GridItem,
            spans: ColumnSpans::for_columns(1, false),
            height_px,
            padding_px: 1,
            inner_title: Some(format!("Story {}", id)),
            outer_title: None,
            pill: None,
            timestamp: None,
            video: None,
        }
    }

    mod truncation {
        use super::*;

        #[test]
        fn short_text_is_unchanged() {
            assert_eq!(truncate("Storm", 10), "Storm");
            assert_eq!(truncate("Storm", 5), "Storm");
        }

        #[test]
        fn long_text_ends_with_ellipsis() {
            assert_eq!(truncate("Storm hits coast", 8), "Storm h…");
        }

        #[test]
        fn wide_characters_count_double() {
            // Each CJK character is two columns wide.
            assert_eq!(truncate("東京大阪", 5), "東京…");
        }

        #[test]
        fn zero_width_is_empty() {
            assert_eq!(truncate("Storm", 0), "");
        }
    }

    #[test]
    fn cell_lines_scale_with_pixels() {
        assert_eq!(cell_lines(140.0), 5);
        assert_eq!(cell_lines(280.0), 10);
        assert_eq!(cell_lines(140.0 * 2.0 / 3.0), 3);
    }

    #[test]
    fn cell_lines_never_below_minimum() {
        assert_eq!(cell_lines(0.0), MIN_CELL_LINES);
        assert_eq!(cell_lines(f64::NAN), MIN_CELL_LINES);
    }

    #[test]
    fn row_lines_wrap_cells_by_columns() {
        let row = PresentedRow {
            region: RowRegion::FULL,
            columns: 3,
            cells: (0..5).map(|i| cell(&i.to_string(), 140.0)).collect(),
        };
        // two visual lines of five-line cells
        assert_eq!(row.lines(), 10);
    }

    #[test]
    fn split_rows_pair_into_one_band() {
        let hero = PresentedRow {
            region: RowRegion::HALF,
            columns: 1,
            cells: vec![cell("0", 280.0)],
        };
        let grid = PresentedRow {
            region: RowRegion::HALF,
            columns: 2,
            cells: vec![cell("1", 140.0), cell("2", 140.0)],
        };
        let rows = vec![hero, grid];
        let bands = bands(&rows);
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].lines(), 10);
    }

    #[test]
    fn full_rows_stack() {
        let rows = vec![
            PresentedRow {
                region: RowRegion::FULL,
                columns: 1,
                cells: vec![cell("0", 280.0)],
            },
            PresentedRow {
                region: RowRegion::FULL,
                columns: 2,
                cells: vec![cell("1", 140.0)],
            },
        ];
        assert_eq!(bands(&rows).len(), 2);
    }

    #[test]
    fn pagination_line_marks_current_dot() {
        let indicator = PageIndicator {
            total: 3,
            current: 1,
            can_advance: true,
            can_retreat: true,
        };
        let line = pagination_line(indicator, &GridStyles::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "‹ ○ ● ○ ›");
    }
}
