//! Serializable snapshot of one display page, printed by `catgrid --plan`.

use crate::model::{ContentItem, LayoutVariant};
use crate::presentation::{ItemPresentation, ItemPresenter, LinkBuilder, TimestampFormatter};
use crate::state::GridDisplay;
use crate::view_state::{DisplayHints, LayoutPlan, Navigation, PageIndex, RowKind, RowRegion};
use serde::Serialize;

/// The current page of a display: state, navigation, and every placed item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport<'a> {
    /// Configured layout.
    pub layout: &'a LayoutVariant,
    /// Layout used for the current page.
    pub active_layout: &'a LayoutVariant,
    /// 0-based current page.
    pub page: PageIndex,
    /// Page count of the display's window.
    pub total_pages: usize,
    /// Available transitions.
    pub navigation: Navigation,
    /// Rows in display order.
    pub rows: Vec<ReportRow<'a>>,
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow<'a> {
    /// Role of the row.
    pub role: RowKind,
    /// Horizontal region.
    pub region: RowRegion,
    /// Items in display order.
    pub cells: Vec<ReportCell<'a>>,
}

/// One placed item of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportCell<'a> {
    /// The item as parsed from the feed.
    pub item: &'a ContentItem,
    /// Layout hints.
    pub hints: DisplayHints,
    /// Resolved presentation.
    pub presentation: ItemPresentation,
}

impl<'a> PlanReport<'a> {
    /// Build the report for `plan`, which must be `display`'s current plan.
    pub fn new<L, T>(
        display: &'a GridDisplay,
        plan: &LayoutPlan<'a>,
        presenter: &ItemPresenter<L, T>,
    ) -> Self
    where
        L: LinkBuilder,
        T: TimestampFormatter,
    {
        let state = display.state();
        let rows = plan
            .rows
            .iter()
            .map(|row| ReportRow {
                role: row.kind,
                region: row.region,
                cells: row
                    .cells
                    .iter()
                    .map(|cell| ReportCell {
                        item: cell.item,
                        hints: cell.hints,
                        presentation: presenter.present(cell),
                    })
                    .collect(),
            })
            .collect();

        Self {
            layout: state.configured_layout(),
            active_layout: state.active_layout(),
            page: state.page(),
            total_pages: display.total_pages(),
            navigation: display.navigation(),
            rows,
        }
    }
}
