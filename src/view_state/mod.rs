//! View-state layer - page slicing, partitioning, and layout plans
//!
//! This module implements the pure layout core: which items are visible on
//! the current page and how they are arranged into rows.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (PageIndex, Navigation)
//! - `page_slice`: PageSlice - half-open item range of one page
//! - `partition`: Variant-specific row partitioning
//! - `layout_plan`: LayoutPlan - rows of placed items, and `compute_layout`

pub mod layout_plan;
pub mod page_slice;
pub mod partition;
pub mod types;

pub use layout_plan::{
    compute_layout, DisplayHints, GriffinSlot, ItemKind, LayoutPlan, PlacedItem, Row, RowKind,
    RowRegion,
};
pub use page_slice::{total_pages, PageSlice};
pub use types::{Navigation, PageIndex};
