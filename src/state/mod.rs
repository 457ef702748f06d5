//! Display state (pure).
//!
//! - `pagination`: PaginationState - page index and active layout transitions
//! - `grid_display`: GridDisplay - one display instance and its navigation

pub mod grid_display;
pub mod pagination;

pub use grid_display::{GridDisplay, PageIndicator};
pub use pagination::PaginationState;
