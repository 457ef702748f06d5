//! Layout dimension constants for the terminal preview.
//!
//! Pixel heights from the layout plan are mapped to terminal lines with
//! [`PIXELS_PER_LINE`].

/// Height of the header (title, read-more link, pagination) in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Pixels represented by one terminal line.
///
/// A grid thumbnail (140px) is five lines, a hero thumbnail (280px) ten.
pub const PIXELS_PER_LINE: f64 = 28.0;

/// Smallest cell height in lines: two borders and the headline.
pub const MIN_CELL_LINES: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 60;
