//! Domain model types (pure).
//!
//! All types in this module are pure data; nothing here performs I/O.

pub mod content_item;
pub mod error;
pub mod key_action;
pub mod layout_config;

// Re-export for convenience
pub use content_item::ContentItem;
pub use error::{AppError, InputError, ParseError};
pub use key_action::KeyAction;
pub use layout_config::{
    DisplayConfig, GriffinTier, GriffinTiers, HeroPlacement, ItemDisplayOptions, LayoutConfig,
    LayoutVariant, TimestampOptions, TitlePlacement, DEFAULT_VIDEO_ICON_PLACEMENT,
};
