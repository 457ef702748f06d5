//! Per-variant constraint tables.

use crate::model::{HeroPlacement, LayoutVariant};

/// Largest column count for grid and top-placed hero layouts.
const MAX_COLUMNS: u32 = 6;
/// Largest column count when the hero column sits beside the grid.
const MAX_COLUMNS_BESIDE_HERO: u32 = 3;
/// Largest number of hero items.
const MAX_HERO_COUNT: u32 = 3;
/// Largest number of items in a griffin tier.
const MAX_GRIFFIN_TIER: u32 = 4;

/// Optional inclusive bounds for one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraint {
    /// Smallest accepted value.
    pub min: Option<u32>,
    /// Largest accepted value.
    pub max: Option<u32>,
}

impl Constraint {
    /// No bounds.
    pub const NONE: Self = Self {
        min: None,
        max: None,
    };

    /// Lower bound only.
    pub const fn at_least(min: u32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Both bounds.
    pub const fn between(min: u32, max: u32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Constraints for every validated field of one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintTable {
    /// Grid rows.
    pub row_grid_count: Constraint,
    /// Grid columns.
    pub column_grid_count: Constraint,
    /// Hero items.
    pub hero_count: Constraint,
    /// Shared by all three griffin tiers.
    pub griffin_tier: Constraint,
}

impl ConstraintTable {
    /// Select the table for a variant. Hero layouts are further keyed by
    /// placement; unsupported variants are unconstrained.
    pub fn for_layout(variant: &LayoutVariant, placement: &HeroPlacement) -> Self {
        match variant {
            LayoutVariant::Grid => Self {
                row_grid_count: Constraint::at_least(1),
                column_grid_count: Constraint::between(1, MAX_COLUMNS),
                ..Self::default()
            },
            LayoutVariant::Hero => {
                let max_columns = match placement {
                    HeroPlacement::Left => MAX_COLUMNS_BESIDE_HERO,
                    _ => MAX_COLUMNS,
                };
                Self {
                    row_grid_count: Constraint::at_least(0),
                    column_grid_count: Constraint::between(0, max_columns),
                    hero_count: Constraint::between(1, MAX_HERO_COUNT),
                    ..Self::default()
                }
            }
            LayoutVariant::Griffin => Self {
                griffin_tier: Constraint::between(1, MAX_GRIFFIN_TIER),
                ..Self::default()
            },
            LayoutVariant::Unsupported(_) => Self::default(),
        }
    }
}
