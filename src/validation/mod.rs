//! Layout configuration validation.
//!
//! Each layout variant constrains a different set of numeric fields. The
//! validator evaluates every field, collects all violations, and fails once
//! with an error that lists them together with the active variant (and hero
//! placement for hero layouts).

mod constraints;

pub use constraints::{Constraint, ConstraintTable};

use crate::model::{LayoutConfig, LayoutVariant};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// A bound that a field value crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Value was below this minimum.
    Min(u32),
    /// Value was above this maximum.
    Max(u32),
}

/// One field that failed its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Configuration field name.
    pub field: &'static str,
    /// The bound that was crossed.
    pub bound: Bound,
}

impl Violation {
    /// Create a violation for `field`.
    pub fn new(field: &'static str, bound: Bound) -> Self {
        Self { field, bound }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bound {
            Bound::Min(min) => write!(f, "the {} field must be greater than {}", self.field, min),
            Bound::Max(max) => write!(f, "the {} field must be less than {}", self.field, max),
        }
    }
}

/// Aggregated validation failure.
///
/// # Examples
///
/// ```
/// use catgrid::validation::{Bound, ValidationError, Violation};
///
/// let err = ValidationError::new(
///     "grid".to_string(),
///     vec![
///         Violation::new("column_grid_count", Bound::Max(6)),
///         Violation::new("row_grid_count", Bound::Min(1)),
///     ],
/// );
/// assert_eq!(
///     err.to_string(),
///     "When layout is grid, the column_grid_count field must be less than 6, \
///      the row_grid_count field must be greater than 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("When layout is {context}, {}", join_violations(.violations))]
pub struct ValidationError {
    /// Variant description, e.g. `hero and heroPlacement is left`.
    pub context: String,
    /// Every violation, in field evaluation order. Never empty.
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Create an error for the given layout context.
    pub fn new(context: String, violations: Vec<Violation>) -> Self {
        Self {
            context,
            violations,
        }
    }

    /// Names of the offending fields, in evaluation order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(|v| v.field)
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check a single value against a constraint.
///
/// A bound that is not declared is skipped.
pub fn check(value: u32, field: &'static str, constraint: Constraint) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(min) = constraint.min {
        if value < min {
            violations.push(Violation::new(field, Bound::Min(min)));
        }
    }
    if let Some(max) = constraint.max {
        if value > max {
            violations.push(Violation::new(field, Bound::Max(max)));
        }
    }

    violations
}

/// Validate a layout configuration against its variant's constraint table.
///
/// Fields are evaluated in a fixed order: `column_grid_count`,
/// `row_grid_count`, `hero_count`, then the griffin tiers. The third tier is
/// only checked when its count is positive.
///
/// # Errors
///
/// Returns a single [`ValidationError`] naming every violating field.
pub fn validate(config: &LayoutConfig) -> Result<(), ValidationError> {
    let table = ConstraintTable::for_layout(&config.variant, &config.hero_placement);
    let griffin = &config.griffin;

    let mut violations = Vec::new();
    violations.extend(check(
        config.column_grid_count,
        "column_grid_count",
        table.column_grid_count,
    ));
    violations.extend(check(
        config.row_grid_count,
        "row_grid_count",
        table.row_grid_count,
    ));
    violations.extend(check(config.hero_count, "hero_count", table.hero_count));
    violations.extend(check(
        griffin.first.count,
        "griffin.first_count",
        table.griffin_tier,
    ));
    violations.extend(check(
        griffin.second.count,
        "griffin.second_count",
        table.griffin_tier,
    ));
    if griffin.third.count > 0 {
        violations.extend(check(
            griffin.third.count,
            "griffin.third_count",
            table.griffin_tier,
        ));
    }

    if violations.is_empty() {
        return Ok(());
    }

    let error = ValidationError::new(layout_context(config), violations);
    debug!(error = %error, "Layout configuration rejected");
    Err(error)
}

/// Describe the active layout for error messages.
fn layout_context(config: &LayoutConfig) -> String {
    match config.variant {
        LayoutVariant::Hero => format!("hero and heroPlacement is {}", config.hero_placement),
        ref other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GriffinTiers, HeroPlacement};

    fn grid(rows: u32, columns: u32) -> LayoutConfig {
        LayoutConfig {
            variant: LayoutVariant::Grid,
            row_grid_count: rows,
            column_grid_count: columns,
            ..Default::default()
        }
    }

    fn hero(placement: HeroPlacement, rows: u32, columns: u32, hero_count: u32) -> LayoutConfig {
        LayoutConfig {
            variant: LayoutVariant::Hero,
            hero_placement: placement,
            row_grid_count: rows,
            column_grid_count: columns,
            hero_count,
            ..Default::default()
        }
    }

    fn griffin(first: u32, second: u32, third: u32) -> LayoutConfig {
        LayoutConfig {
            variant: LayoutVariant::Griffin,
            griffin: GriffinTiers::with_counts(first, second, third),
            ..Default::default()
        }
    }

    mod check_fn {
        use super::*;

        #[test]
        fn unbounded_constraint_never_violates() {
            assert!(check(0, "f", Constraint::NONE).is_empty());
            assert!(check(u32::MAX, "f", Constraint::NONE).is_empty());
        }

        #[test]
        fn value_at_bounds_is_accepted() {
            let c = Constraint::between(1, 6);
            assert!(check(1, "f", c).is_empty());
            assert!(check(6, "f", c).is_empty());
        }

        #[test]
        fn below_min_reports_min() {
            assert_eq!(
                check(0, "f", Constraint::at_least(1)),
                vec![Violation::new("f", Bound::Min(1))]
            );
        }

        #[test]
        fn above_max_reports_max() {
            assert_eq!(
                check(7, "f", Constraint::between(1, 6)),
                vec![Violation::new("f", Bound::Max(6))]
            );
        }
    }

    mod grid_variant {
        use super::*;

        #[test]
        fn default_config_is_valid() {
            assert_eq!(validate(&LayoutConfig::default()), Ok(()));
        }

        #[test]
        fn six_columns_is_valid() {
            assert_eq!(validate(&grid(3, 6)), Ok(()));
        }

        #[test]
        fn seven_columns_is_rejected() {
            let err = validate(&grid(1, 7)).unwrap_err();
            assert_eq!(err.fields().collect::<Vec<_>>(), vec!["column_grid_count"]);
        }

        #[test]
        fn zero_rows_and_zero_columns_are_both_reported() {
            let err = validate(&grid(0, 0)).unwrap_err();
            assert_eq!(
                err.fields().collect::<Vec<_>>(),
                vec!["column_grid_count", "row_grid_count"]
            );
        }

        #[test]
        fn hero_count_is_unconstrained() {
            let mut config = grid(1, 1);
            config.hero_count = 99;
            assert_eq!(validate(&config), Ok(()));
        }

        #[test]
        fn griffin_counts_are_unconstrained() {
            let mut config = grid(1, 1);
            config.griffin = GriffinTiers::with_counts(0, 0, 9);
            assert_eq!(validate(&config), Ok(()));
        }

        #[test]
        fn message_restates_variant() {
            let err = validate(&grid(0, 1)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "When layout is grid, the row_grid_count field must be greater than 1"
            );
        }
    }

    mod hero_variant {
        use super::*;

        #[test]
        fn zero_grid_dimensions_are_valid() {
            assert_eq!(validate(&hero(HeroPlacement::Top, 0, 0, 1)), Ok(()));
        }

        #[test]
        fn top_placement_allows_six_columns() {
            assert_eq!(validate(&hero(HeroPlacement::Top, 1, 6, 1)), Ok(()));
        }

        #[test]
        fn left_placement_caps_columns_at_three() {
            assert_eq!(validate(&hero(HeroPlacement::Left, 1, 3, 1)), Ok(()));
            let err = validate(&hero(HeroPlacement::Left, 1, 4, 1)).unwrap_err();
            assert_eq!(
                err.violations,
                vec![Violation::new("column_grid_count", Bound::Max(3))]
            );
        }

        #[test]
        fn unsupported_placement_uses_top_ceiling() {
            let placement = HeroPlacement::parse("right");
            assert_eq!(validate(&hero(placement.clone(), 1, 6, 1)), Ok(()));
            assert!(validate(&hero(placement, 1, 7, 1)).is_err());
        }

        #[test]
        fn hero_count_must_be_between_one_and_three() {
            assert!(validate(&hero(HeroPlacement::Top, 1, 1, 0)).is_err());
            assert!(validate(&hero(HeroPlacement::Top, 1, 1, 3)).is_ok());
            assert!(validate(&hero(HeroPlacement::Top, 1, 1, 4)).is_err());
        }

        #[test]
        fn message_includes_hero_placement() {
            let err = validate(&hero(HeroPlacement::Left, 1, 5, 4)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "When layout is hero and heroPlacement is left, \
                 the column_grid_count field must be less than 3, \
                 the hero_count field must be less than 3"
            );
        }
    }

    mod griffin_variant {
        use super::*;

        #[test]
        fn default_tiers_are_valid() {
            assert_eq!(validate(&griffin(1, 1, 0)), Ok(()));
        }

        #[test]
        fn grid_dimensions_are_unconstrained() {
            let mut config = griffin(2, 3, 4);
            config.row_grid_count = 0;
            config.column_grid_count = 40;
            assert_eq!(validate(&config), Ok(()));
        }

        #[test]
        fn third_tier_of_zero_is_not_checked() {
            assert_eq!(validate(&griffin(4, 4, 0)), Ok(()));
        }

        #[test]
        fn third_tier_above_max_is_rejected() {
            let err = validate(&griffin(1, 1, 5)).unwrap_err();
            assert_eq!(
                err.violations,
                vec![Violation::new("griffin.third_count", Bound::Max(4))]
            );
        }

        #[test]
        fn all_tier_violations_are_collected() {
            let err = validate(&griffin(0, 5, 9)).unwrap_err();
            assert_eq!(
                err.fields().collect::<Vec<_>>(),
                vec![
                    "griffin.first_count",
                    "griffin.second_count",
                    "griffin.third_count"
                ]
            );
            assert!(err.to_string().starts_with("When layout is griffin, "));
        }
    }

    mod unsupported_variant {
        use super::*;

        #[test]
        fn nothing_is_constrained() {
            let config = LayoutConfig {
                variant: LayoutVariant::parse("mosaic"),
                row_grid_count: 0,
                column_grid_count: 100,
                hero_count: 0,
                griffin: GriffinTiers::with_counts(0, 0, 0),
                ..Default::default()
            };
            assert_eq!(validate(&config), Ok(()));
        }
    }
}
