//! # Responsive Fitting
//!
//! Pure measurement logic deciding how the work bar is laid out for a given
//! viewport width. No I/O and no error paths, only two escalation steps:
//!
//! 1. Full `BWV 1006`-style labels, centered, no scrolling.
//! 2. Overflow → abbreviated labels (prefix stripped), centered.
//! 3. Still overflow → left-aligned with horizontal scrolling, labels stay
//!    abbreviated.
//!
//! The bar is kept hidden from the start of a render cycle until fitting
//! completes; [`Visibility`] tracks that `hidden → measuring → visible`
//! progression so the first painted frame already has its final layout.
//!
//! The caller re-runs [`plan_layout`] after every render and viewport resize;
//! the fitter itself never subscribes to anything.

use unicode_width::UnicodeWidthStr;

use crate::core::work::WorkId;

/// Width subtracted from the viewport before comparing, leaving room for
/// margins around the bar.
pub const FIT_BUFFER: u16 = 20;

/// Horizontal padding inside each button, per side.
pub const BUTTON_PADDING: u16 = 1;

/// Gap between adjacent buttons.
pub const BUTTON_GAP: u16 = 1;

/// Which label form the buttons carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelForm {
    /// `BWV 1006`
    Full,
    /// `1006`
    Short,
}

/// Horizontal placement of the bar within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAlignment {
    Center,
    Left,
}

/// The fitter's decision for one render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitPlan {
    pub form: LabelForm,
    pub alignment: BarAlignment,
    pub scroll: bool,
}

impl FitPlan {
    /// The reset state every cycle starts from: full labels, centered,
    /// non-scrolling.
    pub fn reset() -> Self {
        Self {
            form: LabelForm::Full,
            alignment: BarAlignment::Center,
            scroll: false,
        }
    }

    /// Label text for one work under this plan.
    pub fn label(&self, work: &WorkId) -> String {
        match self.form {
            LabelForm::Full => work.display_label(),
            LabelForm::Short => work.short_label(),
        }
    }
}

/// Bar visibility over a render cycle. Entered once per cycle, never
/// re-hidden except by a fresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Measuring,
    Visible,
}

impl Visibility {
    /// A new render cycle begins: the bar goes back to hidden.
    pub fn reset(&mut self) {
        *self = Visibility::Hidden;
    }

    pub fn begin_measuring(&mut self) {
        *self = Visibility::Measuring;
    }

    /// Fitting finished; the bar is shown regardless of the outcome.
    pub fn finish(&mut self) {
        *self = Visibility::Visible;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Display width of one button: label width plus padding on both sides.
pub fn button_width(label: &str) -> u16 {
    label.width() as u16 + 2 * BUTTON_PADDING
}

/// Content width of the whole bar: button widths plus the gaps between them.
pub fn row_width<'a>(labels: impl IntoIterator<Item = &'a str>) -> u16 {
    let mut total: u16 = 0;
    let mut count: u16 = 0;
    for label in labels {
        total = total.saturating_add(button_width(label));
        count += 1;
    }
    total.saturating_add(count.saturating_sub(1) * BUTTON_GAP)
}

fn measured_width(works: &[WorkId], form: LabelForm) -> u16 {
    let labels: Vec<String> = works
        .iter()
        .map(|w| match form {
            LabelForm::Full => w.display_label(),
            LabelForm::Short => w.short_label(),
        })
        .collect();
    row_width(labels.iter().map(String::as_str))
}

/// Decides the layout for the given works and viewport width, re-measuring
/// after each escalation step.
pub fn plan_layout(works: &[WorkId], viewport_width: u16) -> FitPlan {
    let budget = viewport_width.saturating_sub(FIT_BUFFER);
    let plan = FitPlan::reset();

    if measured_width(works, LabelForm::Full) <= budget {
        return plan;
    }

    // Step 1: strip the prefix from every label
    let plan = FitPlan {
        form: LabelForm::Short,
        ..plan
    };
    if measured_width(works, LabelForm::Short) <= budget {
        return plan;
    }

    // Step 2: left-aligned with horizontal scrolling
    FitPlan {
        alignment: BarAlignment::Left,
        scroll: true,
        ..plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn works(tokens: &[&str]) -> Vec<WorkId> {
        tokens.iter().copied().map(WorkId::new).collect()
    }

    #[test]
    fn test_row_width_includes_padding_and_gaps() {
        // "BWV 3" (5) + 2 padding = 7, "BWV 7" = 7, one gap = 1 → 15
        assert_eq!(row_width(["BWV 3", "BWV 7"]), 15);
        assert_eq!(row_width(["BWV 3"]), 7);
        assert_eq!(row_width(std::iter::empty::<&str>()), 0);
    }

    #[test]
    fn test_wide_viewport_keeps_full_labels() {
        let plan = plan_layout(&works(&["bwv3", "bwv7", "bwv1006"]), 120);
        assert_eq!(plan.form, LabelForm::Full);
        assert_eq!(plan.alignment, BarAlignment::Center);
        assert!(!plan.scroll);
    }

    #[test]
    fn test_overflow_with_full_fits_with_short() {
        let list = works(&["bwv1001", "bwv1002", "bwv1003", "bwv1004"]);
        // Full: 4 × ("BWV 1004".width 8 + 2) + 3 gaps = 43; short: 4 × 6 + 3 = 27.
        // A viewport of 60 gives a budget of 40: full overflows, short fits.
        let plan = plan_layout(&list, 60);
        assert_eq!(plan.form, LabelForm::Short);
        assert_eq!(plan.alignment, BarAlignment::Center);
        assert!(!plan.scroll);
    }

    #[test]
    fn test_overflow_with_short_enables_scrolling() {
        let list = works(&["bwv1001", "bwv1002", "bwv1003", "bwv1004"]);
        // Budget 20: even the short form (27) overflows.
        let plan = plan_layout(&list, 40);
        assert_eq!(plan.form, LabelForm::Short);
        assert_eq!(plan.alignment, BarAlignment::Left);
        assert!(plan.scroll);
    }

    #[test]
    fn test_budget_boundary_is_inclusive() {
        let list = works(&["bwv3", "bwv7"]);
        // Full row width is 15; a viewport of exactly 35 leaves a budget of 15.
        let plan = plan_layout(&list, 15 + FIT_BUFFER);
        assert_eq!(plan.form, LabelForm::Full);
        // One unit narrower and the prefix goes
        let plan = plan_layout(&list, 14 + FIT_BUFFER);
        assert_eq!(plan.form, LabelForm::Short);
    }

    #[test]
    fn test_plan_labels() {
        let id = WorkId::new("bwv1006");
        assert_eq!(FitPlan::reset().label(&id), "BWV 1006");
        let short = FitPlan {
            form: LabelForm::Short,
            ..FitPlan::reset()
        };
        assert_eq!(short.label(&id), "1006");
    }

    #[test]
    fn test_visibility_cycle() {
        let mut vis = Visibility::default();
        assert!(!vis.is_visible());
        vis.begin_measuring();
        assert_eq!(vis, Visibility::Measuring);
        vis.finish();
        assert!(vis.is_visible());
        // A fresh render cycle hides the bar again
        vis.reset();
        assert_eq!(vis, Visibility::Hidden);
    }
}
