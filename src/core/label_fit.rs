//! Adaptive label fitting.
//!
//! Text is measured with a deterministic approximation rather than real glyph
//! metrics. A label that overflows its budget is shortened one character at a
//! time with an ellipsis appended until its rotated bounding box fits, down to
//! a fixed floor of visible characters.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

/// Average glyph advance as a fraction of the font size.
pub const AVERAGE_GLYPH_WIDTH_EM: f64 = 0.6;
/// Suffix appended to shortened labels.
pub const ELLIPSIS: &str = "...";
/// Minimum number of original characters kept before the ellipsis.
pub const MIN_LABEL_CHARS: usize = 3;

const ELLIPSIS_CHARS: usize = ELLIPSIS.len();

/// A minimal text measurement interface used by label fitting.
pub trait TextMeasurer {
    /// Returns the unrotated `(width, height)` of `text` in pixels.
    fn measure(&self, text: &str, font_size_px: f64) -> (f64, f64);
}

/// Heuristic measurer: every character advances `0.6em`, lines are `1em` tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> (f64, f64) {
        let width = AVERAGE_GLYPH_WIDTH_EM * font_size_px * text.chars().count() as f64;
        (width, font_size_px)
    }
}

/// Axis-aligned extent of a `width x height` box rotated by `degrees`.
#[must_use]
pub fn rotated_extent(width: f64, height: f64, degrees: Option<f64>) -> (f64, f64) {
    let theta = degrees.unwrap_or(0.0).to_radians();
    let (sin, cos) = theta.sin_cos();
    (
        (width * cos).abs() + (height * sin).abs(),
        (width * sin).abs() + (height * cos).abs(),
    )
}

/// Space a label may occupy, plus the x position it is anchored at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelBudget {
    pub max_width: f64,
    pub max_height: f64,
    /// Used to keep the label's box right of the chart's left edge.
    pub anchor_x_hint: f64,
}

impl LabelBudget {
    #[must_use]
    pub const fn new(max_width: f64, max_height: f64, anchor_x_hint: f64) -> Self {
        Self {
            max_width,
            max_height,
            anchor_x_hint,
        }
    }
}

/// Outcome of fitting one label into its budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelFit {
    pub text: String,
    pub rotated_width: f64,
    pub rotated_height: f64,
    pub anchor_x: f64,
    pub truncated: bool,
}

impl LabelFit {
    #[must_use]
    pub fn empty(anchor_x: f64) -> Self {
        Self {
            text: String::new(),
            rotated_width: 0.0,
            rotated_height: 0.0,
            anchor_x,
            truncated: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Shrinks labels to fit a width/height budget, rotation aware.
#[derive(Debug, Clone, Copy)]
pub struct LabelFitter<M = HeuristicTextMeasurer> {
    measurer: M,
    min_chars: usize,
}

impl Default for LabelFitter {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelFitter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            measurer: HeuristicTextMeasurer,
            min_chars: MIN_LABEL_CHARS,
        }
    }
}

impl<M: TextMeasurer> LabelFitter<M> {
    #[must_use]
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            min_chars: MIN_LABEL_CHARS,
        }
    }

    #[must_use]
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Rotated bounding box of `text` at `font_size_px`.
    #[must_use]
    pub fn rotated_box(
        &self,
        text: &str,
        font_size_px: f64,
        rotation_degrees: Option<f64>,
    ) -> (f64, f64) {
        let (width, height) = self.measurer.measure(text, font_size_px);
        rotated_extent(width, height, rotation_degrees)
    }

    /// Fits `text` into `budget`, shortening it with an ellipsis when needed.
    ///
    /// Never fails: blank text yields an empty fit, and a label that cannot
    /// fit even at the floor comes back as its first `min_chars` characters
    /// plus the ellipsis. Labels too short to gain anything from an ellipsis
    /// are returned unchanged.
    pub fn fit(
        &self,
        text: &str,
        font_size_px: f64,
        rotation_degrees: Option<f64>,
        budget: LabelBudget,
    ) -> LabelFit {
        let anchor_x = budget.anchor_x_hint;
        if text.trim().is_empty() {
            return LabelFit::empty(anchor_x);
        }

        let (width, height) = self.rotated_box(text, font_size_px, rotation_degrees);
        let fitted = |text: String, (rotated_width, rotated_height): (f64, f64), truncated| {
            LabelFit {
                text,
                rotated_width,
                rotated_height,
                anchor_x,
                truncated,
            }
        };

        if width <= budget.max_width
            && height <= budget.max_height
            && anchor_x - width / 2.0 >= 0.0
        {
            return fitted(text.to_owned(), (width, height), false);
        }

        let chars: SmallVec<[char; 64]> = text.chars().collect();
        if chars.len() <= self.min_chars + ELLIPSIS_CHARS {
            return fitted(text.to_owned(), (width, height), false);
        }

        let available_width = budget.max_width.min(2.0 * anchor_x);
        let mut candidate = String::with_capacity(text.len() + ELLIPSIS_CHARS);
        let mut kept = chars.len();
        while kept > self.min_chars {
            kept -= 1;
            candidate.clear();
            candidate.extend(&chars[..kept]);
            candidate.push_str(ELLIPSIS);

            let (candidate_width, candidate_height) =
                self.rotated_box(&candidate, font_size_px, rotation_degrees);
            if candidate_width <= available_width && candidate_height <= budget.max_height {
                trace!(
                    original_chars = chars.len(),
                    kept_chars = kept,
                    "label shortened to fit"
                );
                return fitted(candidate, (candidate_width, candidate_height), true);
            }
        }

        let floor: String = chars[..self.min_chars]
            .iter()
            .copied()
            .chain(ELLIPSIS.chars())
            .collect();
        let floor_box = self.rotated_box(&floor, font_size_px, rotation_degrees);
        trace!(
            original_chars = chars.len(),
            available_width,
            "label clamped to minimum length"
        );
        fitted(floor, floor_box, true)
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelBudget, LabelFitter, TextMeasurer, rotated_extent};
    use approx::assert_relative_eq;

    #[test]
    fn rotated_extent_swaps_axes_at_right_angle() {
        let (w, h) = rotated_extent(60.0, 12.0, Some(90.0));
        assert_relative_eq!(w, 12.0, epsilon = 1e-9);
        assert_relative_eq!(h, 60.0, epsilon = 1e-9);

        let (w, h) = rotated_extent(60.0, 12.0, None);
        assert_relative_eq!(w, 60.0);
        assert_relative_eq!(h, 12.0);
    }

    #[test]
    fn custom_measurer_drives_fit_decision() {
        struct WideGlyphs;
        impl TextMeasurer for WideGlyphs {
            fn measure(&self, text: &str, font_size_px: f64) -> (f64, f64) {
                (text.chars().count() as f64 * font_size_px, font_size_px)
            }
        }

        let fitter = LabelFitter::with_measurer(WideGlyphs);
        // 8 chars * 10px = 80px does not fit in 70px; "abcd..." = 70px does.
        let fit = fitter.fit("abcdefgh", 10.0, None, LabelBudget::new(70.0, 20.0, 100.0));
        assert_eq!(fit.text, "abcd...");
        assert!(fit.truncated);
        assert_relative_eq!(fit.rotated_width, 70.0);
    }
}
