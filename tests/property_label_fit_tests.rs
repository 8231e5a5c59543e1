use barchart_rs::core::label_fit::AVERAGE_GLYPH_WIDTH_EM;
use barchart_rs::core::{ELLIPSIS, LabelBudget, LabelFitter, MIN_LABEL_CHARS, rotated_extent};
use proptest::prelude::*;

fn floor_width(font_size: f64, rotation: Option<f64>) -> f64 {
    let floor_chars = (MIN_LABEL_CHARS + ELLIPSIS.len()) as f64;
    let width = floor_chars * AVERAGE_GLYPH_WIDTH_EM * font_size;
    rotated_extent(width, font_size, rotation).0
}

proptest! {
    #[test]
    fn fitted_width_never_exceeds_budget_or_floor(
        text in "[A-Za-z ]{1,60}",
        font_size in 8.0f64..24.0,
        max_width in 10.0f64..300.0,
        max_height in 8.0f64..80.0,
        anchor in 0.0f64..500.0,
        rotation in prop::option::of(-90.0f64..90.0)
    ) {
        let fit = LabelFitter::new().fit(
            &text,
            font_size,
            rotation,
            LabelBudget::new(max_width, max_height, anchor),
        );
        let bound = max_width.max(floor_width(font_size, rotation));
        prop_assert!(fit.rotated_width <= bound + 1e-9);
    }

    #[test]
    fn shrunk_labels_keep_floor_and_get_shorter(
        text in "[a-z]{1,60}",
        font_size in 8.0f64..24.0,
        max_width in 1.0f64..200.0,
        anchor in 0.0f64..300.0
    ) {
        let fit = LabelFitter::new().fit(
            &text,
            font_size,
            None,
            LabelBudget::new(max_width, 100.0, anchor),
        );
        let input_len = text.chars().count();
        let output_len = fit.text.chars().count();

        if fit.truncated {
            prop_assert!(fit.text.ends_with(ELLIPSIS));
            prop_assert!(output_len >= MIN_LABEL_CHARS + ELLIPSIS.len());
            prop_assert!(output_len < input_len);
            prop_assert!(text.starts_with(fit.text.trim_end_matches(ELLIPSIS)));
        } else {
            prop_assert_eq!(&fit.text, &text);
        }
    }

    #[test]
    fn labels_that_fit_are_untouched(
        text in "[a-z]{1,20}",
        font_size in 8.0f64..16.0
    ) {
        let width = AVERAGE_GLYPH_WIDTH_EM * font_size * text.chars().count() as f64;
        let fit = LabelFitter::new().fit(
            &text,
            font_size,
            None,
            LabelBudget::new(width, font_size, width / 2.0),
        );
        prop_assert_eq!(&fit.text, &text);
        prop_assert!(!fit.truncated);
    }
}
