use approx::assert_relative_eq;
use barchart_rs::core::{ELLIPSIS, LabelBudget, LabelFitter, rotated_extent};

#[test]
fn label_within_budget_is_returned_unchanged() {
    let fitter = LabelFitter::new();
    let fit = fitter.fit("Apples", 12.0, None, LabelBudget::new(75.0, 50.0, 100.0));

    assert_eq!(fit.text, "Apples");
    assert!(!fit.truncated);
    assert_relative_eq!(fit.rotated_width, 43.2, epsilon = 1e-9);
    assert_relative_eq!(fit.rotated_height, 12.0);
    assert_relative_eq!(fit.anchor_x, 100.0);
}

#[test]
fn blank_label_produces_empty_fit() {
    let fitter = LabelFitter::new();
    for text in ["", "   ", "\t\n"] {
        let fit = fitter.fit(text, 12.0, None, LabelBudget::new(75.0, 50.0, 100.0));
        assert!(fit.is_empty(), "`{text:?}` should not produce a label");
        assert_eq!(fit.rotated_width, 0.0);
    }
}

#[test]
fn long_category_label_is_shortened_to_slot_budget() {
    let fitter = LabelFitter::new();
    let fit = fitter.fit(
        "A very long category label name",
        12.0,
        None,
        LabelBudget::new(1.5 * 50.0, 50.0, 100.0),
    );

    assert_eq!(fit.text, "A very ...");
    assert!(fit.text.ends_with(ELLIPSIS));
    assert!(fit.truncated);
    assert!(fit.rotated_width <= 75.0);
}

#[test]
fn anchor_near_left_edge_tightens_width() {
    let fitter = LabelFitter::new();
    // 8 chars * 6px = 48px would cross x=0 when centered on x=20.
    let fit = fitter.fit("Bananas!", 10.0, None, LabelBudget::new(200.0, 50.0, 20.0));

    assert_eq!(fit.text, "Ban...");
    assert!(fit.anchor_x - fit.rotated_width / 2.0 >= 0.0);
}

#[test]
fn unfittable_label_falls_back_to_floor() {
    let fitter = LabelFitter::new();
    let fit = fitter.fit("Category", 12.0, None, LabelBudget::new(10.0, 50.0, 100.0));

    assert_eq!(fit.text, "Cat...");
    assert!(fit.truncated);
    assert_relative_eq!(fit.rotated_width, 43.2, epsilon = 1e-9);
}

#[test]
fn short_labels_are_never_ellipsized() {
    let fitter = LabelFitter::new();
    let fit = fitter.fit("Label", 20.0, None, LabelBudget::new(1.0, 1.0, 100.0));

    assert_eq!(fit.text, "Label");
    assert!(!fit.truncated);
}

#[test]
fn rotated_label_is_fitted_against_rotated_height() {
    let fitter = LabelFitter::new();
    // At 90 degrees a 17 char label at 10px is 10px wide and 102px tall.
    let fit = fitter.fit(
        "Quarterly revenue",
        10.0,
        Some(90.0),
        LabelBudget::new(200.0, 50.0, 100.0),
    );

    assert_eq!(fit.text, "Quart...");
    assert_relative_eq!(fit.rotated_width, 10.0, epsilon = 1e-9);
    assert_relative_eq!(fit.rotated_height, 48.0, epsilon = 1e-9);
}

#[test]
fn rotated_extent_at_45_degrees_is_symmetric() {
    let (w, h) = rotated_extent(60.0, 10.0, Some(45.0));
    let expected = 70.0 * std::f64::consts::FRAC_1_SQRT_2;
    assert_relative_eq!(w, expected, epsilon = 1e-9);
    assert_relative_eq!(h, expected, epsilon = 1e-9);
}

#[test]
fn multibyte_labels_are_cut_on_char_boundaries() {
    let fitter = LabelFitter::new();
    let fit = fitter.fit("Übersichtsgrafik", 10.0, None, LabelBudget::new(10.0, 50.0, 100.0));

    assert_eq!(fit.text, "Übe...");
}

#[test]
fn fitting_is_deterministic() {
    let fitter = LabelFitter::new();
    let budget = LabelBudget::new(64.0, 30.0, 48.0);
    let first = fitter.fit("Northern territories", 11.0, Some(-30.0), budget);
    let second = fitter.fit("Northern territories", 11.0, Some(-30.0), budget);
    assert_eq!(first, second);
}
