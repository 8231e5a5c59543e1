use barchart_rs::core::{
    Bar, BarSeries, ChartContext, FontDefaults, LinearScale, PlotMargins, Viewport,
};
use proptest::prelude::*;

fn chart() -> ChartContext {
    ChartContext::new(
        Viewport::new(1200, 600),
        PlotMargins::new(60.0, 20.0, 30.0, 80.0),
        FontDefaults::default(),
    )
    .expect("context")
    .with_axis("default", LinearScale::new(-1_000.0, 1_000.0).expect("scale"))
}

proptest! {
    #[test]
    fn slots_are_ordered_and_bars_stay_inside_them(
        samples in prop::collection::vec(
            (-1_000.0f64..1_000.0, prop::option::of(1.0f64..400.0)),
            1..64
        ),
        spacing in prop::option::of(0.0f64..8.0)
    ) {
        let bars: Vec<Bar> = samples
            .iter()
            .enumerate()
            .map(|(index, (value, width))| {
                let bar = Bar::new(format!("category {index}"), *value);
                match width {
                    Some(width) => bar.with_width(*width),
                    None => bar.with_auto_width(),
                }
            })
            .collect();
        let mut series = BarSeries::new(bars);
        series.spacing = spacing;

        let chart = chart();
        let placements = series.layout(&chart).expect("layout");
        prop_assert_eq!(placements.len(), samples.len());

        let slot_width = series.slot_width(1120.0);
        let slots = series.slot_positions(60.0, slot_width);
        for (slot_x, placement) in slots.iter().zip(&placements) {
            prop_assert!(placement.rect.width <= slot_width + 1e-9);
            prop_assert!(placement.rect.x >= *slot_x - 1e-9);
            prop_assert!(placement.rect.x + placement.rect.width <= slot_x + slot_width + 1e-9);
        }
        prop_assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn max_is_never_below_min(values in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        let series = BarSeries::new(values.iter().map(|v| Bar::unnamed(*v)).collect());
        prop_assert!(series.max_value() >= series.min_value());
    }

    #[test]
    fn layout_is_deterministic(values in prop::collection::vec(-1_000.0f64..1_000.0, 0..32)) {
        let series = BarSeries::new(
            values
                .iter()
                .map(|v| Bar::new("a rather long category name", *v))
                .collect(),
        );
        let chart = chart();
        prop_assert_eq!(series.layout(&chart).expect("first"), series.layout(&chart).expect("second"));
    }
}
