use crate::core::{ChartContext, LinearScale};
use crate::error::ChartResult;

use super::BarChartConfig;

pub(super) fn validate_config(config: &BarChartConfig) -> ChartResult<()> {
    ChartContext::new(config.viewport, config.margins, config.font.clone())?;
    config.font.color.validate()?;
    for &(min, max) in config.axis_domains.values() {
        LinearScale::new(min, max)?;
    }
    Ok(())
}
