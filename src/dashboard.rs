use crate::analytics::{
    filter_by_range, hourly_pattern, seasonal_weather_averages, summary_stats, yearly_monthly_averages,
};
use crate::errors::TransformError;
use crate::models::{DashboardResponse, DateRange, Datasets};

/// Recomputes every view for `range` from the full tables.
pub fn build_dashboard(data: &Datasets, range: DateRange) -> Result<DashboardResponse, TransformError> {
    let daily = filter_by_range(&data.daily, range.start, range.end)?;
    let hourly = filter_by_range(&data.hourly, range.start, range.end)?;

    let summary = match summary_stats(&daily) {
        Ok(summary) => Some(summary),
        Err(TransformError::NoData) => None,
        Err(err) => return Err(err),
    };

    Ok(DashboardResponse {
        range,
        daily_rows: daily.len(),
        hourly_rows: hourly.len(),
        summary,
        seasonal_weather: seasonal_weather_averages(&daily)?,
        hourly: hourly_pattern(&hourly)?,
        yearly_monthly: yearly_monthly_averages(&daily)?,
    })
}
