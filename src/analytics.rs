//! Filtering and group-by aggregation over the rental tables.
//!
//! Every function here is pure: inputs are borrowed, outputs are new vectors,
//! and the applied date range is always passed in explicitly.

use crate::errors::TransformError;
use crate::models::{
    DailyRecord, DateRange, Dated, HourlyAverage, HourlyPattern, HourlyRecord, Season, SeasonalWeatherAverage,
    SummaryStats, Weather, Year, YearlyMonthlyAverage,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
struct Mean {
    sum: u64,
    rows: u64,
}

impl Mean {
    fn push(&mut self, count: u64) -> Result<(), TransformError> {
        self.sum = self.sum.checked_add(count).ok_or(TransformError::CountOverflow)?;
        self.rows += 1;
        Ok(())
    }

    fn value(self) -> f64 {
        self.sum as f64 / self.rows as f64
    }
}

/// Keeps rows with `start <= date <= end`, in their original order.
///
/// A reversed range is rejected rather than treated as empty.
pub fn filter_by_range<T>(table: &[T], start: NaiveDate, end: NaiveDate) -> Result<Vec<T>, TransformError>
where
    T: Dated + Clone,
{
    let range = DateRange::new(start, end)?;

    Ok(table
        .iter()
        .filter(|row| range.contains(row.date()))
        .cloned()
        .collect())
}

/// Mean daily count per (season, weather) pair, in code order.
pub fn seasonal_weather_averages(daily: &[DailyRecord]) -> Result<Vec<SeasonalWeatherAverage>, TransformError> {
    let mut groups: BTreeMap<(Season, Weather), Mean> = BTreeMap::new();
    for record in daily {
        let season = Season::from_code(record.season)?;
        let weather = Weather::from_code(record.weather_situation)?;
        groups.entry((season, weather)).or_default().push(record.count)?;
    }

    Ok(groups
        .into_iter()
        .map(|((season, weather), mean)| SeasonalWeatherAverage {
            season,
            weather,
            average_count: mean.value(),
        })
        .collect())
}

/// Mean count per hour of day, plus the busiest hour.
pub fn hourly_pattern(hourly: &[HourlyRecord]) -> Result<HourlyPattern, TransformError> {
    let mut groups: BTreeMap<u8, Mean> = BTreeMap::new();
    for record in hourly {
        if record.hour > 23 {
            return Err(TransformError::Domain {
                field: "hour",
                code: record.hour,
            });
        }
        groups.entry(record.hour).or_default().push(record.count)?;
    }

    let hours: Vec<HourlyAverage> = groups
        .into_iter()
        .map(|(hour, mean)| HourlyAverage {
            hour,
            average_count: mean.value(),
        })
        .collect();

    // Ascending hours, so a strict comparison keeps the earliest of any tie.
    let mut peak: Option<HourlyAverage> = None;
    for point in &hours {
        if peak.is_none_or(|best| point.average_count > best.average_count) {
            peak = Some(*point);
        }
    }

    Ok(HourlyPattern { hours, peak })
}

/// Mean daily count per (year, month), sorted by year then month.
pub fn yearly_monthly_averages(daily: &[DailyRecord]) -> Result<Vec<YearlyMonthlyAverage>, TransformError> {
    let mut groups: BTreeMap<(Year, u8), Mean> = BTreeMap::new();
    for record in daily {
        let year = Year::from_index(record.year_index)?;
        if !(1..=12).contains(&record.month) {
            return Err(TransformError::Domain {
                field: "month",
                code: record.month,
            });
        }
        groups.entry((year, record.month)).or_default().push(record.count)?;
    }

    Ok(groups
        .into_iter()
        .map(|((year, month), mean)| YearlyMonthlyAverage {
            year,
            month,
            average_count: mean.value(),
        })
        .collect())
}

/// Total and mean daily rentals. An empty table has no mean, so it is `NoData`.
pub fn summary_stats(daily: &[DailyRecord]) -> Result<SummaryStats, TransformError> {
    if daily.is_empty() {
        return Err(TransformError::NoData);
    }

    let mut mean = Mean::default();
    for record in daily {
        mean.push(record.count)?;
    }

    Ok(SummaryStats {
        total: mean.sum,
        average_daily: mean.value(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn day(date: NaiveDate, season: u8, weather: u8, year_index: u8, count: u64) -> DailyRecord {
        use chrono::Datelike;
        DailyRecord {
            date,
            season,
            weather_situation: weather,
            year_index,
            month: date.month() as u8,
            count,
        }
    }

    pub(crate) fn hour(date: NaiveDate, hour: u8, count: u64) -> HourlyRecord {
        HourlyRecord { date, hour, count }
    }

    fn january() -> Vec<DailyRecord> {
        (1..=10).map(|d| day(date(2011, 1, d), 1, 1, 0, u64::from(d) * 10)).collect()
    }

    #[test]
    fn filter_keeps_inclusive_range_in_order() {
        let table = january();
        let filtered = filter_by_range(&table, date(2011, 1, 3), date(2011, 1, 5)).unwrap();
        let dates: Vec<_> = filtered.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2011, 1, 3), date(2011, 1, 4), date(2011, 1, 5)]);
    }

    #[test]
    fn filter_is_idempotent() {
        let table = january();
        let once = filter_by_range(&table, date(2011, 1, 2), date(2011, 1, 7)).unwrap();
        let twice = filter_by_range(&once, date(2011, 1, 2), date(2011, 1, 7)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_over_full_bounds_returns_whole_table() {
        let table = january();
        let filtered = filter_by_range(&table, date(2011, 1, 1), date(2011, 1, 10)).unwrap();
        assert_eq!(filtered, table);
    }

    #[test]
    fn filter_rejects_reversed_range() {
        let table = january();
        let err = filter_by_range(&table, date(2011, 1, 5), date(2011, 1, 4)).unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidRange {
                start: date(2011, 1, 5),
                end: date(2011, 1, 4),
            }
        );
    }

    #[test]
    fn filter_applies_to_hourly_rows() {
        let table = vec![
            hour(date(2011, 1, 1), 0, 5),
            hour(date(2011, 1, 2), 0, 6),
            hour(date(2011, 1, 2), 1, 7),
        ];
        let filtered = filter_by_range(&table, date(2011, 1, 2), date(2011, 1, 2)).unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.date == date(2011, 1, 2)));
    }

    #[test]
    fn seasonal_average_is_group_mean() {
        let table = vec![
            day(date(2011, 1, 1), 1, 1, 0, 100),
            day(date(2011, 1, 2), 1, 1, 0, 200),
            day(date(2011, 1, 3), 1, 2, 0, 40),
            day(date(2011, 7, 1), 3, 1, 0, 900),
        ];
        let averages = seasonal_weather_averages(&table).unwrap();
        assert_eq!(averages.len(), 3);
        assert_eq!(averages[0].season, Season::Spring);
        assert_eq!(averages[0].weather, Weather::Clear);
        assert_eq!(averages[0].average_count, 150.0);
        assert_eq!(averages[1].weather, Weather::Mist);
        assert_eq!(averages[1].average_count, 40.0);
        assert_eq!(averages[2].season, Season::Fall);
    }

    #[test]
    fn seasonal_average_rejects_unknown_weather() {
        let table = vec![day(date(2011, 1, 1), 1, 9, 0, 100)];
        assert!(matches!(
            seasonal_weather_averages(&table),
            Err(TransformError::Domain { code: 9, .. })
        ));
    }

    #[test]
    fn hourly_peak_is_highest_mean() {
        let d = date(2011, 5, 1);
        let table = vec![hour(d, 0, 50), hour(d, 8, 400), hour(d, 17, 450), hour(d, 23, 10)];
        let pattern = hourly_pattern(&table).unwrap();
        assert_eq!(pattern.hours.len(), 4);
        let peak = pattern.peak.expect("peak");
        assert_eq!(peak.hour, 17);
        assert_eq!(peak.average_count, 450.0);
    }

    #[test]
    fn hourly_peak_tie_prefers_earliest_hour() {
        let d = date(2011, 5, 1);
        let table = vec![hour(d, 18, 300), hour(d, 8, 300), hour(d, 12, 100)];
        let pattern = hourly_pattern(&table).unwrap();
        let hours: Vec<u8> = pattern.hours.iter().map(|h| h.hour).collect();
        assert_eq!(hours, vec![8, 12, 18]);
        assert_eq!(pattern.peak.map(|p| p.hour), Some(8));
    }

    #[test]
    fn hourly_pattern_averages_across_days() {
        let table = vec![
            hour(date(2011, 5, 1), 8, 100),
            hour(date(2011, 5, 2), 8, 300),
            hour(date(2011, 5, 1), 9, 150),
        ];
        let pattern = hourly_pattern(&table).unwrap();
        assert_eq!(pattern.hours[0].average_count, 200.0);
        assert_eq!(pattern.peak.map(|p| p.hour), Some(8));
    }

    #[test]
    fn hourly_pattern_of_nothing_has_no_peak() {
        let pattern = hourly_pattern(&[]).unwrap();
        assert!(pattern.hours.is_empty());
        assert!(pattern.peak.is_none());
    }

    #[test]
    fn hourly_pattern_rejects_hour_out_of_day() {
        let table = vec![hour(date(2011, 5, 1), 24, 1)];
        assert!(matches!(
            hourly_pattern(&table),
            Err(TransformError::Domain { field: "hour", code: 24 })
        ));
    }

    #[test]
    fn yearly_averages_keep_years_apart() {
        let table = vec![
            day(date(2011, 3, 1), 1, 1, 0, 100),
            day(date(2011, 3, 2), 1, 1, 0, 300),
            day(date(2012, 3, 1), 1, 1, 1, 1000),
            day(date(2011, 4, 1), 2, 1, 0, 50),
        ];
        let averages = yearly_monthly_averages(&table).unwrap();
        let rows: Vec<(&str, u8, f64)> = averages
            .iter()
            .map(|a| (a.year.label(), a.month, a.average_count))
            .collect();
        assert_eq!(
            rows,
            vec![("2011", 3, 200.0), ("2011", 4, 50.0), ("2012", 3, 1000.0)]
        );
    }

    #[test]
    fn yearly_averages_reject_unknown_year_index() {
        let table = vec![day(date(2013, 1, 1), 1, 1, 2, 10)];
        assert!(matches!(
            yearly_monthly_averages(&table),
            Err(TransformError::Domain { field: "year index", code: 2 })
        ));
    }

    #[test]
    fn summary_totals_and_averages() {
        let d = date(2011, 1, 1);
        let table = vec![day(d, 1, 1, 0, 10), day(d, 1, 1, 0, 20), day(d, 1, 1, 0, 30)];
        let summary = summary_stats(&table).unwrap();
        assert_eq!(summary.total, 60);
        assert_eq!(summary.average_daily, 20.0);
    }

    #[test]
    fn overflowing_total_is_an_error() {
        let d = date(2011, 1, 1);
        let table = vec![day(d, 1, 1, 0, u64::MAX), day(d, 1, 1, 0, 1)];
        assert_eq!(summary_stats(&table), Err(TransformError::CountOverflow));
        assert_eq!(seasonal_weather_averages(&table), Err(TransformError::CountOverflow));
        assert_eq!(yearly_monthly_averages(&table), Err(TransformError::CountOverflow));
    }

    #[test]
    fn summary_of_empty_table_signals_no_data() {
        assert_eq!(summary_stats(&[]), Err(TransformError::NoData));
    }
}
