use crate::errors::TransformError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// Rows that can be restricted to a date range.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// One row of the cleaned daily dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    pub season: u8,
    #[serde(rename = "weathersit")]
    pub weather_situation: u8,
    #[serde(rename = "yr")]
    pub year_index: u8,
    #[serde(rename = "mnth")]
    pub month: u8,
    #[serde(rename = "cnt")]
    pub count: u64,
}

impl Dated for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// One row of the cleaned hourly dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    #[serde(rename = "hr")]
    pub hour: u8,
    #[serde(rename = "cnt")]
    pub count: u64,
}

impl Dated for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Both input tables, loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
    bounds: DateRange,
}

impl Datasets {
    /// Returns `None` when the daily table is empty, since no bounds exist.
    pub fn new(daily: Vec<DailyRecord>, hourly: Vec<HourlyRecord>) -> Option<Self> {
        let start = daily.iter().map(|record| record.date).min()?;
        let end = daily.iter().map(|record| record.date).max()?;
        Some(Self {
            daily,
            hourly,
            bounds: DateRange { start, end },
        })
    }

    /// Earliest and latest date of the daily table.
    pub fn date_bounds(&self) -> DateRange {
        self.bounds
    }
}

/// Inclusive calendar date range applied to both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TransformError> {
        if start > end {
            return Err(TransformError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn from_code(code: u8) -> Result<Self, TransformError> {
        match code {
            1 => Ok(Self::Spring),
            2 => Ok(Self::Summer),
            3 => Ok(Self::Fall),
            4 => Ok(Self::Winter),
            _ => Err(TransformError::Domain { field: "season", code }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weather {
    Clear,
    Mist,
    LightPrecipitation,
    HeavyPrecipitation,
}

impl Weather {
    pub fn from_code(code: u8) -> Result<Self, TransformError> {
        match code {
            1 => Ok(Self::Clear),
            2 => Ok(Self::Mist),
            3 => Ok(Self::LightPrecipitation),
            4 => Ok(Self::HeavyPrecipitation),
            _ => Err(TransformError::Domain {
                field: "weather situation",
                code,
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear/Cloudy",
            Self::Mist => "Misty",
            Self::LightPrecipitation => "Light Rain/Snow",
            Self::HeavyPrecipitation => "Heavy Rain/Snow",
        }
    }
}

/// The dataset covers exactly two calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Year {
    Y2011,
    Y2012,
}

impl Year {
    pub fn from_index(index: u8) -> Result<Self, TransformError> {
        match index {
            0 => Ok(Self::Y2011),
            1 => Ok(Self::Y2012),
            _ => Err(TransformError::Domain {
                field: "year index",
                code: index,
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Y2011 => "2011",
            Self::Y2012 => "2012",
        }
    }
}

// Categories serialize as their display labels.
macro_rules! serialize_as_label {
    ($($ty:ty),+) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.label())
                }
            }
        )+
    };
}

serialize_as_label!(Season, Weather, Year);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalWeatherAverage {
    pub season: Season,
    pub weather: Weather,
    pub average_count: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyAverage {
    pub hour: u8,
    pub average_count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPattern {
    pub hours: Vec<HourlyAverage>,
    pub peak: Option<HourlyAverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyMonthlyAverage {
    pub year: Year,
    pub month: u8,
    pub average_count: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total: u64,
    pub average_daily: f64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub range: DateRange,
    pub daily_rows: usize,
    pub hourly_rows: usize,
    /// `None` when the range holds no daily rows.
    pub summary: Option<SummaryStats>,
    pub seasonal_weather: Vec<SeasonalWeatherAverage>,
    pub hourly: HourlyPattern,
    pub yearly_monthly: Vec<YearlyMonthlyAverage>,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl FilterResponse {
    pub fn new(range: DateRange, bounds: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
            min_date: bounds.start,
            max_date: bounds.end,
        }
    }
}
