use crate::errors::TransformError;
use crate::models::{DateRange, Datasets};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Datasets>,
    /// Range last confirmed by the user; starts as the full dataset span.
    pub filter: Arc<Mutex<DateRange>>,
}

impl AppState {
    pub fn new(data: Datasets) -> Self {
        let filter = data.date_bounds();
        Self {
            data: Arc::new(data),
            filter: Arc::new(Mutex::new(filter)),
        }
    }

    pub async fn current_filter(&self) -> DateRange {
        *self.filter.lock().await
    }

    /// Replaces the applied range. A rejected range leaves the previous one in place.
    pub async fn apply_filter(&self, start: NaiveDate, end: NaiveDate) -> Result<DateRange, TransformError> {
        let range = DateRange::new(start, end)?;
        *self.filter.lock().await = range;
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::tests::{date, day};

    fn state() -> AppState {
        AppState::new(
            Datasets::new(
                vec![
                    day(date(2011, 1, 1), 1, 1, 0, 10),
                    day(date(2012, 12, 31), 1, 1, 1, 20),
                ],
                Vec::new(),
            )
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn filter_starts_at_full_bounds() {
        let state = state();
        let filter = state.current_filter().await;
        assert_eq!(filter.start, date(2011, 1, 1));
        assert_eq!(filter.end, date(2012, 12, 31));
    }

    #[tokio::test]
    async fn rejected_filter_keeps_previous() {
        let state = state();
        let applied = state.apply_filter(date(2011, 6, 1), date(2011, 6, 30)).await.unwrap();
        assert_eq!(state.current_filter().await, applied);

        let err = state.apply_filter(date(2011, 7, 1), date(2011, 6, 1)).await;
        assert!(matches!(err, Err(TransformError::InvalidRange { .. })));
        assert_eq!(state.current_filter().await, applied);
    }
}
