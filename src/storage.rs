use crate::errors::LoadError;
use crate::models::{Datasets, DailyRecord, HourlyRecord};
use serde::de::DeserializeOwned;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::info;

#[derive(Debug, Clone)]
pub struct DataPaths {
    pub daily: PathBuf,
    pub hourly: PathBuf,
}

pub fn resolve_data_paths() -> DataPaths {
    let daily = env::var("DAILY_DATA_PATH").unwrap_or_else(|_| "data/day_cleaned.csv".to_string());
    let hourly = env::var("HOURLY_DATA_PATH").unwrap_or_else(|_| "data/hour_cleaned.csv".to_string());

    DataPaths {
        daily: PathBuf::from(daily),
        hourly: PathBuf::from(hourly),
    }
}

pub async fn load_datasets(paths: &DataPaths) -> Result<Datasets, LoadError> {
    let daily: Vec<DailyRecord> = read_table(&paths.daily).await?;
    let hourly: Vec<HourlyRecord> = read_table(&paths.hourly).await?;
    info!(
        daily_rows = daily.len(),
        hourly_rows = hourly.len(),
        "loaded rental data"
    );

    Datasets::new(daily, hourly).ok_or_else(|| LoadError::Empty {
        path: paths.daily.clone(),
    })
}

async fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let bytes = fs::read(path).await.map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(path, &bytes)
}

fn parse_table<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<Vec<T>, LoadError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(bytes);
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
