pub mod analytics;
pub mod app;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_datasets, resolve_data_paths};
