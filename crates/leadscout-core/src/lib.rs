//! Domain types, configuration, input resolution and export formatting for
//! the X lead tracker.

pub mod app_config;
pub mod config;
pub mod error;
pub mod format;
pub mod resolve;
pub mod rubric;
pub mod session;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, load_queries_file};
pub use error::{ConfigError, FormatError, InvalidScore, ValidationError};
pub use format::{
    bucket, export_file_name, filter, from_json, score_distribution, sort, to_csv, to_json, Bucket,
    ExportFormat, ScoreDistribution, SortKey,
};
pub use resolve::{
    parse_queries, resolve, Credentials, RawInputs, RunParameters, XCredentials,
    DEFAULT_MAX_RESULTS_PER_QUERY, DEFAULT_MIN_LEAD_SCORE, DEFAULT_QUERIES,
};
pub use rubric::{QualificationRubric, ScoreBand, RUBRIC_V1};
pub use session::RunSession;
pub use types::{EngagementMetrics, Lead, Post, RunResults, RunStats, Score, SearchQuery};
