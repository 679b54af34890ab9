pub mod client;
pub mod clients;
pub mod config;
pub mod crawler;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod salary;
pub mod table;
pub mod utils;
pub mod writer;

pub use client::{HttpTransport, PageRequest, Transport};
pub use clients::{HhClient, HhConfig, SuperJobClient, SuperJobConfig};
pub use config::{AppConfig, Languages};
pub use crawler::{ContinuationFlag, CountedPages, PageCursor, VacancySource};
pub use error::{Error, Result};
pub use models::{Continuation, LanguageStats, NormalizedSalary, ResultSet, VacancyPage};
pub use pipeline::{PipelineWithStats, StatsPipeline, collect_language_stats};
pub use salary::{RawVacancy, SalaryAccumulator, SalaryPolicy};
pub use table::render_table;
pub use writer::{save_to_csv, save_to_json};
