use crate::Result;
use crate::config::Languages;
use crate::crawler::VacancySource;
use crate::models::ResultSet;
use crate::salary::SalaryPolicy;
use crate::table::render_table;
use crate::writer::{save_to_csv, save_to_json};
use std::path::Path;
use tracing::{error, info};

/// Runs the source once per language, in order. The first failed language
/// aborts the whole run.
pub fn collect_language_stats<S>(
    source: &S,
    languages: &Languages,
    policy: &SalaryPolicy,
) -> Result<ResultSet>
where
    S: VacancySource,
{
    let mut results = ResultSet::new();

    for (language, search_term) in languages.iter() {
        info!(source = source.name(), language, "fetching vacancies");

        let stats = source
            .collect_stats(search_term, policy)
            .inspect_err(|e| error!(source = source.name(), language, "fetch failed: {}", e))?;

        info!(
            source = source.name(),
            language,
            total = stats.total,
            processed = stats.processed,
            average_salary = stats.average_salary,
            "language done"
        );
        results.insert(language, stats);
    }

    Ok(results)
}

pub struct StatsPipeline<'a> {
    languages: &'a Languages,
    policy: &'a SalaryPolicy,
}

#[must_use = "pipeline must end with .save_and_then() or .print() to produce output"]
pub struct PipelineWithStats {
    source: &'static str,
    results: ResultSet,
}

impl<'a> StatsPipeline<'a> {
    pub fn new(languages: &'a Languages, policy: &'a SalaryPolicy) -> Self {
        Self { languages, policy }
    }

    pub fn collect<S>(self, source: S) -> Result<PipelineWithStats>
    where
        S: VacancySource,
    {
        info!(source = source.name(), "collecting salary statistics");
        let results = collect_language_stats(&source, self.languages, self.policy)?;
        Ok(PipelineWithStats {
            source: source.name(),
            results,
        })
    }
}

impl PipelineWithStats {
    pub fn into_results(self) -> ResultSet {
        self.results
    }

    #[must_use = "save_and_then() returns Self to allow chaining"]
    pub fn save_and_then(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match save_to_json(&self.results, path) {
            Ok(_) => info!(source = self.source, "saved {}", path.display()),
            Err(e) => error!(source = self.source, "saving {} failed: {}", path.display(), e),
        }
        self
    }

    #[must_use = "save_csv_and_then() returns Self to allow chaining"]
    pub fn save_csv_and_then(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match save_to_csv(&self.results, path) {
            Ok(_) => info!(source = self.source, "saved {}", path.display()),
            Err(e) => error!(source = self.source, "saving {} failed: {}", path.display(), e),
        }
        self
    }

    pub fn print(self, title: &str) -> ResultSet {
        println!("{}", render_table(&self.results, title));
        self.results
    }
}
