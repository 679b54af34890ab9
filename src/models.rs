use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Salary bounds of one vacancy reduced to a source-independent shape.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSalary {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    /// Lower-cased currency code as reported by the source
    pub currency: String,
}

impl NormalizedSalary {
    pub fn new(lower: Option<f64>, upper: Option<f64>, currency: impl AsRef<str>) -> Self {
        Self {
            lower,
            upper,
            currency: currency.as_ref().to_lowercase(),
        }
    }
}

/// How a source tells the caller whether another page exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Authoritative page count for the whole query
    TotalPages(u32),
    /// "More pages exist" flag
    More(bool),
}

/// One fetched page of raw vacancies.
#[derive(Debug, Clone)]
pub struct VacancyPage<V> {
    pub vacancies: Vec<V>,
    /// Source-reported number of vacancies matching the query
    pub found: u64,
    pub page: u32,
    pub continuation: Continuation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub total: u64,
    pub processed: u64,
    pub average_salary: u64,
}

/// Per-language statistics of one source, kept in the order languages were
/// queried. Serializes as a JSON object keyed by language name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(String, LanguageStats)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the statistics of `language`.
    pub fn insert(&mut self, language: impl Into<String>, stats: LanguageStats) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = stats,
            None => self.entries.push((language, stats)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
