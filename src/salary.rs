use crate::models::{LanguageStats, NormalizedSalary};
use crate::{Error, Result};

pub const DEFAULT_ACCEPTED_CURRENCIES: [&str; 2] = ["rur", "rub"];

/// Source-specific vacancy record that can be reduced to a [`NormalizedSalary`].
pub trait RawVacancy {
    /// `None` when the record carries nothing estimable.
    fn normalize(&self) -> Option<NormalizedSalary>;
}

/// Currency gate and imputation rule for turning a salary range into one figure.
#[derive(Debug, Clone)]
pub struct SalaryPolicy {
    accepted_currencies: Vec<String>,
}

impl SalaryPolicy {
    pub fn new<I, S>(accepted_currencies: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted_currencies: Vec<String> = accepted_currencies
            .into_iter()
            .map(|code| code.as_ref().trim().to_lowercase())
            .filter(|code| !code.is_empty())
            .collect();

        if accepted_currencies.is_empty() {
            return Err(Error::Config("accepted currency set is empty".into()));
        }

        Ok(Self {
            accepted_currencies,
        })
    }

    pub fn accepts(&self, currency: &str) -> bool {
        let currency = currency.to_lowercase();
        self.accepted_currencies.iter().any(|code| *code == currency)
    }

    /// Single estimated salary for `salary`, or `None` when it is unusable.
    ///
    /// A missing or zero bound is imputed from the other one with a 20% margin:
    /// only `upper` gives `upper * 1.2`, only `lower` gives `lower * 0.8`, and
    /// both give their mean. The result is truncated toward zero.
    pub fn estimate(&self, salary: &NormalizedSalary) -> Option<u64> {
        let lower = salary.lower.filter(|value| *value != 0.0);
        let upper = salary.upper.filter(|value| *value != 0.0);

        if !self.accepts(&salary.currency) {
            return None;
        }

        let estimate = match (lower, upper) {
            (None, None) => return None,
            (None, Some(upper)) => upper * 1.2,
            (Some(lower), None) => lower * 0.8,
            (Some(lower), Some(upper)) => (lower + upper) / 2.0,
        };

        Some(estimate.trunc() as u64)
    }
}

impl Default for SalaryPolicy {
    fn default() -> Self {
        Self {
            accepted_currencies: DEFAULT_ACCEPTED_CURRENCIES
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }
}

/// Running count and sum of the estimates kept for one language.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryAccumulator {
    seen: u64,
    processed: u64,
    sum: u128,
}

impl SalaryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one record through normalization and estimation. Returns whether
    /// it was kept.
    pub fn push<V: RawVacancy>(&mut self, vacancy: &V, policy: &SalaryPolicy) -> bool {
        self.seen += 1;

        let Some(estimate) = vacancy.normalize().and_then(|salary| policy.estimate(&salary))
        else {
            return false;
        };

        self.processed += 1;
        self.sum += u128::from(estimate);
        true
    }

    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn average(&self) -> u64 {
        if self.processed == 0 {
            return 0;
        }
        // mean never exceeds the largest estimate, so it fits back into u64
        (self.sum / u128::from(self.processed)) as u64
    }

    pub fn into_stats(self, total: u64) -> LanguageStats {
        LanguageStats {
            total,
            processed: self.processed,
            average_salary: self.average(),
        }
    }
}
