use crate::clients::{HhConfig, SuperJobConfig};
use crate::salary::SalaryPolicy;
use crate::{Error, Result};

pub const DEFAULT_EMAIL: &str = "example@email.com";

const DEFAULT_LANGUAGES: [(&str, &str); 9] = [
    ("Python", "Python"),
    ("Javascript", "Javascript"),
    ("Java", "Java NOT Javascript"),
    ("Kotlin", "Kotlin"),
    ("Ruby", "Ruby"),
    ("PHP", "PHP"),
    ("C++", "C++"),
    ("C#", "C#"),
    ("Go", "Go"),
];

/// Ordered mapping of language display name to search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages(Vec<(String, String)>);

impl Languages {
    pub fn new<I, N, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(name, term)| (name.into(), term.into()))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, term)| (name.as_str(), term.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Languages {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGES)
    }
}

/// Everything a run needs, resolved before the first request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub languages: Languages,
    pub policy: SalaryPolicy,
    pub hh: HhConfig,
    /// `None` when the SuperJob source is not requested
    pub superjob: Option<SuperJobConfig>,
}

impl AppConfig {
    /// Reads `DEV_EMAIL` and, when `with_superjob` is set, the mandatory
    /// `SUPERJOB_TOKEN`. Values from a `.env` file are picked up too.
    pub fn from_env(with_superjob: bool) -> Result<Self> {
        // a missing .env file is fine
        let _ = dotenvy::dotenv();

        let email = dotenvy::var("DEV_EMAIL").unwrap_or_else(|_| DEFAULT_EMAIL.to_string());
        let token = if with_superjob {
            Some(dotenvy::var("SUPERJOB_TOKEN").map_err(|_| {
                Error::Config("SUPERJOB_TOKEN is not set".into())
            })?)
        } else {
            None
        };

        Ok(Self::new(email, token))
    }

    pub fn new(email: impl Into<String>, superjob_token: Option<String>) -> Self {
        Self {
            languages: Languages::default(),
            policy: SalaryPolicy::default(),
            hh: HhConfig {
                email: email.into(),
                ..Default::default()
            },
            superjob: superjob_token.map(SuperJobConfig::new),
        }
    }

    pub fn with_period(mut self, period: Option<u32>) -> Self {
        self.hh.period = period;
        self
    }
}
