use crate::client::{PageRequest, Transport};
use crate::crawler::{ContinuationFlag, VacancySource};
use crate::models::{Continuation, NormalizedSalary, VacancyPage};
use crate::salary::RawVacancy;
use crate::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    /// Application secret key, sent as `X-Api-App-Id`
    pub token: String,
    pub catalogue: u32,
    pub town: u32,
    pub per_page: u32,
    /// Skip vacancies whose salary is "by agreement"
    pub no_agreement: bool,
}

impl SuperJobConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0/vacancies".to_string(),
            token: token.into(),
            catalogue: SuperJobCatalogue::Programming.to_code(),
            town: SuperJobTown::Moscow.to_code(),
            per_page: 5,
            no_agreement: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SuperJobCatalogue {
    Programming,
}

impl SuperJobCatalogue {
    pub fn to_code(&self) -> u32 {
        match self {
            Self::Programming => 48,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SuperJobTown {
    Moscow,
}

impl SuperJobTown {
    pub fn to_code(&self) -> u32 {
        match self {
            Self::Moscow => 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuperJobVacancy {
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl RawVacancy for SuperJobVacancy {
    fn normalize(&self) -> Option<NormalizedSalary> {
        let currency = self.currency.as_deref()?;
        Some(NormalizedSalary::new(self.payment_from, self.payment_to, currency))
    }
}

#[derive(Debug, Deserialize)]
struct SuperJobPage {
    #[serde(default)]
    objects: Vec<SuperJobVacancy>,
    total: u64,
    more: bool,
}

pub struct SuperJobClient<T> {
    transport: T,
    config: SuperJobConfig,
}

impl<T: Transport> SuperJobClient<T> {
    pub fn new(transport: T, config: SuperJobConfig) -> Result<Self> {
        if config.token.trim().is_empty() {
            return Err(Error::Config("SuperJob token is empty".into()));
        }
        Ok(Self { transport, config })
    }

    pub fn build_request(&self, search_term: &str, page: u32) -> PageRequest {
        PageRequest::new(&self.config.base_url)
            .query("catalogues", self.config.catalogue)
            .query("town", self.config.town)
            .query("keyword", search_term)
            .query("page", page)
            .query("count", self.config.per_page)
            .query("no_agreement", u8::from(self.config.no_agreement))
            .header("X-Api-App-Id", self.config.token.as_str())
    }
}

impl<T: Transport> VacancySource for SuperJobClient<T> {
    type Vacancy = SuperJobVacancy;
    type Cursor = ContinuationFlag;

    fn name(&self) -> &'static str {
        "superjob.ru"
    }

    fn fetch_page(&self, search_term: &str, page: u32) -> Result<VacancyPage<SuperJobVacancy>> {
        let body = self.transport.get(&self.build_request(search_term, page))?;
        let parsed: SuperJobPage = serde_json::from_str(&body).map_err(|source| Error::Decode {
            source_name: self.name(),
            source,
        })?;

        Ok(VacancyPage {
            vacancies: parsed.objects,
            found: parsed.total,
            page,
            continuation: Continuation::More(parsed.more),
        })
    }
}
