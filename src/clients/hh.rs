use crate::client::{PageRequest, Transport};
use crate::crawler::{CountedPages, VacancySource};
use crate::models::{Continuation, NormalizedSalary, VacancyPage};
use crate::salary::RawVacancy;
use crate::{Error, Result};
use serde::Deserialize;

const APP_NAME: &str = "DevmanJobParser/1.0";

#[derive(Debug, Clone)]
pub struct HhConfig {
    pub base_url: String,
    /// Contact address sent in the User-Agent, as hh.ru asks API clients to do
    pub email: String,
    pub professional_role: u32,
    pub area: u32,
    /// Publication window in days; the API default applies when unset
    pub period: Option<u32>,
    pub per_page: u32,
}

impl Default for HhConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru/vacancies".to_string(),
            email: "example@email.com".to_string(),
            professional_role: HhRole::Programmer.to_code(),
            area: HhArea::Moscow.to_code(),
            period: None,
            per_page: 20,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum HhRole {
    Programmer,
}

impl HhRole {
    pub fn to_code(&self) -> u32 {
        match self {
            Self::Programmer => 96,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum HhArea {
    Moscow,
}

impl HhArea {
    pub fn to_code(&self) -> u32 {
        match self {
            Self::Moscow => 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

impl RawVacancy for HhVacancy {
    fn normalize(&self) -> Option<NormalizedSalary> {
        let salary = self.salary.as_ref()?;
        let currency = salary.currency.as_deref()?;
        Some(NormalizedSalary::new(salary.from, salary.to, currency))
    }
}

#[derive(Debug, Deserialize)]
struct HhPage {
    #[serde(default)]
    items: Vec<HhVacancy>,
    found: u64,
    pages: u32,
    #[serde(default)]
    page: u32,
}

pub struct HhClient<T> {
    transport: T,
    config: HhConfig,
}

impl<T: Transport> HhClient<T> {
    pub fn new(transport: T, config: HhConfig) -> Self {
        Self { transport, config }
    }

    pub fn build_request(&self, search_term: &str, page: u32) -> PageRequest {
        let mut request = PageRequest::new(&self.config.base_url)
            .query("professional_role", self.config.professional_role)
            .query("area", self.config.area)
            .query("text", search_term)
            .query("only_with_salary", true)
            .query("page", page)
            .query("per_page", self.config.per_page);

        if let Some(period) = self.config.period {
            request = request.query("period", period);
        }

        request.header("User-Agent", format!("{} ({})", APP_NAME, self.config.email))
    }
}

impl<T: Transport> VacancySource for HhClient<T> {
    type Vacancy = HhVacancy;
    type Cursor = CountedPages;

    fn name(&self) -> &'static str {
        "hh.ru"
    }

    fn fetch_page(&self, search_term: &str, page: u32) -> Result<VacancyPage<HhVacancy>> {
        let body = self.transport.get(&self.build_request(search_term, page))?;
        let parsed: HhPage = serde_json::from_str(&body).map_err(|source| Error::Decode {
            source_name: self.name(),
            source,
        })?;

        Ok(VacancyPage {
            vacancies: parsed.items,
            found: parsed.found,
            page: parsed.page,
            continuation: Continuation::TotalPages(parsed.pages),
        })
    }
}
