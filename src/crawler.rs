use crate::Result;
use crate::models::{Continuation, LanguageStats, VacancyPage};
use crate::salary::{RawVacancy, SalaryAccumulator, SalaryPolicy};
use tracing::{debug, warn};

/// Position in a source's page sequence.
pub trait PageCursor: Default {
    /// Zero-based index of the next page to request.
    fn page(&self) -> u32;

    fn has_next(&self) -> bool;

    /// Moves past the page that was just fetched.
    fn advance(&mut self, continuation: Continuation);
}

/// Walks pages until the index reaches the page count reported by the most
/// recently fetched page.
#[derive(Debug, Clone, Copy)]
pub struct CountedPages {
    page: u32,
    pages: u32,
}

impl Default for CountedPages {
    fn default() -> Self {
        Self { page: 0, pages: 1 }
    }
}

impl PageCursor for CountedPages {
    fn page(&self) -> u32 {
        self.page
    }

    fn has_next(&self) -> bool {
        self.page < self.pages
    }

    fn advance(&mut self, continuation: Continuation) {
        self.page += 1;
        match continuation {
            Continuation::TotalPages(pages) => self.pages = pages,
            Continuation::More(more) => {
                warn!("page count expected, got a continuation flag");
                self.pages = if more { self.page + 1 } else { self.page };
            }
        }
    }
}

/// Walks pages while the last fetched page says more exist.
#[derive(Debug, Clone, Copy)]
pub struct ContinuationFlag {
    page: u32,
    more: bool,
}

impl Default for ContinuationFlag {
    fn default() -> Self {
        Self {
            page: 0,
            more: true,
        }
    }
}

impl PageCursor for ContinuationFlag {
    fn page(&self) -> u32 {
        self.page
    }

    fn has_next(&self) -> bool {
        self.more
    }

    fn advance(&mut self, continuation: Continuation) {
        self.page += 1;
        self.more = match continuation {
            Continuation::More(more) => more,
            Continuation::TotalPages(pages) => {
                warn!("continuation flag expected, got a page count");
                self.page < pages
            }
        };
    }
}

/// A job board that can be searched page by page.
pub trait VacancySource {
    type Vacancy: RawVacancy;
    type Cursor: PageCursor;

    fn name(&self) -> &'static str;

    fn fetch_page(&self, search_term: &str, page: u32) -> Result<VacancyPage<Self::Vacancy>>;

    /// Fetches every page for `search_term` and folds the usable salaries
    /// into [`LanguageStats`]. Any failed fetch aborts the walk.
    fn collect_stats(&self, search_term: &str, policy: &SalaryPolicy) -> Result<LanguageStats> {
        let mut cursor = Self::Cursor::default();
        let mut accumulator = SalaryAccumulator::new();
        let mut total = 0;

        while cursor.has_next() {
            let page = self.fetch_page(search_term, cursor.page())?;

            let kept = page
                .vacancies
                .iter()
                .filter(|vacancy| accumulator.push(*vacancy, policy))
                .count();

            debug!(
                source = self.name(),
                page = page.page,
                records = page.vacancies.len(),
                kept,
                "page processed"
            );

            total = page.found;
            cursor.advance(page.continuation);
        }

        debug!(
            source = self.name(),
            seen = accumulator.seen(),
            processed = accumulator.processed(),
            "pages exhausted"
        );

        Ok(accumulator.into_stats(total))
    }
}
