#![allow(dead_code)]

use salary_stats::{Error, PageRequest, Result, Transport};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned page bodies in order and records every request it gets.
/// A `None` body answers with an HTTP 500.
pub struct ScriptedTransport {
    bodies: RefCell<VecDeque<Option<String>>>,
    requests: RefCell<Vec<PageRequest>>,
}

impl ScriptedTransport {
    pub fn new<I>(bodies: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            bodies: RefCell::new(bodies.into_iter().collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn ok<I, S>(bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(bodies.into_iter().map(|body| Some(body.into())))
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.borrow().clone()
    }

    pub fn query_values(&self, key: &str) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| request.query_value(key).unwrap_or_default().to_string())
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.bodies.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, request: &PageRequest) -> Result<String> {
        self.requests.borrow_mut().push(request.clone());

        match self.bodies.borrow_mut().pop_front() {
            Some(Some(body)) => Ok(body),
            Some(None) | None => Err(Error::Status {
                url: request.url.clone(),
                status: 500,
            }),
        }
    }
}

pub fn hh_page(page: u32, pages: u32, found: u64, items: &str) -> String {
    format!(r#"{{"items": [{items}], "found": {found}, "pages": {pages}, "page": {page}, "per_page": 20}}"#)
}

pub fn superjob_page(more: bool, total: u64, objects: &str) -> String {
    format!(r#"{{"objects": [{objects}], "total": {total}, "more": {more}}}"#)
}
