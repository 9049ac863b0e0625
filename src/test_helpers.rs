use std::cell::RefCell;

use serde_json::{Value, json};

use crate::config::Config;
use crate::error::Result;
use crate::review::ReviewSystem;

/// One notice captured by `RecordingReview`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Message(String),
    Warn(String),
    Fail(String),
}

/// Review backend that records every notice for assertions.
#[derive(Default)]
pub struct RecordingReview {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingReview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Message(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn warns(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Warn(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn fails(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Fail(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ReviewSystem for RecordingReview {
    fn message(&self, text: &str) -> Result<()> {
        self.notices
            .borrow_mut()
            .push(Notice::Message(text.to_string()));
        Ok(())
    }

    fn warn(&self, text: &str) -> Result<()> {
        self.notices
            .borrow_mut()
            .push(Notice::Warn(text.to_string()));
        Ok(())
    }

    fn fail(&self, text: &str) -> Result<()> {
        self.notices
            .borrow_mut()
            .push(Notice::Fail(text.to_string()));
        Ok(())
    }
}

/// `Config` with sensible defaults for tests.
pub fn test_config(results_path: &str) -> Config {
    Config {
        results_path: results_path.to_string(),
        review: "console".to_string(),
        pr: None,
        success_message: "Lint passed.".to_string(),
    }
}

/// One issue record in the shape `tslint --format json` emits.
pub fn issue_record(rule: &str, failure: &str, file: &str, line: u64, character: u64) -> Value {
    json!({
        "ruleName": rule,
        "ruleSeverity": "ERROR",
        "failure": failure,
        "name": file,
        "startPosition": {"line": line, "character": character, "position": 0},
        "endPosition": {"line": line, "character": character + 1, "position": 1}
    })
}
