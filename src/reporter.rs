use std::path::Path;

use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::results::{Issue, LintResults, load_results};
use crate::review::ReviewSystem;

/// Handler invoked with the parsed lint results.
///
/// Receives the JSON value exactly as parsed (an array of issue records when
/// the linter behaved, anything else otherwise) and the review system to
/// post notices through.
pub type ResultHandler<'a> = dyn Fn(&Value, &dyn ReviewSystem) -> Result<()> + 'a;

/// Reads a linter's JSON results file and routes the outcome into the
/// review system's comment stream.
pub struct Reporter<'a> {
    review: &'a dyn ReviewSystem,
    handler: Option<Box<ResultHandler<'a>>>,
}

impl<'a> Reporter<'a> {
    pub fn new(review: &'a dyn ReviewSystem) -> Self {
        Self {
            review,
            handler: None,
        }
    }

    /// Replace the default handler with a caller-supplied one.
    pub fn with_handler(mut self, handler: Box<ResultHandler<'a>>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Read the results file named by `config` and dispatch the outcome.
    ///
    /// A missing or unparseable results file is not an error: it produces a
    /// single warning notice and an `Ok` return. Only configuration problems
    /// and review backend failures propagate.
    pub fn run(&self, config: &Config) -> Result<()> {
        if config.results_path.is_empty() {
            return Err(Error::ConfigValidation(
                "results path not supplied".to_string(),
            ));
        }

        match load_results(Path::new(&config.results_path)) {
            LintResults::Unavailable => self.review.warn(&format!(
                "Couldn't read lint results file `{}`",
                config.results_path
            )),
            LintResults::Parsed(value) => match &self.handler {
                Some(handler) => handler(&value, self.review),
                None => default_handler(&value, &config.success_message, self.review),
            },
        }
    }
}

/// Default dispatch: one success notice for a clean run, one failure notice
/// per issue otherwise.
pub fn default_handler(
    results: &Value,
    success_message: &str,
    review: &dyn ReviewSystem,
) -> Result<()> {
    let Some(issues) = results.as_array() else {
        return review.warn("Lint results file did not contain an array of issues");
    };

    if issues.is_empty() {
        return review.message(success_message);
    }

    for record in issues {
        review.fail(&format_issue(record))?;
    }
    Ok(())
}

/// Render one issue record as a failure line: file, one-based position,
/// failure text, rule name.
fn format_issue(record: &Value) -> String {
    match serde_json::from_value::<Issue>(record.clone()) {
        Ok(issue) => {
            let position = issue
                .start_position
                .map(|p| format!(" [{}, {}]", p.line + 1, p.character + 1))
                .unwrap_or_default();
            format!(
                "`{}`{}: {} ({})",
                issue.name, position, issue.failure, issue.rule_name
            )
        }
        Err(_) => format!("Lint issue: {record}"),
    }
}
