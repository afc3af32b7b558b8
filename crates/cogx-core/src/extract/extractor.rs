//! Test result extraction over segment text.

use tracing::{debug, warn};

use crate::error::{ConfigError, ExtractionError};
use crate::models::{ExtractionConfig, TestResult};

use super::context::ContextWindow;
use super::matcher::AliasMatcher;
use super::rules::{resolve_date, TestFamily};
use super::Result;

/// A configured test with its compiled matcher.
#[derive(Debug, Clone)]
struct CompiledTest {
    name: String,
    family: TestFamily,
    matcher: AliasMatcher,
}

/// Locates test mentions in segment text and parses their results.
#[derive(Debug, Clone)]
pub struct TestResultExtractor {
    tests: Vec<CompiledTest>,
    window_size: usize,
    resolve_dates: bool,
}

impl TestResultExtractor {
    /// Compile a matcher for every configured test.
    pub fn new(config: &ExtractionConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let tests = config
            .tests
            .iter()
            .map(|test| {
                Ok(CompiledTest {
                    name: test.name.clone(),
                    family: TestFamily::for_test(&test.name),
                    matcher: AliasMatcher::new(&test.name, &test.aliases)?,
                })
            })
            .collect::<std::result::Result<Vec<_>, ConfigError>>()?;

        debug!(
            "Compiled {} test matchers (window size {})",
            tests.len(),
            config.window_size
        );

        Ok(Self {
            tests,
            window_size: config.window_size,
            resolve_dates: config.resolve_dates,
        })
    }

    /// Set whether result dates are resolved from the surrounding text.
    pub fn with_date_resolution(mut self, resolve: bool) -> Self {
        self.resolve_dates = resolve;
        self
    }

    /// Names of the configured tests, in configuration order.
    pub fn test_names(&self) -> Vec<&str> {
        self.tests.iter().map(|t| t.name.as_str()).collect()
    }

    /// Whether a test name (case-insensitive) is configured.
    pub fn has_test(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn find(&self, name: &str) -> Option<&CompiledTest> {
        self.tests.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Extract every result for `test` mentioned in `text`.
    ///
    /// Returns one result per mention whose context parsed to a value. When
    /// there is no parsable mention the single N/A sentinel is returned.
    /// An unconfigured test is an error the caller cannot recover from.
    pub fn extract(&self, test: &str, text: &str) -> Result<Vec<TestResult>> {
        let compiled = self
            .find(test)
            .ok_or_else(|| ExtractionError::UnknownTest(test.to_string()))?;

        let mut results = Vec::new();

        for mention in compiled.matcher.find_iter(text) {
            let ctx = ContextWindow::around(text, mention.start, mention.end, self.window_size);
            debug!(
                "Found {} in: {} | {} | {}",
                compiled.name, ctx.left, mention.text, ctx.right
            );

            match compiled.family.extract(&ctx) {
                Some(value) => {
                    debug!("{} result: {}", compiled.name, value);
                    let date = if self.resolve_dates {
                        resolve_date(&ctx.right_window())
                            .or_else(|| resolve_date(&ctx.left_window()))
                    } else {
                        None
                    };
                    results.push(TestResult::new(value).with_date(date));
                }
                None => warn!("Failed to find value for {} ({})", mention.text, compiled.name),
            }
        }

        if results.is_empty() {
            results.push(TestResult::not_available());
        }

        Ok(results)
    }

    /// Extract results for every configured test, in configuration order.
    pub fn extract_all(&self, text: &str) -> Result<Vec<(&str, Vec<TestResult>)>> {
        self.tests
            .iter()
            .map(|test| Ok((test.name.as_str(), self.extract(&test.name, text)?)))
            .collect()
    }
}
