// Result of a workflow command whose primary write succeeded.
//
// Purpose
// - Separate the primary write (which either succeeds or fails the command) from
//   secondary bookkeeping (audit movements, time tracking, uploads) whose failures
//   are logged and reported but never fail the command.

use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryFailure {
    pub step: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome<T> {
    pub value: T,
    pub secondary_failures: Vec<SecondaryFailure>,
}

impl<T> Outcome<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            secondary_failures: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.secondary_failures.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            secondary_failures: self.secondary_failures,
        }
    }
}

/// Collects secondary failures while a command is still building its primary value.
#[derive(Debug, Default)]
pub struct SecondaryLog {
    failures: Vec<SecondaryFailure>,
}

impl SecondaryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swallow the error of a secondary step, keeping a record of it.
    pub fn absorb<U, E: Display>(&mut self, step: &str, result: Result<U, E>) -> Option<U> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(step, error = %error, "secondary write failed, continuing");
                self.failures.push(SecondaryFailure {
                    step: step.to_string(),
                    reason: error.to_string(),
                });
                None
            }
        }
    }

    pub fn finish<T>(self, value: T) -> Outcome<T> {
        Outcome {
            value,
            secondary_failures: self.failures,
        }
    }
}
