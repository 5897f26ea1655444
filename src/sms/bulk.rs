// ABOUTME: Concurrent fan-out of one outbound call per destination with all-or-nothing outcome
// ABOUTME: Waits for every call to settle and joins the failure texts into a single error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use crate::constants::messages::BULK_SEND_FAILED_PREFIX;
use futures_util::future::join_all;
use std::fmt::Display;
use std::future::Future;
use thiserror::Error;

/// A bulk send in which at least one destination failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{prefix}: {joined}", prefix = BULK_SEND_FAILED_PREFIX, joined = .failures.join(", "))]
pub struct BulkSendError {
    /// Error text of every failed call, in destination order
    pub failures: Vec<String>,
}

/// Run `send_one` for every item concurrently
///
/// All calls run to completion even when some fail; there is no cancellation.
///
/// # Errors
///
/// Returns [`BulkSendError`] listing every failure if any call failed.
pub async fn send_all<I, T, E, F, Fut>(items: I, send_one: F) -> Result<Vec<T>, BulkSendError>
where
    I: IntoIterator,
    E: Display,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let outcomes = join_all(items.into_iter().map(send_one)).await;

    let mut successes = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(value) => successes.push(value),
            Err(error) => failures.push(error.to_string()),
        }
    }

    if failures.is_empty() {
        Ok(successes)
    } else {
        Err(BulkSendError { failures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destinations(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[tokio::test]
    async fn test_all_successes_keep_order() {
        let result = send_all(destinations(&["a", "b", "c"]), |to| async move {
            Ok::<_, String>(format!("sent:{to}"))
        })
        .await
        .unwrap();
        assert_eq!(result, vec!["sent:a", "sent:b", "sent:c"]);
    }

    #[tokio::test]
    async fn test_one_failure_fails_the_batch() {
        let error = send_all(destinations(&["ok", "bad", "ok2"]), |to| async move {
            if to == "bad" {
                Err(format!("invalid number {to}"))
            } else {
                Ok(to)
            }
        })
        .await
        .unwrap_err();

        assert_eq!(error.failures, vec!["invalid number bad"]);
        assert_eq!(
            error.to_string(),
            "Failed to send messages: invalid number bad"
        );
    }

    #[tokio::test]
    async fn test_failures_are_comma_joined() {
        let error = send_all(destinations(&["x", "y"]), |to| async move {
            Err::<(), _>(format!("Error {to}"))
        })
        .await
        .unwrap_err();
        assert_eq!(error.to_string(), "Failed to send messages: Error x, Error y");
    }
}
