//! Request-scoped time budget shared by every store call a request makes.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    /// Deadline that expires `budget` from now
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
            budget,
        }
    }

    /// Run `fut` to completion or fail once the deadline passes.
    ///
    /// The future is dropped on expiry, which aborts any in-flight store work.
    pub async fn run<F, T>(self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout_at(self.at, fut).await {
            Ok(result) => result,
            Err(_) => Err(AppError::DeadlineExceeded(format!(
                "store operation exceeded the {}ms deadline",
                self.budget.as_millis()
            ))),
        }
    }
}
