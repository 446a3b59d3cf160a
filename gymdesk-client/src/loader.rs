//! Fan-out loading
//!
//! Dashboards fetch many collections at once. Two policies:
//!
//! - tolerant: a failed source becomes an empty list and is reported in
//!   [`Degraded`], the rest of the view still renders;
//! - strict: `futures::try_join!` over the plain API futures, the first
//!   failure aborts the whole load.

use std::future::Future;

use serde::Serialize;

use crate::ClientResult;

/// One source that failed during a tolerant load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceFailure {
    pub source: &'static str,
    pub message: String,
}

/// Result of a single tolerant fetch
#[derive(Debug)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub failure: Option<SourceFailure>,
}

impl<T> Loaded<T> {
    /// Move the items out, recording the failure (if any)
    pub fn take(self, degraded: &mut Degraded) -> Vec<T> {
        if let Some(failure) = self.failure {
            degraded.0.push(failure);
        }
        self.items
    }
}

/// Await one source, degrading a failure to an empty list
pub async fn tolerant<T, F>(source: &'static str, request: F) -> Loaded<T>
where
    F: Future<Output = ClientResult<Vec<T>>>,
{
    match request.await {
        Ok(items) => Loaded {
            items,
            failure: None,
        },
        Err(e) => {
            tracing::warn!(source, error = %e, "Source failed, using empty list");
            Loaded {
                items: Vec::new(),
                failure: Some(SourceFailure {
                    source,
                    message: e.to_string(),
                }),
            }
        }
    }
}

/// Sources that fell back to empty during a tolerant load
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Degraded(Vec<SourceFailure>);

impl Degraded {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sources(&self) -> Vec<&'static str> {
        self.0.iter().map(|f| f.source).collect()
    }

    pub fn failures(&self) -> &[SourceFailure] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[tokio::test]
    async fn test_tolerant_degrades() {
        let mut degraded = Degraded::default();
        let ok = tolerant("members", async { Ok(vec![1, 2]) }).await.take(&mut degraded);
        let failed: Vec<i32> = tolerant("bills", async {
            Err(ClientError::Api {
                status: 502,
                message: "bad gateway".into(),
            })
        })
        .await
        .take(&mut degraded);

        assert_eq!(ok, vec![1, 2]);
        assert!(failed.is_empty());
        assert_eq!(degraded.sources(), vec!["bills"]);
        assert!(degraded.failures()[0].message.contains("502"));
    }
}
