//! Middleware for the HTTP client.
//!
//! Request tracing only. No retry or caching layer: each call reaches the
//! network exactly once.

use std::time::Instant;

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};

/// Logs method, path, status and latency of every outbound request at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestTracing;

#[async_trait::async_trait]
impl Middleware for RequestTracing {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let path = req.url().path().to_string();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(response) => tracing::debug!(
                %method,
                path,
                status = response.status().as_u16(),
                elapsed_ms,
                "HTTP request completed"
            ),
            Err(err) => tracing::debug!(%method, path, elapsed_ms, error = %err, "HTTP request failed"),
        }

        result
    }
}
