use axum::{extract::Request, middleware::Next, response::Response};
use std::time::{Duration, Instant};
use tracing::info;

/// Log one line per request once the response is ready.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let resp = next.run(req).await;

    info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        latency_ms = latency_ms(started.elapsed()),
        "request handled"
    );
    resp
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn latency_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_saturates_instead_of_wrapping() {
        assert_eq!(latency_ms(Duration::from_micros(2_500)), 2);
        assert_eq!(latency_ms(Duration::MAX), u64::MAX);
    }
}
