use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

/// Thousands separated with dots: 1234567 -> "1.234.567"
fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

fn response_size(response: &Response) -> String {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(format_number)
        .unwrap_or_else(|| "-".to_string())
}

/// HTTP request log line: timestamp, duration, size, status, method and path.
///
/// The size comes from `Content-Length`; streamed bodies show `-`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let line = format!(
        "{} | {:>5}ms | {:>12} | {} {:>6} {}",
        Utc::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        response_size(&response),
        status,
        method,
        path
    );
    if response.status().is_server_error() {
        tracing::error!("{}", line);
    } else {
        tracing::info!("{}", line);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_response_size() {
        let response = Response::builder()
            .header(header::CONTENT_LENGTH, "20480")
            .body(Body::empty())
            .unwrap();
        assert_eq!(response_size(&response), "20.480");
        assert_eq!(response_size(&Response::new(Body::empty())), "-");
    }
}
