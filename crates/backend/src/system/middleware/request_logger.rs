use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// One console line per request: local time, latency, response size,
/// status, method and path.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Body is buffered to report its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("Cannot buffer response body for {} {}: {}", method, path, e);
            print_line("33", start, "error", parts.status.as_u16(), &method, &path);
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    // cyan for 200, yellow otherwise
    let color_code = if status == 200 { "36" } else { "33" };
    print_line(
        color_code,
        start,
        &format_number(bytes.len() as u64),
        status,
        &method,
        &path,
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn print_line(
    color_code: &str,
    start: std::time::Instant,
    size: &str,
    status: u16,
    method: &axum::http::Method,
    path: &str,
) {
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        status,
        method,
        path
    );
}
