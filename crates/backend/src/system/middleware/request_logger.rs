use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов: длительность, размер, статус, метод, путь.
///
/// Если ответ несёт Content-Length (статика), тело не буферизуется.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let declared = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    if let Some(size) = declared {
        log_line(&method, &path, response.status().as_u16(), size, start);
        return response;
    }

    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            log_line(&method, &path, parts.status.as_u16(), bytes.len(), start);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} | body read failed: {}",
                method,
                path,
                parts.status.as_u16(),
                e
            );
            Response::from_parts(parts, Body::default())
        }
    }
}

fn log_line(
    method: &axum::http::Method,
    path: &str,
    status: u16,
    size: usize,
    start: std::time::Instant,
) {
    let ms = start.elapsed().as_millis();
    if status < 400 {
        tracing::info!("{:>5}ms | {:>9} | {} {:>6} {}", ms, format_size(size), status, method, path);
    } else {
        tracing::warn!("{:>5}ms | {:>9} | {} {:>6} {}", ms, format_size(size), status, method, path);
    }
}
