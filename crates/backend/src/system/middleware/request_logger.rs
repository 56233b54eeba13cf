use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль:
/// - Время (локальное)
/// - Длительность (ms)
/// - Размер ответа (форматированный)
/// - Статус код
/// - Метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("{} {}: failed to read response body: {}", method, path, e);
            println!(
                "{}",
                format_line(start.elapsed(), None, parts.status, &method, &path)
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    println!(
        "{}",
        format_line(start.elapsed(), Some(bytes.len()), parts.status, &method, &path)
    );

    Response::from_parts(parts, Body::from(bytes))
}

/// Голубой цвет времени для 2xx, коричневый для остальных
fn format_line(
    duration: Duration,
    size: Option<usize>,
    status: StatusCode,
    method: &Method,
    path: &str,
) -> String {
    let color_code = if status.is_success() { "36" } else { "33" };
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        duration.as_millis(),
        size,
        status.as_u16(),
        method.as_str(),
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(
            Duration::from_millis(12),
            Some(1234),
            StatusCode::CREATED,
            &Method::POST,
            "/api/claims",
        );
        assert!(line.starts_with("\x1b[36m"));
        assert!(line.contains("   12ms"));
        assert!(line.contains("1,234"));
        assert!(line.ends_with("201   POST /api/claims"));
    }

    #[test]
    fn test_format_line_unreadable_body() {
        let line = format_line(
            Duration::ZERO,
            None,
            StatusCode::NOT_FOUND,
            &Method::GET,
            "/api/claims/9",
        );
        assert!(line.starts_with("\x1b[33m"));
        assert!(line.contains("error"));
        assert!(line.ends_with("404    GET /api/claims/9"));
    }
}
