use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extractor exposing the request headers as a flat list of alternating
/// name/value strings, in arrival order.
#[derive(Debug, Clone)]
pub struct RawHeaders(pub Vec<String>);

impl<S> FromRequestParts<S> for RawHeaders
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut headers = Vec::with_capacity(parts.headers.len() * 2);
        for (name, value) in parts.headers.iter() {
            headers.push(name.as_str().to_string());
            headers.push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        Ok(RawHeaders(headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_raw_headers_alternate_name_and_value() {
        let request = Request::builder()
            .uri("/")
            .header("host", "localhost")
            .header("accept", "*/*")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let RawHeaders(headers) = RawHeaders::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(
            headers,
            vec!["host", "localhost", "accept", "*/*"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }
}
