//! Custom Axum extractors and lenient JSON field decoding

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::{ApiError, PageError};

fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Numeric id from the path for API routes; anything else is a JSON 404
pub struct ApiId(pub i32);

impl<S> FromRequestParts<S> for ApiId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("path", parts.uri.path()))?;

        parse_id(&raw)
            .map(Self)
            .ok_or_else(|| ApiError::not_found("path", raw))
    }
}

/// Numeric id from the path for HTML routes; anything else is the 404 page
pub struct PageId(pub i32);

impl<S> FromRequestParts<S> for PageId
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| PageError::NotFound)?;

        parse_id(&raw).map(Self).ok_or(PageError::NotFound)
    }
}

/// JSON body whose rejections (missing body, wrong content type, wrong
/// field types) answer 422 in the API's error envelope
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Unprocessable {
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Integers that clients sometimes send as strings (`"3"`)
pub mod lenient_int {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    fn convert<E: de::Error>(value: IntOrString) -> Result<i32, E> {
        let wide = match value {
            IntOrString::Int(n) => n,
            IntOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s)))?,
        };
        i32::try_from(wide).map_err(|_| E::custom("integer out of range"))
    }

    pub fn required<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        convert(IntOrString::deserialize(deserializer)?)
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<IntOrString>::deserialize(deserializer)?
            .map(convert)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "lenient_int::required")]
        id: i32,
        #[serde(default, deserialize_with = "lenient_int::optional")]
        category: Option<i32>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let s: Sample = serde_json::from_str(r#"{"id": 3, "category": "5"}"#).unwrap();
        assert_eq!(s.id, 3);
        assert_eq!(s.category, Some(5));

        let s: Sample = serde_json::from_str(r#"{"id": "0"}"#).unwrap();
        assert_eq!(s.id, 0);
        assert_eq!(s.category, None);

        let s: Sample = serde_json::from_str(r#"{"id": 1, "category": null}"#).unwrap();
        assert_eq!(s.category, None);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(serde_json::from_str::<Sample>(r#"{"id": "science"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"id": 1.5}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"id": 99999999999}"#).is_err());
    }

    #[test]
    fn parses_path_ids() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
