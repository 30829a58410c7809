use super::{lang, models, session};
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, HeaderValue, StatusCode},
};
use regex::Regex;

pub struct AuthenticatedUser(pub models::User);

fn redirect_to_welcome() -> (StatusCode, HeaderMap) {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Location",
        HeaderValue::from_str("/welcome").expect("that is ascii, I promise"),
    );

    (StatusCode::FOUND, headers)
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie = headers.get("Cookie")?.to_str().unwrap_or("");
    let re = Regex::new(&format!(r"{name}=([^;]*)")).unwrap();
    let captures = re.captures(cookie)?;
    Some(captures[1].to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, HeaderMap);

    async fn from_request_parts(
        req: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let token = match cookie_value(&req.headers, "session") {
            Some(t) => t,
            None => return Err(redirect_to_welcome()),
        };

        if let Ok(session) = session::deserialize_session(&token) {
            Ok(AuthenticatedUser(session.user))
        } else {
            Err(redirect_to_welcome())
        }
    }
}

/// The viewer's display language; resolved per-request from the `lang`
/// cookie, falling back to the `Accept-Language` header, falling back to
/// English. Never rejects.
pub struct Lang(pub &'static str);

#[async_trait]
impl<S> FromRequestParts<S> for Lang
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        req: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        if let Some(code) = cookie_value(&req.headers, "lang") {
            if let Some(l) = lang::by_code(&code) {
                return Ok(Lang(l.code));
            }
        }
        if let Some(accept) = req.headers.get("Accept-Language") {
            if let Some(l) = match_accept_language(accept.to_str().unwrap_or(""))
            {
                return Ok(Lang(l));
            }
        }

        Ok(Lang(lang::DEFAULT))
    }
}

/// Pick the first supported language out of an `Accept-Language` header,
/// ignoring quality weights ("tr-TR,tr;q=0.9,en;q=0.8" matches "tr").
fn match_accept_language(header: &str) -> Option<&'static str> {
    for entry in header.split(',') {
        let code = entry
            .trim()
            .split(|c| c == '-' || c == ';')
            .next()
            .unwrap_or("");
        if let Some(l) = lang::by_code(code) {
            return Some(l.code);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_accept_language() {
        assert_eq!(match_accept_language("tr-TR,tr;q=0.9,en;q=0.8"), Some("tr"));
        assert_eq!(match_accept_language("da, en-gb;q=0.8"), Some("en"));
        assert_eq!(match_accept_language("zh-CN"), None);
        assert_eq!(match_accept_language(""), None);
    }

    #[test]
    fn test_cookie_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Cookie",
            HeaderValue::from_static("lang=tr; session=abc123"),
        );
        assert_eq!(cookie_value(&headers, "lang"), Some("tr".to_string()));
        assert_eq!(
            cookie_value(&headers, "session"),
            Some("abc123".to_string())
        );
        assert_eq!(cookie_value(&headers, "theme"), None);
    }
}
