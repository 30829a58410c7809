use super::{config, crypto, models::User};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

/// HMAC-secured session string, signed by $SESSION_SECRET
///
/// Note: since this guy is stored in a browser cookie, it's important to
/// ensure it does not get too large.
#[derive(Debug, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub created_at: u64,
}

impl Session {
    pub fn new(user: User) -> Self {
        let created_at = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("now is after the epoch")
            .as_secs();
        Self { user, created_at }
    }

    fn is_expired(&self) -> bool {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("now is after the epoch")
            .as_secs();
        now.saturating_sub(self.created_at) > config::SESSION_TTL_SECS
    }
}

pub fn serialize_session(session: &Session) -> String {
    let json_bytes = serde_json::to_string(&session)
        .expect("session can be JSON serialized");
    let b64 = general_purpose::STANDARD_NO_PAD.encode(json_bytes);
    let raw_digest = crypto::get_digest(&b64.clone().into_bytes());
    let digest = general_purpose::STANDARD_NO_PAD.encode(raw_digest);

    format!("{}:{}", b64, digest)
}

pub fn deserialize_session(cookie: &str) -> Result<Session, &'static str> {
    let parts: Vec<&str> = cookie.split(':').collect();
    if parts.len() != 2 {
        return Err("Invalid session");
    }
    let b64_json: Vec<u8> = parts[0].into();
    let digest: Vec<u8> =
        match general_purpose::STANDARD_NO_PAD.decode(parts[1]) {
            Ok(v) => v,
            Err(_) => {
                return Err("Cannot base64 decode the digest");
            }
        };

    if crypto::is_valid(&b64_json, &digest) {
        let json_string =
            match general_purpose::STANDARD_NO_PAD.decode(b64_json) {
                Ok(v) => v,
                Err(_) => {
                    return Err("Cannot base64 decode session string");
                }
            };

        match serde_json::from_slice::<Session>(&json_string) {
            Ok(v) if v.is_expired() => Err("Session has expired"),
            Ok(v) => Ok(v),
            Err(_) => Err("Cannot deserialize session JSON"),
        }
    } else {
        Err("Failed to validate session signature")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::env;
    use uuid::Uuid;

    fn get_session() -> Session {
        Session::new(User {
            id: Uuid::nil(),
            username: "jack".to_string(),
            email: "jack@jack.com".to_string(),
            role: Role::User,
            created_at: chrono::Utc::now(),
        })
    }

    #[test]
    fn test_round_trip() {
        env::set_var("SESSION_SECRET", "foo");

        let session = get_session();
        let cookie = serialize_session(&session);
        let result = deserialize_session(&cookie).expect("result");
        assert_eq!(result.user.id, session.user.id);
        assert_eq!(result.user.email, session.user.email);
        assert_eq!(result.created_at, session.created_at);
    }

    #[test]
    fn test_tampered_session_is_rejected() {
        env::set_var("SESSION_SECRET", "foo");

        let cookie = serialize_session(&get_session());
        let mut tampered = cookie.clone();
        tampered.insert(1, 'x');
        assert!(deserialize_session(&tampered).is_err());
        assert!(deserialize_session("no-colon-here").is_err());
    }

    #[test]
    fn test_expired_session_is_rejected() {
        env::set_var("SESSION_SECRET", "foo");

        let mut session = get_session();
        session.created_at -= crate::config::SESSION_TTL_SECS + 1;
        let cookie = serialize_session(&session);
        let err = deserialize_session(&cookie)
            .expect_err("stale session should not validate");
        assert_eq!(err, "Session has expired");
    }
}
