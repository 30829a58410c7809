//! Salted password hashing. The salt is a random uuid; the digest is
//! SHA-256 over salt + password. Both are stored on the user row.

use anyhow::{bail, Result};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug)]
pub struct HashedPw {
    pub salt: String,
    pub digest: String,
}

fn digest_with_salt(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn hash_new(password: &str) -> HashedPw {
    let salt = Uuid::new_v4().simple().to_string();
    let digest = digest_with_salt(&salt, password);
    HashedPw { salt, digest }
}

pub fn check(password: &str, truth: &HashedPw) -> Result<()> {
    if digest_with_salt(&truth.salt, password) == truth.digest {
        Ok(())
    } else {
        bail!("wrong password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let hashed = hash_new("hunter2");
        assert!(check("hunter2", &hashed).is_ok());
        assert!(check("hunter3", &hashed).is_err());
    }

    #[test]
    fn test_same_password_different_salt() {
        let a = hash_new("hunter2");
        let b = hash_new("hunter2");
        assert_ne!(a.digest, b.digest);
    }
}
