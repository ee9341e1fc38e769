//! Argon2 hashing for account passwords. Plain passwords never reach the store.

use crate::error::AppError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use password_hash::rand_core::OsRng;

pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Credential(e.to_string()))
}

pub fn verify_password(plain: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
        .unwrap_or(false)
}

/// Replace a supplied password with its hash on the blocking pool. Empty stays empty.
pub async fn seal(mut account: crate::model::Account) -> Result<crate::model::Account, AppError> {
    if account.password.is_empty() {
        return Ok(account);
    }
    let plain = std::mem::take(&mut account.password);
    account.password = tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| AppError::Credential(e.to_string()))??;
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Account;

    #[test]
    fn hash_verifies_and_is_salted() {
        let a = hash_password("x").unwrap();
        let b = hash_password("x").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
        assert!(verify_password("x", &a));
        assert!(!verify_password("y", &a));
        assert!(!verify_password("x", "not a hash"));
    }

    #[tokio::test]
    async fn seal_leaves_empty_password_alone() {
        let sealed = seal(Account::default()).await.unwrap();
        assert!(sealed.password.is_empty());
        let sealed = seal(Account {
            password: "pw".into(),
            ..Default::default()
        })
        .await
        .unwrap();
        assert!(verify_password("pw", &sealed.password));
    }
}
