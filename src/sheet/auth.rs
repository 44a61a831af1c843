// src/sheet/auth.rs
//! Access tokens for the Sheets API.
//!
//! Unattended runs sign in with a service-account key file; a token minted
//! elsewhere can be passed instead and is used as-is.

use std::path::{Path, PathBuf};

use crate::config::consts::SHEETS_SCOPE;
use crate::error::{Error, Result};

#[derive(Clone, PartialEq, Eq)]
pub enum SheetAuth {
    /// Pre-minted bearer token.
    Token(String),
    /// Service-account JSON key; a token is minted per run.
    ServiceAccount(PathBuf),
}

impl std::fmt::Debug for SheetAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetAuth::Token(_) => f.write_str("Token(***)"),
            SheetAuth::ServiceAccount(p) => f.debug_tuple("ServiceAccount").field(p).finish(),
        }
    }
}

impl SheetAuth {
    pub fn access_token(&self) -> Result<String> {
        match self {
            SheetAuth::Token(t) if t.trim().is_empty() => Err(Error::Auth(s!("empty access token"))),
            SheetAuth::Token(t) => Ok(t.trim().to_string()),
            SheetAuth::ServiceAccount(key_file) => service_account_token(key_file),
        }
    }
}

/// Exchange a service-account key for a spreadsheets-scoped access token.
/// The OAuth client is async, so it runs on a throwaway single-thread runtime.
pub fn service_account_token(key_file: &Path) -> Result<String> {
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let token = rt.block_on(async {
        let key = yup_oauth2::read_service_account_key(key_file)
            .await
            .map_err(|e| Error::Auth(format!("{}: {e}", key_file.display())))?;
        let auth = yup_oauth2::ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| Error::Auth(e.to_string()))?;
        let token = auth
            .token(&[SHEETS_SCOPE])
            .await
            .map_err(|e| Error::Auth(e.to_string()))?;
        token
            .token()
            .map(str::to_string)
            .ok_or_else(|| Error::Auth(s!("service account returned no access token")))
    })?;
    logf!("Sheets token minted from {}", key_file.display());
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_token_is_used_as_is() {
        assert_eq!(SheetAuth::Token(s!(" ya29.abc \n")).access_token().unwrap(), "ya29.abc");
        assert!(matches!(SheetAuth::Token(s!("  ")).access_token(), Err(Error::Auth(_))));
    }

    #[test]
    fn debug_hides_token() {
        let shown = format!("{:?}", SheetAuth::Token(s!("secret")));
        assert!(!shown.contains("secret"));
    }

    #[test]
    fn missing_key_file_fails_before_any_request() {
        let path = std::env::temp_dir().join("ambi_no_such_service_account.json");
        let _ = std::fs::remove_file(&path);
        let err = SheetAuth::ServiceAccount(path).access_token().unwrap_err();
        assert!(matches!(err, Error::Auth(ref m) if m.contains("ambi_no_such_service_account.json")));
    }

    #[test]
    fn malformed_key_file_is_an_auth_error() {
        let path = std::env::temp_dir().join("ambi_bad_service_account.json");
        std::fs::write(&path, "{\"type\": \"service_account\"}").unwrap();
        let err = service_account_token(&path).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }
}
