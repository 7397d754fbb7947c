use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::Result;

// Bearer credential returned by the login endpoint. The string is opaque to
// this client; it is only persisted and replayed in Authorization headers.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    // Mask the credential in logs.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Token(****)")
    }
}

/// Persists the bearer token across invocations in a single file.
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        preferred_data_dir().join("mvcat").join("token")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Option<Token>> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Token::new(raw)))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn persist(&self, token: &Token) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, token.as_str()).await?;
        restrict_permissions(&self.path).await?;
        Ok(())
    }

    pub async fn forget(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let perms = std::fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

fn preferred_data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| fallback_home().join(".local/share"))
}

fn fallback_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let store = TokenStore::new(dir.path().join("token"));

            assert!(store.load().await.unwrap().is_none());

            let token = Token::new("tok1");
            store.persist(&token).await.unwrap();
            assert_eq!(store.load().await.unwrap(), Some(token));

            store.forget().await.unwrap();
            assert!(store.load().await.unwrap().is_none());

            // Forget is idempotent.
            store.forget().await.unwrap();
        });
    }

    #[test]
    fn persist_creates_parent_dirs() {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let store = TokenStore::new(dir.path().join("nested/dir/token"));

            store.persist(&Token::new("tok1")).await.unwrap();
            assert!(store.load().await.unwrap().is_some());
        });
    }

    #[cfg(unix)]
    #[test]
    fn persist_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        tokio_test::block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let store = TokenStore::new(dir.path().join("token"));

            store.persist(&Token::new("tok1")).await.unwrap();

            let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        });
    }

    #[test]
    fn debug_masks_credential() {
        assert_eq!(format!("{:?}", Token::new("secret")), "Token(****)");
    }
}
