//! Where the encrypted credential blob is loaded from

use std::path::PathBuf;

use crate::config::CredentialsConfig;
use crate::error::{ConfigError, CredentialError};

/// Supplies the base64 ciphertext of the credential blob
pub trait SecretSource {
    fn ciphertext(&self) -> Result<String, CredentialError>;
}

/// Ciphertext held in memory (usually straight from the config file)
#[derive(Debug, Clone)]
pub struct InlineSecret(pub String);

impl SecretSource for InlineSecret {
    fn ciphertext(&self) -> Result<String, CredentialError> {
        Ok(self.0.clone())
    }
}

/// Ciphertext stored in its own file
#[derive(Debug, Clone)]
pub struct FileSecret(pub PathBuf);

impl SecretSource for FileSecret {
    fn ciphertext(&self) -> Result<String, CredentialError> {
        std::fs::read_to_string(&self.0)
            .map(|s| s.trim().to_string())
            .map_err(|e| CredentialError::Secret(format!("{}: {}", self.0.display(), e)))
    }
}

/// Pick the secret source named by the configuration, inline value first
pub fn from_config(config: &CredentialsConfig) -> Result<Box<dyn SecretSource>, ConfigError> {
    if let Some(ref ciphertext) = config.ciphertext {
        return Ok(Box::new(InlineSecret(ciphertext.clone())));
    }
    if let Some(ref path) = config.ciphertext_file {
        return Ok(Box::new(FileSecret(path.clone())));
    }
    Err(ConfigError::MissingField(
        "credentials.ciphertext or credentials.ciphertext_file".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_preferred() {
        let config = CredentialsConfig {
            ciphertext: Some("inline".to_string()),
            ciphertext_file: Some("/nonexistent".into()),
            path: None,
        };
        let source = from_config(&config).unwrap();
        assert_eq!(source.ciphertext().unwrap(), "inline");
    }

    #[test]
    fn test_file_secret() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.b64");
        std::fs::write(&path, "  abc==\n").unwrap();

        let source = FileSecret(path);
        assert_eq!(source.ciphertext().unwrap(), "abc==");
    }

    #[test]
    fn test_missing_file_secret() {
        let source = FileSecret("/nonexistent/blob.b64".into());
        assert!(matches!(source.ciphertext(), Err(CredentialError::Secret(_))));
    }

    #[test]
    fn test_no_source_configured() {
        let result = from_config(&CredentialsConfig::default());
        assert!(matches!(result, Err(ConfigError::MissingField(_))));
    }
}
