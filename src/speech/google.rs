//! Google Cloud Text-to-Speech client

use std::time::{Duration, Instant};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use parking_lot::Mutex;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::request::{ErrorResponse, SynthesisRequest, SynthesisResponse};
use super::Synthesizer;
use crate::config::SpeechConfig;
use crate::credentials::{Credentials, ServiceAccountKey};
use crate::error::SpeechError;
use crate::text::Sanitizer;

const TOKEN_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const JWT_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Tokens are refreshed this long before they expire
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    ASSERTION_LIFETIME_SECS as u64
}

struct AccessToken {
    value: String,
    refresh_at: Instant,
}

/// Speech requester backed by the `text:synthesize` REST endpoint
pub struct GoogleTts {
    config: SpeechConfig,
    sanitizer: Sanitizer,
    credentials: Option<Credentials>,
    client: Client,
    token: Mutex<Option<AccessToken>>,
}

impl GoogleTts {
    /// Create a client; synthesis fails with `NotProvisioned` while `credentials` is None
    pub fn new(
        config: SpeechConfig,
        sanitizer: Sanitizer,
        credentials: Option<Credentials>,
    ) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        Ok(Self {
            config,
            sanitizer,
            credentials,
            client,
            token: Mutex::new(None),
        })
    }

    /// Build the request body for `text`, sanitized
    pub fn build_request(&self, text: &str) -> SynthesisRequest {
        SynthesisRequest::new(self.sanitizer.apply(text), &self.config)
    }

    fn credentials(&self) -> Result<&Credentials, SpeechError> {
        match self.credentials {
            Some(ref credentials) if credentials.exists() => Ok(credentials),
            _ => Err(SpeechError::NotProvisioned),
        }
    }

    fn access_token(&self, credentials: &Credentials) -> Result<String, SpeechError> {
        let mut cached = self.token.lock();
        if let Some(ref token) = *cached {
            if Instant::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        let account = credentials
            .service_account()
            .map_err(|e| SpeechError::Auth(e.to_string()))?;
        let token = self.fetch_token(&account)?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    fn fetch_token(&self, account: &ServiceAccountKey) -> Result<AccessToken, SpeechError> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            iss: &account.client_email,
            scope: TOKEN_SCOPE,
            aud: &account.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = account.private_key_id.clone();

        let key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())
            .map_err(|e| SpeechError::Auth(format!("Invalid private key: {}", e)))?;
        let assertion = jsonwebtoken::encode(&header, &claims, &key)
            .map_err(|e| SpeechError::Auth(format!("Failed to sign assertion: {}", e)))?;

        debug!("Requesting access token from {}", account.token_uri);
        let response = self
            .client
            .post(&account.token_uri)
            .form(&[("grant_type", JWT_GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SpeechError::Auth(format!("Token exchange returned {}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .map_err(|e| SpeechError::Auth(format!("Malformed token response: {}", e)))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_REFRESH_MARGIN);
        info!("Obtained access token for {}", account.client_email);

        Ok(AccessToken {
            value: token.access_token,
            refresh_at: Instant::now() + lifetime,
        })
    }
}

impl Synthesizer for GoogleTts {
    fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let credentials = self.credentials()?;
        let request = self.build_request(text);
        let token = self.access_token(credentials)?;

        debug!("Synthesizing: {:?}", request.input.text);
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(token)
            .json(&request)
            .send()
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| SpeechError::Network(e.to_string()))?;
        let audio = parse_synthesis_response(status, &body)?;

        debug!("Received {} bytes of audio", audio.len());
        Ok(audio)
    }
}

/// Map a `text:synthesize` reply to decoded audio bytes
///
/// Non-2xx statuses become `Service`, with the message taken from Google's
/// error envelope when the body has one and the raw body otherwise.
fn parse_synthesis_response(status: u16, body: &str) -> Result<Vec<u8>, SpeechError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string());
        return Err(SpeechError::Service { status, message });
    }

    let response: SynthesisResponse =
        serde_json::from_str(body).map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

    BASE64
        .decode(response.audio_content)
        .map_err(|e| SpeechError::InvalidResponse(format!("Invalid audio content: {}", e)))
}
