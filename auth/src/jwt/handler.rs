use base64::prelude::*;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;

/// Algorithms accepted on decode. All of them are HMAC, so the key is always
/// the caller's shared secret.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT token handler for encoding and decoding tokens with one HMAC secret.
///
/// Signs with HS256. Decoding accepts any HMAC-family algorithm and rejects
/// everything else before the signature is looked at.
#[derive(Clone)]
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validation,
        }
    }

    /// Require the `iss` claim to equal `issuer`.
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self.validation
            .set_required_spec_claims(&["exp", "nbf", "iss"]);
        self
    }

    /// Require the `aud` claim to equal `audience` when one is given.
    pub fn with_audience(mut self, audience: Option<&str>) -> Self {
        if let Some(audience) = audience {
            self.validation.set_audience(&[audience]);
            self.validation.validate_aud = true;
        }
        self
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The header is inspected first: a token declaring a non-HMAC algorithm is
    /// rejected with `UnexpectedAlgorithm` naming that algorithm. Signature,
    /// `exp` and `nbf` are then checked with zero leeway.
    ///
    /// # Errors
    /// * `UnexpectedAlgorithm` - Header declares a non-HMAC algorithm
    /// * `DecodingFailed` - Token is structurally invalid
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `TokenExpired` / `TokenNotYetValid` - Temporal claims rejected
    /// * `InvalidClaims` / `MissingClaim` - Issuer, audience or required claims rejected
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        let header = decode_header(token).map_err(|e| match declared_algorithm(token) {
            Some(alg) if !is_hmac_name(&alg) => JwtError::UnexpectedAlgorithm(alg),
            _ => JwtError::DecodingFailed(e.to_string()),
        })?;

        if !HMAC_ALGORITHMS.contains(&header.alg) {
            return Err(JwtError::UnexpectedAlgorithm(format!("{:?}", header.alg)));
        }

        let token_data = decode::<T>(token, &self.decoding_key, &self.validation)?;

        Ok(token_data.claims)
    }
}

/// Raw `alg` value of the header, for algorithms jsonwebtoken cannot parse
/// (`none`, `HS1`, ...).
fn declared_algorithm(token: &str) -> Option<String> {
    let segment = token.split('.').next()?;
    let bytes = BASE64_URL_SAFE_NO_PAD.decode(segment).ok()?;
    let header: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    header.get("alg")?.as_str().map(str::to_string)
}

fn is_hmac_name(alg: &str) -> bool {
    matches!(alg, "HS256" | "HS384" | "HS512")
}
