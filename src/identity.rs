//! Display-only projection of the claims embedded in a session token
//!
//! Nothing here checks a signature. The result describes what the token *claims*,
//! never who the caller *is*; use `verify_auth` on the server for that.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Serialize};

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// User claims carried in the token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtUserData {
    pub identity: String,
    #[serde(rename = "rolName")]
    pub rol_name: String,
    pub email: String,
    pub name: String,
    pub status: String,
}

impl JwtUserData {
    /// Decode the payload segment of `token` without verifying it
    ///
    /// Returns `None` for anything that is not `<header>.<payload>[...]` with a base64
    /// payload holding a JSON object with all five claims.
    pub fn decode_unverified(token: &str) -> Option<Self> {
        let payload = token.split('.').nth(1)?;
        let bytes = URL_SAFE_LENIENT
            .decode(payload)
            .or_else(|_| STANDARD_LENIENT.decode(payload))
            .ok()?;

        serde_json::from_slice(&bytes).ok()
    }
}
