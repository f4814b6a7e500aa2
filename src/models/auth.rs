use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Credenciales capturadas del formulario en el momento del submit.
/// Nunca se persisten.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Campos del formulario tal como los espera /auth/token
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("username", self.username.as_str()), ("password", self.password.as_str())]
    }
}

// El password nunca debe acabar en un log
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Cuerpo de error del backend. `detail` suele ser texto, pero en errores
/// de validación llega como lista, por eso se guarda como Value.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Mensaje legible, solo si `detail` es un string no vacío
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|detail| detail.as_str())
            .filter(|detail| !detail.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClaimsError {
    #[error("token sin segmento de payload")]
    MissingPayload,
    #[error("payload base64 inválido: {0}")]
    Base64(String),
    #[error("payload JSON inválido: {0}")]
    Json(String),
    #[error("el payload no es un objeto JSON")]
    NotAnObject,
}

/// Payload del token leído SIN verificar la firma.
///
/// Solo sirve para mostrar el nombre de usuario en la cabecera del
/// dashboard. No prueba nada sobre la identidad: el backend es el único que
/// valida el token (y responde 401 si no es válido).
#[derive(Clone, PartialEq, Debug, Default)]
pub struct UnverifiedClaims {
    /// `sub` como texto: string tal cual, cualquier otro tipo serializado
    pub sub: String,
}

impl UnverifiedClaims {
    /// Decodifica el segmento central `header.payload.signature`
    pub fn decode(token: &str) -> Result<Self, ClaimsError> {
        let payload = token
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or(ClaimsError::MissingPayload)?;

        // Aceptar también alfabeto estándar y padding
        let normalized: String = payload
            .trim_end_matches('=')
            .chars()
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                other => other,
            })
            .collect();

        let bytes = URL_SAFE_NO_PAD
            .decode(normalized.as_bytes())
            .map_err(|e| ClaimsError::Base64(e.to_string()))?;

        let payload: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Json(e.to_string()))?;
        let claims = payload.as_object().ok_or(ClaimsError::NotAnObject)?;

        let sub = match claims.get("sub") {
            Some(serde_json::Value::String(sub)) => sub.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Ok(Self { sub })
    }
}

#[cfg(test)]
pub(crate) fn fake_token(payload_json: &str) -> String {
    format!(
        "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.{}.c2lnbmF0dXJl",
        URL_SAFE_NO_PAD.encode(payload_json)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reads_sub() {
        let token = fake_token(r#"{"sub":"alice","exp":1700000000}"#);
        let claims = UnverifiedClaims::decode(&token).unwrap();
        assert_eq!(claims.sub, "alice");
    }

    #[test]
    fn test_decode_ignores_claim_types() {
        let fractional_exp = fake_token(r#"{"sub":"alice","exp":1700000000.5}"#);
        assert_eq!(UnverifiedClaims::decode(&fractional_exp).unwrap().sub, "alice");

        let numeric_sub = fake_token(r#"{"sub":42,"exp":1.7e9}"#);
        assert_eq!(UnverifiedClaims::decode(&numeric_sub).unwrap().sub, "42");

        let no_sub = fake_token(r#"{"exp":"tomorrow"}"#);
        assert_eq!(UnverifiedClaims::decode(&no_sub).unwrap().sub, "");
    }

    #[test]
    fn test_decode_tolerates_padding() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"bob"}"#);
        assert!(payload.ends_with('='));
        let token = format!("h.{}.s", payload);
        assert_eq!(UnverifiedClaims::decode(&token).unwrap().sub, "bob");
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        assert_eq!(
            UnverifiedClaims::decode("not-a-token"),
            Err(ClaimsError::MissingPayload)
        );
        assert!(matches!(
            UnverifiedClaims::decode("a.!!!.c"),
            Err(ClaimsError::Base64(_))
        ));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(
            UnverifiedClaims::decode(&not_json),
            Err(ClaimsError::Json(_))
        ));
        let array = fake_token(r#"["alice"]"#);
        assert_eq!(UnverifiedClaims::decode(&array), Err(ClaimsError::NotAnObject));
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.message(), Some("Invalid credentials"));

        let validation: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","username"]}]}"#).unwrap();
        assert_eq!(validation.message(), None);

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message(), None);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials::new("alice", "hunter2");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("hunter2"));
        assert_eq!(
            credentials.form_fields(),
            [("username", "alice"), ("password", "hunter2")]
        );
    }
}
