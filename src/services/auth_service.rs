use thiserror::Error;

use crate::models::{Credentials, ErrorBody, TokenResponse};
use crate::services::http::HttpTransport;
use crate::utils::{LOGIN_FAILED_FALLBACK, LOGIN_GENERIC_ERROR, TOKEN_ENDPOINT};

/// Errores de login. `Display` es exactamente el texto que ve el usuario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// Credenciales rechazadas o error reportado por el servidor
    #[error("{0}")]
    LoginFailed(String),
    /// Sin respuesta, o respuesta de éxito ilegible. El detalle solo va al log.
    #[error("{}", LOGIN_GENERIC_ERROR)]
    Network(String),
}

pub struct AuthClient<T: HttpTransport> {
    transport: T,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Pide un token a /auth/token. No persiste nada.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        log::info!("🔐 [AUTH] Solicitando token para usuario: {}", credentials.username);

        let response = self
            .transport
            .post_form(TOKEN_ENDPOINT, &credentials.form_fields())
            .await
            .map_err(|e| {
                log::error!("❌ [AUTH] {}", e);
                AuthError::Network(e.to_string())
            })?;

        if response.ok() {
            let token = serde_json::from_str::<TokenResponse>(&response.body).map_err(|e| {
                log::error!("❌ [AUTH] Respuesta de token ilegible: {}", e);
                AuthError::Network(format!("Parse error: {}", e))
            })?;
            log::info!("✅ [AUTH] Token recibido para {}", credentials.username);
            return Ok(token.access_token);
        }

        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message().map(str::to_string))
            .unwrap_or_else(|| LOGIN_FAILED_FALLBACK.to_string());

        log::warn!("⚠️ [AUTH] Login rechazado (HTTP {}): {}", response.status, message);
        Err(AuthError::LoginFailed(message))
    }
}
