// ============================================================================
// HTTP TRANSPORT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Los servicios hablan con el backend a través de `HttpTransport`; en el
// navegador la implementación es gloo-net, en tests un transporte guionizado.
// ============================================================================

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config::{AppConfig, CONFIG};

/// Respuesta ya leída: status + cuerpo en texto
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// La petición no produjo respuesta (red caída, CORS, body ilegible...)
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Network error: {0}")]
pub struct TransportError(pub String);

impl From<gloo_net::Error> for TransportError {
    fn from(e: gloo_net::Error) -> Self {
        TransportError(e.to_string())
    }
}

impl From<JsValue> for TransportError {
    fn from(e: JsValue) -> Self {
        TransportError(format!("{:?}", e))
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    /// POST con cuerpo FormData
    async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError>;

    /// GET con `Authorization: Bearer <token>`
    async fn get_with_bearer(
        &self,
        path: &str,
        token: &str,
    ) -> Result<HttpResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for Rc<T> {
    async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        (**self).post_form(path, fields).await
    }

    async fn get_with_bearer(
        &self,
        path: &str,
        token: &str,
    ) -> Result<HttpResponse, TransportError> {
        (**self).get_with_bearer(path, token).await
    }
}

/// Transporte del navegador (fetch vía gloo-net)
#[derive(Clone)]
pub struct GlooTransport {
    config: AppConfig,
}

impl GlooTransport {
    pub fn new() -> Self {
        Self::with_config(CONFIG.clone())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    async fn read(response: Response) -> Result<HttpResponse, TransportError> {
        let status = response.status();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        let form = FormData::new()?;
        for (name, value) in fields {
            form.append_with_str(name, value)?;
        }

        let response = Request::post(&self.url(path)).body(form)?.send().await?;
        Self::read(response).await
    }

    async fn get_with_bearer(
        &self,
        path: &str,
        token: &str,
    ) -> Result<HttpResponse, TransportError> {
        let response = Request::get(&self.url(path))
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await?;
        Self::read(response).await
    }
}

#[cfg(test)]
pub mod testing {
    //! Transporte guionizado para tests nativos

    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub path: String,
        pub bearer: Option<String>,
        pub fields: Vec<(String, String)>,
    }

    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: RefCell<HashMap<String, Result<HttpResponse, TransportError>>>,
        requests: RefCell<Vec<RecordedRequest>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn respond(&self, path: &str, status: u16, body: &str) {
            self.responses
                .borrow_mut()
                .insert(path.to_string(), Ok(HttpResponse::new(status, body)));
        }

        pub fn fail(&self, path: &str) {
            self.responses.borrow_mut().insert(
                path.to_string(),
                Err(TransportError("connection refused".to_string())),
            );
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.borrow().clone()
        }

        fn answer(&self, path: &str) -> Result<HttpResponse, TransportError> {
            self.responses
                .borrow()
                .get(path)
                .cloned()
                .unwrap_or_else(|| Err(TransportError(format!("sin respuesta para {}", path))))
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn post_form(
            &self,
            path: &str,
            fields: &[(&str, &str)],
        ) -> Result<HttpResponse, TransportError> {
            self.requests.borrow_mut().push(RecordedRequest {
                method: "POST",
                path: path.to_string(),
                bearer: None,
                fields: fields
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect(),
            });
            self.answer(path)
        }

        async fn get_with_bearer(
            &self,
            path: &str,
            token: &str,
        ) -> Result<HttpResponse, TransportError> {
            self.requests.borrow_mut().push(RecordedRequest {
                method: "GET",
                path: path.to_string(),
                bearer: Some(token.to_string()),
                fields: Vec::new(),
            });
            self.answer(path)
        }
    }
}
