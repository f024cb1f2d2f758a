//! Product-description generation backed by Gemini.

use thiserror::Error;

use crate::gemini::{self, GenerateContentRequest, GenerateContentResponse};

/// Fallback returned when no API credential is configured.
pub const MISSING_KEY_FALLBACK: &str =
    "Serviço de IA indisponível. Por favor, configure a chave da API.";

/// Fallback returned when the generation call fails.
pub const GENERATION_FAILED_FALLBACK: &str =
    "Não foi possível gerar a descrição. Tente novamente.";

/// Environment variable holding the Gemini API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Internal failure modes of the generation call. Never escapes
/// [`DescriptionGenerator::generate`]; mapped to fallback text there.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("response contained no usable text")]
    EmptyResponse,
}

/// Single-shot description generator.
///
/// One call per explicit user request; no retry, no caching, no cancellation.
/// The caller is free to discard an in-flight result.
#[derive(Debug, Clone)]
pub struct DescriptionGenerator {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl DescriptionGenerator {
    /// Read the credential from [`API_KEY_ENV`].
    ///
    /// A missing or empty credential is non-fatal: the generator is built
    /// disabled and every call degrades to [`MISSING_KEY_FALLBACK`].
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("{API_KEY_ENV} not set; description generation is disabled");
        }
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            client: reqwest::Client::new(),
        }
    }

    /// Generator with no credential; always answers with the fallback.
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Produce a short pt-BR description for a stock item.
    ///
    /// Always returns a string: real model output on success, fixed fallback
    /// text on missing configuration or on any failure of the call.
    pub async fn generate(&self, product_name: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return MISSING_KEY_FALLBACK.to_string();
        };

        match self.try_generate(api_key, product_name).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(product_name, error = %err, "description generation failed");
                GENERATION_FAILED_FALLBACK.to_string()
            }
        }
    }

    async fn try_generate(
        &self,
        api_key: &str,
        product_name: &str,
    ) -> Result<String, GenerationError> {
        let request = GenerateContentRequest::from_prompt(prompt_for(product_name));

        let response = self
            .client
            .post(gemini::endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::Status(response.status()));
        }

        let payload: GenerateContentResponse = response.json().await?;
        payload.text().ok_or(GenerationError::EmptyResponse)
    }
}

fn prompt_for(product_name: &str) -> String {
    format!(
        "Gere uma descrição concisa e útil para o item de estoque \"{product_name}\" \
         para uso em um restaurante ou bar. Mencione usos comuns e mantenha a \
         descrição com no máximo 40 palavras. Responda em Português do Brasil."
    )
}
