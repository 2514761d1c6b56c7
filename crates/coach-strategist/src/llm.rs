//! The Qwen (`DashScope`) LLM backend.
//!
//! Talks to the `DashScope` text-generation endpoint over HTTP via
//! `reqwest`. The backend does not care which Qwen model answers -- it
//! sends a rendered prompt and expects text back; parsing the text into
//! tips is the `parse` module's job.

use crate::error::StrategistError;
use crate::prompt::RenderedPrompt;

/// Sampling temperature for analysis calls.
const TEMPERATURE: f64 = 0.7;

/// Response token limit for analysis calls.
const MAX_TOKENS: u32 = 500;

/// Configuration for the Qwen backend.
#[derive(Debug, Clone)]
pub struct QwenConfig {
    /// Base API URL (e.g. `https://dashscope.aliyuncs.com/api/v1`).
    pub api_url: String,
    /// API key for bearer authentication.
    pub api_key: String,
    /// Model identifier (e.g. `qwen-max`).
    pub model: String,
}

/// Backend for the `DashScope` text-generation API.
///
/// Sends requests to `{api_url}/services/aigc/text-generation/generation`
/// and extracts the response text from `output.text`.
pub struct QwenBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl QwenBackend {
    /// Create a new Qwen backend.
    pub fn new(config: &QwenConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// The configured model identifier, for logging.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a prompt and return the response text.
    ///
    /// # Errors
    ///
    /// Returns [`StrategistError::Backend`] if the HTTP call fails, the
    /// API answers with a non-success status, or the response shape is
    /// missing the text field.
    pub async fn complete(&self, prompt: &RenderedPrompt) -> Result<String, StrategistError> {
        let url = format!(
            "{}/services/aigc/text-generation/generation",
            self.api_url
        );

        let body = serde_json::json!({
            "model": self.model,
            "input": {
                "messages": [
                    {"role": "system", "content": prompt.system},
                    {"role": "user", "content": prompt.user}
                ]
            },
            "parameters": {"temperature": TEMPERATURE, "max_tokens": MAX_TOKENS}
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| StrategistError::Backend(format!("Qwen request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(StrategistError::Backend(format!(
                "Qwen returned {status}: {error_body}"
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| StrategistError::Backend(format!("Qwen response parse failed: {e}")))?;

        extract_qwen_content(&json)
    }
}

/// Extract the text content from a `DashScope` generation response.
fn extract_qwen_content(json: &serde_json::Value) -> Result<String, StrategistError> {
    json.get("output")
        .and_then(|o| o.get("text"))
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| {
            StrategistError::Backend("Qwen response missing output.text".to_owned())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_content_valid() {
        let json = serde_json::json!({
            "output": {
                "text": "RECOMMENDATION 1:\nType: farming\nAdvice: stack the ancients"
            }
        });
        let result = extract_qwen_content(&json);
        assert!(result.is_ok());
        assert!(result.unwrap_or_default().contains("ancients"));
    }

    #[test]
    fn extract_content_missing_output() {
        let json = serde_json::json!({"code": "Throttling.RateQuota"});
        assert!(extract_qwen_content(&json).is_err());
    }

    #[test]
    fn extract_content_non_string_text() {
        let json = serde_json::json!({"output": {"text": 42}});
        assert!(extract_qwen_content(&json).is_err());
    }

    #[test]
    fn backend_keeps_its_model_name() {
        let backend = QwenBackend::new(&QwenConfig {
            api_url: "https://dashscope.aliyuncs.com/api/v1".to_owned(),
            api_key: "test".to_owned(),
            model: "qwen-max".to_owned(),
        });
        assert_eq!(backend.model(), "qwen-max");
    }
}
