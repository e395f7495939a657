use reqwest::Client;
use std::error::Error;
use std::fmt;

use super::endpoints::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, DEEPSEEK_API_URL};

#[derive(Debug)]
pub enum ChefApiError {
    MissingApiKey,
    Network(reqwest::Error),
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    MalformedReply(serde_json::Error),
    EmptyReply,
}

impl fmt::Display for ChefApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChefApiError::MissingApiKey => {
                write!(f, "请先在设置中填写 DeepSeek API Key")
            }
            ChefApiError::Network(err) => write!(f, "网络请求失败: {}", err),
            ChefApiError::Api { status, message } => {
                write!(f, "DeepSeek API 错误 {}: {}", status, message)
            }
            ChefApiError::MalformedReply(_) => write!(f, "AI 返回格式异常，请重试"),
            ChefApiError::EmptyReply => write!(f, "DeepSeek API 未返回任何内容"),
        }
    }
}

impl Error for ChefApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChefApiError::Network(err) => Some(err),
            ChefApiError::MalformedReply(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ChefApiError {
    fn from(err: reqwest::Error) -> Self {
        ChefApiError::Network(err)
    }
}

impl ChefApiError {
    /// Message shown in the UI error slot. Server-provided messages win;
    /// everything else falls back to the caller's generic text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ChefApiError::Api { message, .. } if !message.is_empty() => message.clone(),
            ChefApiError::MalformedReply(_) => self.to_string(),
            ChefApiError::MissingApiKey => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Single-shot, non-streaming chat completion against the DeepSeek endpoint.
/// No retry and no timeout beyond what reqwest itself applies.
pub async fn call_chat_completion(
    api_key: &str,
    request: ChatCompletionRequest,
) -> Result<ChatCompletionResponse, ChefApiError> {
    if api_key.trim().is_empty() {
        return Err(ChefApiError::MissingApiKey);
    }

    let client = Client::new();
    let response = client
        .post(DEEPSEEK_API_URL)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await?;

    if response.status().is_success() {
        let chat_response = response.json::<ChatCompletionResponse>().await?;
        Ok(chat_response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .and_then(|e| e.message)
            .unwrap_or_else(|| "DeepSeek API 请求失败".to_string());
        Err(ChefApiError::Api { status, message })
    }
}
