use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use quiz_core::model::{Question, QuestionDraft, QuizSetup};

use crate::error::QuestionSourceError;

/// Produces a question sequence for a quiz setup.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Generate exactly `setup.question_count()` validated questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when generation fails or the output does
    /// not validate.
    async fn generate(&self, setup: &QuizSetup) -> Result<Vec<Question>, QuestionSourceError>;
}

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AiConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("QUIZ_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("QUIZ_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("QUIZ_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Question source backed by an OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct AiQuestionSource {
    client: Client,
    config: Option<AiConfig>,
}

impl AiQuestionSource {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn complete(&self, prompt: &str) -> Result<String, QuestionSourceError> {
        let config = self.config.as_ref().ok_or(QuestionSourceError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(QuestionSourceError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl QuestionSource for AiQuestionSource {
    async fn generate(&self, setup: &QuizSetup) -> Result<Vec<Question>, QuestionSourceError> {
        let raw = self.complete(&build_prompt(setup)).await?;
        parse_questions(&raw, setup.question_count())
    }
}

fn build_prompt(setup: &QuizSetup) -> String {
    format!(
        "Generate {count} multiple-choice questions about \"{topic}\" at {difficulty} \
         difficulty. Respond with only a JSON array; each element must be an object with \
         \"prompt\" (string), \"choices\" (array of exactly 4 distinct strings) and \
         \"answer\" (string, one of the choices, copied verbatim). No surrounding prose.",
        count = setup.question_count(),
        topic = setup.topic(),
        difficulty = setup.difficulty(),
    )
}

/// Parse and validate a model response into the exact expected count.
///
/// # Errors
///
/// Returns `QuestionSourceError::Malformed` when the payload is not the
/// expected JSON shape or a question fails validation, and `WrongCount` when
/// the array length differs from `expected`.
pub fn parse_questions(raw: &str, expected: u32) -> Result<Vec<Question>, QuestionSourceError> {
    let stripped = strip_code_fences(raw);
    let drafts: Vec<QuestionDraft> = serde_json::from_str(stripped)
        .map_err(|e| QuestionSourceError::Malformed(e.to_string()))?;

    if drafts.len() != expected as usize {
        return Err(QuestionSourceError::WrongCount {
            expected,
            got: drafts.len(),
        });
    }

    drafts
        .into_iter()
        .map(|draft| {
            draft
                .validate()
                .map_err(|e| QuestionSourceError::Malformed(e.to_string()))
        })
        .collect()
}

/// Models often wrap JSON in a markdown fence despite instructions.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
