//! Turns a list of [`NewsItem`]s into a model-written summary.

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};
use tracing::warn;

use crate::error::SummarizationFailure;
use crate::traits::ChatModel;
use crate::types::NewsItem;

pub const DEFAULT_MODEL: &str = "gpt-4-1106-preview";

pub const SYSTEM_PROMPT: &str = "Sen bir kripto para analisti olan MOAI'sin. Verilen coin verilerini ve açıklamaları analiz edip kısa ve öz bir özet çıkar. Teknik analiz ve önemli noktaları vurgula.";

const USER_PROMPT_PREFIX: &str = "Şu verileri analiz et ve özetle:\n\n";

pub const DISCLAIMER: &str = "\n\nBu sadece bilgilendirme amaçlıdır, yatırım tavsiyesi değildir.";

pub const NO_DATA_MESSAGE: &str = "Veri bulunamadı.";

pub const FAILURE_MESSAGE: &str = "Özet oluşturulurken bir hata oluştu.";

#[async_trait]
impl ChatModel for OpenAIClient {
    async fn complete(&self, model: &str, system: &str, user: &str) -> Result<String, OpenAIError> {
        let request = ChatRequest::new(model)
            .message(Message::system(system))
            .message(Message::user(user));

        Ok(self.chat_completion(request).await?.content)
    }
}

/// Render items as `Başlık / İçerik` blocks separated by blank lines.
pub fn render_prompt_body(items: &[NewsItem]) -> String {
    items
        .iter()
        .map(|item| format!("Başlık: {}\nİçerik: {}", item.title, item.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub struct TextSummarizer<M> {
    model: M,
    model_name: String,
}

impl<M: ChatModel> TextSummarizer<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            model_name: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Summary with the disclaimer appended, or the underlying failure.
    ///
    /// An empty input returns [`NO_DATA_MESSAGE`] without calling the model.
    pub async fn try_summarize(&self, items: &[NewsItem]) -> Result<String, SummarizationFailure> {
        if items.is_empty() {
            return Ok(NO_DATA_MESSAGE.to_string());
        }

        let user = format!("{}{}", USER_PROMPT_PREFIX, render_prompt_body(items));
        let reply = self
            .model
            .complete(&self.model_name, SYSTEM_PROMPT, &user)
            .await?;

        Ok(format!("{}{}", reply, DISCLAIMER))
    }

    /// Always returns displayable text; failures become [`FAILURE_MESSAGE`].
    pub async fn summarize(&self, items: &[NewsItem]) -> String {
        match self.try_summarize(items).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, model = %self.model_name, "Summary generation failed");
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}
