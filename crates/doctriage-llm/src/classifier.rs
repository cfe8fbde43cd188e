//! Document classification over a chat LLM.

use std::sync::Arc;

use tracing::debug;

use doctriage_core::error::{CoreError, CoreResult};
use doctriage_core::traits::{ChatMessage, GenerationOptions, Llm};

/// Fixed instruction given to the model. Asks for a JSON object with the
/// fecha/documento/clasificacion/justificacion fields; the schema is not
/// enforced on the response.
const SYSTEM_PROMPT: &str = "Eres un clasificador de documentos. \
Clasifica el texto en categorías como 'Contrato', 'Factura', 'Queja/Reclamo', 'Carta', etc. \
Devuelve la salida en formato JSON con los campos: fecha, documento, clasificacion, justificacion.";

/// Sends extracted document text to the model and returns its raw
/// response. The response is expected to be JSON but is returned as-is;
/// nothing here parses or validates it.
pub struct Classifier {
    llm: Arc<dyn Llm>,
}

impl Classifier {
    /// Create a classifier over an LLM provider.
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }

    /// Classify the given document text.
    ///
    /// Temperature is pinned to 0.0 to keep the output as stable as the
    /// endpoint allows.
    pub async fn classify(&self, text: &str) -> CoreResult<String> {
        debug!(
            model = self.llm.model_name(),
            chars = text.len(),
            "classifying document text"
        );

        let messages = [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(text)];
        let options = GenerationOptions {
            temperature: Some(0.0),
            ..Default::default()
        };

        let response = self.llm.generate(&messages, Some(options)).await?;
        response
            .content
            .ok_or_else(|| CoreError::llm("No response content returned"))
    }
}
