//! Chat reply pipeline: sensitive-topic check, then either the localized
//! deflection or a single model call.

use tracing::{debug, info};

use crate::interview::builder::{build, PromptRequest};
use crate::interview::filter::is_sensitive;
use crate::llm_client::{ModelClient, ModelError};
use crate::locale::{Locale, TemplateVars};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    /// True when the reply is the canned deflection and no model call was made.
    pub deflected: bool,
}

/// The model's text is returned verbatim. Model errors propagate; there is no
/// retry and no fallback reply.
pub async fn reply(
    message: &str,
    locale: Locale,
    vars: TemplateVars<'_>,
    model: &dyn ModelClient,
) -> Result<AssistantReply, ModelError> {
    if is_sensitive(message) {
        info!("Deflecting sensitive chat message");
        return Ok(AssistantReply {
            text: build(locale, &PromptRequest::SensitiveDeflection { vars }),
            deflected: true,
        });
    }

    let request = PromptRequest::ChatReply { message, vars };
    let prompt = build(locale, &request);
    debug!("{:?} prompt built ({} chars)", request.kind(), prompt.len());
    let text = model.complete(&prompt).await?;

    Ok(AssistantReply {
        text,
        deflected: false,
    })
}
