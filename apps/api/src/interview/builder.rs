//! Prompt builder: turns session data into model input.
//!
//! Pure and deterministic: identical `(locale, request)` pairs always produce
//! byte-identical strings. Resume text is embedded in full; any length limit
//! belongs to the model client.

use serde::Serialize;

use crate::interview::prompts::{
    CHAT_REPLY_TEMPLATE, RESUME_QUESTIONS_TEMPLATE, ROLE_QUESTIONS_TEMPLATE,
    TECH_QUESTIONS_TEMPLATE,
};
use crate::llm_client::prompts::{LANGUAGE_INSTRUCTION, RECRUITER_PERSONA};
use crate::locale::{render, Locale, TemplateVars};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    TechQuestions,
    ResumeQuestions,
    RoleQuestions,
    ChatReply,
    SensitiveDeflection,
}

/// A prompt kind together with the payload that kind needs.
#[derive(Debug, Clone, Copy)]
pub enum PromptRequest<'a> {
    TechQuestions {
        skill: &'a str,
    },
    ResumeQuestions {
        name: &'a str,
        tech_stack: &'a [String],
        resume_text: &'a str,
    },
    RoleQuestions {
        name: &'a str,
        position: &'a str,
    },
    ChatReply {
        message: &'a str,
        vars: TemplateVars<'a>,
    },
    SensitiveDeflection {
        vars: TemplateVars<'a>,
    },
}

impl PromptRequest<'_> {
    pub fn kind(&self) -> PromptKind {
        match self {
            PromptRequest::TechQuestions { .. } => PromptKind::TechQuestions,
            PromptRequest::ResumeQuestions { .. } => PromptKind::ResumeQuestions,
            PromptRequest::RoleQuestions { .. } => PromptKind::RoleQuestions,
            PromptRequest::ChatReply { .. } => PromptKind::ChatReply,
            PromptRequest::SensitiveDeflection { .. } => PromptKind::SensitiveDeflection,
        }
    }
}

pub fn build(locale: Locale, request: &PromptRequest<'_>) -> String {
    let body = match *request {
        PromptRequest::TechQuestions { skill } => {
            render(TECH_QUESTIONS_TEMPLATE, &[("skill", skill)])
        }
        PromptRequest::ResumeQuestions {
            name,
            tech_stack,
            resume_text,
        } => {
            let tech_stack = tech_stack.join(", ");
            render(
                RESUME_QUESTIONS_TEMPLATE,
                &[
                    ("name", name),
                    ("tech_stack", tech_stack.as_str()),
                    ("resume_text", resume_text),
                ],
            )
        }
        PromptRequest::RoleQuestions { name, position } => render(
            ROLE_QUESTIONS_TEMPLATE,
            &[("name", name), ("position", position)],
        ),
        PromptRequest::ChatReply { message, vars } => render(
            CHAT_REPLY_TEMPLATE,
            &[
                ("persona", RECRUITER_PERSONA),
                ("message", message),
                ("name", vars.name),
                ("location", vars.location),
                ("qualification", vars.qualification),
                ("college_name", vars.college_name),
            ],
        ),
        // Shown to the candidate verbatim, never sent to the model.
        PromptRequest::SensitiveDeflection { vars } => return vars.fill(locale.bundle().deflection),
    };

    if locale.is_default() {
        body
    } else {
        let instruction = render(
            LANGUAGE_INSTRUCTION,
            &[("language", locale.bundle().language_name)],
        );
        format!("{instruction}\n\n{body}")
    }
}

/// One `TechQuestions` prompt per skill, in tech-stack order.
pub fn tech_question_prompts(locale: Locale, skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|skill| {
            build(
                locale,
                &PromptRequest::TechQuestions {
                    skill: skill.as_str(),
                },
            )
        })
        .collect()
}
