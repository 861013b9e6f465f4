// Shared prompt fragments.
// Each feature that calls the model keeps its own prompt templates next to it.
// This file holds the pieces every template shares.

/// Prepended to every model prompt for non-default locales. Replace `{language}`.
pub const LANGUAGE_INSTRUCTION: &str = "Respond in {language}.";

/// Persona line that opens the follow-up chat prompt.
pub const RECRUITER_PERSONA: &str = "You are a helpful recruitment assistant.";
