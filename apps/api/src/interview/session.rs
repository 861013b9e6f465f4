//! Interview session: the per-candidate state machine.
//!
//! Phases: Collecting → Greeted → Terminated. A locale change from any
//! non-terminated phase re-arms the greeting (back to Collecting) while keeping
//! the profile and chat history. Terminated is absorbing: every mutating call
//! becomes a no-op.
//!
//! All model calls made by one command run strictly in sequence.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::interview::builder::{build, tech_question_prompts, PromptKind, PromptRequest};
use crate::interview::chat::reply;
use crate::llm_client::{ModelClient, ModelError};
use crate::locale::{render, Locale, TemplateBundle};
use crate::models::candidate::CandidateProfile;
use crate::models::resume::ResumeDocument;

/// Reserved chat command that ends the session.
pub const EXIT_COMMAND: &str = "exit";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Collecting,
    Greeted,
    Terminated,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub user_message: String,
    pub assistant_reply: String,
    pub deflected: bool,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Generated { text: String },
    /// No input for this kind (no skills, no resume text, no position).
    Skipped { notice: String },
    Failed { error: String },
}

/// One block of generated interview questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionBatch {
    pub kind: PromptKind,
    /// Absent for skipped batches.
    pub heading: Option<String>,
    pub outcome: BatchOutcome,
}

/// Everything produced by a successful profile submission.
#[derive(Debug, Clone, Serialize)]
pub struct Greeted {
    pub locale: Locale,
    pub greeting: String,
    pub resume_notice: String,
    pub resume_preview: Option<String>,
    /// Tech batches first (one per skill), then resume, then role.
    pub batches: Vec<QuestionBatch>,
    pub exit_hint: &'static str,
}

/// Read-only view returned to the UI layer.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub id: Uuid,
    pub locale: Locale,
    pub phase: SessionPhase,
    pub greeted: bool,
    pub terminated: bool,
    pub profile: Option<&'a CandidateProfile>,
    pub resume: Option<&'a ResumeDocument>,
    /// Most recent first.
    pub history: &'a VecDeque<ChatTurn>,
    pub created_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Session state
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct SessionState {
    id: Uuid,
    locale: Locale,
    profile: Option<CandidateProfile>,
    resume: Option<ResumeDocument>,
    greeted: bool,
    chat_history: VecDeque<ChatTurn>,
    terminated: bool,
    created_at: DateTime<Utc>,
    last_active: Instant,
}

impl SessionState {
    /// A fresh session in the Collecting phase.
    pub fn new(locale: Locale) -> Self {
        Self {
            id: Uuid::new_v4(),
            locale,
            profile: None,
            resume: None,
            greeted: false,
            chat_history: VecDeque::new(),
            terminated: false,
            created_at: Utc::now(),
            last_active: Instant::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    pub fn resume(&self) -> Option<&ResumeDocument> {
        self.resume.as_ref()
    }

    pub fn is_greeted(&self) -> bool {
        self.greeted
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Most recent turn first.
    pub fn history(&self) -> &VecDeque<ChatTurn> {
        &self.chat_history
    }

    /// Marks the session as used now. Handlers call this on every command.
    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_active.elapsed()
    }

    /// True while a profile submission would greet (not greeted, not ended).
    pub fn accepts_profile(&self) -> bool {
        !self.terminated && !self.greeted
    }

    pub fn phase(&self) -> SessionPhase {
        if self.terminated {
            SessionPhase::Terminated
        } else if self.greeted {
            SessionPhase::Greeted
        } else {
            SessionPhase::Collecting
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            id: self.id,
            locale: self.locale,
            phase: self.phase(),
            greeted: self.is_greeted(),
            terminated: self.is_terminated(),
            profile: self.profile(),
            resume: self.resume(),
            history: self.history(),
            created_at: self.created_at,
        }
    }

    /// Greets the candidate and generates the three question batches.
    ///
    /// Returns `None` without touching any state if the session is already
    /// greeted for the current locale or has terminated. On a re-greet after a
    /// locale change, the submitted profile and resume replace the stored ones.
    pub async fn submit_profile(
        &mut self,
        profile: CandidateProfile,
        resume: Option<ResumeDocument>,
        model: &dyn ModelClient,
    ) -> Option<Greeted> {
        if !self.accepts_profile() {
            debug!(
                "Session {}: profile submission ignored in phase {:?}",
                self.id,
                self.phase()
            );
            return None;
        }

        let bundle = self.locale.bundle();
        let greeting = profile.template_vars().fill(bundle.greeting);
        let resume_preview = resume.as_ref().and_then(ResumeDocument::preview);
        let resume_notice = if resume_preview.is_some() {
            bundle.resume_extracted
        } else {
            bundle.no_resume
        };
        let resume_text = resume.as_ref().map(|r| r.text.as_str()).unwrap_or_default();

        info!(
            "Session {}: greeting {} skill(s), resume text {}, locale {}",
            self.id,
            profile.tech_stack.len(),
            if resume_text.is_empty() { "absent" } else { "present" },
            self.locale
        );

        let mut batches = self.tech_batches(&profile, model).await;
        batches.push(self.resume_batch(&profile, resume_text, model).await);
        batches.push(self.role_batch(&profile, model).await);

        let failed = batches
            .iter()
            .filter(|b| matches!(b.outcome, BatchOutcome::Failed { .. }))
            .count();
        if failed > 0 {
            warn!("Session {}: {failed} question batch(es) failed", self.id);
        }

        self.profile = Some(profile);
        self.resume = resume;
        self.greeted = true;

        Some(Greeted {
            locale: self.locale,
            greeting,
            resume_notice: resume_notice.to_string(),
            resume_preview,
            batches,
            exit_hint: bundle.exit_hint,
        })
    }

    /// Switches locale and re-arms the greeting. Returns true if anything changed.
    pub fn change_locale(&mut self, locale: Locale) -> bool {
        if self.terminated || locale == self.locale {
            return false;
        }
        info!(
            "Session {}: locale {} -> {}, greeting re-armed",
            self.id, self.locale, locale
        );
        self.locale = locale;
        self.greeted = false;
        true
    }

    /// Runs one chat turn and records it at the front of the history.
    ///
    /// Blank input and any input after termination return `Ok(None)`. The
    /// reserved `exit` command answers with the farewell, terminates and drops
    /// the resume. Other messages reach the model exactly as typed. A model
    /// error leaves the history untouched.
    pub async fn submit_chat_message(
        &mut self,
        text: &str,
        model: &dyn ModelClient,
    ) -> Result<Option<String>, ModelError> {
        if self.terminated {
            debug!("Session {}: chat ignored after termination", self.id);
            return Ok(None);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let fallback = CandidateProfile::default();
        let vars = self.profile.as_ref().unwrap_or(&fallback).template_vars();

        let is_exit = trimmed.eq_ignore_ascii_case(EXIT_COMMAND);
        let (assistant_reply, deflected) = if is_exit {
            (vars.fill(self.locale.bundle().farewell), false)
        } else {
            let answer = reply(text, self.locale, vars, model).await?;
            (answer.text, answer.deflected)
        };

        self.chat_history.push_front(ChatTurn {
            user_message: text.to_string(),
            assistant_reply: assistant_reply.clone(),
            deflected,
            at: Utc::now(),
        });

        if is_exit {
            self.terminated = true;
            self.resume = None;
            info!(
                "Session {}: terminated after {} turn(s)",
                self.id,
                self.chat_history.len()
            );
        }

        Ok(Some(assistant_reply))
    }

    // ────────────────────────────────────────────────────────────────────────
    // Question generation
    // ────────────────────────────────────────────────────────────────────────

    async fn tech_batches(
        &self,
        profile: &CandidateProfile,
        model: &dyn ModelClient,
    ) -> Vec<QuestionBatch> {
        let bundle = self.locale.bundle();
        if profile.tech_stack.is_empty() {
            return vec![skipped(PromptKind::TechQuestions, bundle.no_tech_stack)];
        }

        let prompts = tech_question_prompts(self.locale, &profile.tech_stack);
        let mut batches = Vec::with_capacity(prompts.len());
        for (skill, prompt) in profile.tech_stack.iter().zip(prompts) {
            let heading = render(bundle.tech_heading, &[("skill", skill.as_str())]);
            batches.push(generate(PromptKind::TechQuestions, heading, &prompt, model).await);
        }
        batches
    }

    async fn resume_batch(
        &self,
        profile: &CandidateProfile,
        resume_text: &str,
        model: &dyn ModelClient,
    ) -> QuestionBatch {
        let bundle = self.locale.bundle();
        if resume_text.is_empty() {
            return skipped(PromptKind::ResumeQuestions, bundle.no_resume);
        }
        let prompt = build(
            self.locale,
            &PromptRequest::ResumeQuestions {
                name: &profile.name,
                tech_stack: &profile.tech_stack,
                resume_text,
            },
        );
        generate(
            PromptKind::ResumeQuestions,
            bundle.resume_heading.to_string(),
            &prompt,
            model,
        )
        .await
    }

    async fn role_batch(
        &self,
        profile: &CandidateProfile,
        model: &dyn ModelClient,
    ) -> QuestionBatch {
        let bundle: &TemplateBundle = self.locale.bundle();
        if profile.desired_position.is_empty() {
            return skipped(PromptKind::RoleQuestions, bundle.no_position);
        }
        let prompt = build(
            self.locale,
            &PromptRequest::RoleQuestions {
                name: &profile.name,
                position: &profile.desired_position,
            },
        );
        let heading = render(
            bundle.role_heading,
            &[("position", profile.desired_position.as_str())],
        );
        generate(PromptKind::RoleQuestions, heading, &prompt, model).await
    }
}

fn skipped(kind: PromptKind, notice: &str) -> QuestionBatch {
    QuestionBatch {
        kind,
        heading: None,
        outcome: BatchOutcome::Skipped {
            notice: notice.to_string(),
        },
    }
}

/// One model call. A failure is recorded on the batch rather than returned.
async fn generate(
    kind: PromptKind,
    heading: String,
    prompt: &str,
    model: &dyn ModelClient,
) -> QuestionBatch {
    let outcome = match model.complete(prompt).await {
        Ok(text) => BatchOutcome::Generated { text },
        Err(e) => {
            warn!("{kind:?} generation failed: {e}");
            BatchOutcome::Failed {
                error: e.to_string(),
            }
        }
    };
    QuestionBatch {
        kind,
        heading: Some(heading),
        outcome,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::models::candidate::Qualification;
    use crate::models::resume::DocumentKind;

    const TECH_MARKER: &str = "generate 3-5 technical questions";
    const RESUME_MARKER: &str = "Based on the resume of";
    const ROLE_MARKER: &str = "generate 5-7 interview questions";

    fn asha() -> CandidateProfile {
        CandidateProfile {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            location: "Pune".to_string(),
            qualification: Qualification::Bachelor,
            college_name: "COEP".to_string(),
            desired_position: "Backend Engineer".to_string(),
            tech_stack: vec!["Python".to_string(), "SQL".to_string()],
            ..Default::default()
        }
    }

    fn resume(text: &str) -> ResumeDocument {
        ResumeDocument {
            kind: DocumentKind::Docx,
            filename: "asha.docx".to_string(),
            size_bytes: 2048,
            text: text.to_string(),
        }
    }

    fn count_kind(event: &Greeted, kind: PromptKind) -> usize {
        event.batches.iter().filter(|b| b.kind == kind).count()
    }

    #[tokio::test]
    async fn test_profile_without_resume_issues_tech_and_role_prompts_only() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);

        let event = session
            .submit_profile(asha(), Some(resume("")), &model)
            .await
            .expect("first submission greets");

        assert!(session.is_greeted());
        assert_eq!(session.phase(), SessionPhase::Greeted);
        assert_eq!(model.count_containing(TECH_MARKER), 2);
        assert_eq!(model.count_containing(RESUME_MARKER), 0);
        assert_eq!(model.count_containing(ROLE_MARKER), 1);
        assert_eq!(model.calls(), 3);

        // tech → resume → role, in that order
        let prompts = model.prompts();
        assert!(prompts[0].contains("skills in Python"));
        assert!(prompts[1].contains("skills in SQL"));
        assert!(prompts[2].contains(ROLE_MARKER));

        assert_eq!(count_kind(&event, PromptKind::TechQuestions), 2);
        let resume_batch = &event.batches[2];
        assert_eq!(resume_batch.kind, PromptKind::ResumeQuestions);
        assert!(matches!(resume_batch.outcome, BatchOutcome::Skipped { .. }));
        assert_eq!(event.resume_notice, Locale::En.bundle().no_resume);
        assert!(event.resume_preview.is_none());

        let second = session.submit_profile(asha(), None, &model).await;
        assert!(second.is_none());
        assert_eq!(model.calls(), 3);
    }

    #[tokio::test]
    async fn test_greeting_and_headings_are_localized() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);
        let event = session.submit_profile(asha(), None, &model).await.unwrap();

        assert!(event.greeting.contains("Namaste Asha!"));
        assert!(event.greeting.contains("**Pune**"));
        assert!(event.greeting.contains("**Bachelor's Degree** from **COEP**"));
        assert_eq!(
            event.batches[0].heading.as_deref(),
            Some("Questions related to Python:")
        );
        assert_eq!(
            event.batches[3].heading.as_deref(),
            Some("Interview Questions for the Position: Backend Engineer")
        );
        assert_eq!(
            event.batches[0].outcome,
            BatchOutcome::Generated {
                text: "reply 1".to_string()
            }
        );
        assert_eq!(event.exit_hint, "Type 'exit' to end the conversation.");
    }

    #[tokio::test]
    async fn test_resume_text_triggers_resume_prompt_and_preview() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);
        let text = "Led migration of billing to Postgres. ".repeat(20);

        let event = session
            .submit_profile(asha(), Some(resume(&text)), &model)
            .await
            .unwrap();

        assert_eq!(model.count_containing(RESUME_MARKER), 1);
        assert_eq!(count_kind(&event, PromptKind::ResumeQuestions), 1);
        assert_eq!(event.resume_notice, Locale::En.bundle().resume_extracted);
        assert!(event.resume_preview.unwrap().ends_with("..."));
        assert!(session.resume().unwrap().has_text());
    }

    #[tokio::test]
    async fn test_empty_inputs_skip_every_model_call() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);
        let profile = CandidateProfile {
            name: "Ravi".to_string(),
            ..Default::default()
        };

        let event = session.submit_profile(profile, None, &model).await.unwrap();

        assert_eq!(model.calls(), 0);
        assert_eq!(event.batches.len(), 3);
        assert!(event
            .batches
            .iter()
            .all(|b| matches!(b.outcome, BatchOutcome::Skipped { .. }) && b.heading.is_none()));
    }

    #[tokio::test]
    async fn test_failed_batch_does_not_stop_the_others() {
        let model = ScriptedModel::failing_on(&["skills in Python"]);
        let mut session = SessionState::new(Locale::En);

        let event = session.submit_profile(asha(), None, &model).await.unwrap();

        assert_eq!(model.calls(), 3);
        assert!(matches!(event.batches[0].outcome, BatchOutcome::Failed { .. }));
        assert!(matches!(event.batches[1].outcome, BatchOutcome::Generated { .. }));
        assert!(matches!(event.batches[3].outcome, BatchOutcome::Generated { .. }));
        assert!(session.is_greeted());
    }

    #[tokio::test]
    async fn test_change_locale_is_idempotent() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);
        session.submit_profile(asha(), None, &model).await.unwrap();

        assert!(session.change_locale(Locale::Hi));
        assert!(!session.is_greeted());
        assert_eq!(session.phase(), SessionPhase::Collecting);

        // Re-greet under the new locale, then repeat the same locale.
        session.submit_profile(asha(), None, &model).await.unwrap();
        assert!(!session.change_locale(Locale::Hi));
        assert!(session.is_greeted());
    }

    #[tokio::test]
    async fn test_locale_change_rearms_greeting_and_keeps_history() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);
        session.submit_profile(asha(), None, &model).await.unwrap();
        session.submit_chat_message("Q1", &model).await.unwrap();

        session.change_locale(Locale::De);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.profile().unwrap().name, "Asha");

        let event = session.submit_profile(asha(), None, &model).await.unwrap();
        assert_eq!(event.locale, Locale::De);
        assert!(event.greeting.contains("Willkommen bei TalentScout"));
        assert!(model.prompts().last().unwrap().starts_with("Respond in German."));
    }

    #[tokio::test]
    async fn test_history_is_most_recent_first() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);
        session.submit_profile(asha(), None, &model).await.unwrap();
        let before = model.calls();

        let r1 = session.submit_chat_message("Q1", &model).await.unwrap().unwrap();
        let r2 = session.submit_chat_message("Q2", &model).await.unwrap().unwrap();

        assert_eq!(r1, format!("reply {}", before + 1));
        assert_eq!(r2, format!("reply {}", before + 2));
        let turns: Vec<(&str, &str)> = session
            .history()
            .iter()
            .map(|t| (t.user_message.as_str(), t.assistant_reply.as_str()))
            .collect();
        assert_eq!(turns, vec![("Q2", r2.as_str()), ("Q1", r1.as_str())]);
    }

    #[tokio::test]
    async fn test_blank_message_is_a_no_op() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);

        assert_eq!(session.submit_chat_message("", &model).await.unwrap(), None);
        assert_eq!(session.submit_chat_message("   ", &model).await.unwrap(), None);
        assert!(session.history().is_empty());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_sensitive_message_is_recorded_as_deflection() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::Fr);
        session.submit_profile(asha(), None, &model).await.unwrap();
        let before = model.calls();

        let reply = session
            .submit_chat_message("Quel est le salary ?", &model)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(model.calls(), before);
        assert!(reply.starts_with("Merci d'avoir abordé ce sujet, Asha !"));
        assert!(session.history()[0].deflected);
    }

    #[tokio::test]
    async fn test_exit_terminates_and_blocks_further_input() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);
        session
            .submit_profile(asha(), Some(resume("Confidential resume text")), &model)
            .await
            .unwrap();
        assert!(session.resume().is_some());
        let before = model.calls();

        let farewell = session
            .submit_chat_message(" EXIT ", &model)
            .await
            .unwrap()
            .unwrap();
        assert!(farewell.starts_with("Dhanyavaad Asha!"));
        assert_eq!(model.calls(), before);
        assert!(session.is_terminated());
        assert_eq!(session.phase(), SessionPhase::Terminated);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].user_message, " EXIT ");
        assert!(session.resume().is_none());
        assert!(session.snapshot().resume.is_none());

        assert_eq!(session.submit_chat_message("Q3", &model).await.unwrap(), None);
        assert_eq!(session.history().len(), 1);
        assert!(!session.change_locale(Locale::Es));
        assert_eq!(session.locale(), Locale::En);
        assert_eq!(model.calls(), before);
    }

    #[tokio::test]
    async fn test_chat_prompt_carries_message_as_typed() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);
        session.submit_profile(asha(), None, &model).await.unwrap();

        session
            .submit_chat_message("  How many rounds are there?\n", &model)
            .await
            .unwrap();
        assert!(model
            .prompts()
            .last()
            .unwrap()
            .contains("  How many rounds are there?\n"));
        assert_eq!(
            session.history()[0].user_message,
            "  How many rounds are there?\n"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_touch_resets_idle_time() {
        let mut session = SessionState::new(Locale::En);
        tokio::time::advance(Duration::from_secs(90)).await;
        assert_eq!(session.idle_for(), Duration::from_secs(90));

        session.touch();
        assert_eq!(session.idle_for(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_terminated_session_ignores_profile_submission() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);
        session.submit_chat_message("exit", &model).await.unwrap();

        assert!(session.submit_profile(asha(), None, &model).await.is_none());
        assert!(session.profile().is_none());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_chat_model_failure_leaves_history_unchanged() {
        let model = ScriptedModel::failing_on(&["Respond to the following user input"]);
        let mut session = SessionState::new(Locale::En);

        let result = session.submit_chat_message("Tell me about the team", &model).await;
        assert!(matches!(result, Err(ModelError::Unavailable(_))));
        assert!(session.history().is_empty());
        assert!(!session.is_terminated());
    }

    #[tokio::test]
    async fn test_chat_before_profile_uses_blank_candidate_fields() {
        let model = ScriptedModel::new();
        let mut session = SessionState::new(Locale::En);

        session.submit_chat_message("Hello there", &model).await.unwrap();
        assert!(model.prompts()[0].contains("name (), location ()"));
        assert_eq!(session.phase(), SessionPhase::Collecting);
    }

    #[test]
    fn test_snapshot_serializes_phase_and_hides_resume_text() {
        let mut session = SessionState::new(Locale::Es);
        session.resume = Some(resume("secret resume body"));
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["phase"], "collecting");
        assert_eq!(json["locale"], "es");
        assert_eq!(json["resume"]["kind"], "docx");
        assert!(json["resume"].get("text").is_none());
        assert_eq!(json["history"], serde_json::json!([]));
    }
}
