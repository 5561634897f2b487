//! The transformation orchestrator.
//!
//! Coordinates a single transformation run: input validation, credential
//! pre-flight, prompt construction, transport dispatch, and session-state
//! transitions. Whatever happens after the processing flag flips on, it
//! flips off again before the run returns.

use super::client::ChatBackend;
use super::error::TransformError;
use super::html;
use super::mode::{Locale, Mode};
use super::prompt;
use crate::config::Configuration;

/// Session state consumed and produced by the orchestrator.
///
/// This is the presentation layer's view of a document session: the raw
/// document (possibly containing markup), whether a request is in flight,
/// and the most recent outcome. Result and error are transient and
/// overwritten by the next run.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Raw document text as emitted by the editor; may contain HTML.
    pub document: String,
    /// True for the entire lifetime of exactly one outstanding request.
    pub is_processing: bool,
    /// Transformed text from the last successful run.
    pub last_result: Option<String>,
    /// Classified error from the last failed run.
    pub last_error: Option<TransformError>,
}

impl SessionState {
    /// Creates session state for a document.
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a transformation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The backend produced transformed text.
    Completed(String),
    /// The document was empty after markup stripping; nothing was done and
    /// no collaborator was invoked. An empty document is not an error.
    SkippedEmpty,
}

/// Coordinates transformation runs against a chat backend.
///
/// The configuration is passed into [`run`](Self::run) by the caller, which
/// is expected to re-read persisted settings before each invocation so
/// settings changes take effect immediately.
pub struct Orchestrator<B> {
    backend: B,
}

impl<B: ChatBackend> Orchestrator<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Runs one transformation over the document in `state`.
    ///
    /// On success the result is stored in `state.last_result`; on failure
    /// the classified error lands in `state.last_error`. The processing flag
    /// returns to `false` exactly once per invocation that entered the
    /// processing state. A second run started while one is in flight fails
    /// fast with [`TransformError::Busy`] and leaves the in-flight run
    /// untouched.
    pub async fn run(
        &self,
        state: &mut SessionState,
        config: &Configuration,
        mode: Mode,
        option: Option<&str>,
        locale: Locale,
    ) -> Result<RunOutcome, TransformError> {
        let source_text = html::strip_tags(&state.document);
        let source_text = source_text.trim();
        if source_text.is_empty() {
            return Ok(RunOutcome::SkippedEmpty);
        }

        if state.is_processing {
            return Err(TransformError::Busy);
        }

        // Same check the transport performs, but before the processing state
        // flips, so the caller can offer remediation without ever showing a
        // processing indicator.
        if config.missing_credentials() {
            let err = TransformError::MissingCredentials;
            state.last_error = Some(err.clone());
            return Err(err);
        }

        state.is_processing = true;
        state.last_result = None;
        state.last_error = None;

        let outcome = self.dispatch(source_text, config, mode, option, locale).await;

        // Must run whether dispatch succeeded or failed; the session may
        // never stick in a perpetual processing state.
        state.is_processing = false;

        match outcome {
            Ok(text) => {
                state.last_result = Some(text.clone());
                Ok(RunOutcome::Completed(text))
            }
            Err(err) => {
                state.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Prompt construction and transport dispatch. Classification happens in
    /// the transport; nothing is reclassified here.
    async fn dispatch(
        &self,
        source_text: &str,
        config: &Configuration,
        mode: Mode,
        option: Option<&str>,
        locale: Locale,
    ) -> Result<String, TransformError> {
        let prompt = prompt::build_prompt(mode, source_text, option, locale);
        self.backend.send(&prompt, mode, config).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::AiSettings;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeBackend {
        response: Mutex<Result<String, TransformError>>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl FakeBackend {
        fn replying(text: &str) -> Self {
            Self {
                response: Mutex::new(Ok(text.to_string())),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(err: TransformError) -> Self {
            Self {
                response: Mutex::new(Err(err)),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatBackend for FakeBackend {
        async fn send(
            &self,
            prompt: &str,
            _mode: Mode,
            _config: &Configuration,
        ) -> Result<String, TransformError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.response.lock().unwrap().clone()
        }
    }

    fn loopback_config() -> Configuration {
        Configuration::resolve(&AiSettings {
            base_url: Some("http://localhost:1234/v1".to_string()),
            ..AiSettings::default()
        })
    }

    fn hosted_config_without_key() -> Configuration {
        Configuration::resolve(&AiSettings::default())
    }

    #[tokio::test]
    async fn test_successful_run_commits_result() {
        let orchestrator = Orchestrator::new(FakeBackend::replying("He goes to school."));
        let mut state = SessionState::new("<p>He go to school.</p>");

        let outcome = orchestrator
            .run(&mut state, &loopback_config(), Mode::Grammar, None, Locale::En)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Completed("He goes to school.".to_string()));
        assert_eq!(state.last_result, Some("He goes to school.".to_string()));
        assert!(state.last_error.is_none());
        assert!(!state.is_processing);
    }

    #[tokio::test]
    async fn test_empty_document_is_silent_noop() {
        let orchestrator = Orchestrator::new(FakeBackend::replying("unused"));
        let mut state = SessionState::new("<p>   <br/> </p>");

        let outcome = orchestrator
            .run(&mut state, &loopback_config(), Mode::Grammar, None, Locale::En)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::SkippedEmpty);
        assert_eq!(orchestrator.backend.call_count(), 0);
        assert!(state.last_result.is_none());
        assert!(state.last_error.is_none());
        assert!(!state.is_processing);
    }

    #[tokio::test]
    async fn test_missing_credentials_short_circuits_before_transport() {
        let orchestrator = Orchestrator::new(FakeBackend::replying("unused"));
        let mut state = SessionState::new("Some text");

        let err = orchestrator
            .run(
                &mut state,
                &hosted_config_without_key(),
                Mode::Grammar,
                None,
                Locale::En,
            )
            .await
            .unwrap_err();

        assert_eq!(err, TransformError::MissingCredentials);
        assert_eq!(orchestrator.backend.call_count(), 0);
        assert_eq!(state.last_error, Some(TransformError::MissingCredentials));
        assert!(!state.is_processing);
    }

    #[tokio::test]
    async fn test_transport_failure_commits_error_and_clears_flag() {
        let orchestrator = Orchestrator::new(FakeBackend::failing(
            TransformError::TransportFailure("rate limited".to_string()),
        ));
        let mut state = SessionState::new("Some text");

        let err = orchestrator
            .run(&mut state, &loopback_config(), Mode::Grammar, None, Locale::En)
            .await
            .unwrap_err();

        assert_eq!(err, TransformError::TransportFailure("rate limited".to_string()));
        assert_eq!(state.last_error, Some(err));
        assert!(state.last_result.is_none());
        assert!(!state.is_processing);
    }

    #[tokio::test]
    async fn test_run_clears_previous_outcome() {
        let orchestrator = Orchestrator::new(FakeBackend::replying("Second result"));
        let mut state = SessionState::new("Some text");
        state.last_result = Some("First result".to_string());
        state.last_error = Some(TransformError::TransportFailure("old".to_string()));

        orchestrator
            .run(&mut state, &loopback_config(), Mode::Grammar, None, Locale::En)
            .await
            .unwrap();

        assert_eq!(state.last_result, Some("Second result".to_string()));
        assert!(state.last_error.is_none());
    }

    #[tokio::test]
    async fn test_busy_guard_rejects_reentrant_run() {
        let orchestrator = Orchestrator::new(FakeBackend::replying("unused"));
        let mut state = SessionState::new("Some text");
        state.is_processing = true;

        let err = orchestrator
            .run(&mut state, &loopback_config(), Mode::Grammar, None, Locale::En)
            .await
            .unwrap_err();

        assert_eq!(err, TransformError::Busy);
        assert_eq!(orchestrator.backend.call_count(), 0);
        // The guard must not disturb the in-flight run's flag
        assert!(state.is_processing);
    }

    #[tokio::test]
    async fn test_prompt_reaches_backend_with_default_voice() {
        let orchestrator = Orchestrator::new(FakeBackend::replying("rewritten"));
        let mut state = SessionState::new("Some text");

        orchestrator
            .run(&mut state, &loopback_config(), Mode::Humanize, None, Locale::En)
            .await
            .unwrap();

        let prompt = orchestrator.backend.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("\"The Everyday Voice\""));
        assert!(prompt.contains("Some text"));
    }
}
