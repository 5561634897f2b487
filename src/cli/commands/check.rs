use anyhow::{Result, bail};

use crate::cache::CacheManager;
use crate::config::{Configuration, SettingsManager};
use crate::fs::atomic_write;
use crate::input::DocumentReader;
use crate::persona;
use crate::status;
use crate::transform::{
    ChatClient, Locale, Mode, Orchestrator, RunOutcome, SessionState, TransformRequest,
    effective_option, strip_tags,
};
use crate::ui::{Spinner, Style};

pub struct CheckOptions {
    pub file: Option<String>,
    pub mode: Option<String>,
    pub voice: Option<String>,
    pub style: Option<String>,
    pub locale: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub no_cache: bool,
    pub write: bool,
}

/// Runs a one-shot transformation: read the document, call the backend,
/// print the transformed text to stdout.
pub async fn run_check(options: CheckOptions) -> Result<()> {
    let manager = SettingsManager::new()?;
    let settings = manager.load_or_default();

    let mode = match options.mode.as_deref().or(settings.defaults.mode.as_deref()) {
        Some(key) => Mode::parse(key)?,
        None => Mode::Grammar,
    };
    let locale = match options
        .locale
        .as_deref()
        .or(settings.defaults.locale.as_deref())
    {
        Some(key) => Locale::parse(key)?,
        None => Locale::En,
    };

    if options.voice.is_some() && mode != Mode::Humanize {
        eprintln!(
            "{} --voice only applies to humanize mode; ignoring\n",
            Style::warning("Warning:")
        );
    }
    if options.style.is_some() && mode != Mode::Paraphrase {
        eprintln!(
            "{} --style only applies to paraphrase mode; ignoring\n",
            Style::warning("Warning:")
        );
    }

    let option = match mode {
        Mode::Grammar => None,
        Mode::Humanize => options
            .voice
            .as_deref()
            .or(settings.defaults.voice.as_deref())
            .map(|v| persona::resolve_voice(v, locale)),
        Mode::Paraphrase => options
            .style
            .as_deref()
            .or(settings.defaults.style.as_deref())
            .map(|s| persona::resolve_style(s, locale)),
    };

    if options.write && options.file.is_none() {
        bail!(
            "Error: --write requires a document file\n\n\
             Pass the document as an argument: tcheck --write <file>"
        );
    }

    let raw_document = DocumentReader::read(options.file.as_deref())?;

    // An empty document is a silent no-op, not an error
    let source_text = strip_tags(&raw_document);
    let source_text = source_text.trim();
    if source_text.is_empty() {
        return Ok(());
    }

    let mut ai = settings.ai.clone();
    if options.endpoint.is_some() {
        ai.base_url = options.endpoint.clone();
    }
    if options.model.is_some() {
        ai.model = options.model.clone();
    }
    let config = Configuration::resolve(&ai);

    // Checked here so the guided remediation shows before any progress
    // indicator; the transport performs the same check again.
    if config.missing_credentials() {
        bail!(
            "Error: API key is missing. Please check settings.\n\n\
             Run 'tcheck configure' to set an API key, or point the base URL\n\
             at a local server such as http://localhost:1234/v1"
        );
    }

    let request = TransformRequest {
        source_text: source_text.to_string(),
        mode,
        option: effective_option(mode, option.as_deref()),
        locale,
        model: config.model.clone(),
        endpoint: config.base_url.clone(),
    };

    let cache_manager = CacheManager::new()?;

    if !options.no_cache
        && let Some(cached) = cache_manager.get(&request)?
    {
        println!("{cached}");
        write_back(&options, &cached)?;
        return Ok(());
    }

    status!("{}", Style::secondary(format!("Connecting to AI at: {}", config.base_url)));

    let orchestrator = Orchestrator::new(ChatClient::from_config(&config));
    let mut state = SessionState::new(raw_document);

    let spinner = Spinner::start(progress_message(mode));
    let outcome = orchestrator
        .run(&mut state, &config, mode, option.as_deref(), locale)
        .await;
    spinner.stop();

    match outcome {
        Ok(RunOutcome::Completed(result)) => {
            println!("{result}");

            if !options.no_cache {
                cache_manager.put(&request, &result)?;
            }
            write_back(&options, &result)?;
            Ok(())
        }
        // Unreachable after the emptiness check above, but harmless
        Ok(RunOutcome::SkippedEmpty) => Ok(()),
        Err(err) => bail!("{err}\n\n{}", err.hint()),
    }
}

fn write_back(options: &CheckOptions, result: &str) -> Result<()> {
    if !options.write {
        return Ok(());
    }

    // Presence of the file is checked before the document is read
    if let Some(file) = options.file.as_deref() {
        atomic_write(file, result)?;
        status!(
            "{} Wrote transformed text to {}",
            Style::success("✓"),
            Style::secondary(file)
        );
    }

    Ok(())
}

const fn progress_message(mode: Mode) -> &'static str {
    match mode {
        Mode::Grammar => "Checking grammar...",
        Mode::Humanize => "Humanizing...",
        Mode::Paraphrase => "Paraphrasing...",
    }
}
