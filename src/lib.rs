//! # tcheck - AI Writing Assistant CLI
//!
//! `tcheck` is a command-line writing assistant that sends text to an
//! OpenAI-compatible chat-completion endpoint for grammar correction, tone
//! "humanization," or paraphrasing, in English or Thai.
//!
//! ## Features
//!
//! - **Three transformations**: grammar check, humanize (voice personas),
//!   paraphrase (styles)
//! - **Any OpenAI-compatible backend**: hosted Typhoon/OpenAI endpoints or
//!   local servers (LM Studio, Ollama, vLLM)
//! - **Caching**: identical requests reuse cached results
//! - **Interactive mode**: editor-style sessions with `tcheck edit`
//!
//! ## Quick Start
//!
//! ```bash
//! # Check the grammar of a document
//! tcheck ./draft.txt
//!
//! # Humanize from stdin with a voice persona
//! cat draft.txt | tcheck --mode humanize --voice "The Scholar"
//!
//! # Paraphrase in Thai phrasing
//! tcheck --mode paraphrase --style Academic --locale th ./draft.txt
//!
//! # Interactive editor session
//! tcheck edit
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/tcheck/settings.toml`:
//!
//! ```toml
//! [ai]
//! api_key = "lm-studio"
//! base_url = "http://localhost:1234/v1"
//! model = "scb10x_-_llama-3-typhoon-v1.5-8b-instruct"
//!
//! [defaults]
//! mode = "grammar"
//! locale = "en"
//! ```

/// Transformation result cache management using `SQLite`.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Settings file management and configuration resolution.
pub mod config;

/// Interactive editor session.
pub mod editor;

/// File system utilities.
pub mod fs;

/// Document reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Built-in voice personas and paraphrase styles.
pub mod persona;

/// The transformation core: modes, prompts, transport, orchestration.
pub mod transform;

/// Terminal UI components (spinner, colors).
pub mod ui;
