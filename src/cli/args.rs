use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tcheck")]
#[command(about = "AI-powered writing assistant CLI")]
#[command(version)]
pub struct Args {
    /// Document to transform (reads from stdin if not provided)
    pub file: Option<String>,

    /// Transformation mode: grammar, humanize, or paraphrase
    #[arg(long)]
    pub mode: Option<String>,

    /// Voice persona for humanize mode (see 'tcheck voices')
    #[arg(long)]
    pub voice: Option<String>,

    /// Style for paraphrase mode (see 'tcheck styles')
    #[arg(short = 's', long)]
    pub style: Option<String>,

    /// Prompt locale: en or th
    #[arg(short = 'l', long)]
    pub locale: Option<String>,

    /// API endpoint base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Disable the result cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// Write the transformed text back to the document file
    #[arg(short = 'w', long)]
    pub write: bool,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure AI backend settings
    Configure {
        /// Show current settings
        #[arg(long)]
        show: bool,
    },
    /// List humanizer voice personas
    Voices,
    /// List paraphraser styles
    Styles,
    /// Interactive editor session
    Edit {
        /// Transformation mode: grammar, humanize, or paraphrase
        #[arg(long)]
        mode: Option<String>,

        /// Voice persona for humanize mode
        #[arg(long)]
        voice: Option<String>,

        /// Style for paraphrase mode
        #[arg(short = 's', long)]
        style: Option<String>,

        /// Prompt locale: en or th
        #[arg(short = 'l', long)]
        locale: Option<String>,
    },
}
