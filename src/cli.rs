use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path of the movie file
    pub movie: PathBuf,

    /// Quote you want to find
    #[arg(long)]
    pub quote: Option<String>,

    /// Save gif as
    #[arg(short, default_value = "op.gif")]
    pub output: PathBuf,

    /// Start time for gif (HH:MM:SS)
    #[arg(long)]
    pub start: Option<String>,

    /// End time for gif (HH:MM:SS)
    #[arg(long)]
    pub end: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Which of the two pipelines a given invocation runs. Explicit times always
/// win over quote search; anything short of a quote or a full start/end pair
/// is a usage error.
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    /// Locate the quote in the subtitle track, then cut from the best match
    Search { quote: String },
    /// Cut directly between the given endpoints
    Explicit {
        start: String,
        end: String,
        overrides_quote: bool,
    },
    /// Not enough arguments to do anything
    Usage,
}

impl Args {
    pub fn run_mode(&self) -> RunMode {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => RunMode::Explicit {
                start: start.clone(),
                end: end.clone(),
                overrides_quote: self.quote.is_some(),
            },
            (None, None) => match &self.quote {
                Some(quote) => RunMode::Search {
                    quote: quote.clone(),
                },
                None => RunMode::Usage,
            },
            // A lone start or end is never enough, even alongside a quote
            _ => RunMode::Usage,
        }
    }
}
