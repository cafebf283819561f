use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, QuoteGifError};
use crate::fingerprint::fingerprint_file;
use crate::index::SubtitleIndex;
use crate::locate::find_start_times;
use crate::media::{ClipProcessorFactory, ClipProcessorTrait};
use crate::subdb::{SubtitleClient, SubtitleOutcome};
use crate::timecode::{format_offset, TimeSpec};

pub struct Workflow {
    config: Config,
    media: Box<dyn ClipProcessorTrait>,
    subtitles: SubtitleClient,
}

impl Workflow {
    pub fn new(config: Config) -> Result<Self> {
        let media =
            ClipProcessorFactory::create_processor(config.media.clone(), config.clip.clone());
        Self::with_processor(config, media)
    }

    /// Construction seam that accepts any clip processor implementation
    pub fn with_processor(config: Config, media: Box<dyn ClipProcessorTrait>) -> Result<Self> {
        // Check dependencies
        media.check_availability()?;

        let subtitles = SubtitleClient::new(config.subtitles.clone())?;

        Ok(Self {
            config,
            media,
            subtitles,
        })
    }

    /// Locate the quote in the movie's subtitle track and cut a clip around
    /// the best-scoring start time.
    pub async fn run_quote_search<P: AsRef<Path>>(
        &self,
        movie: P,
        quote: &str,
        output: P,
    ) -> Result<()> {
        let movie = movie.as_ref();
        let output = output.as_ref();

        if !movie.exists() {
            return Err(QuoteGifError::FileNotFound(movie.display().to_string()));
        }

        let hash = fingerprint_file(movie)?;
        info!("Movie fingerprint: {}", hash);

        let raw = match self.subtitles.fetch(&hash).await? {
            SubtitleOutcome::Found(text) => text,
            SubtitleOutcome::NotFound => return Err(QuoteGifError::SubtitlesNotFound),
        };

        let index = SubtitleIndex::build(&raw);
        if index.skipped_blocks() > 0 {
            warn!("Skipped {} malformed subtitle blocks", index.skipped_blocks());
        }
        if index.is_empty() {
            return Err(QuoteGifError::Subtitle(
                "Subtitle track yielded no usable blocks".to_string(),
            ));
        }
        info!(
            "Indexed {} words across {} subtitle blocks",
            index.word_count(),
            index.seeds().len()
        );

        let results = find_start_times(&index, quote);
        let best = results
            .first()
            .ok_or_else(|| QuoteGifError::Subtitle("No timestamps to score".to_string()))?
            .clone();

        for result in &results {
            println!(
                "Time: {}, confidence score: {}",
                format_offset(result.seconds),
                result.score
            );
        }
        if best.score == 0.0 {
            warn!("No word of the quote occurs in the subtitles; the timestamps above are not a match");
        }

        let start = TimeSpec::from_seconds(best.seconds);
        let end = TimeSpec::from_seconds(best.seconds + self.config.clip.duration_seconds);
        self.extract(movie, &start, &end, output).await
    }

    /// Cut directly between two user-supplied endpoints, skipping the
    /// subtitle machinery entirely.
    pub async fn run_explicit<P: AsRef<Path>>(
        &self,
        movie: P,
        start: &str,
        end: &str,
        output: P,
    ) -> Result<()> {
        let movie = movie.as_ref();
        let output = output.as_ref();

        if !movie.exists() {
            return Err(QuoteGifError::FileNotFound(movie.display().to_string()));
        }

        let start = TimeSpec::parse(start)?;
        let end = TimeSpec::parse(end)?;

        self.extract(movie, &start, &end, output).await
    }

    async fn extract(
        &self,
        movie: &Path,
        start: &TimeSpec,
        end: &TimeSpec,
        output: &Path,
    ) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        spinner.set_message(format!("Encoding {}", output.display()));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = self.media.extract_clip(movie, start, end, output).await;
        spinner.finish_and_clear();
        result?;

        println!("Created: {}", output.display());
        Ok(())
    }
}
