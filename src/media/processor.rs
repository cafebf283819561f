use async_trait::async_trait;
use std::path::Path;
use std::process::Command;
use tracing::info;

use super::{ClipProcessorTrait, MediaCommandBuilder};
use crate::config::{ClipConfig, MediaConfig};
use crate::error::{Result, QuoteGifError};
use crate::timecode::TimeSpec;

/// Concrete implementation of the clip processor (FFmpeg-based)
pub struct ClipProcessorImpl {
    media: MediaConfig,
    clip: ClipConfig,
    command_builder: MediaCommandBuilder,
}

impl ClipProcessorImpl {
    /// Create a new clip processor implementation
    pub fn new(media: MediaConfig, clip: ClipConfig) -> Self {
        let command_builder = MediaCommandBuilder::new(&media.binary_path);

        Self {
            media,
            clip,
            command_builder,
        }
    }
}

#[async_trait]
impl ClipProcessorTrait for ClipProcessorImpl {
    /// Cut [start, end] out of the movie and encode it as a looping GIF
    async fn extract_clip(
        &self,
        video_path: &Path,
        start: &TimeSpec,
        end: &TimeSpec,
        output_path: &Path,
    ) -> Result<()> {
        info!(
            "Extracting clip {} -> {} from {} into {}",
            start,
            end,
            video_path.display(),
            output_path.display()
        );

        let command = self.command_builder.extract_gif(
            video_path,
            start,
            end,
            output_path,
            self.media.gif_fps,
            self.clip.scale_divisor,
            &self.media.gif_options,
        );

        command.execute().await?;

        info!("Clip extraction completed successfully");
        Ok(())
    }

    /// Check if the clip processor is available
    fn check_availability(&self) -> Result<()> {
        let output = Command::new(&self.media.binary_path)
            .arg("-version")
            .output()
            .map_err(|e| QuoteGifError::Media(format!("Media processor not found: {}", e)))?;

        if output.status.success() {
            info!("Media processor is available");
            Ok(())
        } else {
            Err(QuoteGifError::Media(
                "Media processor version check failed".to_string(),
            ))
        }
    }
}
