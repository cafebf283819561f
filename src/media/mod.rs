// Modular media processing architecture
//
// This module provides a clean abstraction over the clip extraction step:
// - Processor: FFmpeg-backed implementation with abstract command building
// - Commands: command builders and abstractions

pub mod commands;
pub mod processor;

use async_trait::async_trait;
use std::path::Path;

pub use commands::*;
pub use processor::*;

use crate::config::{ClipConfig, MediaConfig};
use crate::error::Result;
use crate::timecode::TimeSpec;

/// Main trait for clip extraction operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipProcessorTrait: Send + Sync {
    /// Cut [start, end] out of the movie and encode it as a looping GIF
    async fn extract_clip(
        &self,
        video_path: &Path,
        start: &TimeSpec,
        end: &TimeSpec,
        output_path: &Path,
    ) -> Result<()>;

    /// Check if the clip processor is available
    fn check_availability(&self) -> Result<()>;
}

/// Factory for creating clip processor instances
pub struct ClipProcessorFactory;

impl ClipProcessorFactory {
    /// Create the default clip processor implementation (FFmpeg-based)
    pub fn create_processor(media: MediaConfig, clip: ClipConfig) -> Box<dyn ClipProcessorTrait> {
        Box::new(processor::ClipProcessorImpl::new(media, clip))
    }
}
