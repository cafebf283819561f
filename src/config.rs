use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, QuoteGifError};

fn default_clip_seconds() -> u32 {
    4
}

fn default_scale_divisor() -> u32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub subtitles: SubtitleConfig,
    pub media: MediaConfig,
    pub clip: ClipConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleConfig {
    /// Captioning service base URL
    pub endpoint: String,
    /// User agent string the service expects
    pub user_agent: String,
    /// Subtitle track language requested from the service
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Path to ffmpeg binary
    pub binary_path: String,
    /// Frame rate of the encoded GIF
    pub gif_fps: u32,
    /// Additional encoding options appended to the GIF command
    /// Common options: ["-an"] to strip audio handling entirely
    pub gif_options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Clip length in seconds when only a start time is known (quote mode)
    #[serde(default = "default_clip_seconds")]
    pub duration_seconds: u32,
    /// Spatial downsampling divisor (2 halves width and height)
    #[serde(default = "default_scale_divisor")]
    pub scale_divisor: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subtitles: SubtitleConfig {
                endpoint: "http://api.thesubdb.com/".to_string(),
                user_agent: "SubDB/1.0 (quotegif/0.1; http://github.com/quotegif/quotegif)".to_string(),
                language: "en".to_string(),
            },
            media: MediaConfig {
                binary_path: "ffmpeg".to_string(),
                gif_fps: 10,
                gif_options: vec![],
            },
            clip: ClipConfig {
                duration_seconds: 4,
                scale_divisor: 2,
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| QuoteGifError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| QuoteGifError::Config(format!("Failed to parse config file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = Config::default();
        let toml_text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_text).unwrap();
        assert_eq!(parsed.subtitles.language, "en");
        assert_eq!(parsed.media.binary_path, "ffmpeg");
        assert_eq!(parsed.clip.duration_seconds, 4);
    }

    #[test]
    fn test_partial_clip_section_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [subtitles]
            endpoint = "http://example.test/"
            user_agent = "SubDB/1.0 (test/0.1; http://example.test)"
            language = "en"

            [media]
            binary_path = "ffmpeg"
            gif_fps = 12
            gif_options = []

            [clip]
            "#,
        )
        .unwrap();
        assert_eq!(config.clip.duration_seconds, 4);
        assert_eq!(config.clip.scale_divisor, 2);
        assert_eq!(config.media.gif_fps, 12);
    }
}
