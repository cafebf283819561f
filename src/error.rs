use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteGifError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fingerprint error: {0}")]
    Fingerprint(String),

    #[error("Subtitle error: {0}")]
    Subtitle(String),

    #[error("Subtitles not found")]
    SubtitlesNotFound,

    #[error("Media processing error: {0}")]
    Media(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, QuoteGifError>;
