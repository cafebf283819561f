use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::error::{Result, QuoteGifError};
use crate::timecode::TimeSpec;

/// Abstract media processing command representation
#[derive(Debug, Clone)]
pub struct MediaCommand {
    pub binary_path: String,
    pub args: Vec<String>,
    pub description: String,
}

impl MediaCommand {
    /// Create a new media processing command
    pub fn new<S1: Into<String>, S2: Into<String>>(binary_path: S1, description: S2) -> Self {
        Self {
            binary_path: binary_path.into(),
            args: Vec::new(),
            description: description.into(),
        }
    }

    /// Add an argument
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add input file
    pub fn input<P: AsRef<Path>>(self, path: P) -> Self {
        self.arg("-i").arg(path.as_ref().to_string_lossy().to_string())
    }

    /// Add output file
    pub fn output<P: AsRef<Path>>(self, path: P) -> Self {
        self.arg(path.as_ref().to_string_lossy().to_string())
    }

    /// Force overwrite output
    pub fn overwrite(self) -> Self {
        self.arg("-y")
    }

    /// Seek to the clip start
    pub fn seek(self, start: &TimeSpec) -> Self {
        self.arg("-ss").arg(start.to_string())
    }

    /// Stop writing at the clip end
    pub fn stop(self, end: &TimeSpec) -> Self {
        self.arg("-to").arg(end.to_string())
    }

    /// Loop the animation indefinitely
    pub fn loop_forever(self) -> Self {
        self.arg("-loop").arg("0")
    }

    /// Add video filter
    pub fn video_filter<S: Into<String>>(self, filter: S) -> Self {
        self.arg("-vf").arg(filter)
    }

    /// Execute the command
    pub async fn execute(&self) -> Result<()> {
        debug!(
            "Executing media processing command: {} {:?}",
            self.binary_path, self.args
        );
        debug!("Description: {}", self.description);

        let mut cmd = Command::new(&self.binary_path);
        cmd.args(&self.args);

        let output = cmd
            .output()
            .map_err(|e| QuoteGifError::Media(format!("Failed to execute media processor: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(QuoteGifError::Media(format!(
                "{} failed: {}",
                self.description, stderr
            )));
        }

        Ok(())
    }
}

/// Builder for the clip extraction operations
pub struct MediaCommandBuilder {
    binary_path: String,
}

impl MediaCommandBuilder {
    /// Create a new command builder
    pub fn new<S: Into<String>>(binary_path: S) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }

    /// Build the GIF extraction command. The filter chain downsamples the
    /// spatial resolution and runs the two-pass palette so the GIF keeps its
    /// colors instead of dithering to mud.
    pub fn extract_gif<P: AsRef<Path>>(
        &self,
        video_path: P,
        start: &TimeSpec,
        end: &TimeSpec,
        output_path: P,
        fps: u32,
        scale_divisor: u32,
        additional_options: &[String],
    ) -> MediaCommand {
        let filter = format!(
            "fps={fps},scale=iw/{div}:ih/{div}:flags=lanczos,split[s0][s1];[s0]palettegen[p];[s1][p]paletteuse",
            fps = fps,
            div = scale_divisor,
        );

        let mut cmd = MediaCommand::new(&self.binary_path, "GIF extraction")
            .overwrite()
            .input(&video_path)
            .seek(start)
            .stop(end)
            .video_filter(filter)
            .loop_forever();

        // Add user-specified additional options
        for option in additional_options {
            cmd = cmd.arg(option);
        }

        cmd.output(output_path)
    }
}
