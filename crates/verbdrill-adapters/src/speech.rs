//! Text-to-speech through an external program (espeak-ng by default).

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::instrument;

use verbdrill_core::traits::{Speaker, SpeechRequest};

use crate::error::AdapterError;

pub const DEFAULT_PROGRAM: &str = "espeak-ng";

/// Default argument template for espeak-ng.
pub fn default_args() -> Vec<String> {
    ["-v", "{voice}", "-a", "{amplitude}", "-s", "{speed}", "-p", "{pitch}", "{text}"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Runs `program args...` once per utterance.
///
/// Arguments are templates. Supported placeholders:
/// `{text}`, `{lang}` (e.g. `de-DE`), `{voice}` (primary subtag, e.g. `de`),
/// `{amplitude}` (volume × 100), `{speed}` (rate × 175 wpm),
/// `{pitch}` (pitch × 50).
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
        }
    }

    pub fn espeak() -> Self {
        Self::new(DEFAULT_PROGRAM, default_args())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Expand the argument templates for one request.
    pub fn render_args(&self, request: &SpeechRequest) -> Vec<String> {
        let voice = request
            .language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let amplitude = ((request.volume * 100.0).round() as i64).to_string();
        let speed = ((request.rate * 175.0).round() as i64).to_string();
        let pitch = ((request.pitch * 50.0).round() as i64).to_string();

        self.args
            .iter()
            .map(|arg| {
                arg.replace("{text}", &request.text)
                    .replace("{lang}", &request.language)
                    .replace("{voice}", &voice)
                    .replace("{amplitude}", &amplitude)
                    .replace("{speed}", &speed)
                    .replace("{pitch}", &pitch)
            })
            .collect()
    }

    fn error(&self, message: impl Into<String>) -> AdapterError {
        AdapterError::SpeechCommand {
            program: self.program.clone(),
            message: message.into(),
        }
    }
}

/// Locate `program` the way a shell would.
fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|p| p.is_file())
}

#[async_trait]
impl Speaker for CommandSpeaker {
    fn name(&self) -> &str {
        &self.program
    }

    async fn init(&self) -> anyhow::Result<()> {
        if find_program(&self.program).is_none() {
            return Err(self.error("program not found on PATH").into());
        }
        Ok(())
    }

    #[instrument(skip(self, request), fields(program = %self.program, text = %request.text))]
    async fn speak(&self, request: &SpeechRequest) -> anyhow::Result<()> {
        let output = Command::new(&self.program)
            .args(self.render_args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| self.error(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self
                .error(format!("exited with {}: {}", output.status, stderr.trim()))
                .into());
        }
        Ok(())
    }
}
