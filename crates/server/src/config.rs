use std::{fs, io, path::Path, str::FromStr, sync::Arc};

use anyhow::{anyhow, bail, Context};
use policy_core::{HttpSink, LogSink, SubmissionSink, DEFAULT_RESPONSE_WINDOW};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Log,
    Http,
}

impl FromStr for SinkKind {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "log" => Ok(SinkKind::Log),
            "http" => Ok(SinkKind::Http),
            other => Err(anyhow!("unknown sink '{other}'; expected 'log' or 'http'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub sink: SinkKind,
    pub forward_url: Option<String>,
    pub response_window: String,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            sink: SinkKind::Log,
            forward_url: None,
            response_window: DEFAULT_RESPONSE_WINDOW.into(),
            max_body_bytes: 16 * 1024,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    sink: Option<String>,
    forward_url: Option<String>,
    response_window: Option<String>,
    max_body_bytes: Option<usize>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the toml file if present, then environment overrides.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse '{}'", path.display()))?,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => {
            return Err(error).with_context(|| format!("failed to read '{}'", path.display()))
        }
    }

    apply_env(&mut settings, env)?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.sink {
        settings.sink = v.parse()?;
    }
    if let Some(v) = file_cfg.forward_url {
        settings.forward_url = Some(v);
    }
    if let Some(v) = file_cfg.response_window {
        settings.response_window = v;
    }
    if let Some(v) = file_cfg.max_body_bytes {
        settings.max_body_bytes = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("APP__SINK") {
        settings.sink = v.parse().context("invalid APP__SINK")?;
    }
    if let Some(v) = env("APP__FORWARD_URL") {
        settings.forward_url = Some(v);
    }
    if let Some(v) = env("APP__RESPONSE_WINDOW") {
        settings.response_window = v;
    }
    if let Some(v) = env("APP__MAX_BODY_BYTES") {
        settings.max_body_bytes = v
            .parse()
            .with_context(|| format!("invalid APP__MAX_BODY_BYTES '{v}'"))?;
    }
    Ok(())
}

pub fn build_sink(settings: &Settings) -> anyhow::Result<Arc<dyn SubmissionSink>> {
    match settings.sink {
        SinkKind::Log => Ok(Arc::new(LogSink)),
        SinkKind::Http => {
            let Some(url) = settings.forward_url.as_deref() else {
                bail!("sink 'http' requires forward_url");
            };
            Ok(Arc::new(HttpSink::new(url)?))
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
