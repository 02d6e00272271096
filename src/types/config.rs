use crate::error::SentimentError;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentimentConfig {
    pub server: Option<ServerConfig>,
    pub model: Option<ModelConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: Option<String>,
    pub max_body_bytes: Option<usize>,
    pub read_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Lexicon,
    Keyword,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub engine: Option<Engine>,
    pub keyword_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<Format>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub addr: String,
    pub max_body_bytes: usize,
    pub read_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:5000".to_string(),
            max_body_bytes: 64 * 1024,
            read_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    pub engine: Engine,
    pub keyword_path: Option<PathBuf>,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            engine: Engine::Lexicon,
            keyword_path: None,
        }
    }
}

impl SentimentConfig {
    pub fn server_settings(&self) -> ServerSettings {
        let defaults = ServerSettings::default();
        match &self.server {
            Some(server) => ServerSettings {
                addr: server.addr.clone().unwrap_or(defaults.addr),
                max_body_bytes: server.max_body_bytes.unwrap_or(defaults.max_body_bytes),
                read_timeout_secs: server
                    .read_timeout_secs
                    .unwrap_or(defaults.read_timeout_secs),
            },
            None => defaults,
        }
    }

    pub fn model_settings(&self) -> ModelSettings {
        let defaults = ModelSettings::default();
        match &self.model {
            Some(model) => ModelSettings {
                engine: model.engine.unwrap_or(defaults.engine),
                keyword_path: model.keyword_path.as_ref().map(PathBuf::from),
            },
            None => defaults,
        }
    }

    pub fn report_format(&self) -> Format {
        self.report
            .as_ref()
            .and_then(|report| report.format)
            .unwrap_or(Format::Json)
    }

    pub fn validate(&self) -> Result<(), SentimentError> {
        if let Some(server) = &self.server {
            if let Some(addr) = &server.addr {
                let port = addr.rsplit_once(':').map(|(_, port)| port);
                if addr.trim().is_empty()
                    || !matches!(port.map(str::parse::<u16>), Some(Ok(_)))
                {
                    return Err(SentimentError::ConfigParse(format!(
                        "server.addr must be host:port (found {addr:?})"
                    )));
                }
            }
            if server.max_body_bytes == Some(0) {
                return Err(SentimentError::ConfigParse(
                    "server.max_body_bytes must be greater than 0".to_string(),
                ));
            }
            if server.read_timeout_secs == Some(0) {
                return Err(SentimentError::ConfigParse(
                    "server.read_timeout_secs must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(path) = self
            .model
            .as_ref()
            .and_then(|model| model.keyword_path.as_ref())
        {
            if path.trim().is_empty() {
                return Err(SentimentError::ConfigParse(
                    "model.keyword_path must be non-empty when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}
