use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub batch: Batch,
    #[serde(default)]
    pub bench: Bench,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Default::default(),
            output: Default::default(),
            batch: Default::default(),
            bench: Default::default(),
            logging: Default::default(),
        }
    }
}

fn default_patents() -> Vec<String> {
    vec![
        "US7654321B2".into(),
        "US10734122B2".into(),
        "US10283223B2".into(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Api {
    pub root: String,
    pub token: String,
    pub timeout_seconds: u64,
}
impl Default for Api {
    fn default() -> Self {
        Self {
            root: "https://api.projectpq.ai".into(),
            token: "".into(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub dir: String,
    pub format: String,
    pub write_report: bool,
    pub report_filename: String,
    pub print_summary: bool,
}
impl Default for Output {
    fn default() -> Self {
        Self {
            dir: "patent_images".into(),
            format: "tiff".into(),
            write_report: true,
            report_filename: "report.json".into(),
            print_summary: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub patents: Vec<String>,
}
impl Default for Batch {
    fn default() -> Self {
        Self {
            patents: default_patents(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bench {
    pub local_root: String,
    pub patents: Vec<String>,
    pub first_index: u32,
    pub last_index: u32,
    pub timeout_seconds: u64,
    pub include_official: bool,
}
impl Default for Bench {
    fn default() -> Self {
        Self {
            local_root: "http://127.0.0.1:8501".into(),
            patents: default_patents(),
            first_index: 1,
            last_index: 5,
            timeout_seconds: 300,
            include_official: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub level: String,
    pub json: bool,
    pub write_to_file: bool,
    pub file_path: String,
}
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            write_to_file: true,
            file_path: "".into(),
        }
    }
}
