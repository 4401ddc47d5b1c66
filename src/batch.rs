use crate::{
    client::ApiClient,
    config::Config,
    error,
    fetch,
    normalize,
    report::{DrawingReport, PatentReport, RunReport},
    util::now_rfc3339,
};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Run the fetch/convert batch over `patents`, in order.
///
/// Failures are scoped to the smallest unit of work: a bad publication
/// number or a failed listing abandons that patent, a failed drawing fetch
/// abandons only that index. Nothing here aborts the batch; every outcome
/// lands in the returned [`RunReport`].
pub fn run(cfg: &Config, patents: &[String], out_dir: &Path) -> Result<RunReport> {
    // Reject a bad configured format before the first network call.
    fetch::output_format(&cfg.output.format)?;

    let client = ApiClient::new(cfg)?;
    let started = now_rfc3339();

    let mut entries = Vec::new();
    for pn in patents {
        info!("processing {pn}");
        entries.push(process_patent(cfg, &client, pn, out_dir));
    }

    Ok(RunReport {
        started,
        finished: now_rfc3339(),
        patents: entries,
    })
}

fn process_patent(cfg: &Config, client: &ApiClient, pn: &str, out_dir: &Path) -> PatentReport {
    let padded = match normalize::pad_publication_number(pn) {
        Ok(padded) => padded,
        Err(err) => {
            error!("{err}");
            return skipped(pn, None, err.to_string());
        }
    };

    let indices = match client.list_drawings(pn) {
        Ok(indices) => indices,
        Err(err) => {
            error!("failed to list drawings for {pn}: {err}");
            return skipped(pn, Some(padded), err.to_string());
        }
    };

    if indices.is_empty() {
        warn!("no drawings found for {pn}");
        return PatentReport {
            publication_number: pn.to_string(),
            padded: Some(padded),
            skipped: None,
            drawings: Vec::new(),
        };
    }

    info!("found pages {indices:?}");

    let mut drawings = Vec::new();
    for idx in &indices {
        match fetch_one(cfg, client, pn, idx, &padded, out_dir) {
            Ok(path) => {
                info!("saved {}", path.display());
                drawings.push(DrawingReport {
                    index: idx.clone(),
                    ok: true,
                    output: Some(path.display().to_string()),
                    error: None,
                });
            }
            Err(err) => {
                error!("page {idx} of {pn}: {err}");
                drawings.push(DrawingReport {
                    index: idx.clone(),
                    ok: false,
                    output: None,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    PatentReport {
        publication_number: pn.to_string(),
        padded: Some(padded),
        skipped: None,
        drawings,
    }
}

fn fetch_one(
    cfg: &Config,
    client: &ApiClient,
    pn: &str,
    idx: &str,
    padded: &str,
    out_dir: &Path,
) -> error::Result<PathBuf> {
    let bytes = client.fetch_drawing(pn, idx)?;
    fetch::convert_and_save(&bytes, out_dir, padded, idx, &cfg.output.format)
}

fn skipped(pn: &str, padded: Option<String>, reason: String) -> PatentReport {
    PatentReport {
        publication_number: pn.to_string(),
        padded,
        skipped: Some(reason),
        drawings: Vec::new(),
    }
}
