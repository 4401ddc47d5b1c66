use crate::{
    config::Config,
    report::{BenchSample, TargetSummary},
};
use anyhow::Result;
use reqwest::blocking::Client;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub enum PathStyle {
    /// Legacy page-based endpoint: `/patents/{pn}/drawings/{idx}`.
    Page,
    /// OCR/search endpoint: `/patents/{pn}/drawings/find?q=figure {idx}`.
    /// Its response schema is assumed compatible with the page endpoint;
    /// only the status code is consumed here.
    OcrSearch,
}

pub struct Target {
    pub name: &'static str,
    pub base_url: String,
    pub style: PathStyle,
}

impl Target {
    pub fn url(&self, pn: &str, idx: u32) -> String {
        let base = self.base_url.trim_end_matches('/');
        match self.style {
            PathStyle::Page => format!("{base}/patents/{pn}/drawings/{idx}"),
            // The query value is "figure {idx}"; the index is numeric, so the
            // space is the only character that needs escaping.
            PathStyle::OcrSearch => format!("{base}/patents/{pn}/drawings/find?q=figure%20{idx}"),
        }
    }
}

pub fn default_targets(cfg: &Config) -> Vec<Target> {
    let mut targets = vec![
        Target {
            name: "Legacy",
            base_url: cfg.bench.local_root.clone(),
            style: PathStyle::Page,
        },
        Target {
            name: "New",
            base_url: cfg.bench.local_root.clone(),
            style: PathStyle::OcrSearch,
        },
    ];
    if cfg.bench.include_official {
        targets.push(Target {
            name: "Official",
            base_url: cfg.api.root.clone(),
            style: PathStyle::Page,
        });
    }
    targets
}

/// Time every (patent, index) pair against each named target, printing each
/// sample as it completes, then per-target totals and pairwise differences.
pub fn run(cfg: &Config) -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(cfg.bench.timeout_seconds))
        .build()?;

    let mut summaries = Vec::new();
    for target in default_targets(cfg) {
        summaries.push(run_target(cfg, &client, &target));
    }

    print_summary(&summaries);
    Ok(())
}

fn run_target(cfg: &Config, client: &Client, target: &Target) -> TargetSummary {
    println!("\n=== Benchmarking {} ===", target.name);
    let mut summary = TargetSummary::new(target.name);

    for pn in &cfg.bench.patents {
        for idx in cfg.bench.first_index..=cfg.bench.last_index {
            let url = target.url(pn, idx);

            let t0 = Instant::now();
            // Timed section covers the full body, not just the headers.
            let outcome = client.get(&url).send().and_then(|resp| {
                let status = resp.status();
                resp.bytes().map(|_| status)
            });
            let seconds = t0.elapsed().as_secs_f64();

            let status = match outcome {
                Ok(status) => status.as_u16().to_string(),
                Err(err) => format!("ERR: {err}"),
            };

            println!(
                "{:>8} {} [{}] -> {:.3}s (status {})",
                target.name, pn, idx, seconds, status
            );
            summary.record(BenchSample {
                patent: pn.clone(),
                index: idx,
                seconds,
                status,
            });
        }
    }

    println!(
        "[{} total] {} calls in {:.3}s  avg {:.3}s",
        summary.name,
        summary.calls,
        summary.total_seconds,
        summary.average_seconds()
    );
    summary
}

fn print_summary(summaries: &[TargetSummary]) {
    println!("\n=== Summary ===");
    for s in summaries {
        println!("  {:<10} {:.3}s for {} calls", s.name, s.total_seconds, s.calls);
    }
    for i in 0..summaries.len() {
        for j in (i + 1)..summaries.len() {
            let (a, b) = (&summaries[i], &summaries[j]);
            println!(
                "  {} - {}: {:+.3}s",
                a.name,
                b.name,
                a.total_seconds - b.total_seconds
            );
        }
    }
}
