use patent_fetch::bench::{default_targets, PathStyle, Target};
use patent_fetch::config::Config;

#[test]
fn page_style_builds_the_legacy_path() {
    let t = Target {
        name: "Legacy",
        base_url: "http://127.0.0.1:8501".into(),
        style: PathStyle::Page,
    };
    assert_eq!(
        t.url("US7654321B2", 3),
        "http://127.0.0.1:8501/patents/US7654321B2/drawings/3"
    );
}

#[test]
fn ocr_style_percent_encodes_the_query() {
    let t = Target {
        name: "New",
        base_url: "http://127.0.0.1:8501/".into(),
        style: PathStyle::OcrSearch,
    };
    assert_eq!(
        t.url("US7654321B2", 3),
        "http://127.0.0.1:8501/patents/US7654321B2/drawings/find?q=figure%203"
    );
}

#[test]
fn official_target_is_configurable() {
    let mut cfg = Config::default();
    cfg.bench.include_official = true;
    assert_eq!(default_targets(&cfg).len(), 3);

    cfg.bench.include_official = false;
    let targets = default_targets(&cfg);
    assert_eq!(targets.len(), 2);
    assert!(targets.iter().all(|t| t.name != "Official"));
}
