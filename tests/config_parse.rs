use patent_fetch::config::Config;

#[test]
fn parse_example_config() {
    let raw = include_str!("../patent-fetch.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.api.timeout_seconds, 30);
    assert_eq!(cfg.bench.timeout_seconds, 300);
    assert!(!cfg.batch.patents.is_empty());
}

#[test]
fn defaults_match_the_hosted_api() {
    let cfg = Config::default();
    assert_eq!(cfg.api.root, "https://api.projectpq.ai");
    assert_eq!(cfg.output.dir, "patent_images");
    assert_eq!(cfg.output.format, "tiff");
    assert_eq!(cfg.bench.first_index, 1);
    assert_eq!(cfg.bench.last_index, 5);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: Config = toml::from_str("").expect("parse TOML");
    assert_eq!(cfg.api.timeout_seconds, 30);
    assert_eq!(cfg.output.dir, "patent_images");
    assert!(!cfg.bench.patents.is_empty());
}
