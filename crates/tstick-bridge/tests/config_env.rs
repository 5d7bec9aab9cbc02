use std::collections::HashMap;
use std::net::IpAddr;

use tstick_bridge::config;

fn lookup<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| map.get(key).map(|v| v.to_string())
}

#[test]
fn ok_minimal_config() {
    let env = HashMap::from([("OSC_PORT", "8001")]);
    let cfg = config::from_lookup(lookup(&env)).expect("must parse");
    assert_eq!(cfg.osc_port, 8001);
    assert_eq!(cfg.exporter_port, 8000);
    assert_eq!(cfg.bind_address, IpAddr::from([127, 0, 0, 1]));
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn all_keys_override_defaults() {
    let env = HashMap::from([
        ("OSC_PORT", "9001"),
        ("EXPORTER_PORT", "9100"),
        ("BIND_ADDRESS", "0.0.0.0"),
        ("EXPORTER_LOG_LEVEL", "DEBUG"),
    ]);
    let cfg = config::from_lookup(lookup(&env)).expect("must parse");
    assert_eq!(cfg.osc_port, 9001);
    assert_eq!(cfg.exporter_port, 9100);
    assert_eq!(cfg.bind_address, IpAddr::from([0, 0, 0, 0]));
    // Levels are normalized to lowercase for the tracing filter.
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn missing_osc_port_fails() {
    let env = HashMap::new();
    let err = config::from_lookup(lookup(&env)).expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}

#[test]
fn rejects_bad_values() {
    for (key, value) in [
        ("OSC_PORT", "not-a-port"),
        ("OSC_PORT", "0"),
        ("EXPORTER_PORT", "70000"),
        ("BIND_ADDRESS", "localhost"),
        ("EXPORTER_LOG_LEVEL", "loud"),
    ] {
        let mut env = HashMap::from([("OSC_PORT", "8001")]);
        env.insert(key, value);
        let err = config::from_lookup(lookup(&env)).expect_err("must fail");
        assert_eq!(err.code(), "BAD_CONFIG", "key={key} value={value}");
    }
}

#[test]
fn file_value_beats_plain_variable_and_is_trimmed() {
    let env = HashMap::from([
        ("FILE__OSC_PORT", "/run/secrets/osc_port"),
        ("OSC_PORT", "1111"),
    ]);
    let mut warnings = Vec::new();
    let value = config::resolve(
        "OSC_PORT",
        lookup(&env),
        |path| {
            assert_eq!(path, "/run/secrets/osc_port");
            Ok(" 9001\n".to_string())
        },
        &mut warnings,
    );
    assert_eq!(value.as_deref(), Some("9001"));
    assert!(warnings.is_empty());
}

#[test]
fn unreadable_file_warns_and_falls_through_to_plain_variable() {
    let env = HashMap::from([
        ("FILE__OSC_PORT", "/run/secrets/missing"),
        ("OSC_PORT", "1111"),
    ]);
    let mut warnings = Vec::new();
    let value = config::resolve(
        "OSC_PORT",
        lookup(&env),
        |_| Err(std::io::Error::from(std::io::ErrorKind::NotFound)),
        &mut warnings,
    );
    assert_eq!(value.as_deref(), Some("1111"));
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("/run/secrets/missing"), "{}", warnings[0]);
}

#[test]
fn file_indirection_reads_a_real_file() {
    let path = std::env::temp_dir().join("tstick_bridge_config_env_osc_port");
    std::fs::write(&path, "9002\n").expect("write temp file");
    let path_str = path.to_string_lossy().to_string();

    let env = HashMap::from([("FILE__OSC_PORT", path_str.as_str())]);
    let mut warnings = Vec::new();
    let cfg = config::from_lookup(|key| {
        config::resolve(key, lookup(&env), |p: &str| std::fs::read_to_string(p), &mut warnings)
    })
    .expect("must parse");

    assert_eq!(cfg.osc_port, 9002);
    assert!(warnings.is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn colliding_ports_fail_validation() {
    let env = HashMap::from([("OSC_PORT", "8000"), ("EXPORTER_PORT", "8000")]);
    let err = config::from_lookup(lookup(&env)).expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}
