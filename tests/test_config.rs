use std::io::Write;
use std::path::PathBuf;

use snake_server::config::{Config, PORT_ENV, STATIC_ROOT_ENV};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.port, 4000);
    assert_eq!(cfg.server.listen_addr(), "0.0.0.0:4000");
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
    assert_eq!(cfg.static_files.page_root, PathBuf::from("."));
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml("server:\n  port: 8080\n").unwrap();

    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
}

#[test]
fn test_config_full_yaml() {
    let yaml = r#"
server:
  host: "127.0.0.1"
  port: 5000
static_files:
  root: "/srv/assets"
  page_root: "/srv/pages"
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr(), "127.0.0.1:5000");
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/assets"));
    assert_eq!(cfg.static_files.page_root, PathBuf::from("/srv/pages"));
}

#[test]
fn test_config_invalid_yaml() {
    assert!(Config::from_yaml("server:\n  port: not-a-port\n").is_err());
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "static_files:\n  root: \"www\"").unwrap();

    let cfg = Config::from_file(file.path()).unwrap();
    assert_eq!(cfg.static_files.root, PathBuf::from("www"));
    assert_eq!(cfg.server.port, 4000);
}

#[test]
fn test_config_missing_file() {
    assert!(Config::from_file("/definitely/not/here.yaml").is_err());
}

#[test]
fn test_config_overrides() {
    let mut cfg = Config::default();
    cfg.apply_overrides(|key| match key {
        PORT_ENV => Some("9000".to_string()),
        STATIC_ROOT_ENV => Some("assets".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.static_files.root, PathBuf::from("assets"));
}

#[test]
fn test_config_invalid_port_override() {
    let mut cfg = Config::default();
    let result = cfg.apply_overrides(|key| (key == PORT_ENV).then(|| "70000".to_string()));

    assert!(result.is_err());
    assert_eq!(cfg.server.port, 4000);
}
