use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn flags_and_paths() {
    let config = ScanConfig::from_args(&args(&[
        "a.sql",
        "--no-parallel",
        "dir",
        "-v",
        "--keywords=kw.txt",
    ]))
    .unwrap();
    assert_eq!(
        config,
        ScanConfig {
            paths: vec![PathBuf::from("a.sql"), PathBuf::from("dir")],
            keywords: Some(PathBuf::from("kw.txt")),
            parallel: false,
            verbose: true,
        }
    );
}

#[test]
fn defaults_are_parallel_and_quiet() {
    let config = ScanConfig::from_args(&args(&["x.sql"])).unwrap();
    assert!(config.parallel);
    assert!(!config.verbose);
    assert_eq!(config.keywords, None);
}

#[test]
fn unknown_option_is_rejected() {
    let err = ScanConfig::from_args(&args(&["--fast", "x.sql"])).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownOption(ref opt) if opt == "--fast"));
    assert_eq!(err.to_string(), "unknown option '--fast'");
}

#[test]
fn paths_are_required() {
    let err = ScanConfig::from_args(&args(&["-v"])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingPath));
}

#[test]
fn env_supplies_keyword_file() {
    let config = ScanConfig::from_args(&args(&["x.sql"]))
        .unwrap()
        .with_env(|name| (name == KEYWORDS_ENV).then(|| "env.txt".to_string()));
    assert_eq!(config.keywords, Some(PathBuf::from("env.txt")));
}

#[test]
fn explicit_flag_beats_env() {
    let config = ScanConfig::from_args(&args(&["--keywords=flag.txt", "x.sql"]))
        .unwrap()
        .with_env(|_| Some("env.txt".to_string()));
    assert_eq!(config.keywords, Some(PathBuf::from("flag.txt")));
}

#[test]
fn empty_env_value_is_ignored() {
    let config = ScanConfig::from_args(&args(&["x.sql"]))
        .unwrap()
        .with_env(|_| Some(String::new()));
    assert_eq!(config.keywords, None);
}

#[test]
fn builtin_keywords_when_unset() {
    let config = ScanConfig::from_args(&args(&["x.sql"])).unwrap();
    let keywords = config.load_keywords().unwrap();
    assert!(keywords.contains("SELECT"));
    assert!(keywords.contains("elsif"));
    assert!(!keywords.contains("customer"));
}

#[test]
fn keyword_file_is_parsed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# custom dialect").unwrap();
    writeln!(file, "qualify, pivot").unwrap();
    let config = ScanConfig {
        keywords: Some(file.path().to_path_buf()),
        ..ScanConfig::default()
    };
    let keywords = config.load_keywords().unwrap();
    assert_eq!(keywords.len(), 2);
    assert!(keywords.contains("QUALIFY"));
    assert!(!keywords.contains("select"));
}

#[test]
fn missing_keyword_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let config = ScanConfig {
        keywords: Some(path.clone()),
        ..ScanConfig::default()
    };
    let err = config.load_keywords().unwrap_err();
    assert!(matches!(err, ConfigError::Keywords { path: ref p, .. } if *p == path));
    assert!(err.to_string().contains("absent.txt"));
}
