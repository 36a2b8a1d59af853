use std::fs;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn extensions_match_ignoring_case() {
    assert!(is_sql_source(Path::new("a.sql")));
    assert!(is_sql_source(Path::new("pkg/body.PKB")));
    assert!(is_sql_source(Path::new("header.pks")));
    assert!(is_sql_source(Path::new("proc.pls")));
    assert!(!is_sql_source(Path::new("notes.txt")));
    assert!(!is_sql_source(Path::new("sql")));
}

#[test]
fn walks_directories_and_skips_hidden() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("nested/deeper")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("target")).unwrap();
    for file in [
        "b.sql",
        "a.pls",
        "readme.md",
        "nested/c.pkb",
        "nested/deeper/d.sql",
        ".git/e.sql",
        "target/f.sql",
        ".hidden.sql",
    ] {
        fs::write(root.join(file), "select 1;").unwrap();
    }

    let found = discover_sources(&[root.to_path_buf()]);
    let relative: Vec<_> = found
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        relative,
        [
            PathBuf::from("a.pls"),
            PathBuf::from("b.sql"),
            PathBuf::from("nested/c.pkb"),
            PathBuf::from("nested/deeper/d.sql"),
        ]
    );
}

#[test]
fn explicit_files_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let listed = dir.path().join("script.txt");
    let missing = dir.path().join("missing.sql");
    fs::write(&listed, "x").unwrap();

    let found = discover_sources(&[listed.clone(), missing.clone()]);
    assert_eq!(found, [listed, missing]);
}
