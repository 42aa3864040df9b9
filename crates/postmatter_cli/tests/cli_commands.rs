use assert_cmd::Command;
use std::fs;

fn postmatter() -> Command {
    let mut command = Command::cargo_bin("postmatter").unwrap();
    command.env_remove("POSTMATTER_LOG_DIR");
    command
}

#[test]
fn parse_prints_well_known_and_extension_fields() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("post.md");
    fs::write(
        &file,
        "+++\ntitle = 'Hi'\ndraft = true\ntags = ['x', 'y']\nweight = 4\n+++\nBody",
    )
    .unwrap();

    let output = postmatter().arg("parse").arg(&file).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("format=toml\n"));
    assert!(stdout.contains("title=Hi\n"));
    assert!(stdout.contains("tags=[x, y]\n"));
    assert!(stdout.contains("weight=4\n"));
}

#[test]
fn parse_json_exposes_record_shape() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("post.md");
    fs::write(&file, "---\ntitle: \"Hello\"\ndate: 2024-01-01\n---\nBody").unwrap();

    let output = postmatter()
        .args(["parse", "--json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["format"], "yaml");
    assert_eq!(value["front_matter"]["title"], "Hello");
    assert_eq!(value["front_matter"]["date"], "2024-01-01T00:00:00.000Z");
    assert_eq!(value["body"], "Body");
}

#[test]
fn convert_writes_target_dialect_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("post.md");
    fs::write(&file, "---\ntitle: \"Port\"\ndate: 2024-06-01\n---\nBody").unwrap();

    postmatter()
        .args(["convert", "--to", "toml", "--write"])
        .arg(&file)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "+++\ntitle = 'Port'\ndate = '2024-06-01T00:00:00.000Z'\ndraft = true\ntags = []\ncategories = []\n+++\nBody"
    );
}

#[test]
fn convert_rejects_unknown_dialect() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("post.md");
    fs::write(&file, "Body").unwrap();

    postmatter()
        .args(["convert", "--to", "json"])
        .arg(&file)
        .assert()
        .failure();
}

#[test]
fn new_writes_starter_post_once() {
    let dir = tempfile::tempdir().unwrap();

    postmatter()
        .args(["new", "My First Post", "--project"])
        .arg(dir.path())
        .assert()
        .success();

    let path = dir.path().join("content/posts/my-first-post.md");
    let document = fs::read_to_string(&path).unwrap();
    assert!(document.starts_with("---\ntitle: \"My First Post\"\n"));
    assert!(document.contains("draft: true\n"));

    postmatter()
        .args(["new", "My First Post", "--project"])
        .arg(dir.path())
        .assert()
        .failure();
}

#[test]
fn themes_lists_catalog_and_fields() {
    let output = postmatter().arg("themes").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.starts_with("stack\t"));

    let output = postmatter()
        .args(["themes", "--theme", "docsy"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("linkTitle\ttext\toptional\t\n"));
    assert!(stdout.contains("draft\tboolean\toptional\ttrue\n"));
}
