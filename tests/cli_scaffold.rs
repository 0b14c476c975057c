use std::fs;

use predicates::prelude::*;

#[test]
fn no_arguments_scaffolds_builtin_outline_under_default_root() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tutorial-scaffold");
    cmd.current_dir(temp.path())
        .assert()
        .success()
        .stdout(
            "✅ Tutorial structure created successfully!\n\
Total parts: 10\n\
Total chapters: 25\n\
Total lessons: 78\n",
        );

    let root = temp.path().join("src/content/tutorial");
    assert_eq!(
        fs::read_to_string(root.join("1-fundamentals/meta.md"))?,
        "---\ntype: part\ntitle: \"Part 1: Node.js Fundamentals\"\n---\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("1-fundamentals/1-getting-started/meta.md"))?,
        "---\ntype: chapter\ntitle: \"Chapter 1: Getting Started\"\n---\n"
    );

    let lesson_dir = root.join("1-fundamentals/1-getting-started/5-command-line-options");
    let content = fs::read_to_string(lesson_dir.join("content.md"))?;
    assert!(content.contains("title: Command Line Options\n"));
    assert!(content.contains("> This lesson covers the Node.js **Command Line Options** API.\n"));
    assert_eq!(
        fs::read_to_string(lesson_dir.join("_files/index.js"))?,
        "// Command Line Options example\nconsole.log('Learning Command Line Options!');\n\n// Add your code here\n"
    );
    assert_eq!(
        fs::read_to_string(lesson_dir.join("_files/package.json"))?,
        "{\n  \"name\": \"nodejs-1-fundamentals\",\n  \"type\": \"module\",\n  \"version\": \"1.0.0\"\n}\n"
    );

    assert!(
        root.join("10-native-and-advanced/3-advanced-deployment/3-deprecated-apis/content.md")
            .is_file()
    );
    Ok(())
}

#[test]
fn generate_honours_root_and_outline_flags() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let outline_path = temp.path().join("outline.yaml");
    fs::write(
        &outline_path,
        "parts:\n\
  - part: 1-net\n\
    title: \"Part 1: Net\"\n\
    chapters:\n\
      - chapter: 1-protocols\n\
        title: \"Chapter 1: Protocols\"\n\
        lessons: [dns, tls-ssl]\n",
    )?;
    let root = temp.path().join("site");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tutorial-scaffold");
    cmd.args([
        "generate",
        "--root",
        root.to_str().unwrap(),
        "--outline",
        outline_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Total parts: 1\n"))
    .stdout(predicate::str::contains("Total chapters: 1\n"))
    .stdout(predicate::str::contains("Total lessons: 2\n"));

    let content = fs::read_to_string(root.join("1-net/1-protocols/1-dns/content.md"))?;
    assert!(content.contains("# Dns\n"));
    assert!(root.join("1-net/1-protocols/2-tls-ssl/_files/index.js").is_file());
    Ok(())
}

#[test]
fn invalid_outline_fails_before_writing_anything() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let outline_path = temp.path().join("outline.yaml");
    fs::write(
        &outline_path,
        "parts:\n\
  - part: 1-net\n\
    title: Net\n\
    chapters:\n\
      - chapter: 1-protocols\n\
        title: Protocols\n\
        lessons: [dns, dns]\n",
    )?;
    let root = temp.path().join("site");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tutorial-scaffold");
    cmd.args([
        "generate",
        "--root",
        root.to_str().unwrap(),
        "--outline",
        outline_path.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("duplicate lesson"));

    assert!(!root.exists());
    Ok(())
}

#[test]
fn filesystem_conflict_exits_with_failure() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let root = temp.path().join("site");
    fs::create_dir_all(&root)?;
    fs::write(root.join("1-fundamentals"), "in the way")?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tutorial-scaffold");
    cmd.args(["generate", "--root", root.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("created successfully").not())
        .stderr(predicate::str::contains("create part dir"));
    Ok(())
}

#[test]
fn outline_prints_builtin_outline_as_yaml() -> anyhow::Result<()> {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tutorial-scaffold");
    let output = cmd.args(["outline"]).assert().success().get_output().clone();

    let yaml = String::from_utf8(output.stdout)?;
    let outline: tutorial_scaffold::outline::Outline = serde_yaml::from_str(&yaml)?;
    assert_eq!(outline, tutorial_scaffold::outline::Outline::builtin());
    Ok(())
}

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() {
    let temp = tempfile::TempDir::new().expect("create temp dir");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tutorial-scaffold");
    cmd.current_dir(temp.path())
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"))
        .stderr(predicate::str::contains("lesson created"));
}
