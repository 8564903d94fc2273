mod common;

use common::TestResult;
use common::fixtures::*;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

fn anchormap() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_anchormap"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_extract_prints_anchor_list() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("lesson.html");
    fs::write(&input, lesson_xhtml())?;

    let output = anchormap().arg("extract").arg(&input).output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let anchors: Value = serde_json::from_slice(&output.stdout)?;
    let ids: Vec<&str> = anchors
        .as_array()
        .ok_or("expected a JSON array")?
        .iter()
        .filter_map(|a| a["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["ref-h-gioi-thieu", "ref-p-1", "ref-eq-1", "ref-p-2"]);
    Ok(())
}

#[test]
fn test_extract_writes_files_and_tree() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("exercise.json");
    fs::write(&input, lesson_hast().to_string())?;
    let out_dir = dir.path().join("out");

    let status = anchormap()
        .arg("extract")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--tree")
        .status()?;
    assert!(status.success());

    let anchors: Value = serde_json::from_str(&fs::read_to_string(
        out_dir.join("exercise.anchors.json"),
    )?)?;
    assert_eq!(anchors[0]["id"], "ref-h-bai-tap");

    let tree: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("exercise.anchored.json"))?)?;
    assert_eq!(tree["children"][2]["properties"]["id"], "ref-eq-1");
    Ok(())
}

#[test]
fn test_extract_reports_failed_inputs() -> TestResult {
    let dir = tempfile::tempdir()?;
    let good = dir.path().join("good.html");
    fs::write(&good, lesson_xhtml())?;
    let bad = dir.path().join("bad.html");
    fs::write(&bad, "<p>unclosed")?;
    let out_dir = dir.path().join("out");

    let status = anchormap()
        .arg("extract")
        .arg(&good)
        .arg(&bad)
        .arg("--out-dir")
        .arg(&out_dir)
        .status()?;
    assert!(!status.success());
    assert!(out_dir.join("good.anchors.json").exists());
    assert!(!out_dir.join("bad.anchors.json").exists());
    Ok(())
}

#[test]
fn test_resolve_from_stdin() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("lesson.html");
    fs::write(&input, lesson_xhtml())?;
    let out_dir = dir.path().join("out");
    let status = anchormap()
        .arg("extract")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .status()?;
    assert!(status.success());

    let mut child = anchormap()
        .arg("resolve")
        .arg("--anchors")
        .arg(out_dir.join("lesson.anchors.json"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not piped")?
        .write_all(b"See [ref:ref-p-2] and [ref:nope].")?;
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "See [Đoạn 2](#ref-ref-p-2) and [ref:nope]."
    );
    Ok(())
}

#[test]
fn test_resolve_accepts_metadata_object() -> TestResult {
    let dir = tempfile::tempdir()?;
    let metadata = dir.path().join("page.json");
    fs::write(
        &metadata,
        r#"{"astro":{"frontmatter":{"anchorMap":[
            {"id":"ref-eq-3","label":"Phương trình 3","type":"equation","preview":"a+b"}
        ]}}}"#,
    )?;
    let text = dir.path().join("answer.md");
    fs::write(&text, "[ref:ref-eq-3]")?;

    let output = anchormap()
        .arg("resolve")
        .arg("--anchors")
        .arg(&metadata)
        .arg(&text)
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "[Phương trình 3](#ref-ref-eq-3)");
    Ok(())
}

#[test]
fn test_extract_prints_inputs_in_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let second = dir.path().join("z-lesson.html");
    fs::write(&second, lesson_xhtml())?;
    let first = dir.path().join("a-exercise.json");
    fs::write(&first, lesson_hast().to_string())?;

    let output = anchormap().arg("extract").arg(&second).arg(&first).output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let printed: Value = serde_json::from_slice(&output.stdout)?;
    let entries = printed.as_array().ok_or("expected a JSON array")?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["input"], second.display().to_string());
    assert_eq!(entries[0]["anchors"][0]["id"], "ref-h-gioi-thieu");
    assert_eq!(entries[1]["input"], first.display().to_string());
    assert_eq!(entries[1]["anchors"][0]["id"], "ref-h-bai-tap");
    Ok(())
}

#[test]
fn test_extract_rejects_colliding_output_names() -> TestResult {
    let dir = tempfile::tempdir()?;
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::create_dir_all(&a)?;
    fs::create_dir_all(&b)?;
    fs::write(a.join("lesson.html"), lesson_xhtml())?;
    fs::write(b.join("lesson.json"), lesson_hast().to_string())?;
    let out_dir = dir.path().join("out");

    let output = anchormap()
        .arg("extract")
        .arg(a.join("lesson.html"))
        .arg(b.join("lesson.json"))
        .arg("--out-dir")
        .arg(&out_dir)
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("lesson.anchors.json"));
    assert!(!out_dir.join("lesson.anchors.json").exists());
    Ok(())
}
