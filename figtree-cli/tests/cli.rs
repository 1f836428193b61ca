use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

fn sample_node() -> &'static str {
    r#"{
        "id": "1:2",
        "name": "Landing Page",
        "type": "FRAME",
        "children": [
            {
                "id": "1:3",
                "name": "Hero",
                "type": "FRAME",
                "itemSpacing": 16.0,
                "children": [
                    {"id": "1:4", "name": "Title", "type": "TEXT", "characters": "Welcome"}
                ]
            }
        ]
    }"#
}

#[test]
fn analyzes_a_local_node_tree() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("node.json");
    fs::write(&input, sample_node()).unwrap();
    let out = dir.path().join("generated");

    let mut cmd = cargo_bin_cmd!("figtree");
    cmd.arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("complete_analysis_full.json").is_file());
    assert!(out.join("frames/root_frame.json").is_file());
    assert!(out.join("frames/root_hero.json").is_file());
    assert!(out.join("frames/FRAMES_INDEX.md").is_file());
    assert!(out.join("frames_metadata.json").is_file());
    assert!(out.join("smart_prompts/main_structure.txt").is_file());
    assert!(out.join("smart_prompts/design_tokens.txt").is_file());
    assert!(out.join("smart_prompts/SMART_INSTRUCTIONS.md").is_file());

    let analysis = fs::read_to_string(out.join("complete_analysis_full.json")).unwrap();
    assert!(analysis.contains("\"total_elements\": 3"));

    let structure = fs::read_to_string(out.join("smart_prompts/main_structure.txt")).unwrap();
    assert!(structure.contains("# MAIN STRUCTURE: Landing Page"));
}

#[test]
fn no_prompts_flag_skips_the_pack() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("node.json");
    fs::write(&input, sample_node()).unwrap();
    let out = dir.path().join("generated");

    let mut cmd = cargo_bin_cmd!("figtree");
    cmd.arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--no-prompts")
        .assert()
        .success();

    assert!(out.join("frames/root_frame.json").is_file());
    assert!(!out.join("smart_prompts").exists());
}

#[test]
fn missing_credentials_fail_with_guidance() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("figtree");
    cmd.current_dir(dir.path())
        .env_remove("FIGTREE_FIGMA__ACCESS_TOKEN")
        .arg("--out")
        .arg(dir.path().join("generated"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("figma.access_token"));
}

#[test]
fn unreadable_input_is_reported() {
    let mut cmd = cargo_bin_cmd!("figtree");
    cmd.arg("--input")
        .arg("/nonexistent/node.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
