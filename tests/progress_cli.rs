use assert_cmd::Command;

mod support;

const MAP: &str = "\
0x80010000      main    src/main.c
0x80010040      func_80010040   asm/main/func_80010040.s
";

#[test]
fn test_progress_json() {
    let map = support::write_temp("map", MAP);
    let bin = support::write_temp("bin", "xxxxxxxx");

    let assert = Command::cargo_bin("psx-common")
        .unwrap()
        .arg("progress")
        .arg(&map)
        .arg(&bin)
        .arg("--json")
        .assert()
        .success();

    let v: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(v["total_functions"], 2);
    assert_eq!(v["decompiled_functions"], 1);
    assert_eq!(v["total_bytes"], 8);
    assert_eq!(v["decompiled_bytes"], 4);
}

#[test]
fn test_progress_text() {
    let map = support::write_temp("map", MAP);
    let bin = support::write_temp("bin", "xxxxxxxx");

    let assert = Command::cargo_bin("psx-common")
        .unwrap()
        .arg("progress")
        .arg(&map)
        .arg(&bin)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Decompilation Progress"));
    assert!(stdout.contains("(50.0%)"));
}

#[test]
fn test_progress_missing_map_fails() {
    Command::cargo_bin("psx-common")
        .unwrap()
        .arg("progress")
        .arg("no/such/file.map")
        .arg("no/such/file.bin")
        .assert()
        .failure();
}
