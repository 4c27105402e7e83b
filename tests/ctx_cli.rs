use assert_cmd::Command;

#[test]
fn test_ctx_missing_input_fails() {
    let assert = Command::cargo_bin("psx-common")
        .unwrap()
        .arg("ctx")
        .arg("definitely/not/here.h")
        .assert()
        .failure();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("File not found"));
}
