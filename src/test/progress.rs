use crate::progress::{scan_map, MapSummary, Progress};

const MAP: &str = "\
Allocating common symbols
0x80010000      main    src/main.c
0x80010040      update_camera   src/camera.c
0x80010100      func_80010100   asm/nonmatchings/camera/func_80010100.s
0x80010200      DrawSync        asm/libs/libgpu.s
";

#[test]
fn test_scan_counts() {
    let summary = scan_map(MAP);
    assert_eq!(summary.from_c.len(), 2);
    assert_eq!(summary.from_asm.len(), 2);
}

#[test]
fn test_scan_fields() {
    let summary = scan_map(MAP);
    assert_eq!(summary.from_c[0].name, "main");
    assert_eq!(summary.from_c[0].addr, 0x80010000);
    assert_eq!(summary.from_c[1].source, "src/camera.c");
    assert_eq!(summary.from_asm[1].name, "DrawSync");
    assert_eq!(summary.from_asm[1].source, "asm/libs/libgpu.s");
}

#[test]
fn test_scan_ignores_other_lines() {
    let summary = scan_map("Memory map\n\n .text 0x80010000 0x4000\n");
    assert_eq!(summary.from_c.len(), 0);
    assert_eq!(summary.from_asm.len(), 0);
}

#[test]
fn test_progress_numbers() {
    let p = Progress::calculate(&scan_map(MAP), 2048);
    assert_eq!(p.total_functions, 4);
    assert_eq!(p.decompiled_functions, 2);
    assert_eq!(p.function_percent, 50.0);
    assert_eq!(p.total_bytes, 2048);
    assert_eq!(p.decompiled_bytes, 1024);
    assert_eq!(p.byte_percent, 50.0);
}

#[test]
fn test_progress_empty_map() {
    let p = Progress::calculate(&MapSummary::default(), 123);
    assert_eq!(p.total_functions, 0);
    assert_eq!(p.function_percent, 0.0);
    assert_eq!(p.total_bytes, 123);
    assert_eq!(p.decompiled_bytes, 0);
}

#[test]
fn test_progress_json_fields() {
    let p = Progress::calculate(&scan_map(MAP), 2048);
    let v: serde_json::Value = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
    assert_eq!(v["total_functions"], 4);
    assert_eq!(v["decompiled_functions"], 2);
    assert_eq!(v["byte_percent"], 50.0);
}

#[test]
fn test_render_contains_bar() {
    let text = format!("{}", Progress::calculate(&scan_map(MAP), 2048));
    assert!(text.contains("Decompilation Progress"));
    assert!(text.contains("(50.0%)"));
    // half of the 40-cell bar is filled
    assert!(text.contains(&format!("{}{}", "█".repeat(20), "░".repeat(20))));
}
