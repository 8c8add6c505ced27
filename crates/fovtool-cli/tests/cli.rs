//! End-to-end CLI coverage for the "pillars" fixture (spec §8 S6): two
//! origins on either side of a pair of pillars should see each other down
//! the open bottom row.

use std::io::Write;
use std::process::Command;

const PILLARS_MAP: &str = include_str!("fixtures/pillars.txt");

fn run_fovtool(input: &std::path::Path, algo: &str) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_fovtool"))
        .arg("--input")
        .arg(input)
        .arg("--algo")
        .arg(algo)
        .output()
        .expect("fovtool should run");
    assert!(
        output.status.success(),
        "fovtool exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("fovtool stdout should be UTF-8")
}

#[test]
fn pillars_fixture_shows_mutual_visibility_between_origins() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{PILLARS_MAP}").unwrap();

    let stdout = run_fovtool(file.path(), "symmetric");
    let lines: Vec<&str> = stdout.lines().collect();
    let map_height = PILLARS_MAP.lines().count();
    assert_eq!(
        lines.len(),
        2 * map_height,
        "one {map_height}-line render per @ origin, got: {stdout}"
    );
    let (from_left, from_right) = lines.split_at(map_height);

    // render_map always marks both @ cells regardless of whose FOV is being
    // shown, so check the floor tile next to the far origin instead: from
    // the left origin's render, the tile just before the right origin (row
    // 3, column 6) must show as visible floor, and symmetrically for the
    // right origin's render.
    assert_eq!(from_left[3].chars().nth(6), Some('.'));
    assert_eq!(from_right[3].chars().nth(2), Some('.'));
}

#[test]
fn unknown_algorithm_fails_with_nonzero_exit() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{PILLARS_MAP}").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fovtool"))
        .arg("--input")
        .arg(file.path())
        .arg("--algo")
        .arg("nonsense")
        .output()
        .expect("fovtool should run");
    assert!(!output.status.success());
}
