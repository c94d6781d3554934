//! Integration tests for the kerf CLI.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the kerf binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // kerf-cli -> crates
    path.pop(); // crates -> workspace root

    // Try release first, then debug
    let release = path.join("target/release/kerf");
    if release.exists() {
        return release;
    }
    path.join("target/debug/kerf")
}

/// Get the path to the test SVG file.
fn test_svg_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.pop();
    path.push("test_assets/whale.svg");
    path
}

#[test]
fn help_shows_usage() {
    let output = Command::new(binary_path())
        .arg("help")
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("generate"), "Should mention generate command");
    assert!(stderr.contains("benchmark"), "Should mention benchmark command");
}

#[test]
fn no_arguments_fails_with_usage() {
    let output = Command::new(binary_path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Bare invocation should exit nonzero");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Should print usage");
}

#[test]
fn generate_embeds_cuts_into_the_document() {
    let svg_path = test_svg_path();
    if !svg_path.exists() {
        eprintln!("Skipping test - test SVG not found at {:?}", svg_path);
        return;
    }

    let output = Command::new(binary_path())
        .args(["generate", svg_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<svg"), "Output should be an SVG document");
    assert!(stdout.contains("<path"), "Original geometry should survive");
    assert!(stdout.contains("kerf-cuts"), "Should contain the cut group");
    assert!(stdout.contains("<line"), "Should contain cut lines");
    assert!(stdout.contains("#ff0000"), "Cuts should be color tagged");
}

#[test]
fn generate_produces_json() {
    let svg_path = test_svg_path();
    if !svg_path.exists() {
        eprintln!("Skipping test - test SVG not found at {:?}", svg_path);
        return;
    }

    let output = Command::new(binary_path())
        .args(["generate", svg_path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"segments\""), "Should have segments key");
    assert!(stdout.contains("\"lines\""), "Should have lines key");
    assert!(stdout.contains("\"col\""), "Pixel segments carry a column");
    assert!(stdout.contains("\"x1\""), "Vector lines carry coordinates");
    assert!(stdout.contains("\"stats\""), "Should have stats key");
}

#[test]
fn thinner_material_yields_more_cut_columns() {
    let svg_path = test_svg_path();
    if !svg_path.exists() {
        eprintln!("Skipping test - test SVG not found at {:?}", svg_path);
        return;
    }

    let run = |thickness: &str| {
        let output = Command::new(binary_path())
            .args(["generate", svg_path.to_str().unwrap(), "-t", thickness])
            .output()
            .expect("Failed to execute command");
        String::from_utf8_lossy(&output.stdout).matches("<line").count()
    };

    let thin = run("5");
    let thick = run("20");
    assert!(
        thin > thick,
        "5-unit material ({} cuts) should get more cuts than 20-unit ({} cuts)",
        thin,
        thick
    );
}

#[test]
fn policies_differ_on_the_same_input() {
    let svg_path = test_svg_path();
    if !svg_path.exists() {
        eprintln!("Skipping test - test SVG not found at {:?}", svg_path);
        return;
    }

    let run = |policy: &str| {
        let output = Command::new(binary_path())
            .args(["generate", svg_path.to_str().unwrap(), "--policy", policy])
            .output()
            .expect("Failed to execute command");
        String::from_utf8_lossy(&output.stdout).to_string()
    };

    let balanced = run("balanced");
    let greedy = run("greedy");
    assert!(balanced.contains("<line") && greedy.contains("<line"));
    assert_ne!(balanced, greedy, "Policies should lay segments out differently");
}

#[test]
fn generate_writes_a_preview_image() {
    let svg_path = test_svg_path();
    if !svg_path.exists() {
        eprintln!("Skipping test - test SVG not found at {:?}", svg_path);
        return;
    }

    let preview = std::env::temp_dir().join("kerf_preview_test.png");
    let _ = std::fs::remove_file(&preview);

    let output = Command::new(binary_path())
        .args([
            "generate",
            svg_path.to_str().unwrap(),
            "--preview",
            preview.to_str().unwrap(),
            "-o",
            "-",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(preview.exists(), "Preview PNG should be written");
    let _ = std::fs::remove_file(&preview);
}

#[test]
fn benchmark_reports_both_policies() {
    let svg_path = test_svg_path();
    if !svg_path.exists() {
        eprintln!("Skipping test - test SVG not found at {:?}", svg_path);
        return;
    }

    let output = Command::new(binary_path())
        .args(["benchmark", svg_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BENCHMARK"), "Should show benchmark header");
    assert!(stdout.contains("balanced"), "Should time the balanced policy");
    assert!(stdout.contains("greedy"), "Should time the greedy policy");
}

#[test]
fn unknown_command_fails() {
    let output = Command::new(binary_path())
        .arg("frobnicate")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown command"), "Should name the problem");
}
