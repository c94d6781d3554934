//! Generate command implementation.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use kerf::{
    embed_cut_lines, extract_viewbox, generate_hinge_fill, HingeSpec, LayoutPolicy,
    PixelConstants, ScaleMap, CUT_COLOR,
};

use super::common::{count_columns, read_svg_input};
use super::preview::render_preview;
use super::raster::rasterize_svg;
use super::recipe::Recipe;

/// A pixel-space cut in JSON output format.
#[derive(Serialize)]
struct JsonSegment {
    col: u32,
    y1: f64,
    y2: f64,
}

/// A document-space cut in JSON output format.
#[derive(Serialize)]
struct JsonLine {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Pass statistics for JSON output.
#[derive(Serialize)]
struct JsonStats {
    columns: usize,
    segments: usize,
    grid_width: u32,
    grid_height: u32,
}

/// JSON output document.
#[derive(Serialize)]
struct JsonOutput {
    segments: Vec<JsonSegment>,
    lines: Vec<JsonLine>,
    stats: JsonStats,
}

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) {
    let mut svg_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut preview_path: Option<&str> = None;
    let mut recipe_path: Option<&str> = None;
    let mut thickness: Option<f64> = None;
    let mut min_length: Option<f64> = None;
    let mut very_min_length: Option<f64> = None;
    let mut policy_name: Option<&str> = None;
    let mut raster_width: Option<u32> = None;
    let mut cut_color: Option<&str> = None;
    let mut json_output = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "--preview" => {
                i += 1;
                if i < args.len() {
                    preview_path = Some(&args[i]);
                }
            }
            "--recipe" => {
                i += 1;
                if i < args.len() {
                    recipe_path = Some(&args[i]);
                }
            }
            "-t" | "--thickness" => {
                i += 1;
                if i < args.len() {
                    thickness = args[i].parse().ok();
                }
            }
            "--min-length" => {
                i += 1;
                if i < args.len() {
                    min_length = args[i].parse().ok();
                }
            }
            "--very-min-length" => {
                i += 1;
                if i < args.len() {
                    very_min_length = args[i].parse().ok();
                }
            }
            "--policy" => {
                i += 1;
                if i < args.len() {
                    policy_name = Some(&args[i]);
                }
            }
            "-w" | "--width" => {
                i += 1;
                if i < args.len() {
                    raster_width = args[i].parse().ok();
                }
            }
            "--color" => {
                i += 1;
                if i < args.len() {
                    cut_color = Some(&args[i]);
                }
            }
            "--json" => {
                json_output = true;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-" => {
                if svg_path.is_none() {
                    svg_path = Some("-");
                }
            }
            path if !path.starts_with('-') => {
                if svg_path.is_none() {
                    svg_path = Some(path);
                }
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
            }
        }
        i += 1;
    }

    let svg_path = svg_path.unwrap_or_else(|| {
        eprintln!("Error: SVG file required (use '-' for stdin)");
        print_usage();
        std::process::exit(1);
    });

    // Recipe supplies the base settings; explicit flags override.
    let recipe = recipe_path.map(|path| {
        Recipe::load(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
    });

    let mut spec = recipe.as_ref().map(|r| r.hinge_spec()).unwrap_or_default();
    if let Some(t) = thickness {
        spec.material_thickness = t;
    }
    if let Some(l) = min_length {
        spec.min_segment_length = l;
    }
    if let Some(l) = very_min_length {
        spec.very_min_segment_length = l;
    }

    let width = raster_width
        .or_else(|| recipe.as_ref().map(|r| r.raster.width))
        .unwrap_or(1024);

    let policy = match policy_name {
        Some(name) => LayoutPolicy::from_name(name).unwrap_or_else(|| {
            eprintln!("Unknown policy: {}. Use 'balanced' or 'greedy'.", name);
            std::process::exit(1);
        }),
        None => recipe.as_ref().map(|r| r.policy()).unwrap_or_default(),
    };

    let svg_content = read_svg_input(svg_path);

    let viewbox = extract_viewbox(&svg_content).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let (grid, grid_width, grid_height) = rasterize_svg(&svg_content, width).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    eprintln!("Rasterized to {}x{} px", grid_width, grid_height);

    let map = ScaleMap::new(&viewbox, grid_width, grid_height).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let consts = PixelConstants::from_spec(&spec, &map).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let start = Instant::now();
    let pattern = generate_hinge_fill(&grid, &consts, policy).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let elapsed = start.elapsed();

    let columns = count_columns(pattern.segments());
    eprintln!(
        "Generated {} cuts across {} columns in {:?} ({} policy)",
        pattern.len(),
        columns,
        elapsed,
        policy.name()
    );
    if pattern.is_empty() {
        eprintln!("Nothing to cut: shape empty or thinner than the minimum cut length");
    }

    if let Some(path) = preview_path {
        let img = render_preview(&grid, pattern.segments());
        img.save(path).expect("Failed to write preview image");
        eprintln!("Wrote preview: {}", path);
    }

    let lines = pattern.to_vector_lines(&map);

    let output = if json_output {
        let json = JsonOutput {
            segments: pattern
                .segments()
                .iter()
                .map(|s| JsonSegment { col: s.col, y1: s.y1, y2: s.y2 })
                .collect(),
            lines: lines
                .iter()
                .map(|l| JsonLine { x1: l.x1, y1: l.y1, x2: l.x2, y2: l.y2 })
                .collect(),
            stats: JsonStats {
                columns,
                segments: pattern.len(),
                grid_width,
                grid_height,
            },
        };
        serde_json::to_string(&json).expect("Failed to serialize JSON")
    } else {
        embed_cut_lines(&svg_content, &lines, cut_color.unwrap_or(CUT_COLOR)).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
    };

    match output_path {
        Some("-") | None => {
            println!("{}", output);
        }
        Some(path) => {
            fs::write(path, &output).expect("Failed to write output file");
            eprintln!("Wrote: {}", path);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: kerf generate <input.svg> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <file>     Output SVG (default: stdout)");
    eprintln!("  --preview <file.png>    Write a raster preview with cuts in red");
    eprintln!("  -t, --thickness <n>     Material thickness in document units (default: 10)");
    eprintln!("  --min-length <n>        Preferred minimum cut length (default: 20)");
    eprintln!("  --very-min-length <n>   Absolute minimum cut length (default: 3)");
    eprintln!("  --policy <name>         Layout policy: balanced, greedy (default: balanced)");
    eprintln!("  -w, --width <px>        Rasterization width in pixels (default: 1024)");
    eprintln!("  --recipe <file.yaml>    Load material/raster settings from a recipe");
    eprintln!("  --color <css>           Stroke color for embedded cuts (default: #ff0000)");
    eprintln!("  --json                  Emit segments as JSON instead of SVG");
    eprintln!();
    eprintln!("Use '-' as input to read from stdin");
}
