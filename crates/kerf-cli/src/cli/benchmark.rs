//! Benchmark command implementation.

use std::time::Instant;

use kerf::{
    extract_viewbox, generate_hinge_fill, HingeSpec, LayoutPolicy, PixelConstants, ScaleMap,
};

use super::common::{count_columns, read_svg_input};
use super::raster::rasterize_svg;

/// Execute the benchmark command: time both layout policies on one input.
pub fn cmd_benchmark(args: &[String]) {
    let mut svg_path: Option<&str> = None;
    let mut raster_width = 1024u32;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-w" | "--width" => {
                i += 1;
                if i < args.len() {
                    raster_width = args[i].parse().unwrap_or(1024);
                }
            }
            path if !path.starts_with('-') => {
                if svg_path.is_none() {
                    svg_path = Some(path);
                }
            }
            _ => {}
        }
        i += 1;
    }

    let svg_path = svg_path.unwrap_or_else(|| {
        eprintln!("Error: SVG file required");
        eprintln!("Usage: kerf benchmark <input.svg> [-w <px>]");
        std::process::exit(1);
    });

    let svg_content = read_svg_input(svg_path);

    let start_load = Instant::now();
    let viewbox = extract_viewbox(&svg_content).expect("Failed to read viewBox");
    let (grid, grid_width, grid_height) =
        rasterize_svg(&svg_content, raster_width).expect("Failed to rasterize SVG");
    let load_time = start_load.elapsed();
    println!("Rasterized {}x{} px in {:?}", grid_width, grid_height, load_time);

    let map = ScaleMap::new(&viewbox, grid_width, grid_height).expect("Bad scale configuration");
    let consts =
        PixelConstants::from_spec(&HingeSpec::default(), &map).expect("Bad design constants");

    println!("\n═══════════════════════════════════════════════");
    println!("  KERF BENCHMARK");
    println!("═══════════════════════════════════════════════");
    println!("  Grid: {}x{} px", grid_width, grid_height);

    for policy in [LayoutPolicy::Balanced, LayoutPolicy::Greedy] {
        let start = Instant::now();
        let pattern = generate_hinge_fill(&grid, &consts, policy).expect("Generation failed");
        let elapsed = start.elapsed();

        println!("  ---------------------------------------------");
        println!("  Policy: {}", policy.name());
        println!("  Cuts: {}", pattern.len());
        println!("  Columns: {}", count_columns(pattern.segments()));
        println!("  Time: {:?} ({:.2}ms)", elapsed, elapsed.as_secs_f64() * 1000.0);
    }
    println!("═══════════════════════════════════════════════");
}
