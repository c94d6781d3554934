//! kerf - living-hinge cut patterns for laser-cut sheet material
//!
//! Usage:
//!   kerf generate <svg> [options]   Generate a hinge pattern
//!   kerf <svg>                      Shorthand for generate
//!   kerf benchmark <svg>            Time both layout policies
//!   kerf help                       Show usage

use std::env;

mod cli;

use cli::{cmd_benchmark, cmd_generate};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "generate" => {
                cmd_generate(&args[2..]);
                return;
            }
            "benchmark" => {
                cmd_benchmark(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            arg if arg.ends_with(".svg") || arg == "-" => {
                // Bare SVG argument: treat it as a generate run.
                cmd_generate(&args[1..]);
                return;
            }
            unknown => {
                eprintln!("Unknown command: {}", unknown);
                eprintln!();
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    print_usage(&args[0]);
    std::process::exit(1);
}

fn print_usage(prog: &str) {
    eprintln!("kerf - living-hinge cut patterns for laser-cut sheet material");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} generate <input.svg> [options]", prog);
    eprintln!("  {} benchmark <input.svg> [-w <px>]", prog);
    eprintln!("  {} help", prog);
    eprintln!();
    eprintln!("Generate options:");
    eprintln!("  -o, --output <file>        Output SVG (- for stdout, default: stdout)");
    eprintln!("  --preview <file.png>       Write a raster preview with cuts in red");
    eprintln!("  -t, --thickness <n>        Material thickness in document units (default: 10)");
    eprintln!("  --min-length <n>           Preferred minimum cut length (default: 20)");
    eprintln!("  --very-min-length <n>      Absolute minimum cut length (default: 3)");
    eprintln!("  --policy <name>            Layout policy: balanced, greedy (default: balanced)");
    eprintln!("  -w, --width <px>           Rasterization width in pixels (default: 1024)");
    eprintln!("  --recipe <file.yaml>       Load material/raster settings from a recipe");
    eprintln!("  --color <css>              Stroke color for embedded cuts (default: #ff0000)");
    eprintln!("  --json                     Emit segments as JSON instead of SVG");
    eprintln!();
    eprintln!("Stdin support:");
    eprintln!("  Use '-' as input file to read SVG from stdin:");
    eprintln!("  cat shape.svg | {} generate - -o hinged.svg", prog);
}
