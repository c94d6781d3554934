//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};

use kerf::Segment;

/// Read SVG content from a file path, or from stdin when the path is '-'.
pub fn read_svg_input(path: &str) -> String {
    if path == "-" {
        eprintln!("Reading SVG from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .expect("Failed to read from stdin");
        buffer
    } else {
        eprintln!("Loading: {}", path);
        fs::read_to_string(path).expect("Failed to read SVG file")
    }
}

/// Number of distinct columns that received cuts.
///
/// Segments arrive grouped by column, so counting transitions is enough.
pub fn count_columns(segments: &[Segment]) -> usize {
    let mut count = 0;
    let mut last: Option<u32> = None;
    for seg in segments {
        if last != Some(seg.col) {
            count += 1;
            last = Some(seg.col);
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_columns() {
        let segments = vec![
            Segment::new(5, 0.0, 10.0),
            Segment::new(5, 20.0, 30.0),
            Segment::new(10, 0.0, 10.0),
            Segment::new(15, 0.0, 10.0),
        ];
        assert_eq!(count_columns(&segments), 3);
    }

    #[test]
    fn empty_pattern_has_no_columns() {
        assert_eq!(count_columns(&[]), 0);
    }
}
