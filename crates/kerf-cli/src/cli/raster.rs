//! SVG rasterization for the scanning pass.
//!
//! Renders the document onto a white-backed pixmap at a caller-chosen
//! pixel width and lifts the red channel out as the reference intensity
//! channel: white background reads as 255, any shape fill reads darker.

use resvg::usvg;
use tiny_skia::Pixmap;

use kerf::PixelGrid;

/// Rasterize an SVG document to a single-channel grid.
///
/// The height follows from the document's aspect ratio. Returns the grid
/// plus its pixel dimensions.
pub fn rasterize_svg(svg: &str, target_width: u32) -> Result<(PixelGrid, u32, u32), String> {
    if target_width == 0 {
        return Err("raster width must be at least 1 pixel".to_string());
    }

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| format!("Failed to parse SVG: {}", e))?;

    let size = tree.size();
    let scale = target_width as f32 / size.width();
    let height = ((size.height() * scale).round() as u32).max(1);

    let mut pixmap = Pixmap::new(target_width, height)
        .ok_or_else(|| "Failed to allocate pixmap".to_string())?;

    // White background so untouched pixels read as maximum intensity.
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // Red channel as the reference channel (RGBA byte order).
    let channel: Vec<u8> = pixmap.data().chunks_exact(4).map(|px| px[0]).collect();

    let grid = PixelGrid::from_channel(target_width, height, channel)
        .map_err(|e| e.to_string())?;
    Ok((grid, target_width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50">
        <rect x="25" y="10" width="50" height="30" fill="black"/>
    </svg>"#;

    #[test]
    fn raster_height_follows_aspect_ratio() {
        let (grid, width, height) = rasterize_svg(BOX_SVG, 200).unwrap();
        assert_eq!(width, 200);
        assert_eq!(height, 100);
        assert_eq!(grid.width(), 200);
        assert_eq!(grid.height(), 100);
    }

    #[test]
    fn shape_pixels_are_darker_than_background() {
        let (grid, _, _) = rasterize_svg(BOX_SVG, 200).unwrap();
        // Center of the rect vs a corner of the canvas.
        assert!(grid.is_shape(100, 50), "rect center should be shape");
        assert!(!grid.is_shape(2, 2), "canvas corner should be background");
    }

    #[test]
    fn active_bounds_match_the_rect() {
        let (grid, _, _) = rasterize_svg(BOX_SVG, 200).unwrap();
        let (start, end) = grid.active_column_bounds().expect("rect should be active");
        // Rect spans x 25..75 in a 100-wide viewbox, doubled in pixels.
        // Anti-aliasing may bleed a pixel either way.
        assert!(start >= 48 && start <= 52, "start col {}", start);
        assert!(end >= 148 && end <= 152, "end col {}", end);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(rasterize_svg(BOX_SVG, 0).is_err());
    }

    #[test]
    fn invalid_svg_is_rejected() {
        assert!(rasterize_svg("not an svg at all", 100).is_err());
    }
}
