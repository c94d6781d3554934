//! Preview composition: the raster with cuts stamped in red.

use image::{Rgba, RgbaImage};

use kerf::{PixelGrid, Segment};

/// Cut color in the preview.
const CUT: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Compose the preview image: the grid as grayscale with every cut
/// drawn over it.
///
/// Fractional segment endpoints are rounded to whole rows here, at the
/// last possible moment; everything upstream keeps real-valued lengths.
pub fn render_preview(grid: &PixelGrid, segments: &[Segment]) -> RgbaImage {
    let mut img = RgbaImage::new(grid.width(), grid.height());

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let v = grid.intensity(x, y);
            img.put_pixel(x, y, Rgba([v, v, v, 255]));
        }
    }

    for seg in segments {
        stamp_segment(&mut img, seg);
    }

    img
}

fn stamp_segment(img: &mut RgbaImage, seg: &Segment) {
    let (width, height) = img.dimensions();
    if seg.col >= width {
        return;
    }

    let top = seg.y1.min(seg.y2).round().max(0.0) as u32;
    let bottom = seg.y1.max(seg.y2).round() as u32;

    for y in top..=bottom {
        if y >= height {
            break;
        }
        img.put_pixel(seg.col, y, CUT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_grid(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_channel(width, height, vec![255; (width * height) as usize]).unwrap()
    }

    #[test]
    fn base_image_mirrors_grid_intensities() {
        let grid = PixelGrid::from_channel(2, 1, vec![0, 255]).unwrap();
        let img = render_preview(&grid, &[]);
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(1, 0), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn segments_stamp_red_rows() {
        let grid = blank_grid(4, 10);
        let segments = vec![Segment::new(2, 1.0, 3.0)];
        let img = render_preview(&grid, &segments);

        for y in 1..=3 {
            assert_eq!(img.get_pixel(2, y), &CUT, "row {} should be cut", y);
        }
        assert_ne!(img.get_pixel(2, 0), &CUT);
        assert_ne!(img.get_pixel(2, 4), &CUT);
        assert_ne!(img.get_pixel(1, 2), &CUT, "neighbor column untouched");
    }

    #[test]
    fn fractional_endpoints_round_to_rows() {
        let grid = blank_grid(1, 10);
        let segments = vec![Segment::new(0, 1.6, 4.4)];
        let img = render_preview(&grid, &segments);

        assert_ne!(img.get_pixel(0, 1), &CUT);
        assert_eq!(img.get_pixel(0, 2), &CUT);
        assert_eq!(img.get_pixel(0, 4), &CUT);
        assert_ne!(img.get_pixel(0, 5), &CUT);
    }

    #[test]
    fn out_of_bounds_segments_are_clamped() {
        let grid = blank_grid(2, 5);
        let segments = vec![
            Segment::new(0, 3.0, 99.0), // runs past the bottom
            Segment::new(7, 0.0, 4.0),  // column outside the grid
        ];
        let img = render_preview(&grid, &segments);

        assert_eq!(img.get_pixel(0, 4), &CUT);
        assert_eq!(img.dimensions(), (2, 5));
    }
}
