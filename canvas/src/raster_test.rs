use super::*;
use crate::consts::STROKE_WIDTH_PX;

fn surface(width: u32, height: u32) -> RasterSurface {
    match RasterSurface::new(Size::new(width, height)) {
        Ok(surface) => surface,
        Err(e) => panic!("allocation failed: {e}"),
    }
}

fn segment(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
    Segment {
        from: Point::new(ax, ay),
        to: Point::new(bx, by),
        color: Rgba::opaque(200, 20, 90),
        width: STROKE_WIDTH_PX,
    }
}

fn close(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 2
}

// =============================================================
// Allocation
// =============================================================

#[test]
fn new_surface_is_blank() {
    let s = surface(40, 30);
    assert!(s.is_blank());
    assert_eq!(s.size(), Size::new(40, 30));
}

#[test]
fn zero_size_is_rejected() {
    let result = RasterSurface::new(Size::new(0, 10));
    assert_eq!(result.err(), Some(SurfaceError::InvalidSize { width: 0, height: 10 }));
}

#[test]
fn default_origin_is_zero() {
    assert_eq!(surface(4, 4).origin(), Point::new(0.0, 0.0));
}

#[test]
fn with_origin_moves_surface() {
    let s = surface(4, 4).with_origin(Point::new(12.0, 34.0));
    assert_eq!(s.origin(), Point::new(12.0, 34.0));
}

#[test]
fn pixel_outside_surface_is_none() {
    assert!(surface(4, 4).pixel(4, 0).is_none());
}

// =============================================================
// Strokes
// =============================================================

#[test]
fn stroke_paints_along_segment() {
    let mut s = surface(40, 40);
    assert!(s.stroke_segment(&segment(10.0, 10.0, 20.0, 20.0)).is_ok());

    let Some(mid) = s.pixel(15, 15) else {
        panic!("pixel in bounds");
    };
    assert!(mid.a > 0);
    assert!(close(mid.r, 200) && close(mid.g, 20) && close(mid.b, 90), "got {mid:?}");
}

#[test]
fn stroke_leaves_distant_pixels_untouched() {
    let mut s = surface(40, 40);
    assert!(s.stroke_segment(&segment(10.0, 10.0, 20.0, 20.0)).is_ok());
    assert_eq!(s.pixel(35, 5), Some(Rgba::TRANSPARENT));
    assert_eq!(s.pixel(5, 35), Some(Rgba::TRANSPARENT));
}

// =============================================================
// Clear / resize
// =============================================================

#[test]
fn clear_restores_blank_surface() {
    let mut s = surface(40, 40);
    assert!(s.stroke_segment(&segment(0.0, 0.0, 40.0, 40.0)).is_ok());
    assert!(!s.is_blank());
    assert!(s.clear().is_ok());
    assert!(s.is_blank());
}

#[test]
fn resize_erases_content() {
    let mut s = surface(40, 40);
    assert!(s.stroke_segment(&segment(0.0, 0.0, 40.0, 40.0)).is_ok());
    assert!(s.resize(Size::new(60, 50)).is_ok());
    assert_eq!(s.size(), Size::new(60, 50));
    assert!(s.is_blank());
}

#[test]
fn resize_to_zero_fails_and_keeps_old_surface() {
    let mut s = surface(40, 40);
    assert!(s.resize(Size::new(0, 0)).is_err());
    assert_eq!(s.size(), Size::new(40, 40));
}

// =============================================================
// Export
// =============================================================

#[test]
fn export_is_png_data_url() {
    let s = surface(8, 8);
    let url = s.export_data_url().unwrap_or_default();
    assert!(url.starts_with(PNG_DATA_URL_PREFIX));
    assert!(url.len() > PNG_DATA_URL_PREFIX.len());
}

#[test]
fn export_changes_after_drawing() {
    let mut s = surface(16, 16);
    let blank = s.export_data_url().unwrap_or_default();
    assert!(s.stroke_segment(&segment(2.0, 2.0, 14.0, 14.0)).is_ok());
    let drawn = s.export_data_url().unwrap_or_default();
    assert_ne!(blank, drawn);
}
