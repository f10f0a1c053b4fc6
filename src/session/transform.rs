//! Display ↔ image coordinate mapping.
//!
//! The image is drawn scaled into a display rectangle that sits
//! `chrome_offset` pixels below the top of the shell window. Pointer events
//! arrive in window coordinates.
//!
//! Both directions truncate toward zero, so a display → image → display round
//! trip can be off by one display pixel. Stored shapes are only ever written
//! from [`ViewTransform::to_image`]; the inverse is used for drawing.

use boxtext_geom::{Point, Polygon, Rect};

use crate::surface::Size;

/// Scale between the image and its on-screen display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTransform {
    image: Size,
    display: Size,
    chrome_offset: i32,
}

impl ViewTransform {
    /// Create a transform. Returns `None` if either size is empty.
    pub fn new(image: Size, display: Size, chrome_offset: i32) -> Option<Self> {
        if image.is_empty() || display.is_empty() {
            return None;
        }
        Some(Self {
            image,
            display,
            chrome_offset,
        })
    }

    pub fn image_size(&self) -> Size {
        self.image
    }

    pub fn display_size(&self) -> Size {
        self.display
    }

    pub fn chrome_offset(&self) -> i32 {
        self.chrome_offset
    }

    /// Window position to image position.
    pub fn to_image(&self, display: Point) -> Point {
        let x = display.x as f64 * self.image.width as f64 / self.display.width as f64;
        let y = display.y.saturating_sub(self.chrome_offset) as f64 * self.image.height as f64
            / self.display.height as f64;
        Point::new(x as i32, y as i32)
    }

    /// Image position to window position.
    pub fn to_display(&self, image: Point) -> Point {
        let x = image.x as f64 * self.display.width as f64 / self.image.width as f64;
        let y = image.y as f64 * self.display.height as f64 / self.image.height as f64;
        Point::new(x as i32, (y as i32).saturating_add(self.chrome_offset))
    }

    /// Both stored corners mapped to the window, orientation kept.
    pub fn rect_to_display(&self, rect: &Rect) -> Rect {
        Rect::new(
            self.to_display(rect.top_left()),
            self.to_display(rect.bottom_right()),
        )
    }

    pub fn polygon_to_display(&self, polygon: &Polygon) -> Polygon {
        polygon
            .vertices()
            .iter()
            .map(|&p| self.to_display(p))
            .collect()
    }

    /// Handle grab radius in image units for each axis.
    ///
    /// `px` display pixels scaled to the image, but never less than
    /// `min_image_px`.
    pub fn handle_tolerance(&self, px: i32, min_image_px: i32) -> (i32, i32) {
        let tx = (self.image.width as f64 * px as f64 / self.display.width as f64) as i32;
        let ty = (self.image.height as f64 * px as f64 / self.display.height as f64) as i32;
        (tx.max(min_image_px), ty.max(min_image_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(offset: i32) -> ViewTransform {
        // Image twice as large as its display
        ViewTransform::new(Size::new(2000, 1000), Size::new(1000, 500), offset).unwrap()
    }

    #[test]
    fn test_empty_sizes_rejected() {
        assert!(ViewTransform::new(Size::new(0, 10), Size::new(10, 10), 0).is_none());
        assert!(ViewTransform::new(Size::new(10, 10), Size::new(10, 0), 0).is_none());
    }

    #[test]
    fn test_to_image_scales() {
        let t = transform(0);
        assert_eq!(t.to_image(Point::new(100, 50)), Point::new(200, 100));
        assert_eq!(t.to_image(Point::ORIGIN), Point::ORIGIN);
    }

    #[test]
    fn test_to_image_subtracts_chrome_offset() {
        let t = transform(25);
        assert_eq!(t.to_image(Point::new(100, 75)), Point::new(200, 100));
        // Above the display surface maps to negative y
        assert_eq!(t.to_image(Point::new(0, 15)), Point::new(0, -20));
    }

    #[test]
    fn test_chrome_offset_saturates() {
        let t = ViewTransform::new(Size::new(100, 100), Size::new(100, 100), 25).unwrap();
        assert_eq!(t.to_image(Point::new(0, i32::MIN)), Point::new(0, i32::MIN));
        assert_eq!(t.to_display(Point::new(0, i32::MAX)), Point::new(0, i32::MAX));
    }

    #[test]
    fn test_to_image_truncates() {
        // 3 display px = 1.5 image px when the image is smaller
        let t = ViewTransform::new(Size::new(100, 100), Size::new(200, 200), 0).unwrap();
        assert_eq!(t.to_image(Point::new(3, 3)), Point::new(1, 1));
        // Negative values truncate toward zero
        assert_eq!(t.to_image(Point::new(-3, -3)), Point::new(-1, -1));
    }

    #[test]
    fn test_unscaled_display_is_exact() {
        let t = ViewTransform::new(Size::new(200, 200), Size::new(200, 200), 0).unwrap();
        for v in 0..=200 {
            assert_eq!(t.to_image(Point::new(v, v)), Point::new(v, v));
            assert_eq!(t.to_display(Point::new(v, v)), Point::new(v, v));
        }
    }

    #[test]
    fn test_to_display_adds_offset() {
        let t = transform(25);
        assert_eq!(t.to_display(Point::new(200, 100)), Point::new(100, 75));
        assert_eq!(t.to_display(Point::new(3, 3)), Point::new(1, 26));
    }

    #[test]
    fn test_rect_to_display_keeps_orientation() {
        let t = transform(0);
        let inverted = Rect::new(Point::new(400, 400), Point::new(200, 100));
        let shown = t.rect_to_display(&inverted);
        assert_eq!(shown.top_left(), Point::new(200, 200));
        assert_eq!(shown.bottom_right(), Point::new(100, 50));
    }

    #[test]
    fn test_polygon_to_display() {
        let t = transform(10);
        let polygon = Polygon::from_vertices(vec![Point::new(0, 0), Point::new(20, 40)]);
        assert_eq!(
            t.polygon_to_display(&polygon).vertices(),
            &[Point::new(0, 10), Point::new(10, 30)]
        );
    }

    #[test]
    fn test_handle_tolerance() {
        // Downscaled display: 3 display px cover 6 image px
        assert_eq!(transform(0).handle_tolerance(3, 3), (6, 6));

        // Upscaled display: 3 display px cover 1 image px, clamped to 3
        let zoomed = ViewTransform::new(Size::new(100, 100), Size::new(300, 300), 0).unwrap();
        assert_eq!(zoomed.handle_tolerance(3, 3), (3, 3));

        // Per axis
        let skewed = ViewTransform::new(Size::new(1000, 400), Size::new(100, 100), 0).unwrap();
        assert_eq!(skewed.handle_tolerance(3, 3), (30, 12));
    }
}
