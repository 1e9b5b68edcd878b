//! Axis-aligned bounding boxes.

/// Box anchored at its top-left corner, canvas coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap on both axes; boxes that only touch edges do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_collide_both_ways() {
        let a = Rect::new(0.0, 0.0, 40.0, 80.0);
        let b = Rect::new(30.0, 70.0, 50.0, 100.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 40.0, 80.0);
        assert!(!a.overlaps(&Rect::new(40.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 80.0, 10.0, 10.0)));
    }

    #[test]
    fn overlap_is_translation_invariant() {
        let pairs = [
            (Rect::new(380.0, 620.0, 40.0, 80.0), Rect::new(370.0, 560.0, 50.0, 100.0)),
            (Rect::new(380.0, 620.0, 40.0, 80.0), Rect::new(200.0, -100.0, 50.0, 100.0)),
            (Rect::new(0.0, 0.0, 1.0, 1.0), Rect::new(0.5, 0.5, 1.0, 1.0)),
        ];
        let shifts = [(0.0, 0.0), (-250.0, 13.5), (1e4, -7e3), (0.25, 0.75)];
        for (a, b) in pairs {
            let base = a.overlaps(&b);
            for (dx, dy) in shifts {
                assert_eq!(a.translated(dx, dy).overlaps(&b.translated(dx, dy)), base);
            }
        }
    }
}
