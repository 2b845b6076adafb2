//! Pointer-to-pit hit testing.
//!
//! All geometry derives from the current viewport size alone - nothing is
//! cached between frames, so resizing the board pane never leaves stale
//! layout behind. Coordinates are mathematical: the origin sits at the
//! bottom-left corner with y growing upward, matching the original board
//! canvas. Hosts with a top-left origin flip y before calling in.

use crate::board::{PIT_COUNT, PITS_PER_SIDE};

/// Current size of the board drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// A viewport of the given size. Dimensions are clamped to be
    /// non-negative.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Width of the drawing area.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the drawing area.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pit radius for this viewport: two rows of nine circles have to fit
    /// both horizontally and vertically, with a 10% margin.
    pub fn pit_radius(&self) -> f64 {
        (self.width / 18.0).min(self.height / 4.0) * 0.9
    }

    /// Center of pit `pit`, or `None` off the board.
    ///
    /// Bottom-row pits run left-to-right; top-row pits are mirrored
    /// right-to-left so the board reads as one continuous loop.
    pub fn pit_center(&self, pit: usize) -> Option<(f64, f64)> {
        if pit >= PIT_COUNT {
            return None;
        }
        let r = self.pit_radius();
        let center = if pit < PITS_PER_SIDE {
            ((pit as f64 + 0.5) * 2.0 * r, 1.5 * r)
        } else {
            let i = (pit - PITS_PER_SIDE) as f64;
            ((8.0 - i + 0.5) * 2.0 * r, self.height - 1.5 * r)
        };
        Some(center)
    }

    /// The pit whose circle contains `(x, y)`, if any.
    ///
    /// A point hits a pit iff its squared distance to the pit center is
    /// at most the squared radius; the circles are disjoint by
    /// construction, so at most one pit can match.
    pub fn hit(&self, x: f64, y: f64) -> Option<usize> {
        let r = self.pit_radius();
        if r <= 0.0 {
            return None;
        }
        let r_sq = r * r;
        (0..PIT_COUNT).find(|&pit| {
            let (cx, cy) = self
                .pit_center(pit)
                .expect("pit index in range by construction");
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= r_sq
        })
    }

    /// Bounding box of the kazan column on the right edge, as
    /// `((left, bottom), (right, top))`.
    pub fn store_rect(&self) -> ((f64, f64), (f64, f64)) {
        let r = self.pit_radius();
        (
            (self.width - 2.5 * r, self.height / 2.0 - 2.0 * r),
            (self.width - 0.5 * r, self.height / 2.0 + 2.0 * r),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        width: 700.0,
        height: 400.0,
    };

    #[test]
    fn every_center_hits_its_own_pit() {
        for pit in 0..PIT_COUNT {
            let (cx, cy) = VIEW.pit_center(pit).unwrap();
            assert_eq!(VIEW.hit(cx, cy), Some(pit), "pit {pit}");
        }
    }

    #[test]
    fn corners_miss() {
        assert_eq!(VIEW.hit(0.0, VIEW.height() / 2.0), None);
        assert_eq!(VIEW.hit(VIEW.width(), VIEW.height()), None);
    }

    #[test]
    fn midpoint_between_neighbours_misses() {
        // Adjacent centers are 2r apart, so the midpoint is exactly r
        // from both; nudge upward to clear both circles.
        let (c0, y) = VIEW.pit_center(0).unwrap();
        let (c1, _) = VIEW.pit_center(1).unwrap();
        let mid = (c0 + c1) / 2.0;
        assert_eq!(VIEW.hit(mid, y + VIEW.pit_radius()), None);
    }

    #[test]
    fn top_row_is_mirrored() {
        // Pit 9 sits above pit 8, pit 17 above pit 0.
        let (x9, _) = VIEW.pit_center(9).unwrap();
        let (x8, _) = VIEW.pit_center(8).unwrap();
        let (x17, _) = VIEW.pit_center(17).unwrap();
        let (x0, _) = VIEW.pit_center(0).unwrap();
        assert!((x9 - x8).abs() < 1e-9);
        assert!((x17 - x0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_viewport_hits_nothing() {
        let flat = Viewport::new(0.0, 0.0);
        assert_eq!(flat.hit(0.0, 0.0), None);
    }

    #[test]
    fn geometry_follows_a_resize() {
        let small = Viewport::new(350.0, 200.0);
        let (cx, cy) = small.pit_center(4).unwrap();
        assert_eq!(small.hit(cx, cy), Some(4));
        // The same point in the larger viewport lands elsewhere.
        assert_ne!(VIEW.pit_center(4), small.pit_center(4));
    }
}
