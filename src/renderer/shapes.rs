//! Shape generation for 2D primitives
//!
//! Screen space has y pointing down; drawing surfaces that put y up (the
//! terminal canvas) go through [`flip_y`].

use glam::Vec2;

use super::frame::{PaddleView, RenderRequest};
use crate::sim::ArcSegment;

/// Points sampled along each paddle edge
pub const PADDLE_EDGE_POINTS: usize = 12;

/// Line segments outlining the paddle band: inner edge, outer edge, two caps
pub fn paddle_band(center: Vec2, paddle: &PaddleView) -> Vec<(Vec2, Vec2)> {
    let arc = ArcSegment::around(
        center,
        paddle.angle,
        paddle.half_width,
        paddle.inner_radius,
        paddle.outer_radius,
    );

    let mut segments = Vec::with_capacity(2 * PADDLE_EDGE_POINTS + 2);
    segments.extend(polyline(&arc.sample_inner_edge(PADDLE_EDGE_POINTS)));
    segments.extend(polyline(&arc.sample_outer_edge(PADDLE_EDGE_POINTS)));
    segments.extend(arc.caps());
    segments
}

/// Consecutive point pairs of an open polyline
fn polyline(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    points.windows(2).map(|w| (w[0], w[1]))
}

/// Mirror a screen-space point across the horizontal line through `center`
#[inline]
pub fn flip_y(point: Vec2, center: Vec2) -> Vec2 {
    Vec2::new(point.x, 2.0 * center.y - point.y)
}

/// Square drawing bounds that fit the arena, paddle and `margin`
pub fn view_bounds(request: &RenderRequest, margin: f32) -> ([f64; 2], [f64; 2]) {
    let c = request.arena.center;
    let reach = request.paddle.outer_radius.max(request.arena.radius) + margin;
    (
        [(c.x - reach) as f64, (c.x + reach) as f64],
        [(c.y - reach) as f64, (c.y + reach) as f64],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle(angle: f32) -> PaddleView {
        PaddleView {
            angle,
            half_width: 0.2,
            inner_radius: 190.0,
            outer_radius: 210.0,
        }
    }

    #[test]
    fn test_paddle_band_segment_count() {
        let segments = paddle_band(Vec2::new(300.0, 300.0), &paddle(0.0));
        assert_eq!(segments.len(), 2 * (PADDLE_EDGE_POINTS - 1) + 2);
    }

    #[test]
    fn test_paddle_band_stays_in_radial_band() {
        let center = Vec2::new(300.0, 300.0);
        for (a, b) in paddle_band(center, &paddle(1.3)) {
            for p in [a, b] {
                let r = (p - center).length();
                assert!((189.9..=210.1).contains(&r), "point at radius {r}");
            }
        }
    }

    #[test]
    fn test_flip_y() {
        let center = Vec2::new(300.0, 300.0);
        assert_eq!(flip_y(Vec2::new(310.0, 490.0), center), Vec2::new(310.0, 110.0));
        assert_eq!(flip_y(center, center), center);
    }
}
