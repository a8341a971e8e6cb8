//! Arc segment geometry for the paddle band
//!
//! In polar coordinates around the arena center, an arc segment is defined by:
//! - inner_radius, outer_radius: radial extent
//! - theta_start, theta_end: angular extent (theta_end >= theta_start, never wrapped)

use glam::Vec2;

use crate::polar_to_cartesian;

/// A thickened arc segment in polar space
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    /// Polar origin
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Start angle (radians)
    pub theta_start: f32,
    /// End angle (radians)
    pub theta_end: f32,
}

impl ArcSegment {
    /// Arc spanning `mid_theta ± half_width`
    pub fn around(
        center: Vec2,
        mid_theta: f32,
        half_width: f32,
        inner_radius: f32,
        outer_radius: f32,
    ) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            theta_start: mid_theta - half_width,
            theta_end: mid_theta + half_width,
        }
    }

    /// Angular span of the arc
    #[inline]
    pub fn angular_span(&self) -> f32 {
        self.theta_end - self.theta_start
    }

    /// Sample points along the edge at `radius`
    fn sample_edge(&self, radius: f32, num_points: usize) -> Vec<Vec2> {
        let span = self.angular_span();

        (0..num_points)
            .map(|i| {
                let t = i as f32 / num_points.saturating_sub(1).max(1) as f32;
                let theta = self.theta_start + t * span;
                polar_to_cartesian(self.center, radius, theta)
            })
            .collect()
    }

    /// Sample points along the outer edge (for rendering)
    pub fn sample_outer_edge(&self, num_points: usize) -> Vec<Vec2> {
        self.sample_edge(self.outer_radius, num_points)
    }

    /// Sample points along the inner edge
    pub fn sample_inner_edge(&self, num_points: usize) -> Vec<Vec2> {
        self.sample_edge(self.inner_radius, num_points)
    }

    /// Radial line segments closing the band at each end
    pub fn caps(&self) -> [(Vec2, Vec2); 2] {
        [self.theta_start, self.theta_end].map(|theta| {
            (
                polar_to_cartesian(self.center, self.inner_radius, theta),
                polar_to_cartesian(self.center, self.outer_radius, theta),
            )
        })
    }
}
