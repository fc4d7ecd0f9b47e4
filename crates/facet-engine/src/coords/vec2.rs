use core::ops::Sub;

/// 2D vector in normalized device coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `angle` radians on an axis-aligned ellipse around `self`.
    ///
    /// `rx` scales the cosine term, `ry` the sine term; pass the same value
    /// for a circle.
    #[inline]
    pub fn on_ellipse(self, rx: f32, ry: f32, angle: f32) -> Self {
        Self::new(self.x + rx * angle.cos(), self.y + ry * angle.sin())
    }

    /// Point at `angle` radians on the circle of `radius` around `self`.
    #[inline]
    pub fn on_circle(self, radius: f32, angle: f32) -> Self {
        self.on_ellipse(radius, radius, angle)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Angle of the vector in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn on_circle_quarter_turn_points_up() {
        let p = Vec2::new(1.0, 2.0).on_circle(0.5, core::f32::consts::FRAC_PI_2);
        assert!((p.x - 1.0).abs() < EPS);
        assert!((p.y - 2.5).abs() < EPS);
    }

    #[test]
    fn on_ellipse_scales_only_y() {
        let p = Vec2::zero().on_ellipse(1.0, 0.5, core::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < EPS);
        assert!((p.y - 0.5).abs() < EPS);
    }

    #[test]
    fn length_and_angle_of_diagonal() {
        let v = Vec2::new(1.0, 1.0);
        assert!((v.length() - 2f32.sqrt()).abs() < EPS);
        assert!((v.angle() - core::f32::consts::FRAC_PI_4).abs() < EPS);
    }
}
