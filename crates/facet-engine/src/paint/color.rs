/// Opaque RGB color.
///
/// Components are nominally in `[0, 1]`. Out-of-range values are legal and
/// pass through to the rasterizer unmodified.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Gray level `v` on all three channels.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns true when every channel lies in `[0, 1]`.
    #[inline]
    pub fn is_normalized(self) -> bool {
        [self.r, self.g, self.b].iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Opaque clear value for a render pass.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: 1.0,
        }
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from(c: [f32; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_fills_all_channels() {
        assert_eq!(Color::gray(0.25), Color::rgb(0.25, 0.25, 0.25));
    }

    #[test]
    fn normalized_accepts_bounds_rejects_overflow() {
        assert!(Color::WHITE.is_normalized());
        assert!(Color::BLACK.is_normalized());
        assert!(!Color::rgb(1.2, 0.0, 0.0).is_normalized());
        assert!(!Color::rgb(0.0, -0.1, 0.0).is_normalized());
    }

    #[test]
    fn clear_value_is_opaque() {
        let c = Color::rgb(0.05, 0.05, 0.05).to_wgpu();
        assert_eq!(c.a, 1.0);
        assert!((c.r - 0.05).abs() < 1e-6);
    }
}
