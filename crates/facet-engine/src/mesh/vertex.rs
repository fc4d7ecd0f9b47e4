use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// Per-vertex GPU data (20 bytes, tightly packed):
///
///  offset 0  position  [f32; 2]   loc 0
///  offset 8  color     [f32; 3]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    pub const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x3  // color
    ];

    /// Byte stride between consecutive vertices.
    pub const STRIDE: u64 = std::mem::size_of::<Vertex>() as u64;

    #[inline]
    pub const fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    #[inline]
    pub fn color(&self) -> Color {
        Color::from(self.color)
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
        assert_eq!(Vertex::STRIDE, 20);
        assert_eq!(Vertex::layout().array_stride, 20);
    }

    #[test]
    fn attribute_offsets_and_locations() {
        let [pos, color] = Vertex::ATTRS;
        assert_eq!((pos.shader_location, pos.offset), (0, 0));
        assert_eq!(pos.format, wgpu::VertexFormat::Float32x2);
        assert_eq!((color.shader_location, color.offset), (1, 8));
        assert_eq!(color.format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn bytes_are_native_floats_in_order() {
        let v = Vertex::new(Vec2::new(1.0, 2.0), Color::rgb(3.0, 4.0, 5.0));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
