use super::MeshError;

/// Primitive topology a mesh is drawn with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Vertex 0 is shared by every triangle formed with each consecutive
    /// pair of the following vertices.
    Fan,
    /// Each vertex after the first two forms a triangle with the previous two.
    Strip,
    /// Every three vertices form an independent triangle.
    TriangleList,
}

impl Topology {
    /// Smallest vertex count that produces at least one triangle.
    #[inline]
    pub const fn min_vertices(self) -> u32 {
        3
    }

    /// Number of triangles rasterized for `count` vertices.
    pub const fn triangle_count(self, count: u32) -> u32 {
        match self {
            Topology::Fan | Topology::Strip => count.saturating_sub(2),
            Topology::TriangleList => count / 3,
        }
    }

    /// Checks that `count` vertices form a well-defined draw for this topology.
    pub fn check_count(self, count: u32) -> Result<(), MeshError> {
        if count < self.min_vertices() {
            return Err(MeshError::TooFewVertices {
                topology: self,
                count,
                min: self.min_vertices(),
            });
        }
        if self == Topology::TriangleList && count % 3 != 0 {
            return Err(MeshError::NotTriangleMultiple { count });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_counts() {
        assert_eq!(Topology::Fan.triangle_count(12), 10);
        assert_eq!(Topology::Strip.triangle_count(4), 2);
        assert_eq!(Topology::TriangleList.triangle_count(9), 3);
        assert_eq!(Topology::Strip.triangle_count(1), 0);
    }

    #[test]
    fn check_count_bounds() {
        assert!(Topology::Fan.check_count(3).is_ok());
        assert!(Topology::Strip.check_count(2).is_err());
        assert!(Topology::TriangleList.check_count(6).is_ok());
        assert!(Topology::TriangleList.check_count(7).is_err());
    }
}
