//! CPU side vertex data.
//!
//! A [`GeometryBuffer`] holds interleaved `f32` vertex data described by a [`VertexLayout`],
//! plus an optional index list. The client uploads it once and never touches it again.

use glam::Vec3;

use crate::error::GeometryError;

/// A per-vertex attribute. Locations follow the order of the attributes in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    Position,
    Color,
    TexCoord,
}

impl Attribute {
    /// Number of `f32` components.
    pub fn components(self) -> usize {
        match self {
            Attribute::Position | Attribute::Color => 3,
            Attribute::TexCoord => 2,
        }
    }
}

/// Describes one attribute as the GPU sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeDesc {
    pub attribute: Attribute,
    pub location: u32,
    pub components: usize,
    /// Byte offset from the start of a vertex.
    pub offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<Attribute>,
}

impl VertexLayout {
    pub fn new(attributes: &[Attribute]) -> Self {
        Self {
            attributes: attributes.to_vec(),
        }
    }

    pub fn position() -> Self {
        Self::new(&[Attribute::Position])
    }

    /// Number of floats per vertex.
    pub fn floats_per_vertex(&self) -> usize {
        self.attributes.iter().map(|a| a.components()).sum()
    }

    /// Size of one vertex in bytes.
    pub fn stride(&self) -> usize {
        self.floats_per_vertex() * size_of::<f32>()
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// Locations and byte offsets of every attribute.
    pub fn describe(&self) -> Vec<AttributeDesc> {
        let mut offset = 0;
        self.attributes
            .iter()
            .enumerate()
            .map(|(location, &attribute)| {
                let desc = AttributeDesc {
                    attribute,
                    location: location as u32,
                    components: attribute.components(),
                    offset,
                };
                offset += attribute.components() * size_of::<f32>();
                desc
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeometryBuffer {
    layout: VertexLayout,
    vertices: Vec<f32>,
    indices: Option<Vec<u32>>,
}

impl GeometryBuffer {
    /// Validates and wraps the given vertex and index data.
    pub fn new(layout: VertexLayout, vertices: Vec<f32>, indices: Option<Vec<u32>>) -> Result<Self, GeometryError> {
        if !layout.contains(Attribute::Position) {
            return Err(GeometryError::MissingPosition);
        }
        let floats = layout.floats_per_vertex();
        if vertices.len() % floats != 0 {
            return Err(GeometryError::Stride {
                len: vertices.len(),
                stride: floats,
            });
        }
        let vertex_count = vertices.len() / floats;
        if let Some(&index) = indices
            .iter()
            .flatten()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(GeometryError::IndexOutOfRange { index, vertex_count });
        }
        Ok(Self {
            layout,
            vertices,
            indices,
        })
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.floats_per_vertex()
    }

    /// Number of vertices a draw call walks: the index count if indexed, else the vertex count.
    pub fn element_count(&self) -> usize {
        self.indices.as_ref().map_or(self.vertex_count(), Vec::len)
    }
}

/// World positions of the cubes in the camera stage.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// The two separate triangles of the first stage, one buffer each.
pub fn two_triangles() -> Result<[GeometryBuffer; 2], GeometryError> {
    #[rustfmt::skip]
    let left = vec![
        -0.75, 0.5, 0.0,
        0.0, -0.5, 0.0,
        -0.75, -0.5, 0.0,
    ];
    #[rustfmt::skip]
    let right = vec![
        -0.75, -0.5, 0.0,
        0.75, -0.5, 0.0,
        0.75, 0.5, 0.0,
    ];
    Ok([
        GeometryBuffer::new(VertexLayout::position(), left, None)?,
        GeometryBuffer::new(VertexLayout::position(), right, None)?,
    ])
}

/// A triangle with a red, green and blue corner.
pub fn colored_triangle() -> Result<GeometryBuffer, GeometryError> {
    #[rustfmt::skip]
    let vertices = vec![
        // position       color
        0.5, -0.5, 0.0,   1.0, 0.0, 0.0,
        -0.5, -0.5, 0.0,  0.0, 1.0, 0.0,
        0.0, 0.5, 0.0,    0.0, 0.0, 1.0,
    ];
    GeometryBuffer::new(
        VertexLayout::new(&[Attribute::Position, Attribute::Color]),
        vertices,
        None,
    )
}

/// An indexed unit quad with colors and texture coordinates.
pub fn textured_quad() -> Result<GeometryBuffer, GeometryError> {
    #[rustfmt::skip]
    let vertices = vec![
        // position       color            uv
        0.5, 0.5, 0.0,    1.0, 0.0, 0.0,   1.0, 1.0,
        0.5, -0.5, 0.0,   0.0, 1.0, 0.0,   1.0, 0.0,
        -0.5, -0.5, 0.0,  0.0, 0.0, 1.0,   0.0, 0.0,
        -0.5, 0.5, 0.0,   1.0, 1.0, 0.0,   0.0, 1.0,
    ];
    GeometryBuffer::new(
        VertexLayout::new(&[Attribute::Position, Attribute::Color, Attribute::TexCoord]),
        vertices,
        Some(vec![0, 1, 3, 1, 2, 3]),
    )
}

/// A unit cube as 12 unindexed triangles with texture coordinates.
pub fn textured_cube() -> Result<GeometryBuffer, GeometryError> {
    #[rustfmt::skip]
    let vertices = vec![
        -0.5, -0.5, -0.5,  0.0, 0.0,
        0.5, -0.5, -0.5,   1.0, 0.0,
        0.5, 0.5, -0.5,    1.0, 1.0,
        0.5, 0.5, -0.5,    1.0, 1.0,
        -0.5, 0.5, -0.5,   0.0, 1.0,
        -0.5, -0.5, -0.5,  0.0, 0.0,

        -0.5, -0.5, 0.5,   0.0, 0.0,
        0.5, -0.5, 0.5,    1.0, 0.0,
        0.5, 0.5, 0.5,     1.0, 1.0,
        0.5, 0.5, 0.5,     1.0, 1.0,
        -0.5, 0.5, 0.5,    0.0, 1.0,
        -0.5, -0.5, 0.5,   0.0, 0.0,

        -0.5, 0.5, 0.5,    1.0, 0.0,
        -0.5, 0.5, -0.5,   1.0, 1.0,
        -0.5, -0.5, -0.5,  0.0, 1.0,
        -0.5, -0.5, -0.5,  0.0, 1.0,
        -0.5, -0.5, 0.5,   0.0, 0.0,
        -0.5, 0.5, 0.5,    1.0, 0.0,

        0.5, 0.5, 0.5,     1.0, 0.0,
        0.5, 0.5, -0.5,    1.0, 1.0,
        0.5, -0.5, -0.5,   0.0, 1.0,
        0.5, -0.5, -0.5,   0.0, 1.0,
        0.5, -0.5, 0.5,    0.0, 0.0,
        0.5, 0.5, 0.5,     1.0, 0.0,

        -0.5, -0.5, -0.5,  0.0, 1.0,
        0.5, -0.5, -0.5,   1.0, 1.0,
        0.5, -0.5, 0.5,    1.0, 0.0,
        0.5, -0.5, 0.5,    1.0, 0.0,
        -0.5, -0.5, 0.5,   0.0, 0.0,
        -0.5, -0.5, -0.5,  0.0, 1.0,

        -0.5, 0.5, -0.5,   0.0, 1.0,
        0.5, 0.5, -0.5,    1.0, 1.0,
        0.5, 0.5, 0.5,     1.0, 0.0,
        0.5, 0.5, 0.5,     1.0, 0.0,
        -0.5, 0.5, 0.5,    0.0, 0.0,
        -0.5, 0.5, -0.5,   0.0, 1.0,
    ];
    GeometryBuffer::new(
        VertexLayout::new(&[Attribute::Position, Attribute::TexCoord]),
        vertices,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_offsets_and_locations() {
        let layout = VertexLayout::new(&[Attribute::Position, Attribute::Color, Attribute::TexCoord]);
        assert_eq!(layout.floats_per_vertex(), 8);
        assert_eq!(layout.stride(), 32);
        let descs = layout.describe();
        assert_eq!(descs.len(), 3);
        assert_eq!((descs[0].location, descs[0].offset, descs[0].components), (0, 0, 3));
        assert_eq!((descs[1].location, descs[1].offset, descs[1].components), (1, 12, 3));
        assert_eq!((descs[2].location, descs[2].offset, descs[2].components), (2, 24, 2));
    }

    #[test]
    fn builtin_sets_are_valid() {
        for buffer in two_triangles().unwrap() {
            assert_eq!(buffer.layout(), &VertexLayout::position());
            assert_eq!(buffer.vertex_count(), 3);
        }

        let triangle = colored_triangle().unwrap();
        assert!(triangle.layout().contains(Attribute::Color));
        assert_eq!(triangle.element_count(), 3);

        let quad = textured_quad().unwrap();
        assert_eq!(quad.vertex_count(), 4);
        assert_eq!(quad.element_count(), 6);
        assert!(quad.indices().unwrap().iter().all(|&i| i < 4));

        let cube = textured_cube().unwrap();
        assert_eq!(cube.layout().stride(), 20);
        assert_eq!(cube.vertex_count(), 36);
        assert_eq!(cube.indices(), None);
    }

    #[test]
    fn rejects_missing_position() {
        let err = GeometryBuffer::new(VertexLayout::new(&[Attribute::Color]), vec![1.0; 3], None)
            .unwrap_err();
        assert_eq!(err, GeometryError::MissingPosition);
    }

    #[test]
    fn rejects_partial_vertices() {
        let err = GeometryBuffer::new(VertexLayout::position(), vec![0.0; 7], None).unwrap_err();
        assert_eq!(err, GeometryError::Stride { len: 7, stride: 3 });
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let err = GeometryBuffer::new(VertexLayout::position(), vec![0.0; 9], Some(vec![0, 1, 3]))
            .unwrap_err();
        assert_eq!(
            err,
            GeometryError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        );
    }
}
