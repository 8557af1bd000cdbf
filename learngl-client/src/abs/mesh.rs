//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct, the GPU side copy of a
//! [`GeometryBuffer`](learngl_core::GeometryBuffer). Attribute pointers are derived from the
//! buffer's [`VertexLayout`](learngl_core::VertexLayout).

use std::sync::Arc;

use glow::HasContext;
use learngl_core::GeometryBuffer;

/// Views a slice of plain numbers as bytes for upload.
fn as_bytes<T: Copy>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data)) }
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    count: usize,
}

impl Mesh {
    /// Uploads the geometry into a new vertex array. Geometry without indices is drawn with
    /// `glDrawArrays`.
    pub fn new(gl: &Arc<glow::Context>, geometry: &GeometryBuffer) -> Result<Self, String> {
        unsafe {
            // Release what was already created if a later allocation fails.
            let vao = gl.create_vertex_array()?;
            let vbo = gl
                .create_buffer()
                .inspect_err(|_| gl.delete_vertex_array(vao))?;
            let ebo = match geometry.indices() {
                Some(_) => Some(gl.create_buffer().inspect_err(|_| {
                    gl.delete_buffer(vbo);
                    gl.delete_vertex_array(vao);
                })?),
                None => None,
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                as_bytes(geometry.vertices()),
                glow::STATIC_DRAW,
            );

            if let (Some(ebo), Some(indices)) = (ebo, geometry.indices()) {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    as_bytes(indices),
                    glow::STATIC_DRAW,
                );
            }

            let stride = geometry.layout().stride() as i32;
            for attribute in geometry.layout().describe() {
                gl.enable_vertex_attrib_array(attribute.location);
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components as i32,
                    glow::FLOAT,
                    false,
                    stride,
                    attribute.offset as i32,
                );
            }

            // The element buffer binding is part of the VAO, so unbind the VAO first.
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                draw_mode: glow::TRIANGLES,
                vao,
                vbo,
                ebo,
                count: geometry.element_count(),
            })
        }
    }

    /// Draws the mesh with whatever program is bound.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl
                    .draw_elements(self.draw_mode, self.count as i32, glow::UNSIGNED_INT, 0);
            } else {
                self.gl.draw_arrays(self.draw_mode, 0, self.count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }

    /// Number of vertices or indices walked per draw.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abs::App;
    use learngl_core::geometry;

    #[test]
    #[ignore = "needs an OpenGL 3.3 context"]
    fn indexed_and_plain_geometry_upload_cleanly() {
        let app = App::hidden().unwrap();
        let quad = Mesh::new(&app.gl, &geometry::textured_quad().unwrap()).unwrap();
        assert_eq!(quad.count(), 6);
        assert!(quad.ebo.is_some());

        let cube = Mesh::new(&app.gl, &geometry::textured_cube().unwrap()).unwrap();
        assert_eq!(cube.count(), 36);
        assert!(cube.ebo.is_none());

        drop(quad);
        drop(cube);
        unsafe {
            assert_eq!(app.gl.get_error(), glow::NO_ERROR);
        }
    }
}
