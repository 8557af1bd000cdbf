//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::{DynamicImage, GenericImageView};

use crate::error::TextureError;

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decodes the image at `path` and uploads it. Relative paths resolve against the working
    /// directory.
    pub fn from_path(gl: &Arc<glow::Context>, path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let texture = Self::new(gl, &image)?;
        log::debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width(),
            texture.height()
        );
        Ok(texture)
    }

    /// Creates a new texture from the given [`image::DynamicImage`]. Rows are flipped so the
    /// first row of the image ends up at `v = 1`.
    pub fn new(gl: &Arc<glow::Context>, image: &DynamicImage) -> Result<Self, TextureError> {
        let (width, height) = image.dimensions();
        let data = image.flipv().to_rgba8().into_raw();
        unsafe {
            let texture = gl.create_texture().map_err(TextureError::Create)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

/// Clears whatever texture is bound to `unit`, so sampling it reads black.
pub fn unbind_texture(gl: &glow::Context, unit: u32) {
    unsafe {
        gl.active_texture(glow::TEXTURE0 + unit);
        gl.bind_texture(glow::TEXTURE_2D, None);
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abs::App;

    #[test]
    #[ignore = "needs an OpenGL 3.3 context"]
    fn missing_file_is_a_decode_error() {
        let app = App::hidden().unwrap();
        let result = Texture::from_path(&app.gl, "does/not/exist.png");
        assert!(matches!(result, Err(TextureError::Decode { .. })));
    }

    #[test]
    #[ignore = "needs an OpenGL 3.3 context"]
    fn uploads_keep_dimensions() {
        let app = App::hidden().unwrap();
        let image = DynamicImage::ImageRgb8(image::RgbImage::new(4, 2));
        let texture = Texture::new(&app.gl, &image).unwrap();
        assert_eq!((texture.width(), texture.height()), (4, 2));
        texture.bind(0);
    }
}
