use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("expected {expected} bytes for the buffer, got {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

/// Packed RGB bytes, row-major, three bytes per pixel.
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    pub fn from_data(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self, PixelBufferError> {
        let expected = buffer_size(width, height);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }
}
