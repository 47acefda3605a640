//! Little-endian cursor over a chunk payload
//!
//! All multi-byte fields in an OVO payload are little-endian; strings are
//! NUL-terminated ASCII; matrices are 16 column-major f32 values. Every read
//! is bounds checked so a truncated payload surfaces as an error instead of
//! a panic.

use crate::foundation::math::{Mat4, Vec2, Vec3};
use crate::import::ovo::ImportError;

/// Bounds-checked reader over one chunk payload
pub struct ChunkReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ChunkReader<'a> {
    /// Wrap a payload slice
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], ImportError> {
        if self.remaining() < count {
            return Err(ImportError::Truncated {
                offset: self.pos,
                wanted: count,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    /// Skip `count` bytes
    pub fn skip(&mut self, count: usize) -> Result<(), ImportError> {
        self.take(count).map(|_| ())
    }

    /// Read a raw byte slice
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], ImportError> {
        self.take(count)
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> Result<u8, ImportError> {
        Ok(self.take(1)?[0])
    }

    /// Read a little-endian u32
    pub fn read_u32(&mut self) -> Result<u32, ImportError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a little-endian f32
    pub fn read_f32(&mut self) -> Result<f32, ImportError> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Read three f32 values as a vector
    pub fn read_vec3(&mut self) -> Result<Vec3, ImportError> {
        Ok(Vec3::new(self.read_f32()?, self.read_f32()?, self.read_f32()?))
    }

    /// Read a 4x4 column-major f32 matrix
    pub fn read_mat4(&mut self) -> Result<Mat4, ImportError> {
        let mut values = [0.0f32; 16];
        for value in &mut values {
            *value = self.read_f32()?;
        }
        Ok(Mat4::from_column_slice(&values))
    }

    /// Read a NUL-terminated string
    pub fn read_cstring(&mut self) -> Result<String, ImportError> {
        let rest = &self.data[self.pos..];
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(ImportError::UnterminatedString { offset: self.pos })?;
        let text = String::from_utf8_lossy(&rest[..nul]).into_owned();
        self.pos += nul + 1;
        Ok(text)
    }
}

/// Unpack a 3x10-bit signed-normalized vector from a u32.
///
/// Components occupy bits 0..10, 10..20, and 20..30; the top two bits are
/// padding. Each component maps to [-1, 1].
pub fn unpack_snorm3x10(raw: u32) -> Vec3 {
    fn component(raw: u32, shift: u32) -> f32 {
        // Sign-extend the 10-bit field.
        let bits = ((raw >> shift) & 0x3FF) as i32;
        let value = (bits << 22) >> 22;
        (value as f32 / 511.0).clamp(-1.0, 1.0)
    }
    Vec3::new(component(raw, 0), component(raw, 10), component(raw, 20))
}

/// Unpack two half-precision floats from a u32 (low half first)
pub fn unpack_half2x16(raw: u32) -> Vec2 {
    Vec2::new(half_to_f32(raw as u16), half_to_f32((raw >> 16) as u16))
}

fn half_to_f32(bits: u16) -> f32 {
    let sign = u32::from(bits >> 15) << 31;
    let exponent = u32::from(bits >> 10) & 0x1F;
    let fraction = u32::from(bits) & 0x3FF;
    let bits32 = if exponent == 0 {
        if fraction == 0 {
            sign
        } else {
            // Subnormal half: renormalize into the f32 range.
            let mut exponent = 113u32;
            let mut fraction = fraction;
            while fraction & 0x400 == 0 {
                fraction <<= 1;
                exponent -= 1;
            }
            sign | (exponent << 23) | ((fraction & 0x3FF) << 13)
        }
    } else if exponent == 0x1F {
        sign | 0x7F80_0000 | (fraction << 13)
    } else {
        sign | ((exponent + 112) << 23) | (fraction << 13)
    };
    f32::from_bits(bits32)
}
