// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::error::{Error, Result};
use core::fmt;

/// One color plane of a camera frame: raw bytes plus the pixel stride.
///
/// The pixel stride is the byte distance between consecutive samples of the
/// plane: 1 for a fully packed plane, 2 for the chroma views of a
/// semi-planar layout where U and V are two offset windows onto the same
/// interleaved bytes.
#[derive(Debug, Clone)]
pub struct PlaneBuffer {
    bytes: Vec<u8>,
    pixel_stride: usize,
}

impl PlaneBuffer {
    /// Wraps a plane's bytes with its pixel stride.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] if `pixel_stride` is zero.
    pub fn new(bytes: Vec<u8>, pixel_stride: usize) -> Result<Self> {
        if pixel_stride == 0 {
            return Err(Error::InvalidFrame("plane pixel stride is zero".into()));
        }
        Ok(Self {
            bytes,
            pixel_stride,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn pixel_stride(&self) -> usize {
        self.pixel_stride
    }

    /// Number of logical samples the plane can supply under its stride.
    pub fn sample_count(&self) -> usize {
        if self.bytes.is_empty() {
            0
        } else {
            (self.bytes.len() - 1) / self.pixel_stride + 1
        }
    }
}

/// Image rotation angles supported by the pipeline.
///
/// All rotations are clockwise in 90-degree steps, matching camera sensor
/// orientation metadata.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation (0 degrees)
    Rotation0,
    /// Rotate 90 degrees clockwise
    Rotation90,
    /// Rotate 180 degrees
    Rotation180,
    /// Rotate 270 degrees clockwise (90 degrees counter-clockwise)
    Rotation270,
}

impl Rotation {
    /// Parses a rotation angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] for any value outside
    /// {0, 90, 180, 270}.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::Rotation0),
            90 => Ok(Rotation::Rotation90),
            180 => Ok(Rotation::Rotation180),
            270 => Ok(Rotation::Rotation270),
            _ => Err(Error::InvalidParameters(format!(
                "unsupported rotation {degrees} degrees"
            ))),
        }
    }

    pub fn degrees(&self) -> i32 {
        match self {
            Rotation::Rotation0 => 0,
            Rotation::Rotation90 => 90,
            Rotation::Rotation180 => 180,
            Rotation::Rotation270 => 270,
        }
    }
}

/// A single YUV 4:2:0 camera frame as delivered by the capture layer.
///
/// Holds the three color planes (Y, U, V in that order) together with the
/// frame geometry and the sensor rotation. The descriptor is validated once
/// at construction and read-only afterwards; each frame is consumed by one
/// pipeline run and then discarded.
///
/// # Example
///
/// ```
/// use camera_preproc::frame::{FrameDescriptor, PlaneBuffer};
///
/// # fn main() -> Result<(), camera_preproc::error::Error> {
/// let y = PlaneBuffer::new(vec![128; 4 * 2], 1)?;
/// let u = PlaneBuffer::new(vec![128; 2], 1)?;
/// let v = PlaneBuffer::new(vec![128; 2], 1)?;
/// let frame = FrameDescriptor::new([y, u, v], 4, 2, 90)?;
/// assert_eq!(frame.rotation().degrees(), 90);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FrameDescriptor {
    planes: [PlaneBuffer; 3],
    width: u32,
    height: u32,
    rotation: Rotation,
}

impl FrameDescriptor {
    /// Builds a validated frame descriptor from caller-supplied planes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] if:
    /// - `width` or `height` is zero or odd (4:2:0 subsamples both axes)
    /// - the luma plane length does not equal `width * height`
    /// - either chroma plane is too short to supply `width/2 * height/2`
    ///   samples under its own pixel stride
    ///
    /// Returns [`Error::InvalidParameters`] if `rotation_degrees` is not one
    /// of 0, 90, 180 or 270.
    pub fn new(
        planes: [PlaneBuffer; 3],
        width: u32,
        height: u32,
        rotation_degrees: i32,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidFrame(format!(
                "non-positive frame dimensions {width}x{height}"
            )));
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(Error::InvalidFrame(format!(
                "odd frame dimensions {width}x{height} cannot be 4:2:0 sampled"
            )));
        }

        let luma_len = width as usize * height as usize;
        if planes[0].bytes().len() != luma_len {
            return Err(Error::InvalidFrame(format!(
                "luma plane holds {} bytes, expected {luma_len}",
                planes[0].bytes().len()
            )));
        }

        let chroma_samples = (width as usize / 2) * (height as usize / 2);
        for (name, plane) in [("U", &planes[1]), ("V", &planes[2])] {
            if plane.sample_count() < chroma_samples {
                return Err(Error::InvalidFrame(format!(
                    "{name} plane supplies {} samples at stride {}, expected {chroma_samples}",
                    plane.sample_count(),
                    plane.pixel_stride()
                )));
            }
        }

        let rotation = Rotation::from_degrees(rotation_degrees)?;

        Ok(Self {
            planes,
            width,
            height,
            rotation,
        })
    }

    pub fn luma(&self) -> &PlaneBuffer {
        &self.planes[0]
    }

    pub fn chroma_u(&self) -> &PlaneBuffer {
        &self.planes[1]
    }

    pub fn chroma_v(&self) -> &PlaneBuffer {
        &self.planes[2]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

impl fmt::Display for FrameDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} rot:{} strides:[{},{},{}]",
            self.width,
            self.height,
            self.rotation.degrees(),
            self.planes[0].pixel_stride(),
            self.planes[1].pixel_stride(),
            self.planes[2].pixel_stride(),
        )
    }
}

/// A dense RGBA pixel buffer, 4 bytes per pixel, row-major, top-left origin.
///
/// Produced by the colorspace converter and re-created (never aliased) by
/// the geometric transform; the final instance is handed to the inference
/// consumer.
#[derive(Debug, Clone)]
pub struct RgbImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbImage {
    /// Allocates an opaque black image of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 0xff;
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Wraps an existing RGBA byte buffer.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height * 4`; callers construct
    /// these buffers internally with known sizes.
    pub fn from_pixels(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA sample at pixel coordinates, top-left origin.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Overwrites the RGBA sample at pixel coordinates, top-left origin.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&px);
    }
}

impl fmt::Display for RgbImage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{} RGBA {}B", self.width, self.height, self.pixels.len())
    }
}
