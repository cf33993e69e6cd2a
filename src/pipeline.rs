// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    convert, error::Result, frame::{FrameDescriptor, RgbImage, Rotation}, transform,
};
use tracing::debug;

/// Capability contract for the three conversion stages.
///
/// The pure-software [`CpuBackend`] is the reference implementation and the
/// one deterministic tests run against; a hardware-accelerated resample or
/// colorspace engine can satisfy the same contract. Any device context a
/// backend needs is owned by the backend value and released when it drops,
/// never held in global state.
pub trait ConvertBackend {
    /// Repack the Y/U/V planes into one NV21-ordered byte buffer.
    fn pack(&self, frame: &FrameDescriptor) -> Result<Vec<u8>>;

    /// Convert a packed NV21 buffer to a dense RGBA image.
    fn convert(&self, packed: &[u8], width: u32, height: u32) -> Result<RgbImage>;

    /// Bilinear-scale to the target box, then rotate within it.
    fn transform(
        &self,
        image: &RgbImage,
        target_width: u32,
        target_height: u32,
        rotation: Rotation,
    ) -> Result<RgbImage>;
}

/// Pure-software reference backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuBackend;

impl ConvertBackend for CpuBackend {
    fn pack(&self, frame: &FrameDescriptor) -> Result<Vec<u8>> {
        convert::pack(frame)
    }

    fn convert(&self, packed: &[u8], width: u32, height: u32) -> Result<RgbImage> {
        convert::yuv_to_rgba(packed, width, height)
    }

    fn transform(
        &self,
        image: &RgbImage,
        target_width: u32,
        target_height: u32,
        rotation: Rotation,
    ) -> Result<RgbImage> {
        transform::transform(image, target_width, target_height, rotation)
    }
}

/// Frame conversion pipeline: pack, colorspace convert, scale + rotate.
///
/// Each `run` call owns its full chain of intermediate buffers and shares
/// no state with other calls, so a single `Pipeline` may be driven from
/// multiple threads. A failing stage aborts the whole frame; no partial
/// output is ever returned.
///
/// # Example
///
/// ```
/// use camera_preproc::{frame::{FrameDescriptor, PlaneBuffer}, pipeline::Pipeline};
///
/// # fn main() -> Result<(), camera_preproc::error::Error> {
/// let y = PlaneBuffer::new(vec![128; 8 * 8], 1)?;
/// let u = PlaneBuffer::new(vec![128; 16], 1)?;
/// let v = PlaneBuffer::new(vec![128; 16], 1)?;
/// let frame = FrameDescriptor::new([y, u, v], 8, 8, 90)?;
///
/// let out = Pipeline::new().run(&frame, 4, 4)?;
/// assert_eq!(out.pixels().len(), 4 * 4 * 4);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<B = CpuBackend> {
    backend: B,
}

impl Pipeline<CpuBackend> {
    /// Creates a pipeline over the software reference backend.
    pub fn new() -> Self {
        Self {
            backend: CpuBackend,
        }
    }
}

impl Default for Pipeline<CpuBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ConvertBackend> Pipeline<B> {
    /// Creates a pipeline over a caller-supplied backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Runs the full conversion for one frame.
    ///
    /// # Errors
    ///
    /// Propagates the first stage failure unchanged; see
    /// [`crate::error::Error`] for the kinds.
    pub fn run(
        &self,
        frame: &FrameDescriptor,
        target_width: u32,
        target_height: u32,
    ) -> Result<RgbImage> {
        let packed = self.backend.pack(frame)?;
        let rgba = self
            .backend
            .convert(&packed, frame.width(), frame.height())?;
        let out = self
            .backend
            .transform(&rgba, target_width, target_height, frame.rotation())?;
        debug!("converted {} -> {}", frame, out);
        Ok(out)
    }
}
