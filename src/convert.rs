// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    error::{Error, Result},
    frame::{FrameDescriptor, RgbImage},
};
use tracing::debug;

/// Repacks the three 4:2:0 planes into one NV21-ordered byte buffer.
///
/// The output holds all luma bytes followed by the chroma samples
/// interleaved in VU order (V byte first). Chroma sample `k` is read from
/// each plane at `k * pixel_stride` within that plane's own bytes, so both
/// fully planar (stride 1) and semi-planar (stride 2, U and V as two offset
/// views of the same interleaved region) camera layouts normalize to the
/// same canonical buffer.
///
/// Output length is always `width*height + 2*(width*height/4)`.
///
/// # Errors
///
/// Frame geometry is validated when the [`FrameDescriptor`] is built, so
/// packing a valid descriptor cannot fail; the `Result` is part of the
/// backend contract shared with accelerated implementations.
pub fn pack(frame: &FrameDescriptor) -> Result<Vec<u8>> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let luma_len = width * height;
    let chroma_samples = luma_len / 4;

    let mut packed = Vec::with_capacity(luma_len + 2 * chroma_samples);
    packed.extend_from_slice(frame.luma().bytes());

    let u = frame.chroma_u();
    let v = frame.chroma_v();
    let u_stride = u.pixel_stride();
    let v_stride = v.pixel_stride();
    for k in 0..chroma_samples {
        packed.push(v.bytes()[k * v_stride]);
        packed.push(u.bytes()[k * u_stride]);
    }

    debug!("packed {} ({} bytes)", frame, packed.len());
    Ok(packed)
}

#[inline]
fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Converts a packed NV21 buffer to a dense RGBA image.
///
/// Uses the BT.601 full-range transform in 8-bit fixed point:
///
/// ```text
/// R = Y + 1.402 (V-128)
/// G = Y - 0.344 (U-128) - 0.714 (V-128)
/// B = Y + 1.772 (U-128)
/// ```
///
/// Each channel saturates to [0, 255]; saturation is expected and never
/// reported. Alpha is fully opaque. The output keeps the frame's original
/// unrotated, unscaled dimensions.
///
/// # Errors
///
/// Returns [`Error::InvalidFrame`] if the buffer length does not match
/// `width*height + 2*(width*height/4)`.
pub fn yuv_to_rgba(packed: &[u8], width: u32, height: u32) -> Result<RgbImage> {
    let w = width as usize;
    let h = height as usize;
    let luma_len = w * h;
    let expected = luma_len + 2 * (luma_len / 4);
    if packed.len() != expected {
        return Err(Error::InvalidFrame(format!(
            "packed buffer holds {} bytes, expected {expected} for {width}x{height}",
            packed.len()
        )));
    }

    let half_w = w / 2;
    let mut pixels = vec![0u8; luma_len * 4];
    for row in 0..h {
        for col in 0..w {
            let y = packed[row * w + col] as i32;
            let k = (row / 2) * half_w + col / 2;
            let v = packed[luma_len + 2 * k] as i32 - 128;
            let u = packed[luma_len + 2 * k + 1] as i32 - 128;

            let r = (256 * y + 359 * v) >> 8;
            let g = (256 * y - 88 * u - 183 * v) >> 8;
            let b = (256 * y + 454 * u) >> 8;

            let i = (row * w + col) * 4;
            pixels[i] = clamp_u8(r);
            pixels[i + 1] = clamp_u8(g);
            pixels[i + 2] = clamp_u8(b);
            pixels[i + 3] = 0xff;
        }
    }

    Ok(RgbImage::from_pixels(pixels, width, height))
}
