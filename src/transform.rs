// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    error::{Error, Result},
    frame::{RgbImage, Rotation},
};
use tracing::debug;

/// Resizes and rotates an RGBA image into the fixed model-input box.
///
/// The two operations always run in this order:
///
/// 1. Bilinear scale to exactly `target_width x target_height`.
/// 2. Rotate the scaled buffer clockwise and re-sample into the same
///    `target_width x target_height` box, centering the rotated content.
///    90/270 degree rotations swap the content's dimensions, so the area
///    the rotated content does not cover is padded with opaque black and
///    anything falling outside the box is cropped. The declared output
///    dimensions never change with the rotation angle.
///
/// `Rotation::Rotation0` skips step 2 entirely.
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] if either target dimension is zero.
pub fn transform(
    image: &RgbImage,
    target_width: u32,
    target_height: u32,
    rotation: Rotation,
) -> Result<RgbImage> {
    if target_width == 0 || target_height == 0 {
        return Err(Error::InvalidParameters(format!(
            "non-positive target dimensions {target_width}x{target_height}"
        )));
    }

    let scaled = resize_bilinear(image, target_width, target_height);
    let out = match rotation {
        Rotation::Rotation0 => scaled,
        _ => rotate_into_box(&scaled, rotation),
    };
    debug!(
        "transform {}x{} -> {} rot:{}",
        image.width(),
        image.height(),
        out,
        rotation.degrees()
    );
    Ok(out)
}

/// Bilinear resample with corner-aligned sampling, so resizing to the
/// source's own dimensions reproduces it exactly.
fn resize_bilinear(src: &RgbImage, dst_w: u32, dst_h: u32) -> RgbImage {
    if src.width() == dst_w && src.height() == dst_h {
        return src.clone();
    }

    let sw = src.width() as usize;
    let sh = src.height() as usize;
    let x_ratio = if dst_w > 1 {
        (sw - 1) as f32 / (dst_w - 1) as f32
    } else {
        0.0
    };
    let y_ratio = if dst_h > 1 {
        (sh - 1) as f32 / (dst_h - 1) as f32
    } else {
        0.0
    };

    let spx = src.pixels();
    let mut out = RgbImage::new(dst_w, dst_h);
    for oy in 0..dst_h {
        let fy = oy as f32 * y_ratio;
        let y0 = fy as usize;
        let y1 = (y0 + 1).min(sh - 1);
        let wy = fy - y0 as f32;
        for ox in 0..dst_w {
            let fx = ox as f32 * x_ratio;
            let x0 = fx as usize;
            let x1 = (x0 + 1).min(sw - 1);
            let wx = fx - x0 as f32;

            let i00 = (y0 * sw + x0) * 4;
            let i01 = (y0 * sw + x1) * 4;
            let i10 = (y1 * sw + x0) * 4;
            let i11 = (y1 * sw + x1) * 4;

            let mut px = [0u8; 4];
            for ch in 0..4 {
                let top = spx[i00 + ch] as f32 * (1.0 - wx) + spx[i01 + ch] as f32 * wx;
                let bot = spx[i10 + ch] as f32 * (1.0 - wx) + spx[i11 + ch] as f32 * wx;
                px[ch] = (top * (1.0 - wy) + bot * wy + 0.5) as u8;
            }
            out.set_pixel(ox, oy, px);
        }
    }
    out
}

/// Rotates `src` clockwise in 90-degree steps and centers the result in a
/// box of the source's dimensions, cropping or padding as needed.
fn rotate_into_box(src: &RgbImage, rotation: Rotation) -> RgbImage {
    let bw = src.width();
    let bh = src.height();

    // Dimensions of the rotated content before crop/pad.
    let (rw, rh) = match rotation {
        Rotation::Rotation90 | Rotation::Rotation270 => (bh, bw),
        _ => (bw, bh),
    };
    let off_x = (bw as i64 - rw as i64) / 2;
    let off_y = (bh as i64 - rh as i64) / 2;

    let mut out = RgbImage::new(bw, bh);
    for oy in 0..bh {
        for ox in 0..bw {
            let rx = ox as i64 - off_x;
            let ry = oy as i64 - off_y;
            if rx < 0 || ry < 0 || rx >= rw as i64 || ry >= rh as i64 {
                continue;
            }
            let (rx, ry) = (rx as u32, ry as u32);
            let (sx, sy) = match rotation {
                Rotation::Rotation90 => (ry, bh - 1 - rx),
                Rotation::Rotation180 => (bw - 1 - rx, bh - 1 - ry),
                Rotation::Rotation270 => (bw - 1 - ry, rx),
                Rotation::Rotation0 => (rx, ry),
            };
            out.set_pixel(ox, oy, src.pixel(sx, sy));
        }
    }
    out
}
