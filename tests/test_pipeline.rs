// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use camera_preproc::{
    convert,
    error::Error as PreprocError,
    frame::{FrameDescriptor, PlaneBuffer, RgbImage, Rotation},
    pipeline::Pipeline,
    transform,
};
use std::error::Error;

/// Builds a frame with uniform luma and mid-gray chroma, fully planar.
fn uniform_frame(width: u32, height: u32, luma: u8, rotation: i32) -> FrameDescriptor {
    let y = vec![luma; (width * height) as usize];
    let chroma = vec![128u8; (width * height / 4) as usize];
    FrameDescriptor::new(
        [
            PlaneBuffer::new(y, 1).unwrap(),
            PlaneBuffer::new(chroma.clone(), 1).unwrap(),
            PlaneBuffer::new(chroma, 1).unwrap(),
        ],
        width,
        height,
        rotation,
    )
    .unwrap()
}

#[test]
fn test_pack_order_semi_planar() -> Result<(), Box<dyn Error>> {
    // 4x2 frame, chroma as stride-2 views: the packed buffer is the luma
    // block followed by VU pairs read at each plane's own stride.
    let y = PlaneBuffer::new(vec![1, 2, 3, 4, 5, 6, 7, 8], 1)?;
    let u = PlaneBuffer::new(vec![10, 0, 12, 0], 2)?;
    let v = PlaneBuffer::new(vec![20, 0, 22, 0], 2)?;
    let frame = FrameDescriptor::new([y, u, v], 4, 2, 0)?;

    let packed = convert::pack(&frame)?;
    assert_eq!(packed, vec![1, 2, 3, 4, 5, 6, 7, 8, 20, 10, 22, 12]);
    Ok(())
}

#[test]
fn test_pack_order_planar() -> Result<(), Box<dyn Error>> {
    // Same logical samples delivered as fully packed planes (stride 1)
    // must produce the identical canonical buffer.
    let y = PlaneBuffer::new(vec![1, 2, 3, 4, 5, 6, 7, 8], 1)?;
    let u = PlaneBuffer::new(vec![10, 12], 1)?;
    let v = PlaneBuffer::new(vec![20, 22], 1)?;
    let frame = FrameDescriptor::new([y, u, v], 4, 2, 0)?;

    let packed = convert::pack(&frame)?;
    assert_eq!(packed, vec![1, 2, 3, 4, 5, 6, 7, 8, 20, 10, 22, 12]);
    Ok(())
}

#[test]
fn test_midgray_round_trip() -> Result<(), Box<dyn Error>> {
    let frame = uniform_frame(8, 8, 128, 0);
    let out = Pipeline::new().run(&frame, 8, 8)?;

    assert_eq!(out.width(), 8);
    assert_eq!(out.height(), 8);
    for px in out.pixels().chunks_exact(4) {
        assert_eq!(px, [128, 128, 128, 255]);
    }
    Ok(())
}

#[test]
fn test_red_conversion() -> Result<(), Box<dyn Error>> {
    // Y=76 U=84 V=255 is the classic BT.601 full-range red.
    let y = PlaneBuffer::new(vec![76; 4], 1)?;
    let u = PlaneBuffer::new(vec![84], 1)?;
    let v = PlaneBuffer::new(vec![255], 1)?;
    let frame = FrameDescriptor::new([y, u, v], 2, 2, 0)?;

    let out = Pipeline::new().run(&frame, 2, 2)?;
    assert_eq!(out.pixel(0, 0), [254, 0, 0, 255]);
    Ok(())
}

#[test]
fn test_output_dimensions_for_all_rotations() -> Result<(), Box<dyn Error>> {
    // Output size is the requested target regardless of rotation.
    for rotation in [0, 90, 180, 270] {
        for (tw, th) in [(16, 16), (32, 8), (10, 6)] {
            let frame = uniform_frame(8, 8, 200, rotation);
            let out = Pipeline::new().run(&frame, tw, th)?;
            assert_eq!(out.width(), tw);
            assert_eq!(out.height(), th);
            assert_eq!(out.pixels().len(), (tw * th * 4) as usize);
        }
    }
    Ok(())
}

#[test]
fn test_four_quarter_turns_identity() -> Result<(), Box<dyn Error>> {
    // An asymmetric square image rotated 90 degrees four times comes back
    // to its original orientation exactly (no resampling on a square box).
    let mut img = RgbImage::new(6, 6);
    for y in 0..6 {
        for x in 0..6 {
            img.set_pixel(x, y, [(x * 40) as u8, (y * 40) as u8, 0, 255]);
        }
    }
    img.set_pixel(1, 0, [255, 255, 255, 255]);

    let mut turned = img.clone();
    for _ in 0..4 {
        turned = transform::transform(&turned, 6, 6, Rotation::Rotation90)?;
    }
    assert_eq!(turned.pixels(), img.pixels());
    Ok(())
}

#[test]
fn test_scale_before_rotate() -> Result<(), Box<dyn Error>> {
    // 5x3 source with a white marker at (1,1). Corner-aligned scaling to
    // 9x5 doubles both axes, putting the marker exactly at (2,2). Rotating
    // the scaled 9x5 buffer 90 degrees clockwise yields 5x9 content
    // centered in the 9x5 box (pad x by 2, crop y by 2), which lands the
    // marker at (4,0). Rotating before scaling would put it elsewhere.
    let mut img = RgbImage::new(5, 3);
    img.set_pixel(1, 1, [255, 255, 255, 255]);

    let out = transform::transform(&img, 9, 5, Rotation::Rotation90)?;
    assert_eq!(out.width(), 9);
    assert_eq!(out.height(), 5);
    assert_eq!(out.pixel(4, 0), [255, 255, 255, 255]);
    // The marker's pre-rotation position holds unrelated content.
    assert_eq!(out.pixel(2, 2), [0, 0, 0, 255]);
    Ok(())
}

#[test]
fn test_rotation_zero_is_identity() -> Result<(), Box<dyn Error>> {
    let mut img = RgbImage::new(4, 2);
    img.set_pixel(3, 1, [9, 8, 7, 255]);

    let out = transform::transform(&img, 4, 2, Rotation::Rotation0)?;
    assert_eq!(out.pixels(), img.pixels());
    Ok(())
}

#[test]
fn test_odd_width_rejected() {
    let res = FrameDescriptor::new(
        [
            PlaneBuffer::new(vec![0; 12], 1).unwrap(),
            PlaneBuffer::new(vec![0; 3], 1).unwrap(),
            PlaneBuffer::new(vec![0; 3], 1).unwrap(),
        ],
        3,
        4,
        0,
    );
    assert!(matches!(res, Err(PreprocError::InvalidFrame(_))));
}

#[test]
fn test_luma_length_mismatch_rejected() {
    let res = FrameDescriptor::new(
        [
            PlaneBuffer::new(vec![0; 15], 1).unwrap(),
            PlaneBuffer::new(vec![0; 4], 1).unwrap(),
            PlaneBuffer::new(vec![0; 4], 1).unwrap(),
        ],
        4,
        4,
        0,
    );
    assert!(matches!(res, Err(PreprocError::InvalidFrame(_))));
}

#[test]
fn test_short_chroma_plane_rejected() {
    // 4x4 needs 4 chroma samples per plane; 3 bytes at stride 1 is short.
    let res = FrameDescriptor::new(
        [
            PlaneBuffer::new(vec![0; 16], 1).unwrap(),
            PlaneBuffer::new(vec![0; 3], 1).unwrap(),
            PlaneBuffer::new(vec![0; 4], 1).unwrap(),
        ],
        4,
        4,
        0,
    );
    assert!(matches!(res, Err(PreprocError::InvalidFrame(_))));
}

#[test]
fn test_unsupported_rotation_rejected() {
    assert!(matches!(
        Rotation::from_degrees(45),
        Err(PreprocError::InvalidParameters(_))
    ));
    let res = FrameDescriptor::new(
        [
            PlaneBuffer::new(vec![0; 16], 1).unwrap(),
            PlaneBuffer::new(vec![0; 4], 1).unwrap(),
            PlaneBuffer::new(vec![0; 4], 1).unwrap(),
        ],
        4,
        4,
        -90,
    );
    assert!(matches!(res, Err(PreprocError::InvalidParameters(_))));
}

#[test]
fn test_zero_target_rejected() {
    let frame = uniform_frame(4, 4, 128, 0);
    let res = Pipeline::new().run(&frame, 0, 4);
    assert!(matches!(res, Err(PreprocError::InvalidParameters(_))));
}

#[test]
fn test_packed_length_checked() {
    let res = convert::yuv_to_rgba(&[0u8; 10], 4, 4);
    assert!(matches!(res, Err(PreprocError::InvalidFrame(_))));
}
