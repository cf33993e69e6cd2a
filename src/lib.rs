// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # Camera Stream Preprocessing Library
//!
//! This library converts raw YUV 4:2:0 camera-sensor frames into rotated,
//! resized RGBA pixel buffers ready for ML inference input. The capture
//! layer hands over three color-plane byte buffers with their pixel strides
//! plus the frame geometry; the pipeline returns one fixed-size RGBA buffer.
//!
//! ## Stages
//!
//! - **Plane packing**: normalize the Y/U/V planes (planar or semi-planar)
//!   into one canonical NV21-ordered byte buffer.
//! - **Colorspace conversion**: BT.601 full-range fixed-point YUV to RGBA.
//! - **Geometric transform**: bilinear scale to the model input dimensions,
//!   then clockwise rotation in 90-degree steps within the fixed output box.
//!
//! The software backend is the reference implementation; accelerated
//! resample/colorspace engines can plug in through
//! [`pipeline::ConvertBackend`].
//!
//! ## Example
//!
//! ```
//! use camera_preproc::{
//!     frame::{FrameDescriptor, PlaneBuffer},
//!     pipeline::Pipeline,
//! };
//!
//! # fn main() -> Result<(), camera_preproc::error::Error> {
//! // A 4x4 mid-gray frame with semi-planar chroma (stride 2).
//! let y = PlaneBuffer::new(vec![128; 16], 1)?;
//! let u = PlaneBuffer::new(vec![128; 8], 2)?;
//! let v = PlaneBuffer::new(vec![128; 8], 2)?;
//! let frame = FrameDescriptor::new([y, u, v], 4, 4, 0)?;
//!
//! let out = Pipeline::new().run(&frame, 2, 2)?;
//! assert_eq!(out.pixel(0, 0), [128, 128, 128, 255]);
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod transform;
