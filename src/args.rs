// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the frame converter.
///
/// Converts one raw YUV 4:2:0 frame, supplied as three plane files, into a
/// raw RGBA buffer sized for a model input. Arguments can be specified via
/// command line or environment variables.
///
/// # Example
///
/// ```bash
/// camera-preproc --y-plane y.raw --u-plane u.raw --v-plane v.raw \
///     --frame-size "1920 1080" --rotation 90 --input-size "640 640" \
///     --output frame.rgba
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Raw luma (Y) plane file
    #[arg(long, env = "Y_PLANE")]
    pub y_plane: PathBuf,

    /// Raw U chroma plane file
    #[arg(long, env = "U_PLANE")]
    pub u_plane: PathBuf,

    /// Raw V chroma plane file
    #[arg(long, env = "V_PLANE")]
    pub v_plane: PathBuf,

    /// Frame resolution in pixels (width height)
    #[arg(
        long,
        env = "FRAME_SIZE",
        default_value = "1920 1080",
        value_delimiter = ' ',
        num_args = 2
    )]
    pub frame_size: Vec<u32>,

    /// Chroma plane pixel stride (1 for planar, 2 for semi-planar views)
    #[arg(long, env = "CHROMA_STRIDE", default_value = "2")]
    pub chroma_stride: usize,

    /// Sensor rotation in degrees (0, 90, 180 or 270, clockwise)
    #[arg(short, long, env = "ROTATION", default_value = "0")]
    pub rotation: i32,

    /// Model input resolution in pixels (width height)
    #[arg(
        long,
        env = "INPUT_SIZE",
        default_value = "640 640",
        value_delimiter = ' ',
        num_args = 2
    )]
    pub input_size: Vec<u32>,

    /// Output file for the raw RGBA buffer
    #[arg(short, long, env = "OUTPUT", default_value = "frame.rgba")]
    pub output: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
