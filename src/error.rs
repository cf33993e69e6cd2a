// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use thiserror::Error;

/// Errors surfaced by the preprocessing pipeline.
///
/// All structural validation happens before any output buffer is allocated,
/// so a failing stage never leaves partially converted pixels behind.
/// Saturation during the colorspace transform is expected and clamped
/// silently rather than reported.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame geometry or plane lengths are inconsistent with 4:2:0 sampling.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    /// Target dimensions or rotation value are unusable.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, Error>;
