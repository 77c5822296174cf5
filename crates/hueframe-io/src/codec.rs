//! Image codec abstraction and resilient loading
//!
//! [`ImageCodec`] is the seam between analysis and storage. Callers that
//! tolerate transient read failures use [`decode_with_retry`], which makes
//! a bounded number of attempts; callers that must always get a grid use
//! [`decode_or_placeholder`], which substitutes an annotated blank canvas
//! and hands back the error instead of aborting.

use crate::{ImageFormat, IoError, IoResult};
use hueframe_core::{Color, PixelGrid};
use std::path::Path;
use std::time::Duration;

/// Width of the placeholder canvas
pub const PLACEHOLDER_WIDTH: u32 = 600;
/// Height of the placeholder canvas
pub const PLACEHOLDER_HEIGHT: u32 = 200;

/// Decode a file into a grid and encode a grid into a file.
pub trait ImageCodec {
    /// Decode the image stored at `path`.
    fn decode(&self, path: &Path) -> IoResult<PixelGrid>;

    /// Encode `grid` and store it at `path`.
    fn encode(&self, grid: &PixelGrid, path: &Path) -> IoResult<()>;
}

/// Encoder options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { jpeg_quality: 90 }
    }
}

/// How hard [`decode_with_retry`] tries before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first; 0 is treated as 1
    pub max_attempts: u32,
    /// Pause between consecutive attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(25),
        }
    }
}

impl RetryPolicy {
    /// A single attempt, no waiting
    pub fn once() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }
}

/// Filesystem codec: magic-byte decode, extension-driven encode.
#[derive(Debug, Clone, Default)]
pub struct FileCodec {
    options: WriteOptions,
}

impl FileCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }
}

impl ImageCodec for FileCodec {
    fn decode(&self, path: &Path) -> IoResult<PixelGrid> {
        crate::read_image(path)
    }

    fn encode(&self, grid: &PixelGrid, path: &Path) -> IoResult<()> {
        let format = ImageFormat::from_path(path)?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let writable = std::fs::metadata(dir)
            .map(|m| m.is_dir() && !m.permissions().readonly())
            .unwrap_or(false);
        if !writable {
            return Err(IoError::NotWritable {
                path: path.to_path_buf(),
            });
        }
        log::debug!("writing {} to {}", grid, path.display());
        crate::write_image_with_options(grid, path, format, &self.options)
    }
}

/// Outcome of [`decode_or_placeholder`]
#[derive(Debug)]
pub enum Loaded {
    /// The image decoded normally
    Loaded(PixelGrid),
    /// Decoding failed; `grid` is the placeholder canvas
    Placeholder { grid: PixelGrid, error: IoError },
}

impl Loaded {
    /// The grid, real or placeholder
    pub fn grid(&self) -> &PixelGrid {
        match self {
            Self::Loaded(grid) | Self::Placeholder { grid, .. } => grid,
        }
    }

    /// Take the grid, dropping any error
    pub fn into_grid(self) -> PixelGrid {
        match self {
            Self::Loaded(grid) | Self::Placeholder { grid, .. } => grid,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    /// The decode error, if the placeholder was substituted
    pub fn error(&self) -> Option<&IoError> {
        match self {
            Self::Loaded(_) => None,
            Self::Placeholder { error, .. } => Some(error),
        }
    }
}

/// Decode `path`, retrying according to `policy`.
///
/// # Errors
///
/// Returns [`IoError::DecodeFailed`] carrying the attempt count and the
/// last underlying error once every attempt has failed.
pub fn decode_with_retry<C: ImageCodec + ?Sized>(
    codec: &C,
    path: &Path,
    policy: &RetryPolicy,
) -> IoResult<PixelGrid> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match codec.decode(path) {
            Ok(grid) => return Ok(grid),
            Err(e) => {
                log::warn!(
                    "decode attempt {}/{} for {} failed: {}",
                    attempt,
                    max_attempts,
                    path.display(),
                    e
                );
                if attempt >= max_attempts {
                    return Err(IoError::DecodeFailed {
                        path: path.to_path_buf(),
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
            }
        }
        if !policy.backoff.is_zero() {
            std::thread::sleep(policy.backoff);
        }
    }
}

/// Decode `path`, falling back to [`placeholder_grid`] on failure.
pub fn decode_or_placeholder<C: ImageCodec + ?Sized>(
    codec: &C,
    path: &Path,
    policy: &RetryPolicy,
) -> Loaded {
    match decode_with_retry(codec, path, policy) {
        Ok(grid) => Loaded::Loaded(grid),
        Err(error) => {
            log::warn!("substituting placeholder for {}: {}", path.display(), error);
            Loaded::Placeholder {
                grid: placeholder_grid(),
                error,
            }
        }
    }
}

/// The 600x200 black canvas shown in place of an unreadable image.
///
/// It carries a white frame and a diagonal cross so it is recognizable
/// as a stand-in.
pub fn placeholder_grid() -> PixelGrid {
    let mut grid = PixelGrid::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
    grid.draw_frame(Color::WHITE, 4);
    grid.draw_cross(Color::WHITE);
    grid
}
