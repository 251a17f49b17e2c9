//! Source picture loading, scaling and slicing into tiles

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::{error, info};

use crate::io::configuration::{
    EMPTY_HOME_INDEX, GRID_COLS, GRID_ROWS, PLACEHOLDER_ASPECT_PERCENT,
};
use crate::io::error::{PuzzleError, Result, invalid_parameter};

/// Picture fragments ready to be placed on a board
#[derive(Debug, Clone)]
pub struct PreparedTiles {
    /// Fragments for every home position except the blank one, row-major
    pub images: Vec<RgbaImage>,
    /// Width of each fragment in pixels
    pub tile_width: u32,
    /// Height of each fragment in pixels
    pub tile_height: u32,
}

/// Decode the picture at `path` into RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a recognised
/// image format
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| PuzzleError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Height that keeps the aspect ratio when the width becomes `target_width`
pub const fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 0;
    }
    (height as u64 * target_width as u64 / width as u64) as u32
}

/// Resize a picture to `target_width`, keeping its aspect ratio
///
/// # Errors
///
/// Returns an error if `target_width` is zero or the source has no pixels
pub fn scale_to_width(source: &RgbaImage, target_width: u32) -> Result<RgbaImage> {
    if target_width == 0 {
        return Err(invalid_parameter(
            "width",
            &target_width,
            &"must be positive",
        ));
    }
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(PuzzleError::InvalidSourceData {
            reason: format!("source image is {width}x{height}"),
        });
    }

    let target_height = scaled_height(width, height, target_width);
    Ok(imageops::resize(
        source,
        target_width,
        target_height,
        FilterType::Triangle,
    ))
}

/// Cut a picture into `rows * cols` equal crops in row-major order
///
/// Crops are `width / cols` by `height / rows` pixels; any remainder along
/// the right and bottom edges is dropped.
///
/// # Errors
///
/// Returns an error if the picture is too small to give every crop at least
/// one pixel
pub fn slice_grid(source: &RgbaImage, rows: usize, cols: usize) -> Result<Vec<RgbaImage>> {
    let (width, height) = source.dimensions();
    let (rows_u32, cols_u32) = (rows as u32, cols as u32);
    if rows_u32 == 0 || cols_u32 == 0 || width < cols_u32 || height < rows_u32 {
        return Err(PuzzleError::InvalidSourceData {
            reason: format!("a {width}x{height} image cannot be cut into {rows}x{cols} tiles"),
        });
    }

    let tile_width = width / cols_u32;
    let tile_height = height / rows_u32;

    let mut tiles = Vec::with_capacity(rows * cols);
    for row in 0..rows_u32 {
        for col in 0..cols_u32 {
            let x = col * width / cols_u32;
            let y = row * height / rows_u32;
            tiles.push(imageops::crop_imm(source, x, y, tile_width, tile_height).to_image());
        }
    }
    Ok(tiles)
}

/// Diagonal gradient shown when the source picture cannot be loaded
///
/// Distinct enough per tile that the puzzle stays solvable by eye.
pub fn placeholder_image(width: u32, height: u32) -> RgbaImage {
    let span_x = width.max(1);
    let span_y = height.max(1);
    RgbaImage::from_fn(width, height, |x, y| {
        let red = (x * 255 / span_x) as u8;
        let green = (y * 255 / span_y) as u8;
        let blue = ((x + y) * 127 / (span_x + span_y)) as u8 + 64;
        Rgba([red, green, blue, 255])
    })
}

/// Load, scale and slice the puzzle picture
///
/// A picture that fails to load is reported and replaced by
/// [`placeholder_image`], so the game still starts.
///
/// # Errors
///
/// Returns an error if the scaled picture cannot be cut into the grid
pub fn prepare_tiles<P: AsRef<Path>>(path: P, target_width: u32) -> Result<PreparedTiles> {
    let source = match load_source(&path) {
        Ok(source) => {
            info!(
                "Loaded {} ({}x{})",
                path.as_ref().display(),
                source.width(),
                source.height()
            );
            source
        }
        Err(err) => {
            error!("{err}; continuing with a placeholder picture");
            placeholder_image(
                target_width,
                target_width.saturating_mul(PLACEHOLDER_ASPECT_PERCENT) / 100,
            )
        }
    };

    let scaled = scale_to_width(&source, target_width)?;
    let mut images = slice_grid(&scaled, GRID_ROWS, GRID_COLS)?;
    images.truncate(EMPTY_HOME_INDEX);

    let (tile_width, tile_height) = images
        .first()
        .map_or((0, 0), RgbaImage::dimensions);

    Ok(PreparedTiles {
        images,
        tile_width,
        tile_height,
    })
}
