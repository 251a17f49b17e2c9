//! Command-line interface and startup of the puzzle window

use crate::board::{AdjacencyRule, Board};
use crate::game::PuzzleController;
use crate::io::configuration::{DEFAULT_IMAGE_PATH, DEFAULT_TARGET_WIDTH};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::prepare_tiles;
use crate::view::layout::GridLayout;
use crate::view::window::run_window;
use clap::Parser;
use image::RgbaImage;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "swaptile")]
#[command(
    author,
    version,
    about = "Slide the tiles of a picture back into place"
)]
/// Command-line arguments for the puzzle
pub struct Cli {
    /// Picture to cut into tiles
    #[arg(value_name = "IMAGE", default_value = DEFAULT_IMAGE_PATH)]
    pub image: PathBuf,

    /// Random seed for a reproducible shuffle
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Width in pixels the picture is scaled to
    #[arg(short, long, default_value_t = DEFAULT_TARGET_WIDTH)]
    pub width: u32,

    /// Only allow moves between tiles that share an edge on the grid
    #[arg(long)]
    pub strict_adjacency: bool,
}

impl Cli {
    /// Adjacency rule selected by the flags
    pub const fn adjacency_rule(&self) -> AdjacencyRule {
        if self.strict_adjacency {
            AdjacencyRule::GridNeighbor
        } else {
            AdjacencyRule::IndexDistance
        }
    }

    /// Random generator for the initial shuffle
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Prepares the board from the command line and opens the window
pub struct PuzzleLauncher {
    cli: Cli,
}

impl PuzzleLauncher {
    /// Create a launcher for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Slice the picture, shuffle the board and size the grid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target width is zero
    /// - The scaled picture is too small to cut into the grid
    pub fn prepare(&self) -> Result<(PuzzleController<RgbaImage>, GridLayout)> {
        if self.cli.width == 0 {
            return Err(invalid_parameter(
                "width",
                &self.cli.width,
                &"must be positive",
            ));
        }

        let tiles = prepare_tiles(&self.cli.image, self.cli.width)?;
        let layout = GridLayout::new(tiles.tile_width, tiles.tile_height);

        let mut rng = self.rng_for_shuffle();
        let board = Board::shuffled(tiles.images, self.cli.adjacency_rule(), &mut rng)?;
        info!(
            "Shuffled board of {}x{} pixel tiles with {:?} adjacency",
            tiles.tile_width,
            tiles.tile_height,
            board.rule()
        );

        Ok((PuzzleController::new(board), layout))
    }

    /// Prepare the board and run the window until it is closed
    ///
    /// # Errors
    ///
    /// Returns an error if preparation fails or the window system cannot be
    /// initialised
    pub fn launch(self) -> Result<()> {
        let (controller, layout) = self.prepare()?;
        run_window(controller, layout)
    }

    fn rng_for_shuffle(&self) -> StdRng {
        if let Some(seed) = self.cli.seed {
            info!("Using shuffle seed {seed}");
        }
        self.cli.rng()
    }
}
