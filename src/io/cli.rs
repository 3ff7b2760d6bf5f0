//! Command-line interface generating maze levels as PNG and GIF files

use crate::algorithm::executor::{Emission, KruskalCarver, RandomSelector, StepOutcome};
use crate::io::configuration::{
    DEFAULT_DIFFICULTY, DEFAULT_GENERATION_SPEED, DEFAULT_LEVELS, DEFAULT_SEED,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, LEVEL_SUFFIX, VISUALIZATION_SUFFIX,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::image::{FrameRasterizer, LevelMarkers, WallPalette, export_frame_as_png};
use crate::io::progress::ProgressManager;
use crate::io::visualization::FrameRecorder;
use crate::math::interpolation::merge_delay_ms_for_speed;
use crate::spatial::dimensions::compute_grid_dimensions;
use crate::spatial::endpoints::{random_end_point, random_start_point};
use crate::spatial::walls::WallRenderer;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "mazecarve")]
#[command(
    author,
    version,
    about = "Generate perfect mazes with randomized Kruskal carving"
)]
/// Command-line arguments for the maze generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG path for the finished maze
    #[arg(value_name = "OUTPUT", default_value = "maze.png")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Cells per column
    #[arg(short, long, default_value_t = DEFAULT_DIFFICULTY)]
    pub difficulty: u32,

    /// Play-area width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub viewport_width: u32,

    /// Play-area height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub viewport_height: u32,

    /// Number of successive levels to generate
    #[arg(short, long, default_value_t = DEFAULT_LEVELS)]
    pub levels: usize,

    /// Generation speed in [0, 1]; paces the frames of `--visualize`
    #[arg(long)]
    pub speed: Option<f64>,

    /// Write an animated GIF of the paced generation
    #[arg(short, long)]
    pub visualize: bool,

    /// Tint walls with per-run random colors
    #[arg(short, long)]
    pub colors: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Speed actually used, or `None` when emission happens only at the end
    pub fn effective_speed(&self) -> Option<f64> {
        match (self.speed, self.visualize) {
            (Some(speed), _) => Some(speed),
            (None, true) => Some(DEFAULT_GENERATION_SPEED),
            (None, false) => None,
        }
    }

    /// Wall palette selected by `--colors`
    pub const fn palette(&self) -> WallPalette {
        if self.colors {
            WallPalette::Seeded
        } else {
            WallPalette::Plain
        }
    }

    /// PNG path for level `index`; suffixed only when several levels run
    pub fn level_output_path(&self, index: usize) -> PathBuf {
        if self.levels > 1 {
            with_stem_suffix(&self.output, &format!("{LEVEL_SUFFIX}{}", index + 1), None)
        } else {
            self.output.clone()
        }
    }

    /// GIF path accompanying the PNG for level `index`
    pub fn visualization_output_path(&self, index: usize) -> PathBuf {
        with_stem_suffix(
            &self.level_output_path(index),
            VISUALIZATION_SUFFIX,
            Some("gif"),
        )
    }
}

/// Generates every requested level with progress tracking
pub struct LevelRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LevelRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate all levels according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, generation or export fails
    pub fn run(&mut self) -> Result<()> {
        if self.cli.levels == 0 {
            return Err(invalid_parameter(
                "levels",
                &self.cli.levels,
                &"must be at least 1",
            ));
        }
        if let Some(speed) = self.cli.speed {
            if !(0.0..=1.0).contains(&speed) {
                return Err(invalid_parameter("speed", &speed, &"must lie in [0, 1]"));
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.levels);
        }

        for index in 0..self.cli.levels {
            self.run_level(index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn run_level(&mut self, index: usize) -> Result<()> {
        let dimensions = compute_grid_dimensions(
            self.cli.viewport_width,
            self.cli.viewport_height,
            self.cli.difficulty,
        )?;
        let seed = self.cli.seed.wrapping_add(index as u64);
        let mut carver = KruskalCarver::new(dimensions, RandomSelector::new(seed))?;

        let merge_delay_ms = self.cli.effective_speed().map(merge_delay_ms_for_speed);
        // Per-merge frames only feed the GIF
        let emission = match merge_delay_ms {
            Some(delay) if self.cli.visualize && delay > 0.0 => Emission::EveryMerge,
            _ => Emission::FinalOnly,
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_level(
                index,
                dimensions.width,
                dimensions.height,
                carver.expected_merges(),
            );
        }

        let mut recorder = FrameRecorder::new();
        loop {
            match carver.execute_step()? {
                StepOutcome::Merged { .. } => {
                    if emission == Emission::EveryMerge {
                        recorder.emit_walls(&carver.frame(false));
                    }
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.update_merges(index, carver.merge_count());
                    }
                }
                StepOutcome::Unchanged { .. } => {}
                StepOutcome::Finished => break,
            }
        }
        recorder.emit_walls(&carver.frame(true));

        let markers = LevelMarkers {
            start: random_start_point(&dimensions, carver.random_selector()),
            destination: random_end_point(&dimensions, carver.random_selector()),
        };
        let rasterizer = FrameRasterizer::new(dimensions, self.cli.palette()).with_markers(markers);

        let final_frame = recorder
            .last_frame()
            .ok_or_else(|| AlgorithmError::NothingToRender {
                reason: "generation emitted no frames".to_string(),
            })?;
        let output_path = self.cli.level_output_path(index);
        export_frame_as_png(&rasterizer, final_frame, path_str(&output_path)?)?;

        if self.cli.visualize {
            let viz_path = self.cli.visualization_output_path(index);
            let frame_delay_ms = merge_delay_ms.map_or(0, |delay| delay.round() as u32);
            recorder.export_gif(&rasterizer, path_str(&viz_path)?, frame_delay_ms)?;
        }

        info!(
            level = index + 1,
            merges = carver.merge_count(),
            passes = carver.pass() + 1,
            output = %output_path.display(),
            "Level generated"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_level(index);
        }

        Ok(())
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| invalid_parameter("output", &path.display(), &"path is not valid UTF-8"))
}

fn with_stem_suffix(path: &Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let extension = extension.map_or_else(
        || path.extension().unwrap_or_default().to_string_lossy(),
        std::borrow::Cow::Borrowed,
    );
    let file_name = if extension.is_empty() {
        format!("{}{suffix}", stem.to_string_lossy())
    } else {
        format!("{}{suffix}.{extension}", stem.to_string_lossy())
    };

    if let Some(parent) = path.parent() {
        parent.join(file_name)
    } else {
        PathBuf::from(file_name)
    }
}
