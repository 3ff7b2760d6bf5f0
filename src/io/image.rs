//! Rasterizing wall frames and PNG export

use image::{Rgba, RgbaImage};

use crate::io::configuration::{BACKGROUND_COLOR, DESTINATION_COLOR, START_COLOR, WALL_COLOR};
use crate::io::error::{AlgorithmError, Result};
use crate::math::color::color_at;
use crate::spatial::dimensions::GridDimensions;
use crate::spatial::grid::CellPosition;
use crate::spatial::walls::{WallFrame, WallOrientation, WallSegment};

/// How walls are colored when rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallPalette {
    /// Every wall in `WALL_COLOR`
    Plain,
    /// Per-cell colors derived from the frame's color seed
    Seeded,
}

/// Start and destination cells to mark on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelMarkers {
    /// Where the ball starts
    pub start: CellPosition,
    /// Cell that completes the level
    pub destination: CellPosition,
}

/// Renders frames onto a canvas the size of the grid
#[derive(Debug, Clone, Copy)]
pub struct FrameRasterizer {
    dimensions: GridDimensions,
    palette: WallPalette,
    markers: Option<LevelMarkers>,
}

impl FrameRasterizer {
    /// Create a rasterizer for grids of `dimensions`
    pub const fn new(dimensions: GridDimensions, palette: WallPalette) -> Self {
        Self {
            dimensions,
            palette,
            markers: None,
        }
    }

    /// Also draw start and destination markers
    #[must_use]
    pub const fn with_markers(mut self, markers: LevelMarkers) -> Self {
        self.markers = Some(markers);
        self
    }

    /// Canvas size as `(width, height)` in pixels
    pub const fn canvas_size(&self) -> (u32, u32) {
        self.dimensions.canvas_size()
    }

    /// Draw one frame
    pub fn render(&self, frame: &WallFrame) -> RgbaImage {
        let (width, height) = self.canvas_size();
        let mut img = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

        if let Some(markers) = self.markers {
            self.fill_cell(&mut img, markers.start, START_COLOR);
            self.fill_cell(&mut img, markers.destination, DESTINATION_COLOR);
        }

        for segment in &frame.segments {
            let color = match self.palette {
                WallPalette::Plain => WALL_COLOR,
                WallPalette::Seeded => color_at(frame.color_seed, segment.cell.x, segment.cell.y),
            };
            fill_segment(&mut img, segment, color);
        }

        img
    }

    fn fill_cell(&self, img: &mut RgbaImage, cell: CellPosition, color: [u8; 4]) {
        let length = f64::from(self.dimensions.cell_length);
        let area = WallSegment {
            cell,
            orientation: WallOrientation::Horizontal,
            x: cell.x as f64 * length + length / 2.0,
            y: cell.y as f64 * length + length / 2.0,
            width: length,
            height: length,
        };
        fill_segment(img, &area, color);
    }
}

// Paint a centre-positioned rectangle, clipped to the canvas
fn fill_segment(img: &mut RgbaImage, segment: &WallSegment, color: [u8; 4]) {
    let (width, height) = img.dimensions();
    let x0 = clip(segment.x - segment.width / 2.0, width);
    let x1 = clip(segment.x + segment.width / 2.0, width);
    let y0 = clip(segment.y - segment.height / 2.0, height);
    let y1 = clip(segment.y + segment.height / 2.0, height);

    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Rgba(color));
        }
    }
}

fn clip(coordinate: f64, limit: u32) -> u32 {
    coordinate.round().clamp(0.0, f64::from(limit)) as u32
}

/// Export a frame as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The frame has no walls and no markers to draw on
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_frame_as_png(
    rasterizer: &FrameRasterizer,
    frame: &WallFrame,
    output_path: &str,
) -> Result<()> {
    if frame.segments.is_empty() && rasterizer.markers.is_none() {
        return Err(AlgorithmError::NothingToRender {
            reason: "frame contains no walls".to_string(),
        });
    }

    let img = rasterizer.render(frame);

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
