//! Frame capture and GIF generation for paced generation

use image::Frame;

use crate::io::configuration::{FINAL_FRAME_HOLD_FACTOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::FrameRasterizer;
use crate::spatial::walls::{WallFrame, WallRenderer, WallSegment};

/// Bookkeeping for one emitted frame; its walls are rebuilt on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameMark {
    /// Walls opened before this frame was emitted
    opened_before: usize,
    merges: usize,
    is_final: bool,
}

/// Records the emitted wall frames of one run for later export
///
/// Acts as the renderer during CLI runs: the paced emissions that would
/// repaint a live scene become GIF frames instead. Walls are only ever
/// removed during a run, so the recorder keeps the latest frame plus every
/// wall opened since the first emission. Any earlier frame is the latest
/// walls together with the walls opened after it.
///
/// A frame carrying a different color seed starts a fresh recording.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    marks: Vec<FrameMark>,
    opened: Vec<WallSegment>,
    latest: Option<WallFrame>,
}

impl WallRenderer for FrameRecorder {
    fn emit_walls(&mut self, frame: &WallFrame) {
        if self
            .latest
            .as_ref()
            .is_some_and(|latest| latest.color_seed != frame.color_seed)
        {
            self.clear();
        }

        if let Some(previous) = &self.latest {
            let removed = removed_walls(&previous.segments, &frame.segments);
            self.opened.extend(removed);
        }

        self.marks.push(FrameMark {
            opened_before: self.opened.len(),
            merges: frame.merges,
            is_final: frame.is_final,
        });
        self.latest = Some(frame.clone());
    }
}

impl FrameRecorder {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self {
            marks: Vec::new(),
            opened: Vec::new(),
            latest: None,
        }
    }

    /// Rebuild the frame emitted at position `index`
    pub fn frame(&self, index: usize) -> Option<WallFrame> {
        let mark = self.marks.get(index)?;
        let latest = self.latest.as_ref()?;
        let reopened = self.opened.get(mark.opened_before..).unwrap_or(&[]);

        let mut segments = Vec::with_capacity(latest.segments.len() + reopened.len());
        segments.extend_from_slice(&latest.segments);
        segments.extend_from_slice(reopened);

        Some(WallFrame {
            segments,
            color_seed: latest.color_seed,
            merges: mark.merges,
            is_final: mark.is_final,
        })
    }

    /// Rebuild every recorded frame in emission order, one at a time
    pub fn frames(&self) -> impl Iterator<Item = WallFrame> + '_ {
        (0..self.marks.len()).filter_map(|index| self.frame(index))
    }

    /// Most recent frame, normally the completed maze
    pub const fn last_frame(&self) -> Option<&WallFrame> {
        self.latest.as_ref()
    }

    /// Walls removed between emissions, in removal order
    pub fn opened_walls(&self) -> &[WallSegment] {
        &self.opened
    }

    /// Returns the total number of recorded frames
    pub const fn frame_count(&self) -> usize {
        self.marks.len()
    }

    /// Drop all recorded frames, e.g. before the next level
    pub fn clear(&mut self) {
        self.marks.clear();
        self.opened.clear();
        self.latest = None;
    }

    /// Export the recorded frames as a GIF with automatic frame skipping
    ///
    /// Automatically skips frames if the requested frame rate exceeds viewer
    /// capabilities. For example, a 5ms merge delay (200 FPS) against a 50ms
    /// viewer minimum keeps every 10th frame to preserve the apparent speed.
    /// The final frame is always kept and held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        rasterizer: &FrameRasterizer,
        output_path: &str,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.marks.is_empty() {
            return Err(AlgorithmError::NothingToRender {
                reason: "No wall frames captured for visualization".to_string(),
            });
        }

        let frames = self.generate_frames(rasterizer, frame_delay_ms);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    /// Indices of the frames kept for a given delay
    pub fn kept_frame_indices(&self, frame_delay_ms: u32) -> Vec<usize> {
        let skip_factor = skip_factor(frame_delay_ms);
        let last = self.marks.len().saturating_sub(1);
        (0..self.marks.len())
            .filter(|&index| index % skip_factor == skip_factor - 1 || index == last)
            .collect()
    }

    fn generate_frames(&self, rasterizer: &FrameRasterizer, frame_delay_ms: u32) -> Vec<Frame> {
        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let kept = self.kept_frame_indices(frame_delay_ms);
        let last = kept.len().saturating_sub(1);

        kept.iter()
            .enumerate()
            .filter_map(|(position, &index)| {
                let frame = self.frame(index)?;
                // Final frame displays longer for better visibility
                let hold = if position == last {
                    delay_ms * FINAL_FRAME_HOLD_FACTOR
                } else {
                    delay_ms
                };
                Some(Frame::from_parts(
                    rasterizer.render(&frame),
                    0,
                    0,
                    image::Delay::from_numer_denom_ms(hold, 1),
                ))
            })
            .collect()
    }
}

fn skip_factor(frame_delay_ms: u32) -> usize {
    if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
    } else {
        1
    }
}

// Walls of `before` missing from `after`, which lists the rest in the same order
fn removed_walls(before: &[WallSegment], after: &[WallSegment]) -> Vec<WallSegment> {
    let mut kept = after.iter().peekable();
    before
        .iter()
        .filter(|segment| {
            let still_standing = kept.peek().is_some_and(|wall| {
                wall.cell == segment.cell && wall.orientation == segment.orientation
            });
            if still_standing {
                kept.next();
            }
            !still_standing
        })
        .copied()
        .collect()
}
