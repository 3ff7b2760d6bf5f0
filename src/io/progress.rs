//! Multi-level progress tracking with automatic batching for long runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display while levels are generated
///
/// Each level gets a bar counting merges towards `cells - 1`. Only the last
/// few levels keep a visible bar; beyond that a single batch bar counts
/// finished levels.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    level_bars: Vec<ProgressBar>,
    /// Stores (`label`, `merges`, `expected_merges`) for rolling window display
    level_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Levels: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            level_bars: Vec::new(),
            level_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on level count
    pub fn initialize(&mut self, level_count: usize) {
        // Switch to batch mode for many levels to avoid terminal spam
        if level_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(level_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = level_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.level_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress for a new level
    pub fn start_level(&mut self, index: usize, width: usize, height: usize, expected_merges: usize) {
        if index >= self.level_states.len() {
            self.level_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.level_states.get_mut(index) {
            *state = (
                format!("level {} ({width}x{height})", index + 1),
                0,
                expected_merges,
            );
        }
        self.update_bars();
    }

    /// Report merges performed so far in a level
    pub fn update_merges(&mut self, index: usize, merges: usize) {
        if let Some(state) = self.level_states.get_mut(index) {
            state.1 = merges;
        }
        self.update_bars();
    }

    /// Mark a level as completed and update batch progress
    pub fn complete_level(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.level_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All levels generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of bars shown per level
    pub fn visible_bar_count(&self) -> usize {
        self.level_bars.len()
    }

    /// Whether a batch bar summarises finished levels
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Update all progress bars to show the last N started levels
    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .level_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (label, current, max)) in visible.iter().copied().enumerate() {
            if let Some(bar) = self.level_bars.get(bar_idx) {
                bar.set_length(*max as u64);
                bar.set_position(*current as u64);
                let max_width = max.to_string().len();
                bar.set_message(format!("{current:>max_width$}/{max} merges"));
                bar.set_prefix(label.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible.len()..self.level_bars.len() {
            if let Some(bar) = self.level_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
