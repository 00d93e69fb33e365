//! Terminal progress for a run over one or more images

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LINES_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} lines")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static IMAGES_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Shows lines drawn for the current image and, for several images, how
/// many are done
///
/// Images are processed one after another, so a single line bar is reused
/// per image.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    images: ProgressBar,
    lines: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars shown yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            images: ProgressBar::hidden(),
            lines: None,
        }
    }

    /// Set the number of images in this run
    pub fn initialize(&mut self, image_count: usize) {
        self.images.set_length(image_count as u64);
        if image_count > 1 {
            let images = self.multi_progress.add(ProgressBar::new(image_count as u64));
            images.set_style(IMAGES_STYLE.clone());
            self.images = images;
        }
    }

    /// Show a fresh line bar for the image at `path`
    pub fn start_file(&mut self, path: &Path, total_lines: usize) {
        if let Some(previous) = self.lines.take() {
            previous.finish_and_clear();
        }

        let bar = self.multi_progress.add(ProgressBar::new(total_lines as u64));
        bar.set_style(LINES_STYLE.clone());
        bar.set_prefix(path.file_name().unwrap_or_default().to_string_lossy().to_string());
        self.lines = Some(bar);
    }

    /// Report how many lines have been drawn for the current image
    pub fn update_lines(&self, lines_drawn: usize) {
        if let Some(ref bar) = self.lines {
            bar.set_position(lines_drawn as u64);
        }
    }

    /// Close the current image with the number of lines actually drawn
    pub fn complete_file(&mut self, lines_drawn: usize) {
        if let Some(bar) = self.lines.take() {
            // Early completion shrinks the bar so it still reads as full
            bar.set_length(lines_drawn as u64);
            bar.set_position(lines_drawn as u64);
            bar.finish();
        }
        self.images.inc(1);
    }

    /// Images completed so far
    pub fn images_completed(&self) -> u64 {
        self.images.position()
    }

    /// Position and length of the current image's line bar
    pub fn current_lines(&self) -> Option<(u64, u64)> {
        self.lines
            .as_ref()
            .map(|bar| (bar.position(), bar.length().unwrap_or_default()))
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        self.images.finish();
        let _ = self.multi_progress.clear();
    }
}
