//! Command-line interface for batch processing images into thread patterns

use crate::algorithm::executor::{GenerationConfig, PatternGenerator, StepOutcome};
use crate::geometry::frame::{FrameConfig, FrameShape};
use crate::geometry::pins::PinLayout;
use crate::io::compositor::export_field_as_png;
use crate::io::configuration::{
    DEFAULT_ALPHA, DEFAULT_ELLIPSE_RATIO, DEFAULT_GAMMA, DEFAULT_MIN_PIN_GAP, DEFAULT_NUM_LINES,
    DEFAULT_NUM_PINS, DEFAULT_RECT_RATIO, DEFAULT_RESOLUTION, DEFAULT_SEED, DEFAULT_START_ANGLE,
    DEFAULT_START_PIN, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX, PROGRESS_INTERVAL,
    SUPPORTED_EXTENSIONS, VISUALIZATION_FRAME_STEP, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, ThreadError, invalid_parameter};
use crate::io::export::export_connections_csv;
use crate::io::logging::default_level;
use crate::io::progress::ProgressManager;
use crate::io::visualization::VisualizationCapture;
use crate::raster::target::{SourceImage, rasterize};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// Frame shape selectable on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    /// Circular frame
    Circle,
    /// Elliptical frame, see `--ellipse-ratio`
    Ellipse,
    /// Rectangular frame, see `--rect-ratio`
    Rectangle,
}

#[derive(Parser)]
#[command(name = "greedythread")]
#[command(
    author,
    version,
    about = "Generate string-art thread patterns with a greedy error-minimizing algorithm"
)]
/// Command-line arguments for the thread pattern tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible candidate sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of thread lines to draw
    #[arg(short, long, default_value_t = DEFAULT_NUM_LINES)]
    pub lines: usize,

    /// Number of pins around the frame
    #[arg(short, long, default_value_t = DEFAULT_NUM_PINS)]
    pub pins: usize,

    /// Frame shape
    #[arg(long, value_enum, default_value_t = ShapeArg::Circle)]
    pub shape: ShapeArg,

    /// Ellipse height-to-width ratio
    #[arg(long, default_value_t = DEFAULT_ELLIPSE_RATIO)]
    pub ellipse_ratio: f64,

    /// Rectangle width-to-height ratio
    #[arg(long, default_value_t = DEFAULT_RECT_RATIO)]
    pub rect_ratio: f64,

    /// Angle of pin 1 in degrees, clockwise from the top
    #[arg(long, default_value_t = DEFAULT_START_ANGLE, allow_hyphen_values = true)]
    pub start_angle: f64,

    /// 1-based pin the thread starts at
    #[arg(long, default_value_t = DEFAULT_START_PIN)]
    pub start_pin: usize,

    /// Minimum pin distance between the ends of a line
    #[arg(short = 'g', long, default_value_t = DEFAULT_MIN_PIN_GAP)]
    pub min_gap: usize,

    /// Per-line darkening strength
    #[arg(short, long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Canvas side length in pixels
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,

    /// Gamma applied to the target luminance
    #[arg(long, default_value_t = DEFAULT_GAMMA)]
    pub gamma: f64,

    /// Write an animated GIF of the pattern building up
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log generation details
    #[arg(long)]
    pub verbose: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level used when `RUST_LOG` is not set
    pub const fn log_level(&self) -> LevelFilter {
        default_level(self.verbose, self.quiet)
    }

    /// Frame description assembled from the shape flags
    pub const fn frame_config(&self) -> FrameConfig {
        let shape = match self.shape {
            ShapeArg::Circle => FrameShape::Circle,
            ShapeArg::Ellipse => FrameShape::Ellipse {
                ratio: self.ellipse_ratio,
            },
            ShapeArg::Rectangle => FrameShape::Rectangle {
                ratio: self.rect_ratio,
            },
        };
        FrameConfig::new(shape, self.pins, self.start_angle)
    }

    /// Generation parameters assembled from the line flags
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            num_lines: self.lines,
            start_pin: self.start_pin,
            min_pin_gap: self.min_gap,
            alpha: self.alpha,
            resolution: self.resolution,
        }
    }
}

/// Orchestrates batch processing of images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, configuration validation, or
    /// file processing fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.frame_config().validate()?;
        self.cli.generation_config().validate()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_supported_image(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG, JPEG, BMP or WebP image",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| ThreadError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_supported_image(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path, "csv");
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let frame = self.cli.frame_config();
        let generation = self.cli.generation_config();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path, generation.num_lines);
        }

        let source = SourceImage::open(input_path)?;
        let layout = PinLayout::new(&frame, generation.resolution)?;
        let target = rasterize(&source, generation.resolution, self.cli.gamma, &frame.shape)?;
        debug!(
            "{}: {}x{} source, {} {} pins at {}px",
            input_path.display(),
            source.width(),
            source.height(),
            layout.len(),
            frame.shape.name(),
            layout.resolution()
        );

        let rng = StdRng::seed_from_u64(self.cli.seed);
        let mut generator = PatternGenerator::new(&target, layout.pixels(), generation, rng)?;
        let mut capture = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(VISUALIZATION_FRAME_STEP));

        loop {
            match generator.execute_step() {
                StepOutcome::Finished(state) => {
                    debug!("{}: finished in state {state:?}", input_path.display());
                    break;
                }
                StepOutcome::Connected { connection, .. } => {
                    if connection.step % PROGRESS_INTERVAL == 0 {
                        if let Some(ref pm) = self.progress_manager {
                            pm.update_lines(connection.step);
                        }
                    }
                    if let Some(ref mut capture) = capture {
                        capture.observe(connection.step, generator.current_field());
                    }
                }
            }
        }

        let outcome = generator.into_outcome();
        let drawn = outcome.connections.len();

        export_connections_csv(&Self::get_output_path(input_path, "csv"), &outcome.connections)?;
        export_field_as_png(&outcome.field, &Self::get_output_path(input_path, "png"))?;

        if let Some(mut capture) = capture {
            capture.finish(drawn, &outcome.field);
            capture.export_gif(&Self::get_visualization_path(input_path), GIF_FRAME_DELAY_MS)?;
        }

        info!(
            "{}: {drawn} of {} lines, mean intensity {:.3}",
            input_path.display(),
            generation.num_lines,
            outcome.field.mean()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(drawn);
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn get_visualization_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let viz_name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}

/// Whether the path has an image extension the tool can decode
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// Whether the path looks like a preview this tool wrote earlier
pub fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
