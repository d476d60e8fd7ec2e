//! Command-line interface for building a hue/brightness collage from a directory

use crate::io::configuration::{
    DEFAULT_MAX_SIZE, DEFAULT_OUTPUT_FILE, DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::{export_canvas, load_source_image};
use crate::io::progress::ProgressManager;
use crate::io::source::{FileFilter, collect_source_files};
use crate::layout::{CollageConfig, LayoutEngine, Placement};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huesort")]
#[command(
    author,
    version,
    about = "Arrange images on a canvas by the hue and brightness of their average color"
)]
/// Command-line arguments for the collage tool
pub struct Cli {
    /// Directory containing the component PNG images
    #[arg(value_name = "SOURCE_DIR")]
    pub source: PathBuf,

    /// Width of the hue axis in pixels
    #[arg(short, long, default_value_t = DEFAULT_TARGET_WIDTH)]
    pub width: u32,

    /// Height of the brightness axis in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_TARGET_HEIGHT)]
    pub height: u32,

    /// Longer side of every component after resizing
    #[arg(short, long, default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: u32,

    /// Draw each component as a silhouette of its average color
    #[arg(short, long)]
    pub silhouette: bool,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Select files whose name merely ends in "png" instead of checking the extension
    #[arg(long)]
    pub legacy_match: bool,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Collage parameters taken from the flags
    pub const fn collage_config(&self) -> CollageConfig {
        CollageConfig {
            target_width: self.width,
            target_height: self.height,
            max_size: self.max_size,
            silhouette: self.silhouette,
        }
    }

    /// Rule used to pick component images from the source directory
    pub const fn file_filter(&self) -> FileFilter {
        if self.legacy_match {
            FileFilter::LegacySuffix
        } else {
            FileFilter::Extension
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Summary of a finished collage run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of components drawn onto the canvas
    pub placed: usize,
    /// Components left off the canvas, in processing order
    pub skipped: Vec<PathBuf>,
    /// Where the canvas was written
    pub output: PathBuf,
}

/// Builds one collage from the source directory named on the command line
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Place every selected component in name order and write the canvas
    ///
    /// Nothing is written unless every component was read and decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The source directory cannot be listed
    /// - A selected file cannot be read or decoded
    /// - The output image cannot be written
    pub fn process(&self) -> Result<RunReport> {
        let mut engine = LayoutEngine::new(self.cli.collage_config())?;
        let files = collect_source_files(&self.cli.source, self.cli.file_filter())?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(files.len()));

        let mut report = RunReport {
            output: self.cli.output.clone(),
            ..RunReport::default()
        };

        for path in &files {
            if let Some(ref pm) = progress {
                pm.start_file(path);
            }

            let image = load_source_image(path)?;
            match engine.place(&image) {
                Placement::Placed { .. } => report.placed += 1,
                Placement::Skipped(reason) => {
                    if let Some(ref pm) = progress {
                        pm.warn(&format!("skipping {}: {reason}", path.display()));
                    }
                    report.skipped.push(path.clone());
                }
            }

            if let Some(ref pm) = progress {
                pm.complete_file();
            }
        }

        export_canvas(engine.canvas(), &self.cli.output)?;

        if let Some(ref pm) = progress {
            pm.finish(&format!(
                "Placed {} image(s), skipped {}, wrote {}",
                report.placed,
                report.skipped.len(),
                report.output.display()
            ));
        }

        Ok(report)
    }
}
