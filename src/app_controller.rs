use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::{FileManager, LyricFileType};
use crate::lyric::parse_lyric;
use crate::validation::TimelineValidator;

// @module: Application controller for lyric merging

/// The four raw track blobs gathered for one song. Absent tracks are empty
/// strings, which the parsing core treats as empty tracks.
#[derive(Debug, Default)]
struct TrackSet {
    original: String,
    translation: String,
    romanization: String,
    dynamic: String,
}

/// Main application controller for lyric timeline reconstruction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        self.config.validate().is_ok()
    }

    /// Merge the tracks belonging to one input file and write the timeline
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        // Check if the input file exists
        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Ensure the output directory exists
        FileManager::ensure_dir(&output_dir)?;

        // Check if a timeline already exists
        let output_path =
            FileManager::generate_output_path(&input_file, &output_dir, &self.config.output.suffix);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, timeline already exists (use -f to force overwrite)");
            return Ok(());
        }

        let tracks = self.load_tracks(&input_file)?;
        let timeline = parse_lyric(
            &tracks.original,
            &tracks.translation,
            &tracks.romanization,
            &tracks.dynamic,
        );

        // An empty timeline means "no lyric available", which is still a
        // valid answer worth writing out
        if timeline.is_empty() {
            warn!("No lyric lines recovered from {:?}", input_file);
        }

        let report = TimelineValidator::new().validate(&timeline);
        if !report.passed {
            warn!(
                "Timeline for {:?} has {} issue(s)",
                input_file, report.total_issues
            );
            for line_result in report.failed_lines() {
                for issue in &line_result.issues {
                    debug!("  line {}: {}", line_result.index, issue);
                }
            }
        }

        let json = if self.config.output.pretty {
            serde_json::to_string_pretty(&timeline)
        } else {
            serde_json::to_string(&timeline)
        }
        .context("Failed to serialize timeline to JSON")?;

        FileManager::write_to_file(&output_path, &json)?;

        info!("Wrote {} line(s) to {:?}", timeline.len(), output_path);

        Ok(())
    }

    /// Process every lyric file under a directory, one timeline per stem
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        info!("Processing lyric files in directory: {:?}", input_dir);

        // A stem with both a plain and a word-level file must only be
        // processed once; the plain file wins as the entry point and the
        // sibling lookup picks the word track up anyway
        let mut seen_stems: BTreeSet<PathBuf> = BTreeSet::new();
        let mut processed_count = 0;
        let mut failed_count = 0;

        let extensions = [
            self.config.tracks.original_extension.clone(),
            self.config.tracks.dynamic_extension.clone(),
        ];

        for extension in &extensions {
            for input_file in FileManager::find_files(&input_dir, extension)? {
                let stem = input_file.with_extension("");
                if !seen_stems.insert(stem) {
                    continue;
                }

                let output_dir = input_file
                    .parent()
                    .unwrap_or(Path::new("."))
                    .to_path_buf();

                debug!("Processing lyric file: {:?}", input_file);
                if let Err(e) = self.run(input_file, output_dir, force_overwrite) {
                    error!("Error processing file: {}", e);
                    failed_count += 1;
                } else {
                    processed_count += 1;
                }
            }
        }

        info!(
            "Finished processing {} file(s), {} failed",
            processed_count, failed_count
        );

        Ok(())
    }

    /// Gather the four track blobs for an input file.
    ///
    /// A word-level file given directly as the input supplies the dynamic
    /// track, with the plain original looked up as a sibling; any other
    /// input supplies the original track. Auxiliary tracks are always
    /// sibling lookups and absent ones simply stay empty.
    fn load_tracks(&self, input_file: &Path) -> Result<TrackSet> {
        let file_type = FileManager::detect_file_type(input_file)?;

        let mut tracks = TrackSet::default();
        match file_type {
            LyricFileType::Dynamic => {
                tracks.dynamic = FileManager::read_to_string(input_file)?;
                tracks.original =
                    self.read_sibling(input_file, &self.config.tracks.original_extension);
            }
            LyricFileType::Plain | LyricFileType::Unknown => {
                if file_type == LyricFileType::Unknown {
                    warn!(
                        "Could not detect track type of {:?}, treating as plain",
                        input_file
                    );
                }
                tracks.original = FileManager::read_to_string(input_file)?;
                tracks.dynamic =
                    self.read_sibling(input_file, &self.config.tracks.dynamic_extension);
            }
        }

        tracks.translation =
            self.read_sibling(input_file, &self.config.tracks.translation_extension);
        tracks.romanization =
            self.read_sibling(input_file, &self.config.tracks.romanization_extension);

        Ok(tracks)
    }

    /// Read a sibling track file, returning an empty blob when it is absent
    /// or unreadable
    fn read_sibling(&self, input_file: &Path, extension: &str) -> String {
        let sibling = input_file.with_extension(extension);
        if !FileManager::file_exists(&sibling) {
            return String::new();
        }

        match FileManager::read_to_string(&sibling) {
            Ok(content) => {
                debug!("Loaded sibling track: {:?}", sibling);
                content
            }
            Err(e) => {
                warn!("Skipping unreadable sibling track {:?}: {}", sibling, e);
                String::new()
            }
        }
    }
}
