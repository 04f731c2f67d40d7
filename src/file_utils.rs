use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @const: Word-level line header, anchored per line
static DYNAMIC_HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\[[0-9]+,[0-9]+\]").unwrap());

// @const: Plain `[mm:ss.xx]` tag, anchored per line
static PLAIN_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\[(?:[0-9]+:)?[0-9]+(?:[.:][0-9]+)?\]").unwrap());

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for a merged timeline
    // @params: input_file, output_dir, suffix
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        suffix: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default();

        // Create the output filename with the configured suffix
        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(suffix);

        // Join with the output directory
        output_dir.join(output_filename)
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Detect whether a file holds a plain or a word-level lyric track
    ///
    /// The extension decides when it is recognized; otherwise the content is
    /// sniffed. The word-level header is checked first so a blob mixing both
    /// line shapes counts as a word-level track.
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> Result<LyricFileType> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow::anyhow!("File does not exist: {:?}", path));
        }

        // Check file extension
        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy().to_lowercase();

            if ext_str == "yrc" {
                return Ok(LyricFileType::Dynamic);
            }

            if matches!(ext_str.as_str(), "lrc" | "tlrc" | "rlrc") {
                return Ok(LyricFileType::Plain);
            }
        }

        // Fall back to examining file contents
        if let Ok(content) = fs::read_to_string(path) {
            if DYNAMIC_HEADER_REGEX.is_match(&content) {
                return Ok(LyricFileType::Dynamic);
            }
            if PLAIN_TAG_REGEX.is_match(&content) {
                return Ok(LyricFileType::Plain);
            }
        }

        // Default to unknown if we couldn't determine the type
        Ok(LyricFileType::Unknown)
    }
}

/// Enum representing different lyric file types
#[derive(Debug, PartialEq, Eq)]
pub enum LyricFileType {
    /// Plain per-line timestamped track
    Plain,
    /// Word-level (karaoke) track
    Dynamic,
    /// Unknown file type
    Unknown,
}
