//! Ticket file scanning and validation

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use weighcheck_types::{Error, Result};

/// Supported ticket file extensions
const TICKET_EXTENSIONS: &[&str] = &["csv"];

/// Check if a path looks like a ticket file
pub fn is_ticket_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TICKET_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Validate a ticket file exists and has a supported extension
pub fn validate_ticket_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(Error::InvalidTicketFile(format!(
            "{} is not a file",
            path.display()
        )));
    }

    if !is_ticket_file(path) {
        return Err(Error::InvalidTicketFile(format!(
            "Unsupported ticket file: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Scan a directory for ticket files
pub fn scan_ticket_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::FileNotFound(dir.display().to_string()));
    }

    if !dir.is_dir() {
        return Err(Error::InvalidTicketFile(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_ticket_file(p))
        .collect();

    // Sort by path for consistent ordering
    files.sort();
    Ok(files)
}

/// A single file, or every ticket file under a directory
pub fn resolve_ticket_sources(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        scan_ticket_files(path)
    } else {
        validate_ticket_file(path)?;
        Ok(vec![path.to_path_buf()])
    }
}
