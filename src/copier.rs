//! Filtered recursive copy of the template tree into the output directory.

use crate::error::{Error, Result};
use crate::ignore::ExclusionFilter;
use crate::prompt::Prompter;
use log::debug;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

/// Copies file contents and permissions, then carries over access and
/// modification times.
fn copy_file(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;
    let metadata = fs::metadata(source)?;
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    // Read-only copies can still have their times set through a read handle on unix.
    let file = File::options().write(true).open(target).or_else(|_| File::open(target))?;
    file.set_times(times)
}

fn copy_failure(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::CopyFailure { path: path.to_path_buf(), source }
}

/// Ensures an empty output directory exists, replacing an existing one only
/// when the prompter confirms.
///
/// # Errors
/// * `Error::UserCancelled` if the replacement is declined; nothing is touched
pub fn prepare_output_dir(
    prompt: &dyn Prompter,
    output_dir: &Path,
    skip_overwrite_check: bool,
) -> Result<PathBuf> {
    let output_dir = absolute(output_dir);
    if output_dir.exists() {
        let replace = prompt.confirm(
            skip_overwrite_check,
            format!("Directory {} already exists. Overwrite?", output_dir.display()),
        )?;
        if !replace {
            return Err(Error::UserCancelled);
        }
        debug!("Removing existing output directory {}", output_dir.display());
        fs::remove_dir_all(&output_dir).map_err(copy_failure(&output_dir))?;
    }
    fs::create_dir_all(&output_dir).map_err(copy_failure(&output_dir))?;
    Ok(output_dir)
}

/// Copies the template tree into `output_dir`.
///
/// Excluded directories are pruned with all their descendants. When the
/// output lives inside the template, the output subtree is skipped so the
/// copy never recurses into itself. Containment is decided on canonical
/// paths, so a sibling sharing a name prefix is not mistaken for the output.
///
/// # Returns
/// * `Result<PathBuf>` - Canonical path of the populated output directory
///
/// # Errors
/// * `Error::UserCancelled` if an existing output directory must not be replaced
/// * `Error::OutputContainsTemplate` if replacing the output would delete the template
/// * `Error::CopyFailure` on the first filesystem failure; the partial output is kept
pub fn copy_template(
    prompt: &dyn Prompter,
    filter: &ExclusionFilter,
    template_dir: &Path,
    output_dir: &Path,
    skip_overwrite_check: bool,
) -> Result<PathBuf> {
    let template_root = fs::canonicalize(template_dir).map_err(copy_failure(template_dir))?;
    if let Ok(existing) = fs::canonicalize(output_dir) {
        if template_root.starts_with(&existing) {
            return Err(Error::OutputContainsTemplate { output: existing, template: template_root });
        }
    }
    let output_root = prepare_output_dir(prompt, output_dir, skip_overwrite_check)?;
    let output_root = fs::canonicalize(&output_root).map_err(copy_failure(&output_root))?;
    let nested_output = output_root.starts_with(&template_root);

    println!("Copying template from {} to {}...", template_root.display(), output_root.display());

    let walker = WalkDir::new(&template_root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let path = entry.path();
            if nested_output && path.starts_with(&output_root) {
                debug!("Skipping output directory {}", path.display());
                return false;
            }
            if filter.should_exclude(path, &template_root) {
                debug!("Excluding {}", path.display());
                return false;
            }
            true
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(template_root.as_path()).to_path_buf();
            Error::CopyFailure { path, source: e.into() }
        })?;
        let source = entry.path();
        let relative = source.strip_prefix(&template_root).unwrap_or(source);
        let target = output_root.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(copy_failure(source))?;
        } else {
            debug!("Copying file: {}", relative.display());
            copy_file(source, &target).map_err(copy_failure(source))?;
        }
    }

    Ok(output_root)
}
