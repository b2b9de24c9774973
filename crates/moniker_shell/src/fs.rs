//! File effects.
//!
//! Small synchronous wrappers that put filesystem access behind the core's
//! fallible contract. Writes go through a scratch file and a rename, so a
//! reader never observes a half-written file and a failed write leaves the
//! previous contents in place.

use std::path::{Path, PathBuf};

use moniker_core::{Cause, Fallible, Optional, Scoped, using};

use crate::error::ShellError;

/// Read a file to a string.
pub fn read_to_string(path: &Path) -> Fallible<String> {
    Fallible::from_result(std::fs::read_to_string(path).map_err(|source| ShellError::Read {
        path: path.to_path_buf(),
        source,
    }))
}

/// Read a file that is allowed not to exist.
///
/// A missing file is an ordinary absent value, not a failure; any other
/// read problem still fails.
pub fn read_if_present(path: &Path) -> Fallible<Optional<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Fallible::Success(Optional::Present(contents)),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Fallible::Success(Optional::Absent)
        }
        Err(source) => Fallible::failure(ShellError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Replace the contents of `path` atomically.
///
/// The contents are written to a scratch file next to `path` and renamed
/// over it. The scratch file is scoped: whatever happens inside the write,
/// it is either renamed into place or removed before this returns.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Fallible<()> {
    let Some(name) = path.file_name() else {
        return Fallible::failure(Cause::new(format!(
            "cannot write to {}: no file name",
            path.display()
        )));
    };
    let mut scratch_name = name.to_os_string();
    scratch_name.push(".tmp");
    let scratch_path = path.with_file_name(scratch_name);

    using(Scratch::new(scratch_path), |scratch| {
        match std::fs::write(&scratch.path, contents) {
            Err(source) => Fallible::failure(ShellError::Write {
                path: scratch.path.clone(),
                source,
            }),
            Ok(()) => match std::fs::rename(&scratch.path, path) {
                Err(source) => Fallible::failure(ShellError::Replace {
                    path: path.to_path_buf(),
                    source,
                }),
                Ok(()) => {
                    scratch.renamed = true;
                    Fallible::success(())
                }
            },
        }
    })
}

/// A scratch file that must not outlive its write.
struct Scratch {
    path: PathBuf,
    renamed: bool,
}

impl Scratch {
    fn new(path: PathBuf) -> Self {
        Scratch {
            path,
            renamed: false,
        }
    }
}

impl Scoped for Scratch {
    fn release(&mut self) {
        if self.renamed {
            return;
        }
        if let Err(error) = std::fs::remove_file(&self.path) {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %self.path.display(), %error, "scratch file left behind");
            }
        }
    }
}
