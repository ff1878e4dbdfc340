//! Lexical path cleanup for display names.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// Normalize `path` without touching the filesystem.
///
/// Repeated separators and `.` segments are dropped, `..` cancels the
/// preceding normal segment, and an empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root is the root.
                Some(Component::RootDir) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        PathBuf::from(".")
    } else {
        out.iter().collect()
    }
}

/// Build the name printed for `name` found under `prefix`.
///
/// The name keeps its raw bytes; nothing is lost for names that are not
/// valid UTF-8.
pub fn display_name(prefix: &Path, name: &OsStr, is_dir: bool, no_slash: bool) -> PathBuf {
    let mut display = OsString::from(clean(&prefix.join(name)));
    if is_dir && !no_slash {
        display.push(std::path::MAIN_SEPARATOR_STR);
    }
    PathBuf::from(display)
}
