//! TrueType font discovery for the text layers of the figure.
//!
//! Plotters is built without system font lookup, so a font file has to be
//! registered under the family name used by every text style before any
//! text can be drawn.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use once_cell::sync::{Lazy, OnceCell};
use plotters::style::{register_font, FontStyle};
use tracing::{debug, warn};

/// Family name the renderer's text styles ask for.
pub const FONT_FAMILY: &str = "sans-serif";

const SYSTEM_FONT_PATTERNS: &[&str] = &[
    "/usr/share/fonts/**/DejaVuSans.ttf",
    "/usr/share/fonts/**/LiberationSans-Regular.ttf",
    "/usr/share/fonts/**/NotoSans-Regular.ttf",
    "/usr/local/share/fonts/**/*.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:/Windows/Fonts/arial.ttf",
    "/usr/share/fonts/**/*.ttf",
];

#[derive(Debug)]
struct LoadedFont {
    path: PathBuf,
    bytes: &'static [u8],
}

/// First usable system font, looked up once per process.
static SYSTEM_FONT: OnceCell<Option<LoadedFont>> = OnceCell::new();

/// Path of the font currently registered for [`FONT_FAMILY`].
static ACTIVE: Lazy<Mutex<Option<PathBuf>>> = Lazy::new(|| Mutex::new(None));

/// Make a font available for [`FONT_FAMILY`] and return its path.
///
/// `preferred` is registered on every call where it differs from the active
/// font. When it is unusable and `search_system` is set, the first usable
/// system font is used instead. Returns `None` when no font could be registered.
pub fn ensure_font(preferred: Option<&Path>, search_system: bool) -> Option<PathBuf> {
    let mut active = ACTIVE.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(path) = preferred {
        if active.as_deref() == Some(path) {
            return Some(path.to_path_buf());
        }
        match std::fs::read(path) {
            Ok(bytes) => {
                if activate(path, Box::leak(bytes.into_boxed_slice())) {
                    *active = Some(path.to_path_buf());
                    return Some(path.to_path_buf());
                }
                warn!(path = %path.display(), "not a usable TrueType font");
            }
            Err(e) => warn!(path = %path.display(), "cannot read font: {e}"),
        }
    }

    if !search_system {
        return None;
    }

    let system = SYSTEM_FONT.get_or_init(discover_system_font).as_ref()?;
    if active.as_deref() != Some(system.path.as_path()) {
        if !activate(&system.path, system.bytes) {
            return None;
        }
        *active = Some(system.path.clone());
    }
    Some(system.path.clone())
}

fn activate(path: &Path, bytes: &'static [u8]) -> bool {
    match register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
        Ok(()) => {
            debug!(path = %path.display(), "registered font");
            true
        }
        Err(_) => false,
    }
}

fn discover_system_font() -> Option<LoadedFont> {
    for path in system_fonts() {
        let Ok(bytes) = std::fs::read(&path) else {
            continue;
        };
        // register_font keeps a 'static reference for the rest of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if activate(&path, bytes) {
            return Some(LoadedFont { path, bytes });
        }
        debug!(path = %path.display(), "skipping unusable font file");
    }

    warn!("no usable TrueType font found in the system font locations");
    None
}

fn system_fonts() -> impl Iterator<Item = PathBuf> {
    SYSTEM_FONT_PATTERNS
        .iter()
        .filter_map(|pattern| glob::glob(pattern).ok())
        .flat_map(|paths| paths.filter_map(Result::ok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_unusable_preferred_font_without_system_search() {
        let dir = tempdir().unwrap();
        let bogus = dir.path().join("not_a_font.ttf");
        std::fs::write(&bogus, b"definitely not a font").unwrap();

        assert_eq!(ensure_font(Some(&bogus), false), None);
        assert_eq!(ensure_font(Some(&dir.path().join("missing.ttf")), false), None);
    }

    #[test]
    fn test_preferred_font_is_honoured_on_every_call() {
        // needs at least one installed font to copy from
        let Some(system) = ensure_font(None, true) else {
            return;
        };
        let dir = tempdir().unwrap();
        let copy = dir.path().join("copy.ttf");
        std::fs::copy(&system, &copy).unwrap();

        assert_eq!(ensure_font(Some(&copy), false), Some(copy.clone()));
        assert_eq!(ensure_font(Some(&system), false), Some(system.clone()));
        assert_eq!(ensure_font(Some(&copy), true), Some(copy));
    }
}
