//! Named theme registry.
//!
//! This module provides [`ThemeRegistry`], which maps theme names to shared
//! [`Theme`] values. Themes come from code, from the built-in set, or from a
//! directory of YAML files.
//!
//! # Theme Files
//!
//! [`ThemeRegistry::load_dir`] walks a directory recursively and registers
//! every recognised file under its relative path without extension, using
//! forward slashes: `themes/solarized.yaml` becomes `"solarized"` when
//! `themes` is the root, and `dark/dim.yml` becomes `"dark/dim"`.
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.yaml` |
//! | 2 | `.yml` |
//!
//! When both `name.yaml` and `name.yml` exist in one scan, the `.yaml` file wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::builtin::{vs_code_dark, vs_code_light, VS_CODE_DARK, VS_CODE_LIGHT};
use super::theme::Theme;
use crate::error::{HighlightError, ThemeError};

/// Recognized theme file extensions in priority order.
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// A theme file discovered during directory walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFile {
    /// Registry name without extension (e.g., "dark/dim")
    pub name: String,
    /// Relative name with extension (e.g., "dark/dim.yml")
    pub name_with_ext: String,
    /// Absolute path to the theme file
    pub absolute_path: PathBuf,
}

impl ThemeFile {
    pub fn new(
        name: impl Into<String>,
        name_with_ext: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            name_with_ext: name_with_ext.into(),
            absolute_path: absolute_path.into(),
        }
    }

    /// Returns the extension priority (lower is higher priority).
    ///
    /// Returns `usize::MAX` if the extension is not recognized.
    pub fn extension_priority(&self) -> usize {
        THEME_EXTENSIONS
            .iter()
            .position(|ext| self.name_with_ext.ends_with(ext))
            .unwrap_or(usize::MAX)
    }
}

/// Registry of themes by name.
///
/// Registering a name again replaces the earlier theme.
///
/// # Example
///
/// ```rust
/// use termtint::{Theme, ThemeRegistry};
/// use console::Style;
///
/// let mut registry = ThemeRegistry::builtin();
/// registry.register("mono", Theme::new().add("_", Style::new().white()));
///
/// assert!(registry.get("vsCodeDark").is_ok());
/// assert!(registry.get("mono").is_ok());
/// assert!(registry.get("nonexistent").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Arc<Theme>>,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in themes.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(VS_CODE_DARK, vs_code_dark());
        registry.register(VS_CODE_LIGHT, vs_code_light());
        registry
    }

    /// Registers a theme and returns the shared handle stored for it.
    pub fn register(&mut self, name: impl Into<String>, theme: impl Into<Arc<Theme>>) -> Arc<Theme> {
        let theme = theme.into();
        self.themes.insert(name.into(), Arc::clone(&theme));
        theme
    }

    /// Looks up a theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::UnknownTheme`] if no theme has that name.
    pub fn get(&self, name: &str) -> Result<&Arc<Theme>, HighlightError> {
        self.themes
            .get(name)
            .ok_or_else(|| HighlightError::UnknownTheme {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Returns an iterator over all registered theme names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(|s| s.as_str())
    }

    /// Registers parsed theme files.
    ///
    /// Files are processed in extension priority order; a lower-priority file
    /// whose name was already taken in this batch is skipped.
    ///
    /// # Errors
    ///
    /// Returns the first read or parse error. Themes registered before the
    /// failing file stay registered.
    pub fn add_from_files(&mut self, files: Vec<ThemeFile>) -> Result<usize, ThemeError> {
        let mut sorted_files = files;
        sorted_files.sort_by_key(|f| f.extension_priority());

        let mut added: HashMap<String, PathBuf> = HashMap::new();
        for file in sorted_files {
            if let Some(winner) = added.get(&file.name) {
                log::warn!(
                    "skipping theme file {}: name \"{}\" already loaded from {}",
                    file.absolute_path.display(),
                    file.name,
                    winner.display()
                );
                continue;
            }

            let theme = Theme::from_file(&file.absolute_path)?;
            log::debug!(
                "loaded theme \"{}\" ({} rules) from {}",
                file.name,
                theme.len(),
                file.absolute_path.display()
            );
            self.register(file.name.clone(), theme);
            added.insert(file.name, file.absolute_path);
        }

        Ok(added.len())
    }

    /// Loads every theme file under `root`, returning how many were registered.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the directory cannot be walked, or the
    /// first error from reading or parsing a theme file.
    pub fn load_dir(&mut self, root: impl AsRef<Path>) -> Result<usize, ThemeError> {
        let files = walk_theme_dir(root.as_ref())?;
        self.add_from_files(files)
    }
}

/// Walks a theme directory and collects theme files.
///
/// The result is not sorted; use [`ThemeFile::extension_priority`] for ordering.
pub fn walk_theme_dir(root: &Path) -> Result<Vec<ThemeFile>, ThemeError> {
    let io_err = |source| ThemeError::Io {
        path: root.to_path_buf(),
        source,
    };
    let root_canonical = root.canonicalize().map_err(io_err)?;
    let mut files = Vec::new();

    walk_dir_recursive(&root_canonical, &root_canonical, &mut files).map_err(io_err)?;

    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<ThemeFile>,
) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();
        // Symlinked directories are not followed.
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            if let Some(theme_file) = try_parse_theme_file(&path, root) {
                files.push(theme_file);
            }
        }
    }

    Ok(())
}

/// Returns `None` if the file doesn't have a recognized theme extension.
fn try_parse_theme_file(path: &Path, root: &Path) -> Option<ThemeFile> {
    let path_str = path.to_string_lossy();
    let extension = THEME_EXTENSIONS
        .iter()
        .find(|ext| path_str.ends_with(*ext))?;

    let relative = path.strip_prefix(root).ok()?;
    let name_with_ext = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");
    let name = name_with_ext.strip_suffix(extension)?.to_string();

    Some(ThemeFile::new(name, name_with_ext, path))
}
