//! The user's saved colors.

use crate::color::{
    Color,
    text::{
        self,
        ParseColorError,
    },
};

/// Selection used when there is nothing left to select.
pub const EMPTY_SELECTION: Color = Color::BLACK;

#[derive(Debug, thiserror::Error)]
#[error("Invalid color on line {line}: {text:?}")]
pub struct LoadError {
    /// 1-based
    pub line: usize,
    pub text: String,
    #[source]
    pub source: ParseColorError,
}

/// Ordered list of colors.
///
/// [`add`][Self::add] never inserts a color twice, but [`load_from`] keeps
/// duplicates found in a file.
///
/// [`load_from`]: Self::load_from
#[derive(Clone, Debug, Default)]
pub struct PaletteStore {
    colors: Vec<Color>,
}

impl PaletteStore {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Appends `color` unless it's already in the palette. Returns whether it
    /// was added.
    pub fn add(&mut self, color: Color) -> bool {
        if self.contains(color) {
            false
        }
        else {
            self.colors.push(color);
            true
        }
    }

    /// Removes the first entry equal to `color`. Returns whether one was
    /// removed.
    pub fn delete(&mut self, color: Color) -> bool {
        if let Some(index) = self.colors.iter().position(|entry| *entry == color) {
            self.colors.remove(index);
            true
        }
        else {
            false
        }
    }

    pub fn first_or_empty(&self) -> Color {
        self.colors.first().copied().unwrap_or(EMPTY_SELECTION)
    }

    /// Replaces the palette with colors parsed from `lines`.
    ///
    /// If any line doesn't parse (blank lines included), nothing is changed.
    pub fn load_from<I, S>(&mut self, lines: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut colors = vec![];

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let color = text::parse_persisted(line).map_err(|source| {
                LoadError {
                    line: index + 1,
                    text: line.to_owned(),
                    source,
                }
            })?;
            colors.push(color);
        }

        self.colors = colors;
        Ok(())
    }

    /// One `#RRGGBB` line per entry, in palette order.
    pub fn save_to(&self) -> Vec<String> {
        self.colors
            .iter()
            .map(|color| text::format_persisted(*color))
            .collect()
    }
}
