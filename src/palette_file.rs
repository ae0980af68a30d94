//! Reading and writing palette files.
//!
//! These are plain text files with one color per line.

use std::path::{
    Path,
    PathBuf,
};

use color_eyre::eyre::WrapErr;

use crate::Error;

pub const FILE_EXTENSION: &str = "txt";

/// Name of the file dialog filter for palette files. It's also the filter
/// selected by default.
pub const FILE_FILTER_NAME: &str = "Text files (*.txt)";

pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read palette file: {}", path.display()))?;
    Ok(contents.lines().map(ToOwned::to_owned).collect())
}

pub fn write_lines<S>(path: impl AsRef<Path>, lines: &[S]) -> Result<(), Error>
where
    S: AsRef<str>,
{
    let path = path.as_ref();

    let mut contents = String::new();
    for line in lines {
        contents.push_str(line.as_ref());
        contents.push('\n');
    }

    std::fs::write(path, contents)
        .with_context(|| format!("Could not write palette file: {}", path.display()))?;
    Ok(())
}

/// Appends the palette file extension if `path` has none.
pub fn with_default_extension(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    if path.extension().is_none() {
        path.with_extension(FILE_EXTENSION)
    }
    else {
        path
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::palette_file::{
        FILE_EXTENSION,
        FILE_FILTER_NAME,
        read_lines,
        with_default_extension,
        write_lines,
    };

    #[test]
    fn filter_name_shows_extension() {
        assert!(FILE_FILTER_NAME.contains(&format!("*.{FILE_EXTENSION}")));
    }

    #[test]
    fn adds_extension_only_when_missing() {
        assert_eq!(
            with_default_extension("colors"),
            Path::new("colors.txt").to_owned()
        );
        assert_eq!(
            with_default_extension("colors.pal"),
            Path::new("colors.pal").to_owned()
        );
    }

    #[test]
    fn written_lines_can_be_read_back() {
        let path = std::env::temp_dir().join(format!(
            "color-translator-test-{}.txt",
            std::process::id()
        ));

        write_lines(&path, &["#FF0000", "#00FF00"]).unwrap();
        let lines = read_lines(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(lines, vec!["#FF0000", "#00FF00"]);
    }

    #[test]
    fn reading_missing_file_fails() {
        let error = read_lines("/this/does/not/exist.txt").unwrap_err();
        assert!(format!("{error:#}").contains("Could not read palette file"));
    }
}
