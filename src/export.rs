//! Writes the generated script to disk as plain text or paginated PDF.
//!
//! Exports land in the platform downloads directory under fixed names, so
//! repeating an export overwrites the previous copy instead of piling up
//! numbered files.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TXT_FILE_NAME: &str = "dialogue_script.txt";
pub const PDF_FILE_NAME: &str = "dialogue_script.pdf";

/// Courier at 10pt fits 88 characters between A4 margins.
pub const WRAP_WIDTH: usize = 88;
const LINES_PER_PAGE: usize = 56;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("export io: {0}")]
    Io(#[from] std::io::Error),
    #[error("pdf assembly: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Where exports are written: the user's downloads directory, or a local
/// `exports/` directory when the platform has none.
pub fn export_dir() -> PathBuf {
    if let Some(dir) = dirs::download_dir() {
        return dir;
    }
    PathBuf::from("exports")
}

pub fn write_txt(dialogue: &str) -> Result<PathBuf, ExportError> {
    write_txt_to(&export_dir(), dialogue)
}

pub fn write_txt_to(dir: &Path, dialogue: &str) -> Result<PathBuf, ExportError> {
    if dialogue.trim().is_empty() {
        return Err(ExportError::Empty);
    }
    fs::create_dir_all(dir)?;
    let path = dir.join(TXT_FILE_NAME);
    fs::write(&path, dialogue)?;
    Ok(path)
}

pub fn write_pdf(dialogue: &str) -> Result<PathBuf, ExportError> {
    write_pdf_to(&export_dir(), dialogue)
}

/// Renders the script as A4 pages of Courier text, wrapping long lines and
/// starting a fresh page whenever the current one fills up.
pub fn write_pdf_to(dir: &Path, dialogue: &str) -> Result<PathBuf, ExportError> {
    if dialogue.trim().is_empty() {
        return Err(ExportError::Empty);
    }
    let lines = wrap_text(dialogue, WRAP_WIDTH);

    fs::create_dir_all(dir)?;
    let path = dir.join(PDF_FILE_NAME);

    let (doc, first_page, first_layer) =
        PdfDocument::new("Dialogue Script", Mm(210.0), Mm(297.0), "Layer 1");
    let font = doc.add_builtin_font(BuiltinFont::Courier)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    for (page_index, page_lines) in lines.chunks(LINES_PER_PAGE).enumerate() {
        if page_index > 0 {
            let (page, layer_index) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            layer = doc.get_page(page).get_layer(layer_index);
        }
        let mut y = 283.0;
        for line in page_lines {
            if !line.is_empty() {
                layer.use_text(line.as_str(), 10.0, Mm(12.0), Mm(y), &font);
            }
            y -= 4.8;
        }
    }

    doc.save(&mut BufWriter::new(File::create(&path)?))?;
    Ok(path)
}

/// Greedy word wrap. Explicit newlines are respected, blank lines survive
/// as spacing, and words longer than `max_chars` are hard-split.
/// A zero `max_chars` is treated as one column.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    for raw in text.lines() {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for mut word in raw.split_whitespace() {
            while word.chars().count() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let head: String = word.chars().take(max_chars).collect();
                word = &word[head.len()..];
                lines.push(head);
            }
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_pass_through() {
        assert_eq!(wrap_text("WIZARD: Who goes there?", 40), vec![
            "WIZARD: Who goes there?".to_string()
        ]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let wrapped = wrap_text("one two three four five", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four five"]);
        assert!(wrapped.iter().all(|line| line.chars().count() <= 9));
    }

    #[test]
    fn fills_lines_up_to_the_limit() {
        assert_eq!(wrap_text("aaa bbb", 7), vec!["aaa bbb"]);
        assert_eq!(wrap_text("aaa bbbb", 7), vec!["aaa", "bbbb"]);
    }

    #[test]
    fn hard_splits_oversized_words() {
        let wrapped = wrap_text("xxxxxxxxxx", 4);
        assert_eq!(wrapped, vec!["xxxx", "xxxx", "xx"]);
    }

    #[test]
    fn zero_width_is_clamped_to_one_column() {
        assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn blank_lines_survive_as_spacing() {
        let wrapped = wrap_text("ELIAS: Hello.\n\nBALTHOR: Go away.", 40);
        assert_eq!(wrapped, vec!["ELIAS: Hello.", "", "BALTHOR: Go away."]);
    }

    #[test]
    fn wraps_multibyte_text_without_panicking() {
        let wrapped = wrap_text("héllo wörld ünïcödé", 8);
        assert_eq!(wrapped, vec!["héllo", "wörld", "ünïcödé"]);
        assert_eq!(wrap_text("ünïcödé", 4), vec!["ünïc", "ödé"]);
    }

    #[test]
    fn empty_text_is_refused() {
        let dir = std::env::temp_dir();
        assert!(matches!(write_txt_to(&dir, "  \n "), Err(ExportError::Empty)));
        assert!(matches!(write_pdf_to(&dir, ""), Err(ExportError::Empty)));
    }
}
