//! Line rendering: connectors, prefixes and entry labels
//!
//! Every function here writes to a `WriteColor`, so the same code produces
//! coloured terminal output, plain piped output, and in-memory strings.

use std::io;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::tree::DirectoryEntry;

use super::config::OutputConfig;

/// Connector for an entry with more siblings after it.
pub const BRANCH: &str = "├── ";
/// Connector for the last entry of a directory.
pub const LAST_BRANCH: &str = "└── ";
/// Prefix segment under an ancestor that has more siblings.
pub const VERTICAL: &str = "│   ";
/// Prefix segment under an ancestor that was last.
pub const BLANK: &str = "    ";

pub const DIR_COLOR: Color = Color::Green;
pub const FILE_COLOR: Color = Color::Yellow;

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK)
    } else {
        format!("{}{}", prefix, VERTICAL)
    }
}

/// Write prefix, connector and label for one entry, without the newline.
pub fn write_entry<W: WriteColor + ?Sized>(
    out: &mut W,
    entry: &DirectoryEntry,
    is_last: bool,
    prefix: &str,
    config: &OutputConfig,
) -> io::Result<()> {
    write!(out, "{}{}", prefix, connector(is_last))?;

    if config.use_color {
        let color = if entry.is_dir { DIR_COLOR } else { FILE_COLOR };
        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(out, "{}", entry.name)?;
        if entry.is_dir {
            write!(out, "/")?;
        }
        out.reset()?;
    } else {
        let messages = config.language.messages();
        let indicator = if entry.is_dir {
            messages.dir_indicator
        } else {
            messages.file_indicator
        };
        write!(out, "{}{}", indicator, entry.name)?;
    }
    Ok(())
}

/// Write one complete entry line.
pub fn write_entry_line<W: WriteColor + ?Sized>(
    out: &mut W,
    entry: &DirectoryEntry,
    is_last: bool,
    prefix: &str,
    config: &OutputConfig,
) -> io::Result<()> {
    write_entry(out, entry, is_last, prefix, config)?;
    writeln!(out)
}

/// Write an inline annotation for a directory that could not be read.
/// Always uses the branch connector.
pub fn write_annotation_line<W: WriteColor + ?Sized>(
    out: &mut W,
    prefix: &str,
    message: &str,
) -> io::Result<()> {
    out.reset()?;
    writeln!(out, "{}{}{}", prefix, BRANCH, message)
}

/// Render one entry to a string. Colour mode embeds ANSI escapes.
pub fn render_line(
    entry: &DirectoryEntry,
    is_last: bool,
    prefix: &str,
    config: &OutputConfig,
) -> String {
    let mut buffer = if config.use_color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    write_entry(&mut buffer, entry, is_last, prefix, config)
        .expect("writing to an in-memory buffer failed");
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

#[cfg(test)]
mod tests {
    use crate::i18n::Language;

    use super::*;

    fn plain(language: Language) -> OutputConfig {
        OutputConfig::new(false, language)
    }

    #[test]
    fn test_connector_marks_last_sibling() {
        assert_eq!(connector(false), "├── ");
        assert_eq!(connector(true), "└── ");
        assert_ne!(connector(true), connector(false));
    }

    #[test]
    fn test_child_prefix() {
        assert_eq!(child_prefix("", false), "│   ");
        assert_eq!(child_prefix("", true), "    ");
        assert_eq!(child_prefix("│   ", true), "│       ");
        assert_eq!(child_prefix("    ", false), "    │   ");
    }

    #[test]
    fn test_indicator_mode_english() {
        let config = plain(Language::En);
        assert_eq!(
            render_line(&DirectoryEntry::dir("src"), false, "", &config),
            "├── [Dir] src"
        );
        assert_eq!(
            render_line(&DirectoryEntry::file("main.rs"), true, "│   ", &config),
            "│   └── [File] main.rs"
        );
    }

    #[test]
    fn test_indicator_mode_chinese() {
        let config = plain(Language::Zh);
        assert_eq!(
            render_line(&DirectoryEntry::dir("src"), true, "", &config),
            "└── [目录] src"
        );
        assert_eq!(
            render_line(&DirectoryEntry::file("a.py"), false, "", &config),
            "├── [文件] a.py"
        );
    }

    #[test]
    fn test_color_mode_wraps_name_and_marks_directories() {
        let config = OutputConfig::new(true, Language::En);

        let dir_line = render_line(&DirectoryEntry::dir("src"), false, "", &config);
        assert!(dir_line.starts_with("├── "));
        assert!(dir_line.contains("\x1b[32m"), "dir should be green: {:?}", dir_line);
        assert!(dir_line.contains("src/"));
        assert!(dir_line.ends_with("\x1b[0m"));
        assert!(!dir_line.contains("[Dir]"));

        let file_line = render_line(&DirectoryEntry::file("a.py"), true, "", &config);
        assert!(file_line.starts_with("└── "));
        assert!(file_line.contains("\x1b[33m"), "file should be yellow: {:?}", file_line);
        assert!(file_line.contains("a.py"));
        assert!(!file_line.contains("a.py/"));
    }

    #[test]
    fn test_annotation_line_uses_branch_connector() {
        let mut buffer = Buffer::no_color();
        write_annotation_line(&mut buffer, "│   ", "[Permission Denied] secret").unwrap();
        assert_eq!(
            String::from_utf8_lossy(buffer.as_slice()),
            "│   ├── [Permission Denied] secret\n"
        );
    }
}
