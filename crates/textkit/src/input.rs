//! Text acquisition shared by every text-consuming command.

use crate::prelude::*;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone, Default)]
pub struct InputArgs {
    /// Text to process (reads --file or stdin when omitted)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Argument,
    File,
    Stdin,
}

impl InputArgs {
    /// Resolve the text from the argument, the file, or piped stdin, in that order.
    pub fn read(&self) -> Result<String> {
        let stdin = std::io::stdin();
        let interactive = stdin.is_terminal();
        let (text, source) = self.resolve(stdin.lock(), interactive)?;
        log::debug!("Read {} bytes from {:?}", text.len(), source);
        Ok(text)
    }

    /// Like [`InputArgs::read`], without the trailing newline left by `echo`
    /// and editors.
    pub fn read_text(&self) -> Result<String> {
        let stdin = std::io::stdin();
        let interactive = stdin.is_terminal();
        self.resolve_text(stdin.lock(), interactive)
    }

    pub(crate) fn resolve_text<R: Read>(&self, stdin: R, interactive: bool) -> Result<String> {
        let (mut text, source) = self.resolve(stdin, interactive)?;
        log::debug!("Read {} bytes from {:?}", text.len(), source);
        strip_trailing_newline(&mut text);
        Ok(text)
    }

    fn resolve<R: Read>(
        &self,
        mut stdin: R,
        interactive: bool,
    ) -> Result<(String, InputSource)> {
        if let Some(text) = &self.text {
            return Ok((text.clone(), InputSource::Argument));
        }

        if let Some(path) = &self.file {
            return Ok((read_file(path)?, InputSource::File));
        }

        if interactive {
            return Err(Error::NoInput.into());
        }

        let mut buffer = String::new();
        stdin
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok((buffer, InputSource::Stdin))
    }
}

/// Drop one trailing `\n` or `\r\n`, as left by editors and `echo`.
pub fn strip_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Error::ReadFile {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

pub fn write_file<C: AsRef<[u8]>>(path: &Path, contents: C) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| {
        Error::WriteFile {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_argument_wins() {
        let args = InputArgs {
            text: Some("hello".to_string()),
            file: None,
        };
        let (text, source) = args.resolve(std::io::empty(), true).unwrap();
        assert_eq!(text, "hello");
        assert_eq!(source, InputSource::Argument);
    }

    #[test]
    fn test_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "line one\nline two").unwrap();

        let args = InputArgs {
            text: None,
            file: Some(file.path().to_path_buf()),
        };
        let (text, source) = args.resolve(std::io::empty(), true).unwrap();
        assert_eq!(text, "line one\nline two");
        assert_eq!(source, InputSource::File);
    }

    #[test]
    fn test_reads_piped_stdin() {
        let args = InputArgs::default();
        let (text, source) = args.resolve("piped text\n".as_bytes(), false).unwrap();
        assert_eq!(text, "piped text\n");
        assert_eq!(source, InputSource::Stdin);
    }

    #[test]
    fn test_interactive_stdin_without_text_is_an_error() {
        let err = InputArgs::default()
            .resolve(std::io::empty(), true)
            .unwrap_err();
        assert!(err.to_string().starts_with("No input"));
    }

    #[test]
    fn test_strip_trailing_newline() {
        let mut unix = "abc\n".to_string();
        let mut windows = "abc\r\n".to_string();
        let mut double = "abc\n\n".to_string();
        strip_trailing_newline(&mut unix);
        strip_trailing_newline(&mut windows);
        strip_trailing_newline(&mut double);
        assert_eq!(unix, "abc");
        assert_eq!(windows, "abc");
        assert_eq!(double, "abc\n");
    }

    #[test]
    fn test_read_text_strips_piped_newline() {
        let text = InputArgs::default()
            .resolve_text("Hello World\n".as_bytes(), false)
            .unwrap();
        assert_eq!(text, "Hello World");

        let argument = InputArgs {
            text: Some("keep\n\n".to_string()),
            file: None,
        };
        assert_eq!(argument.resolve_text(std::io::empty(), true).unwrap(), "keep\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_file(&path, "Lorem ipsum.").unwrap();
        assert_eq!(read_file(&path).unwrap(), "Lorem ipsum.");
    }
}
