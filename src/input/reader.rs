use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_DOCUMENT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads the document to transform from a file or stdin.
///
/// Documents may be plain text or HTML exported from a rich-text editor;
/// markup is stripped later in the transformation pipeline.
pub struct DocumentReader;

impl DocumentReader {
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access document: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_DOCUMENT_SIZE {
            bail!(
                "Error: Document size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the document into smaller parts.",
                size as f64 / 1024.0 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read document: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_DOCUMENT_SIZE {
                bail!(
                    "Error: Document size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the document into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Document is not valid UTF-8")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello, World!").unwrap();

        let content = DocumentReader::read(Some(temp_file.path().to_str().unwrap())).unwrap();
        assert_eq!(content.trim(), "Hello, World!");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = DocumentReader::read(Some("/nonexistent/path/to/doc.html"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_html_document() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "<p>He <b>go</b> to school.</p>";
        write!(temp_file, "{content}").unwrap();

        let result = DocumentReader::read(Some(temp_file.path().to_str().unwrap())).unwrap();
        // Markup survives reading; stripping happens in the transform pipeline
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_thai_document() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "สวัสดีครับ\nผมไปโรงเรียน";
        write!(temp_file, "{content}").unwrap();

        let result = DocumentReader::read(Some(temp_file.path().to_str().unwrap())).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let content = DocumentReader::read(Some(temp_file.path().to_str().unwrap())).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large.txt");

        let large_content = "x".repeat(MAX_DOCUMENT_SIZE + 1);
        fs::write(&file_path, &large_content).unwrap();

        let result = DocumentReader::read(Some(file_path.to_str().unwrap()));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_file_at_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("max.txt");

        let content = "x".repeat(MAX_DOCUMENT_SIZE);
        fs::write(&file_path, &content).unwrap();

        let result = DocumentReader::read(Some(file_path.to_str().unwrap()));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), MAX_DOCUMENT_SIZE);
    }
}
