use crate::ScraperError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where the URLs of a run come from. A file wins over a positional URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Url(String),
    Nothing,
}

impl InputSource {
    pub fn new(file: Option<PathBuf>, url: Option<String>) -> Self {
        match (file, url) {
            (Some(path), _) if !path.as_os_str().is_empty() => InputSource::File(path),
            (_, Some(url)) => InputSource::Url(url),
            _ => InputSource::Nothing,
        }
    }

    /// `None` when there is nothing to scrape.
    pub fn resolve(&self) -> Result<Option<Vec<String>>, ScraperError> {
        match self {
            InputSource::File(path) => read_url_file(path).map(Some),
            InputSource::Url(url) => Ok(Some(vec![url.clone()])),
            InputSource::Nothing => Ok(None),
        }
    }
}

pub fn read_url_file(path: &Path) -> Result<Vec<String>, ScraperError> {
    let to_err = |source| ScraperError::Input {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_err)?;
    read_urls(BufReader::new(file)).map_err(to_err)
}

/// One URL per line, trimmed, blank lines skipped. Bytes that are not UTF-8
/// are replaced rather than failing the whole file.
pub fn read_urls<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut urls = vec![];
    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let line = line.trim();
        if !line.is_empty() {
            urls.push(line.to_string());
        }
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_lines_are_skipped_in_order() {
        let urls = read_urls("a.com\n\nb.com\n   \n\tc.com  \r\n".as_bytes()).expect("read");
        assert_eq!(
            urls,
            vec!["a.com".to_string(), "b.com".to_string(), "c.com".to_string()]
        );
    }

    #[test]
    fn test_invalid_utf8_line_does_not_drop_others() {
        let urls = read_urls(
            &b"https://a.example/\nhttps://b.example/caf\xe9\nhttps://c.example/\n"[..],
        )
        .expect("read");
        assert_eq!(
            urls,
            vec![
                "https://a.example/".to_string(),
                "https://b.example/caf\u{fffd}".to_string(),
                "https://c.example/".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_file_gives_empty_list() {
        let urls = read_urls("\n\n  \n".as_bytes()).expect("read");
        assert!(urls.is_empty());
    }

    #[test]
    fn test_file_takes_priority_over_url() {
        let source = InputSource::new(
            Some(PathBuf::from("urls.txt")),
            Some("https://example.com".to_string()),
        );
        assert_eq!(source, InputSource::File(PathBuf::from("urls.txt")));
    }

    #[test]
    fn test_empty_file_flag_falls_back_to_url() {
        let source = InputSource::new(Some(PathBuf::new()), Some("https://example.com".to_string()));
        assert_eq!(source, InputSource::Url("https://example.com".to_string()));
        assert_eq!(
            source.resolve().expect("resolve"),
            Some(vec!["https://example.com".to_string()])
        );
    }

    #[test]
    fn test_nothing_to_do() {
        let source = InputSource::new(None, None);
        assert_eq!(source.resolve().expect("resolve"), None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let source = InputSource::File(PathBuf::from("tests/does-not-exist.txt"));
        assert!(matches!(source.resolve(), Err(ScraperError::Input { .. })));
    }

    #[test]
    fn test_reads_fixture_file() {
        let urls = read_url_file(Path::new("tests/urls.txt")).expect("read");
        assert_eq!(
            urls,
            vec![
                "https://example.com/".to_string(),
                "https://example.org/news".to_string(),
                "https://example.net/".to_string(),
            ]
        );
    }
}
