use crate::{ScrapeResult, ScraperError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Console,
    Json(PathBuf),
    Text(PathBuf),
}

impl OutputTarget {
    /// No path means console; a `.json` suffix selects JSON, anything else text.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str().is_empty() => OutputTarget::Console,
            Some(path) if path.to_string_lossy().ends_with(".json") => OutputTarget::Json(path),
            Some(path) => OutputTarget::Text(path),
            None => OutputTarget::Console,
        }
    }

    pub fn write(&self, result: &ScrapeResult) -> Result<(), ScraperError> {
        match self {
            OutputTarget::Console => {
                let stdout = io::stdout();
                write_console(result, &mut stdout.lock())
                    .map_err(|source| output_err("<stdout>", source))
            }
            OutputTarget::Json(path) => write_file(path, result, write_json),
            OutputTarget::Text(path) => write_file(path, result, write_text),
        }
    }
}

fn output_err(path: impl AsRef<Path>, source: io::Error) -> ScraperError {
    ScraperError::Output {
        path: path.as_ref().to_path_buf(),
        source,
    }
}

fn write_file<F>(path: &Path, result: &ScrapeResult, render: F) -> Result<(), ScraperError>
where
    F: FnOnce(&ScrapeResult, &mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| output_err(path, e))?;
    let mut writer = BufWriter::new(file);
    render(result, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| output_err(path, e))?;

    info!("Wrote {} URL(s) to {}", result.len(), path.display());
    println!("Results saved to {}", path.display());
    Ok(())
}

/// Pretty JSON with 2-space indentation and a trailing newline.
pub fn write_json<W: Write>(result: &ScrapeResult, w: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, result)?;
    writeln!(w)
}

pub fn write_text<W: Write>(result: &ScrapeResult, w: &mut W) -> io::Result<()> {
    for (url, texts) in result.iter() {
        writeln!(w, "URL: {}", url)?;
        for text in texts {
            writeln!(w, " - {}", text)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

pub fn write_console<W: Write>(result: &ScrapeResult, w: &mut W) -> io::Result<()> {
    for (url, texts) in result.iter() {
        writeln!(w, "Results from {}:", url)?;
        for text in texts {
            writeln!(w, " - {}", text)?;
        }
    }
    Ok(())
}
