use crate::{InputSource, OutputTarget};
use std::path::PathBuf;

pub const DEFAULT_TAG: &str = "h1";

/// Everything one run needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub tag: String,
    pub output: OutputTarget,
}

impl Config {
    pub fn new(
        url: Option<String>,
        tag: impl Into<String>,
        output: Option<PathBuf>,
        file: Option<PathBuf>,
    ) -> Self {
        Self {
            input: InputSource::new(file, url),
            tag: tag.into(),
            output: OutputTarget::from_path(output),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, DEFAULT_TAG, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_console_h1_without_input() {
        let config = Config::default();
        assert_eq!(config.tag, "h1");
        assert_eq!(config.input, InputSource::Nothing);
        assert_eq!(config.output, OutputTarget::Console);
    }

    #[test]
    fn test_file_and_json_output() {
        let config = Config::new(
            Some("https://ignored.example".to_string()),
            "p.lead",
            Some(PathBuf::from("out.json")),
            Some(PathBuf::from("urls.txt")),
        );
        assert_eq!(config.input, InputSource::File(PathBuf::from("urls.txt")));
        assert_eq!(config.output, OutputTarget::Json(PathBuf::from("out.json")));
        assert_eq!(config.tag, "p.lead");
    }
}
