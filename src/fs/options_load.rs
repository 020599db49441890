use std::{fs::File, io::BufReader, path::Path};

use crate::{fs::LoadError, search::SearchOptions};

impl SearchOptions {
    /// Reads search options from a JSON file such as `{"max_depth": 5000}`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let reader = BufReader::new(File::open(path)?);
        let options = serde_json::from_reader(reader)?;
        tracing::debug!(?options, "loaded search options");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_fixture() {
        let options = SearchOptions::load_from_path("test_index/options.json").unwrap();
        assert_eq!(options.depth_limit(), Some(100));
        assert_eq!(options.cost_limit(), None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SearchOptions::load_from_path("test_index/does_not_exist.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
