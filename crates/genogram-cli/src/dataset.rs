//! Dataset loading for the CLI.
//!
//! A dataset file is TOML holding `[[people]]` and `[[relationships]]`
//! tables, decoded straight into [`GenogramData`]:
//!
//! ```toml
//! [[people]]
//! id = "adam"
//! name = "Adam"
//! sex = "male"
//!
//! [[relationships]]
//! id = "r1"
//! partner_a = "adam"
//! partner_b = "beth"
//! children = ["cleo"]
//! ```

use std::{fs, path::Path};

use log::debug;

use genogram::{GenogramError, family::GenogramData};

/// Read and decode the dataset at `path`.
///
/// # Errors
///
/// Returns [`GenogramError::Io`] if the file cannot be read and
/// [`GenogramError::Input`] if it is not a valid dataset.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<GenogramData, GenogramError> {
    let source = fs::read_to_string(path)?;
    let data = parse_dataset(&source)?;

    debug!(
        people_count = data.people().len(),
        relationships_count = data.relationships().len();
        "Dataset loaded"
    );

    Ok(data)
}

fn parse_dataset(source: &str) -> Result<GenogramData, GenogramError> {
    toml::from_str(source).map_err(|err| {
        GenogramError::new_input_error(
            format!("Invalid dataset: {}", err.message()),
            err.span(),
            source,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset() {
        let data = parse_dataset(
            r#"
            [[people]]
            id = "a"
            name = "Adam"
            sex = "male"

            [[relationships]]
            id = "r1"
            partner_a = "a"
            partner_b = "b"
            "#,
        )
        .unwrap();

        assert_eq!(data.people().len(), 1);
        assert_eq!(data.relationships().len(), 1);
    }

    #[test]
    fn test_empty_file_is_an_empty_dataset() {
        let data = parse_dataset("").unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_bad_sex_points_at_value() {
        let source = "[[people]]\nid = \"a\"\nname = \"Adam\"\nsex = \"robot\"\n";

        let err = parse_dataset(source).unwrap_err();

        match err {
            GenogramError::Input { message, span, .. } => {
                assert!(message.starts_with("Invalid dataset"));
                let span = span.expect("decoder should report a span");
                assert!(span.end <= source.len());
            }
            other => panic!("Expected Input error, got {other:?}"),
        }
    }
}
