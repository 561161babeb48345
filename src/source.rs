//! NDJSON metadata source.
//!
//! Hosts that extract element metadata out of process can hand it over as
//! newline-delimited JSON, one tagged element per line:
//!
//! ```json
//! {"owner": "com.acme.Pizza", "name": "setSize", "parameters": ["int"], "location": "Pizza.java:14"}
//! {"owner": "com.acme.Pizza", "name": "setName", "parameters": ["String"]}
//! ```

use crate::error::{Error, SourceError};
use crate::model::TaggedElement;
use std::path::Path;
use tracing::{debug, info};

/// Read tagged elements from an NDJSON file.
pub fn load_elements(path: &Path) -> Result<Vec<TaggedElement>, Error> {
    if !path.is_file() {
        return Err(SourceError::NotFound(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path).map_err(SourceError::Io)?;
    let elements = parse_elements(&content)?;

    info!(
        path = %path.display(),
        elements = elements.len(),
        "Loaded tagged elements"
    );
    Ok(elements)
}

/// Parse tagged elements from NDJSON text. Blank lines are skipped.
pub fn parse_elements(content: &str) -> Result<Vec<TaggedElement>, Error> {
    let mut elements = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let element: TaggedElement =
            serde_json::from_str(line).map_err(|e| SourceError::InvalidJson {
                line: i + 1,
                reason: e.to_string(),
            })?;
        elements.push(element);
    }

    debug!(elements = elements.len(), "Parsed NDJSON elements");
    Ok(elements)
}
