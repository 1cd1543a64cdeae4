use crate::error::ReportError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Field map for the core package or a single plugin. Values stay loosely
/// typed; rendering coerces them in one place.
pub type Record = serde_json::Map<String, Value>;

/// The decoded update center payload.
#[derive(Debug, Deserialize)]
pub struct UpdateDocument {
    core: Option<Record>,
    #[serde(default)]
    plugins: BTreeMap<String, Record>,
}

impl UpdateDocument {
    /// Empty id means the core record; anything else is a plugin lookup.
    pub fn locate(&self, id: &str) -> Result<&Record, ReportError> {
        if id.is_empty() {
            self.core.as_ref().ok_or(ReportError::MissingCore)
        } else {
            self.plugins
                .get(id)
                .ok_or_else(|| ReportError::PluginNotFound(id.to_string()))
        }
    }

    pub fn plugin_names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch_document_text(url: &str) -> Result<String, ReportError> {
    let wrap = |source| ReportError::Fetch {
        url: url.to_string(),
        source,
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(wrap)?;
    let resp = client.get(url).send().map_err(wrap)?;
    if resp.status() != reqwest::StatusCode::OK {
        return Err(ReportError::Status {
            url: url.to_string(),
            status: resp.status().as_u16(),
        });
    }
    resp.text().map_err(wrap)
}

/// Load and decode the update center document from a URL or a local file.
pub fn load_document(source: &str) -> Result<UpdateDocument, ReportError> {
    let raw = if is_remote(source) {
        fetch_document_text(source)?
    } else {
        std::fs::read_to_string(source)?
    };
    Ok(serde_json::from_str(&raw)?)
}
