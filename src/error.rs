#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("the command requires at least one column to be selected")]
    NoColumnsSelected,
    #[error("fetching {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: String, status: u16 },
    #[error("invalid update center document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("update center document has no `core` entry")]
    MissingCore,
    #[error("plugin not found: {0}")]
    PluginNotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
