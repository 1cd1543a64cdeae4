use clap::Parser;

pub const DEFAULT_SOURCE: &str = "https://updates.jenkins.io/update-center.actual.json";

#[derive(Parser, Debug)]
#[command(name = "juc", about = "Jenkins update center reporting CLI")]
pub struct Cli {
    /// Plugin names to report on after the core package. Use * for all plugins.
    pub plugins: Vec<String>,

    /// Print the plugin name
    #[arg(short = 'n', long)]
    pub name: bool,

    /// Print the version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Print the size in bytes
    #[arg(short = 's', long)]
    pub size: bool,

    /// Print the sha1
    #[arg(long)]
    pub sha1: bool,

    /// Print the sha256
    #[arg(long)]
    pub sha256: bool,

    /// Print the build date
    #[arg(short = 'b', long)]
    pub build_date: bool,

    /// Print the download url (on by default)
    #[arg(short = 'u', long, conflicts_with = "no_url")]
    pub url: bool,

    /// Drop the default url column
    #[arg(long)]
    pub no_url: bool,

    /// Suppress the header row
    #[arg(long)]
    pub no_header: bool,

    /// Join fields with this literal delimiter instead of aligned columns
    #[arg(short = 'd', long)]
    pub delimiter: Option<String>,

    /// Update center URL or a local JSON file
    #[arg(long, default_value = DEFAULT_SOURCE, overrides_with = "source")]
    pub source: String,

    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// One toggle per registry column, keyed by the column's flag name.
    /// The url column is on by default and only dropped via --no-url.
    pub fn column_toggles(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("name", self.name),
            ("version", self.version),
            ("size", self.size),
            ("sha1", self.sha1),
            ("sha256", self.sha256),
            ("build-date", self.build_date),
            ("url", self.url || !self.no_url),
        ]
    }
}
