use crate::error::ReportError;

/// One renderable field of a record. `flag` is the CLI toggle key,
/// `key` the lookup key inside a document record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub display_name: &'static str,
    pub flag: &'static str,
    pub key: &'static str,
    pub default_enabled: bool,
}

/// The fixed column catalog. Order here is the output column order.
pub const REGISTRY: [Column; 7] = [
    Column {
        display_name: "NAME",
        flag: "name",
        key: "name",
        default_enabled: false,
    },
    Column {
        display_name: "VERSION",
        flag: "version",
        key: "version",
        default_enabled: false,
    },
    Column {
        display_name: "SIZE",
        flag: "size",
        key: "size",
        default_enabled: false,
    },
    Column {
        display_name: "SHA1",
        flag: "sha1",
        key: "sha1",
        default_enabled: false,
    },
    Column {
        display_name: "SHA256",
        flag: "sha256",
        key: "sha256",
        default_enabled: false,
    },
    Column {
        display_name: "BUILD DATE",
        flag: "build-date",
        key: "buildDate",
        default_enabled: false,
    },
    Column {
        display_name: "URL",
        flag: "url",
        key: "url",
        default_enabled: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Aligned,
    Delimited(String),
}

/// The resolved column set and output policy for one invocation.
#[derive(Debug, Clone)]
pub struct Selection {
    pub columns: Vec<Column>,
    pub header: bool,
    pub mode: OutputMode,
}

/// Filter the registry down to the toggled-on columns, preserving registry
/// order. A column without a toggle falls back to its default. Exactly one
/// selected column drops the header: a single bare value should not carry a
/// redundant label.
pub fn resolve(
    registry: &[Column],
    toggles: &[(&str, bool)],
    header_requested: bool,
    delimiter: Option<String>,
) -> Result<Selection, ReportError> {
    let columns: Vec<Column> = registry
        .iter()
        .filter(|col| {
            toggles
                .iter()
                .find(|(flag, _)| *flag == col.flag)
                .map(|(_, on)| *on)
                .unwrap_or(col.default_enabled)
        })
        .copied()
        .collect();

    if columns.is_empty() {
        return Err(ReportError::NoColumnsSelected);
    }

    let header = header_requested && columns.len() > 1;
    let mode = match delimiter {
        Some(d) => OutputMode::Delimited(d),
        None => OutputMode::Aligned,
    };

    Ok(Selection {
        columns,
        header,
        mode,
    })
}
