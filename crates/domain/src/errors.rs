use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Failed to retrieve neighbor table dump from `{command}`")]
    ExternalTool {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse neighbor table dump")]
    Parse {
        #[source]
        source: TableFormatError,
    },
}

impl LookupError {
    pub fn external_tool(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::ExternalTool {
            command: command.into(),
            source,
        }
    }
}

impl From<TableFormatError> for LookupError {
    fn from(source: TableFormatError) -> Self {
        Self::Parse { source }
    }
}

/// Column layout that cannot be applied to a tokenized table row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableFormatError {
    #[error("Column layout expects zero tokens per row")]
    EmptyRow,

    #[error("{column} column index {index} is outside a {token_count}-token row")]
    ColumnOutOfRange {
        column: &'static str,
        index: usize,
        token_count: usize,
    },

    #[error("IP and MAC columns both point at index {0}")]
    OverlappingColumns(usize),
}
