use crate::errors::TableFormatError;
use serde::{Deserialize, Serialize};

/// The command that dumps the neighbor table and how to read its rows.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NeighborTableConfig {
    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,

    #[serde(default)]
    pub layout: ColumnLayout,
}

impl NeighborTableConfig {
    /// `arp -a` on Windows:
    ///
    /// ```text
    /// Interface: 192.168.1.100 --- 0x3
    ///   Internet Address      Physical Address      Type
    ///   192.168.1.1           aa-bb-cc-dd-ee-ff     dynamic
    /// ```
    pub fn windows() -> Self {
        Self {
            command: "arp".to_string(),
            args: vec!["-a".to_string()],
            layout: ColumnLayout::windows(),
        }
    }

    /// `arp -n` from net-tools:
    ///
    /// ```text
    /// Address                  HWtype  HWaddress           Flags Mask            Iface
    /// 192.168.1.1              ether   aa:bb:cc:dd:ee:ff   C                     eth0
    /// ```
    pub fn linux() -> Self {
        Self {
            command: "arp".to_string(),
            args: vec!["-n".to_string()],
            layout: ColumnLayout::linux(),
        }
    }

    /// Command line as a single string, for logs and error messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for NeighborTableConfig {
    fn default() -> Self {
        if cfg!(target_os = "linux") {
            Self::linux()
        } else {
            Self::windows()
        }
    }
}

/// Which whitespace-separated tokens of a row hold the IP and the MAC.
///
/// Only rows with exactly `token_count` tokens are table entries; headers and
/// anything else are skipped.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct ColumnLayout {
    pub token_count: usize,
    pub ip_column: usize,
    pub mac_column: usize,
}

impl ColumnLayout {
    pub const fn windows() -> Self {
        Self {
            token_count: 3,
            ip_column: 0,
            mac_column: 1,
        }
    }

    pub const fn linux() -> Self {
        Self {
            token_count: 5,
            ip_column: 0,
            mac_column: 2,
        }
    }

    pub fn validate(&self) -> Result<(), TableFormatError> {
        if self.token_count == 0 {
            return Err(TableFormatError::EmptyRow);
        }
        if self.ip_column >= self.token_count {
            return Err(TableFormatError::ColumnOutOfRange {
                column: "IP",
                index: self.ip_column,
                token_count: self.token_count,
            });
        }
        if self.mac_column >= self.token_count {
            return Err(TableFormatError::ColumnOutOfRange {
                column: "MAC",
                index: self.mac_column,
                token_count: self.token_count,
            });
        }
        if self.ip_column == self.mac_column {
            return Err(TableFormatError::OverlappingColumns(self.ip_column));
        }
        Ok(())
    }

    /// Returns `(ip, mac)` when `tokens` is a table entry under this layout.
    pub fn select<'a>(&self, tokens: &[&'a str]) -> Option<(&'a str, &'a str)> {
        if tokens.len() != self.token_count {
            return None;
        }
        Some((*tokens.get(self.ip_column)?, *tokens.get(self.mac_column)?))
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        if cfg!(target_os = "linux") {
            Self::linux()
        } else {
            Self::windows()
        }
    }
}

fn default_command() -> String {
    NeighborTableConfig::default().command
}

fn default_args() -> Vec<String> {
    NeighborTableConfig::default().args
}
