use neighbor_lookup_application::ports::NeighborTableFetcher;
use neighbor_lookup_domain::{LookupError, NeighborTableConfig};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Neighbor table dump taken from an external command (`arp -a` by default on Windows)
pub struct ArpCommandFetcher {
    table: NeighborTableConfig,
}

impl ArpCommandFetcher {
    pub fn new(table: NeighborTableConfig) -> Self {
        Self { table }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.table.command);
        command
            .args(&self.table.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        command
    }
}

impl Default for ArpCommandFetcher {
    fn default() -> Self {
        Self::new(NeighborTableConfig::default())
    }
}

impl NeighborTableFetcher for ArpCommandFetcher {
    fn fetch_neighbor_table(&self) -> Result<String, LookupError> {
        let command_line = self.table.command_line();
        debug!(command = %command_line, "Dumping neighbor table");

        // `output` waits for the child and reaps it on every path, including read errors.
        let output = self
            .command()
            .output()
            .map_err(|e| LookupError::external_tool(&command_line, e))?;

        if !output.status.success() {
            warn!(
                command = %command_line,
                status = %output.status,
                "Neighbor table command exited unsuccessfully"
            );
        }

        let dump = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = dump.len(), "Neighbor table dump captured");
        Ok(dump)
    }
}
