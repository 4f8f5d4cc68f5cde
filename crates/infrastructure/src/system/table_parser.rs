use neighbor_lookup_application::ports::{HostnameResolver, NeighborTableParser};
use neighbor_lookup_domain::{AddressRecord, ColumnLayout, LookupError};
use std::sync::Arc;
use tracing::{debug, trace};

/// Parser for column-aligned neighbor tables such as the output of `arp -a`.
///
/// Every non-empty line is split on runs of spaces and tabs. A line is an
/// entry only if it has exactly `layout.token_count` tokens; interface
/// banners, column headers and anything else are skipped without error.
pub struct WhitespaceTableParser {
    layout: ColumnLayout,
    resolver: Arc<dyn HostnameResolver>,
}

impl WhitespaceTableParser {
    pub fn new(layout: ColumnLayout, resolver: Arc<dyn HostnameResolver>) -> Self {
        Self { layout, resolver }
    }

    fn tokenize(line: &str) -> Vec<&str> {
        line.split(|c: char| c == ' ' || c == '\t')
            .filter(|token| !token.is_empty())
            .collect()
    }
}

impl NeighborTableParser for WhitespaceTableParser {
    fn parse_records(&self, raw: &str) -> Result<Vec<AddressRecord>, LookupError> {
        self.layout.validate()?;

        let mut records = Vec::new();

        for line in raw.split(|c: char| c == '\r' || c == '\n') {
            if line.is_empty() {
                continue;
            }

            let tokens = Self::tokenize(line);
            match self.layout.select(&tokens) {
                Some((ip, mac)) => {
                    records.push(AddressRecord::new(mac, ip, self.resolver.clone()));
                }
                None => {
                    trace!(tokens = tokens.len(), line, "Skipping non-entry line");
                }
            }
        }

        debug!(entries = records.len(), "Neighbor table parsed");
        Ok(records)
    }
}
