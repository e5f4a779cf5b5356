use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a tab for the lifetime of a session.
///
/// Display position is not identity: indices shift when tabs close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TabId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A browser tab: one page view plus its display metadata.
#[derive(Debug)]
pub struct Tab<V> {
    pub id: TabId,
    pub view: V,
    pub label: String,
    pub icon: String,
}

impl<V> Tab<V> {
    pub fn summary(&self) -> TabSummary {
        TabSummary {
            id: self.id,
            label: self.label.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// What the shell's tab strip renders for one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSummary {
    pub id: TabId,
    pub label: String,
    pub icon: String,
}

/// Short label for a tab derived from its address: the host without `www.`.
///
/// Addresses without a host (`about:blank`, garbage input) label as themselves.
pub fn label_for_address(address: &str) -> String {
    match url::Url::parse(address) {
        Ok(url) => match url.host_str() {
            Some(host) => host.trim_start_matches("www.").to_string(),
            None => address.to_string(),
        },
        Err(_) => address.to_string(),
    }
}
