use serde::Serialize;

use super::tab::{TabId, TabSummary};
use super::theme::Theme;

/// Everything the shell renders, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub tabs: Vec<TabSummary>,
    pub active_id: TabId,
    pub current_address: String,
    pub theme: Theme,
    pub theme_label: &'static str,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}
