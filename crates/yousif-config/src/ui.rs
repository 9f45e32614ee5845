use serde::{Deserialize, Serialize};

fn default_focus_delay_ms() -> u64 {
    100
}

fn default_color() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Deferral before the input is refocused after a reset
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,
    /// Styled output, still disabled when stdout is not a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

impl UiConfig {
    pub(crate) fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(delay) = crate::parsed(lookup, "FOCUS_DELAY_MS") {
            self.focus_delay_ms = delay;
        }
        // NO_COLOR only ever turns styling off, its value is irrelevant
        if lookup("NO_COLOR").is_some() {
            self.color = false;
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            focus_delay_ms: default_focus_delay_ms(),
            color: default_color(),
        }
    }
}
