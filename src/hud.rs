//! HUD labels shown beside the button

use crate::sim::Snapshot;

pub const WINDOW_TITLE: &str = "FISH TANK'D";
pub const BUTTON_LABEL: &str = "FISH";

/// Text for the two labels flanking the button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub health: String,
    pub points: String,
}

impl HudText {
    pub fn from_snapshot(snapshot: &Snapshot<'_>) -> Self {
        Self {
            health: format!("Health: {}", snapshot.gauge),
            points: format!("Points Earned: {}", snapshot.points),
        }
    }

    /// Single-line form: health, button, points
    pub fn line(&self) -> String {
        format!("{}  [{}]  {}", self.health, BUTTON_LABEL, self.points)
    }
}
