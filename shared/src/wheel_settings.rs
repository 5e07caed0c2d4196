use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{default_segments, COLOR_PALETTE, MIN_SEGMENTS};

/// One wedge of the wheel. Position in the owning list decides where it sits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Segment {
    pub id: String,
    pub text: String,
    pub color: String,
}

impl Segment {
    pub fn new(id: impl Into<String>, text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            color: color.into(),
        }
    }
}

/// Everything that survives a page reload, stored as one JSON blob.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
    pub segments: Vec<Segment>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            segments: default_segments(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    EmptyText,
    BelowMinimum { minimum: usize },
    NotFound(String),
    SpinInProgress,
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "Segment text cannot be empty"),
            Self::BelowMinimum { minimum } => {
                write!(f, "You need at least {} segments to spin!", minimum)
            }
            Self::NotFound(id) => write!(f, "No segment with id {}", id),
            Self::SpinInProgress => write!(f, "The wheel cannot be edited while it is spinning"),
        }
    }
}

impl std::error::Error for SegmentError {}

impl Settings {
    /// Decodes a persisted blob. Any failure is reported to the caller, who is
    /// expected to fall back to [`Settings::default`].
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses `raw` if present, otherwise returns the default wheel.
    pub fn load_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::error!("Failed to parse stored settings: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Appends a segment with a palette color and a fresh id.
    pub fn add_segment(&mut self, text: &str) -> Result<&Segment, SegmentError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SegmentError::EmptyText);
        }

        let color = COLOR_PALETTE[self.segments.len() % COLOR_PALETTE.len()];
        self.segments
            .push(Segment::new(Uuid::new_v4().to_string(), text, color));
        Ok(&self.segments[self.segments.len() - 1])
    }

    pub fn remove_segment(&mut self, id: &str) -> Result<Segment, SegmentError> {
        if self.segments.len() <= MIN_SEGMENTS {
            log::debug!("Refusing to drop below {} segments", MIN_SEGMENTS);
            return Err(SegmentError::BelowMinimum {
                minimum: MIN_SEGMENTS,
            });
        }

        let index = self
            .segments
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| SegmentError::NotFound(id.to_string()))?;
        Ok(self.segments.remove(index))
    }

    /// Swaps the segment at `index` with its neighbour. Returns whether
    /// anything moved; either end of the list is a no-op.
    pub fn move_segment(&mut self, index: usize, direction: MoveDirection) -> bool {
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => index.checked_add(1),
        };

        match target {
            Some(target) if index < self.segments.len() && target < self.segments.len() => {
                self.segments.swap(index, target);
                true
            }
            _ => false,
        }
    }

    /// Replaces the text in place, keeping id and color. The text is stored
    /// as typed so an input bound to it edits naturally.
    pub fn edit_segment(&mut self, id: &str, text: &str) -> Result<(), SegmentError> {
        let segment = self
            .segments
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SegmentError::NotFound(id.to_string()))?;
        segment.text = text.to_string();
        Ok(())
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    /// Drops every customization: six default segments, sound on.
    pub fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    /// Applies `edit` unless a spin is running.
    pub fn guarded<T>(
        &mut self,
        is_spinning: bool,
        edit: impl FnOnce(&mut Self) -> Result<T, SegmentError>,
    ) -> Result<T, SegmentError> {
        if is_spinning {
            return Err(SegmentError::SpinInProgress);
        }
        edit(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(settings: &Settings) -> Vec<&str> {
        settings.segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn two_segments() -> Settings {
        Settings {
            sound_enabled: true,
            segments: default_segments().into_iter().take(2).collect(),
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.sound_enabled);
        assert_eq!(
            texts(&settings),
            vec!["Jackpot", "Mystery Box", "Try Again", "Gift Card", "Big Hug", "10% Off"]
        );
        assert_eq!(settings.segments[0].id, "1");
        assert_eq!(settings.segments[5].color, "#EC4899");
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = Settings::default().to_json().unwrap();
        assert!(json.starts_with(
            r##"{"soundEnabled":true,"segments":[{"id":"1","text":"Jackpot","color":"#EF4444"}"##
        ));
    }

    #[test]
    fn test_reload_reproduces_identical_list() {
        let original = Settings::default();
        let json = original.to_json().unwrap();
        let reloaded = Settings::load_or_default(Some(&json));
        assert_eq!(reloaded, original);
    }

    #[test]
    fn test_load_falls_back_on_missing_or_garbage() {
        assert_eq!(Settings::load_or_default(None), Settings::default());
        assert_eq!(Settings::load_or_default(Some("{not json")), Settings::default());
        assert_eq!(
            Settings::load_or_default(Some(r#"{"segments":"nope"}"#)),
            Settings::default()
        );
    }

    #[test]
    fn test_load_keeps_short_lists() {
        let raw = r##"{"soundEnabled":false,"segments":[{"id":"a","text":"Solo","color":"#000"}]}"##;
        let settings = Settings::load_or_default(Some(raw));
        assert!(!settings.sound_enabled);
        assert_eq!(texts(&settings), vec!["Solo"]);
    }

    #[test]
    fn test_add_trims_and_cycles_palette() {
        let mut settings = Settings::default();
        let added = settings.add_segment("  Free Coffee ").unwrap().clone();
        assert_eq!(added.text, "Free Coffee");
        assert_eq!(added.color, COLOR_PALETTE[6]);
        assert!(!added.id.is_empty());

        for i in 0..3 {
            settings.add_segment(&format!("Extra {}", i)).unwrap();
        }
        // Eleventh segment wraps back to the first palette entry.
        let wrapped = settings.add_segment("Wrapped").unwrap();
        assert_eq!(wrapped.color, COLOR_PALETTE[0]);
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut settings = Settings::default();
        let a = settings.add_segment("A").unwrap().id.clone();
        let b = settings.add_segment("A").unwrap().id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut settings = Settings::default();
        assert_eq!(settings.add_segment("   "), Err(SegmentError::EmptyText));
        assert_eq!(settings.add_segment(""), Err(SegmentError::EmptyText));
        assert_eq!(settings.segments.len(), 6);
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut settings = Settings::default();
        settings.remove_segment("6").unwrap();
        settings.remove_segment("5").unwrap();
        settings.remove_segment("4").unwrap();
        let before = settings.clone();
        assert_eq!(before.segments.len(), 3);

        let id = settings.add_segment("Temporary").unwrap().id.clone();
        settings.remove_segment(&id).unwrap();
        assert_eq!(settings, before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut settings = Settings::default();
        let removed = settings.remove_segment("3").unwrap();
        assert_eq!(removed.text, "Try Again");
        assert_eq!(
            texts(&settings),
            vec!["Jackpot", "Mystery Box", "Gift Card", "Big Hug", "10% Off"]
        );
    }

    #[test]
    fn test_remove_rejected_at_minimum() {
        let mut settings = two_segments();
        let before = settings.clone();
        assert_eq!(
            settings.remove_segment("1"),
            Err(SegmentError::BelowMinimum { minimum: 2 })
        );
        assert_eq!(settings, before);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.remove_segment("missing"),
            Err(SegmentError::NotFound("missing".to_string()))
        );
        assert_eq!(settings.segments.len(), 6);
    }

    #[test]
    fn test_move_swaps_neighbours() {
        let mut settings = Settings::default();
        assert!(settings.move_segment(1, MoveDirection::Up));
        assert_eq!(texts(&settings)[..2], ["Mystery Box", "Jackpot"]);
        assert!(settings.move_segment(1, MoveDirection::Down));
        assert_eq!(texts(&settings)[..3], ["Mystery Box", "Try Again", "Jackpot"]);
    }

    #[test]
    fn test_move_is_noop_at_boundaries() {
        let mut settings = Settings::default();
        let before = settings.clone();
        assert!(!settings.move_segment(0, MoveDirection::Up));
        assert!(!settings.move_segment(5, MoveDirection::Down));
        assert!(!settings.move_segment(42, MoveDirection::Up));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_edit_keeps_id_and_color() {
        let mut settings = Settings::default();
        settings.edit_segment("2", "Golden Box").unwrap();
        let edited = &settings.segments[1];
        assert_eq!(edited.id, "2");
        assert_eq!(edited.text, "Golden Box");
        assert_eq!(edited.color, "#F59E0B");
        assert!(settings.edit_segment("nope", "x").is_err());
    }

    #[test]
    fn test_toggle_sound() {
        let mut settings = Settings::default();
        settings.toggle_sound();
        assert!(!settings.sound_enabled);
        settings.toggle_sound();
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_reset_to_default_discards_customizations() {
        let mut settings = Settings::default();
        settings.add_segment("Free Coffee").unwrap();
        settings.remove_segment("1").unwrap();
        settings.toggle_sound();

        settings.reset_to_default();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_guarded_blocks_edits_while_spinning() {
        let mut settings = Settings::default();
        let result = settings.guarded(true, |s| s.remove_segment("1"));
        assert_eq!(result, Err(SegmentError::SpinInProgress));
        assert_eq!(settings.segments.len(), 6);

        let removed = settings.guarded(false, |s| s.remove_segment("1")).unwrap();
        assert_eq!(removed.id, "1");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SegmentError::BelowMinimum { minimum: MIN_SEGMENTS }.to_string(),
            "You need at least 2 segments to spin!"
        );
    }
}
