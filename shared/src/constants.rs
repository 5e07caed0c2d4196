use crate::wheel_settings::Segment;

pub const STORAGE_KEY: &str = "gemini_wheel_settings";

pub const SPIN_DURATION_MS: u32 = 5000;
pub const TICK_CHECK_INTERVAL_MS: u32 = 50;
pub const RESULT_REVEAL_DELAY_MS: u32 = 100;

// Inclusive bounds for the number of full turns added to every spin.
pub const MIN_EXTRA_TURNS: u32 = 7;
pub const MAX_EXTRA_TURNS: u32 = 11;

pub const MIN_SEGMENTS: usize = 2;

pub const LABEL_MAX_CHARS: usize = 15;
pub const LABEL_TRUNCATED_CHARS: usize = 12;
pub const SMALL_LABEL_THRESHOLD: usize = 12;

pub const COLOR_PALETTE: [&str; 10] = [
    "#EF4444", "#F59E0B", "#10B981", "#3B82F6", "#6366F1",
    "#8B5CF6", "#A855F7", "#D946EF", "#EC4899", "#F43F5E",
];

pub const RESET_CONFIRM_PROMPT: &str = "Are you sure you want to reset everything to default?";

/// The wheel shipped on first launch and restored by "Reset to Default".
pub fn default_segments() -> Vec<Segment> {
    [
        ("1", "Jackpot", "#EF4444"),
        ("2", "Mystery Box", "#F59E0B"),
        ("3", "Try Again", "#10B981"),
        ("4", "Gift Card", "#3B82F6"),
        ("5", "Big Hug", "#8B5CF6"),
        ("6", "10% Off", "#EC4899"),
    ]
    .into_iter()
    .map(|(id, text, color)| Segment::new(id, text, color))
    .collect()
}
