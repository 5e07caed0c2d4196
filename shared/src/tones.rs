use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// The two synthesized sound cues.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Tick,
    Win,
}

/// A single oscillator sweep with an exponential gain envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub start_hz: f64,
    pub end_hz: f64,
    pub start_gain: f64,
    pub end_gain: f64,
    pub duration_secs: f64,
}

pub const TICK_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Sine,
    start_hz: 600.0,
    end_hz: 100.0,
    start_gain: 0.1,
    end_gain: 0.01,
    duration_secs: 0.1,
};

pub const WIN_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Triangle,
    start_hz: 440.0,
    end_hz: 880.0,
    start_gain: 0.2,
    end_gain: 0.01,
    duration_secs: 0.5,
};

impl Cue {
    pub fn spec(self) -> ToneSpec {
        match self {
            Cue::Tick => TICK_TONE,
            Cue::Win => WIN_TONE,
        }
    }
}

impl ToneSpec {
    pub fn frequency_at(&self, secs: f64) -> f64 {
        self.exponential_ramp(self.start_hz, self.end_hz, secs)
    }

    pub fn gain_at(&self, secs: f64) -> f64 {
        self.exponential_ramp(self.start_gain, self.end_gain, secs)
    }

    // Same curve an AudioParam follows for exponentialRampToValueAtTime.
    fn exponential_ramp(&self, from: f64, to: f64, secs: f64) -> f64 {
        let t = (secs / self.duration_secs).clamp(0.0, 1.0);
        from * (to / from).powf(t)
    }
}
