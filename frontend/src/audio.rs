use shared::tones::{Cue, ToneSpec, Waveform};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Owns the page's audio context. Browsers only allow one to start after a
/// user gesture, so it stays empty until [`AudioCues::arm`] is called from a
/// click handler and then lives for the rest of the session.
#[derive(Default)]
pub struct AudioCues {
    context: Option<AudioContext>,
}

impl AudioCues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) {
        if self.context.is_some() {
            return;
        }

        match AudioContext::new() {
            Ok(ctx) => {
                if let Err(e) = ctx.resume() {
                    log::warn!("Audio context did not resume: {:?}", e);
                }
                log::debug!("Audio context armed");
                self.context = Some(ctx);
            }
            Err(e) => log::warn!("Audio unavailable: {:?}", e),
        }
    }

    /// Plays `cue` if sound is enabled and the context has been armed.
    pub fn play(&self, cue: Cue, enabled: bool) {
        if !enabled {
            return;
        }
        let Some(ctx) = &self.context else {
            return;
        };

        if let Err(e) = schedule_tone(ctx, &cue.spec()) {
            log::warn!("Failed to play {:?} cue: {:?}", cue, e);
        }
    }
}

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Triangle => OscillatorType::Triangle,
    }
}

fn schedule_tone(ctx: &AudioContext, tone: &ToneSpec) -> Result<(), JsValue> {
    let now = ctx.current_time();
    let end = now + tone.duration_secs;

    let osc: OscillatorNode = ctx.create_oscillator()?;
    let gain: GainNode = ctx.create_gain()?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    osc.set_type(oscillator_type(tone.waveform));
    let frequency = osc.frequency();
    frequency.set_value_at_time(tone.start_hz as f32, now)?;
    frequency.exponential_ramp_to_value_at_time(tone.end_hz as f32, end)?;

    let level = gain.gain();
    level.set_value_at_time(tone.start_gain as f32, now)?;
    level.exponential_ramp_to_value_at_time(tone.end_gain as f32, end)?;

    osc.start()?;
    osc.stop_with_when(end)?;
    Ok(())
}
