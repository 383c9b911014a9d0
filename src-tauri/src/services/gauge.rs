use crate::models::gauge_types::{GaugeFrame, GaugePlan, ScoreBand};

pub const DEFAULT_SIZE: u32 = 128;
pub const DEFAULT_STROKE_WIDTH: u32 = 8;

const INITIAL_DELAY_MS: u64 = 300;
const TICK_MS: u64 = 20;

pub fn score_band(score: u32) -> ScoreBand {
    if score >= 75 {
        ScoreBand::High
    } else if score >= 50 {
        ScoreBand::Medium
    } else {
        ScoreBand::Low
    }
}

/// Builds the full rendering plan for one score: ring geometry, color band,
/// label and the 0..=score frame ramp the frontend plays back one tick at a
/// time.
pub fn animation_plan(score: f64, size: u32, stroke_width: u32) -> GaugePlan {
    let target = clamp_score(score);
    let radius = (size.saturating_sub(stroke_width)) as f64 / 2.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;

    let frames = (0..=target)
        .map(|value| GaugeFrame {
            value,
            dash_offset: circumference * (1.0 - value as f64 / 100.0),
        })
        .collect();

    GaugePlan {
        size,
        stroke_width,
        radius,
        circumference,
        band: score_band(target),
        label: format!("{}%", target),
        initial_delay_ms: INITIAL_DELAY_MS,
        tick_ms: TICK_MS,
        frames,
    }
}

fn clamp_score(score: f64) -> u32 {
    if !score.is_finite() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u32
}
