use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

#[derive(Debug, Serialize, Clone)]
pub struct GaugeFrame {
    pub value: u32,
    pub dash_offset: f64,
}

/// Precomputed radial-gauge rendering plan: ring geometry plus the frame
/// sequence the frontend plays back on a fixed tick.
#[derive(Debug, Serialize, Clone)]
pub struct GaugePlan {
    pub size: u32,
    pub stroke_width: u32,
    pub radius: f64,
    pub circumference: f64,
    pub band: ScoreBand,
    pub label: String,
    pub initial_delay_ms: u64,
    pub tick_ms: u64,
    pub frames: Vec<GaugeFrame>,
}
