//! Modulation sources

/// Returns a triangle LFO in range -1.0..1.0
pub fn triangle(sample_no: usize, sample_count: usize, periods: f32) -> f32 {
    let phase = (sample_no as f32 / sample_count as f32 * periods).fract();

    if phase < 0.25 {
        phase * 4.0
    } else if phase < 0.5 {
        (0.5 - phase) * 4.0
    } else if phase < 0.75 {
        -(phase - 0.5) * 4.0
    } else {
        -(1.0 - phase) * 4.0
    }
}

/// Returns a ramp in range 0.0..1.0
pub fn ramp_up(sample_no: usize, sample_count: usize) -> f32 {
    sample_no as f32 / sample_count as f32
}
