//! Preset picker thumbnails.
//!
//! Thumbnails read the same table as live playback. They differ only in timing: every preset
//! plays at its fixed [`AnimationPreset::preview_duration_secs`], with no delay, and one-shot
//! presets repeat with a restart so the thumbnail never freezes on its final pose.

use crate::animation::{
    preset::{AnimationPreset, PresetCategory, evaluate_preset},
    timing::loop_restart,
    transform::Transform,
};

/// Thumbnail transform for `preset` at `elapsed_secs` since the picker opened.
///
/// Path presets have no path to show in a thumbnail and stay at identity.
pub fn evaluate_preview(preset: AnimationPreset, elapsed_secs: f64) -> Transform {
    let duration = preset.preview_duration_secs();
    match preset.category() {
        PresetCategory::Entrance | PresetCategory::Exit => {
            let local = loop_restart(elapsed_secs, duration) * duration;
            evaluate_preset(preset, local, 0.0, duration)
        }
        PresetCategory::Loop => evaluate_preset(preset, elapsed_secs, 0.0, duration),
        PresetCategory::Path => Transform::IDENTITY,
    }
}

/// Thumbnails for the whole picker at one instant, in picker order.
pub fn preview_all(elapsed_secs: f64) -> Vec<(AnimationPreset, Transform)> {
    AnimationPreset::ALL
        .iter()
        .map(|&p| (p, evaluate_preview(p, elapsed_secs)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/eval/preview.rs"]
mod tests;
