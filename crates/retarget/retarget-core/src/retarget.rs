//! Track rewriting: filter each source track through the bone map and emit
//! the retargeted clip.

use serde::{Deserialize, Serialize};

use crate::binding::TrackBinding;
use crate::bone_map::build_bone_map;
use crate::clip::{AnimationClip, Track, TrackProperty};
use crate::skeleton::{Bone, Skeleton};

/// Magnitude floor for the hip-height ratio. When either height is at or
/// below this, the ratio would be dominated by noise (or blow up near zero),
/// so the track's values pass through unscaled.
pub const MIN_HIP_HEIGHT: f32 = 0.1;

fn default_hip_scale() -> bool {
    true
}

/// Options for [`retarget_clip`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetargetOptions {
    /// Output clip name; defaults to the source clip's name.
    #[serde(default)]
    pub name: Option<String>,
    /// Rescale root translation by the hip-height ratio (default true).
    #[serde(default = "default_hip_scale", rename = "hipScale")]
    pub hip_scale: bool,
}

impl Default for RetargetOptions {
    fn default() -> Self {
        Self {
            name: None,
            hip_scale: true,
        }
    }
}

/// Whether the bone at `bone_ix` carries the character's overall world
/// movement: its name case-insensitively contains `"hip"` or `"root"`, or it
/// is the skeleton's first bone in hierarchy order.
///
/// Deliberately narrow heuristic matching Mixamo-style authoring, where only
/// the hips translate and every other bone moves by rotation. Widening it
/// would let non-root translation through and desynchronize skinning under
/// forward-kinematics-only retargeting.
pub fn is_motion_root(skeleton: &Skeleton, bone_ix: usize) -> bool {
    let Some(bone) = skeleton.bones.get(bone_ix) else {
        return false;
    };
    if bone_ix == 0 {
        return true;
    }
    let name = bone.name.to_lowercase();
    name.contains("hip") || name.contains("root")
}

/// Retarget `source` onto `target`, producing a fresh clip.
///
/// Per source track, in original order: parse the address, look the bone up
/// in the correspondence map (unmapped tracks are dropped silently), then
/// - quaternion: copy times/values re-addressed to the target bone (no
///   rest-pose delta correction),
/// - scale: drop unconditionally,
/// - position: keep only on the motion root, rescaled by the hip-height
///   ratio when `hip_scale` is enabled.
///
/// The output carries the source duration unchanged, even when tracks were
/// dropped; a clip with zero resolved tracks is a valid, empty output.
pub fn retarget_clip(
    target: &Skeleton,
    source: &AnimationClip,
    options: &RetargetOptions,
) -> AnimationClip {
    let bone_map = build_bone_map(target, source);
    let mut tracks: Vec<Track> = Vec::with_capacity(source.tracks.len());

    for track in &source.tracks {
        let Some(binding) = TrackBinding::parse(&track.name) else {
            continue;
        };
        let Some(&bone_ix) = bone_map.get(&binding.bone) else {
            continue;
        };
        let bone = &target.bones[bone_ix];

        match binding.property {
            TrackProperty::Quaternion => {
                tracks.push(Track {
                    name: TrackBinding::key(&bone.name, TrackProperty::Quaternion),
                    times: track.times.clone(),
                    values: track.values.clone(),
                });
            }
            // Scale animation is not reproduced on target bones.
            TrackProperty::Scale => {}
            TrackProperty::Position => {
                if !is_motion_root(target, bone_ix) {
                    continue;
                }
                let ratio = if options.hip_scale {
                    hip_scale_ratio(track, bone)
                } else {
                    1.0
                };
                let values = if ratio != 1.0 {
                    track.values.iter().map(|v| v * ratio).collect()
                } else {
                    track.values.clone()
                };
                tracks.push(Track {
                    name: TrackBinding::key(&bone.name, TrackProperty::Position),
                    times: track.times.clone(),
                    values,
                });
            }
        }
    }

    AnimationClip {
        name: options
            .name
            .clone()
            .unwrap_or_else(|| source.name.clone()),
        duration: source.duration,
        tracks,
    }
}

/// Ratio of the target root's rest-pose height to the source track's
/// first-keyframe height, Y channel only. Computed per track, independently;
/// a failed magnitude guard means no scaling for that track, never a ratio
/// reused from an earlier one.
fn hip_scale_ratio(track: &Track, target_root: &Bone) -> f32 {
    // values are x,y,z triples; index 1 is the first keyframe's Y.
    let Some(&source_y) = track.values.get(1) else {
        return 1.0;
    };
    let target_y = target_root.rest_position[1];
    if source_y.abs() > MIN_HIP_HEIGHT && target_y.abs() > MIN_HIP_HEIGHT {
        (target_y / source_y).abs()
    } else {
        1.0
    }
}
