//! Skeletal animation retargeting (engine-agnostic)
//!
//! Transfers a keyframe clip authored against one bone hierarchy onto a
//! structurally different skeleton so the target plays a visually equivalent
//! motion. Three stages run per call: bone-name resolution against the target
//! skeleton (tolerant of casing and namespace prefixes), a correspondence map
//! from source bone names to target bones (backed by a static table of
//! semantic bone-name synonyms across rig conventions), and a track rewrite
//! pass that filters channels and rescales root translation for differing
//! character proportions.
//!
//! The host application owns asset loading and playback; this crate only
//! reads a `Skeleton` and an `AnimationClip` and produces a fresh clip.
//! Every call is stateless and idempotent given identical inputs.

pub mod binding;
pub mod bone_map;
pub mod clip;
pub mod retarget;
pub mod skeleton;
pub mod stored_clip;
pub mod synonyms;

// Re-exports for consumers (adapters)
pub use binding::TrackBinding;
pub use bone_map::{build_bone_map, BoneMap};
pub use clip::{AnimationClip, ClipError, Track, TrackProperty};
pub use retarget::{is_motion_root, retarget_clip, RetargetOptions, MIN_HIP_HEIGHT};
pub use skeleton::{Bone, Skeleton};
pub use stored_clip::{parse_stored_clip_json, parse_stored_skeleton_json};
pub use synonyms::{SynonymEntry, BONE_SYNONYMS};
