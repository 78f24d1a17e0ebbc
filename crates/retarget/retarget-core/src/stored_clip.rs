//! Host interchange: parse the JSON shapes the loading collaborator emits
//! (three.js `AnimationClip.toJSON()` clips and a serialized bone list) into
//! the canonical structures in skeleton.rs / clip.rs.
//!
//! Notes:
//! - Clip durations and keyframe times are seconds and stay seconds.
//! - Unknown fields (uuid, blendMode, per-track `type` tags, ...) are
//!   ignored; the track address string carries everything retargeting needs.
//! - Shape validation runs here, at the boundary: the in-memory engine
//!   assumes validated input and never re-checks.

use serde::Deserialize;

use crate::clip::{AnimationClip, ClipError, Track};
use crate::skeleton::{Bone, Skeleton};

/// Parse a stored clip (three.js `AnimationClip.toJSON()` shape) into a
/// validated [`AnimationClip`].
pub fn parse_stored_clip_json(s: &str) -> Result<AnimationClip, ClipError> {
    let sc: StoredClip = serde_json::from_str(s).map_err(|e| ClipError::Parse(e.to_string()))?;

    let tracks = sc
        .tracks
        .into_iter()
        .map(|st| Track {
            name: st.name,
            times: st.times.into_iter().map(|t| t as f32).collect(),
            values: st.values.into_iter().map(|v| v as f32).collect(),
        })
        .collect();

    let clip = AnimationClip {
        name: sc.name,
        duration: sc.duration as f32,
        tracks,
    };
    clip.validate_basic()?;
    Ok(clip)
}

/// Parse a stored skeleton (serialized bone list, hierarchy order) into a
/// [`Skeleton`]. A negative or missing parent index marks a root bone.
pub fn parse_stored_skeleton_json(s: &str) -> Result<Skeleton, ClipError> {
    let ss: StoredSkeleton =
        serde_json::from_str(s).map_err(|e| ClipError::Parse(e.to_string()))?;

    let mut bones = Vec::with_capacity(ss.bones.len());
    for sb in ss.bones {
        let parent = match sb.parent {
            Some(p) if p >= 0 => Some(p as usize),
            _ => None,
        };
        bones.push(Bone {
            name: sb.name,
            rest_position: sb.position.into(),
            rest_rotation: sb
                .quaternion
                .map(|q| [q.x as f32, q.y as f32, q.z as f32, q.w as f32])
                .unwrap_or([0.0, 0.0, 0.0, 1.0]),
            rest_scale: sb.scale.map(Into::into).unwrap_or([1.0, 1.0, 1.0]),
            parent,
        });
    }
    Ok(Skeleton::new(bones))
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredClip {
    pub name: String,
    pub duration: f64, // seconds
    pub tracks: Vec<ScTrack>,
}

#[derive(Debug, Deserialize)]
struct ScTrack {
    pub name: String,
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct StoredSkeleton {
    pub bones: Vec<SsBone>,
}

#[derive(Debug, Deserialize)]
struct SsBone {
    pub name: String,
    #[serde(default)]
    pub parent: Option<i64>,
    pub position: Xyz,
    #[serde(default)]
    pub quaternion: Option<Xyzw>,
    #[serde(default)]
    pub scale: Option<Xyz>,
}

#[derive(Debug, Copy, Clone, Deserialize)]
struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Xyz> for [f32; 3] {
    fn from(v: Xyz) -> Self {
        [v.x as f32, v.y as f32, v.z as f32]
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
struct Xyzw {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}
