//! Canonical clip data model: keyframe tracks addressed to bone properties.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::binding::TrackBinding;

/// The animated property a track drives on its bone. Never crosses a wire
/// boundary on its own: host-facing shapes carry the flat `"Bone.property"`
/// address string, parsed into a [`TrackBinding`] internally.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TrackProperty {
    Position,
    Quaternion,
    Scale,
}

impl TrackProperty {
    /// Scalars per keyframe: 3 for position/scale, 4 for quaternion.
    #[inline]
    pub fn component_count(self) -> usize {
        match self {
            TrackProperty::Quaternion => 4,
            TrackProperty::Position | TrackProperty::Scale => 3,
        }
    }

    /// The `.`-separated suffix used in host track names.
    pub fn suffix(self) -> &'static str {
        match self {
            TrackProperty::Position => "position",
            TrackProperty::Quaternion => "quaternion",
            TrackProperty::Scale => "scale",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "position" => Some(TrackProperty::Position),
            "quaternion" => Some(TrackProperty::Quaternion),
            "scale" => Some(TrackProperty::Scale),
            _ => None,
        }
    }
}

/// One animated channel: keyframe times (seconds, non-decreasing) and a flat
/// value array of `times.len() * component_count` scalars.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Host-addressed name, `"Bone.property"` or `".bones[Bone].property"`.
    pub name: String,
    pub times: Vec<f32>,
    pub values: Vec<f32>,
}

/// A named, fixed-duration container of tracks.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// Duration in seconds. Carried through retargeting unchanged.
    pub duration: f32,
    pub tracks: Vec<Track>,
}

/// Errors produced while ingesting or validating clip data.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("stored json parse error: {0}")]
    Parse(String),
    #[error("track '{0}': keyframe times must be finite")]
    NonFiniteTime(String),
    #[error("track '{0}': keyframe times must be non-decreasing")]
    NonMonotonicTimes(String),
    #[error("track '{name}': {got} values cannot cover {times} keys of {components} components each")]
    ValueLengthMismatch {
        name: String,
        times: usize,
        components: usize,
        got: usize,
    },
}

impl AnimationClip {
    /// Validate basic shape invariants: finite, non-decreasing times and a
    /// value array sized `times.len() * component_count` for every track with
    /// a recognized property suffix. Tracks without one have no defined
    /// component count and are only checked for time monotonicity; the
    /// retargeting pass ignores them entirely.
    pub fn validate_basic(&self) -> Result<(), ClipError> {
        for track in &self.tracks {
            let mut last = f32::NEG_INFINITY;
            for &t in &track.times {
                if !t.is_finite() {
                    return Err(ClipError::NonFiniteTime(track.name.clone()));
                }
                if t < last {
                    return Err(ClipError::NonMonotonicTimes(track.name.clone()));
                }
                last = t;
            }
            if let Some(b) = TrackBinding::parse(&track.name) {
                let components = b.property.component_count();
                if track.values.len() != track.times.len() * components {
                    return Err(ClipError::ValueLengthMismatch {
                        name: track.name.clone(),
                        times: track.times.len(),
                        components,
                        got: track.values.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_counts() {
        assert_eq!(TrackProperty::Position.component_count(), 3);
        assert_eq!(TrackProperty::Quaternion.component_count(), 4);
        assert_eq!(TrackProperty::Scale.component_count(), 3);
    }

    #[test]
    fn validate_catches_shape_mismatch() {
        let clip = AnimationClip {
            name: "walk".into(),
            duration: 1.0,
            tracks: vec![Track {
                name: "Hips.position".into(),
                times: vec![0.0, 0.5],
                values: vec![0.0, 1.0, 0.0], // one key short
            }],
        };
        assert!(matches!(
            clip.validate_basic(),
            Err(ClipError::ValueLengthMismatch { .. })
        ));
    }

    #[test]
    fn validate_catches_time_regression() {
        let clip = AnimationClip {
            name: "walk".into(),
            duration: 1.0,
            tracks: vec![Track {
                name: "Hips.quaternion".into(),
                times: vec![0.5, 0.0],
                values: vec![0.0; 8],
            }],
        };
        assert!(matches!(
            clip.validate_basic(),
            Err(ClipError::NonMonotonicTimes(_))
        ));
    }
}
