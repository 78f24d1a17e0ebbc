//! Track addressing: the bone name and property packed into a host track
//! name, parsed once into an explicit record.
//!
//! Hosts encode the target as `"BoneName.property"`, or in the bracketed
//! index form `".bones[BoneName].property"`. Both normalize to the same
//! `TrackBinding`; every later stage works on the parsed record instead of
//! re-splitting strings.

use crate::clip::TrackProperty;

/// Parsed track address: which bone, which property.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TrackBinding {
    pub bone: String,
    pub property: TrackProperty,
}

impl TrackBinding {
    /// Parse a host track name. Returns `None` when the name carries no
    /// recognized property suffix (such tracks are ignored, not errored).
    pub fn parse(raw: &str) -> Option<TrackBinding> {
        // ".bones[Name].property" -> "Name.property"
        let flat: String;
        let name = if let Some(rest) = raw.strip_prefix(".bones[") {
            let close = rest.find(']')?;
            flat = format!("{}{}", &rest[..close], &rest[close + 1..]);
            flat.as_str()
        } else {
            raw
        };

        let (bone, suffix) = name.rsplit_once('.')?;
        if bone.is_empty() {
            return None;
        }
        let property = TrackProperty::from_suffix(suffix)?;
        Some(TrackBinding {
            bone: bone.to_string(),
            property,
        })
    }

    /// Format a track name for a bone/property pair (`"Hips.position"`).
    pub fn key(bone: &str, property: TrackProperty) -> String {
        format!("{bone}.{}", property.suffix())
    }
}
