//! Bone correspondence: mapping every source-clip bone name to a bone in the
//! target skeleton.
//!
//! The map is built fresh for each retarget call and discarded afterwards. It
//! stores target bone indices, never owning references; source names that
//! resolve neither directly nor via synonyms are simply absent, and their
//! tracks are dropped later rather than errored.

use hashbrown::HashMap;

use crate::binding::TrackBinding;
use crate::clip::AnimationClip;
use crate::skeleton::Skeleton;
use crate::synonyms::{SynonymEntry, BONE_SYNONYMS};

/// Source bone name -> index into the target skeleton's bone list.
pub type BoneMap = HashMap<String, usize>;

/// Build the correspondence map for one (target skeleton, source clip) pair.
///
/// Every distinct bone name referenced by the clip's parseable tracks is
/// resolved directly first ([`Skeleton::resolve_ix`]); on a miss, the synonym
/// table supplies candidate canonical labels whose own names and aliases are
/// tried against the target in declaration order.
pub fn build_bone_map(target: &Skeleton, source: &AnimationClip) -> BoneMap {
    let mut names: Vec<String> = Vec::new();
    for track in &source.tracks {
        if let Some(binding) = TrackBinding::parse(&track.name) {
            if !names.contains(&binding.bone) {
                names.push(binding.bone);
            }
        }
    }

    let mut map = BoneMap::with_capacity(names.len());
    for name in names {
        let resolved = target
            .resolve_ix(&name)
            .or_else(|| resolve_via_synonyms(target, &name));
        if let Some(ix) = resolved {
            map.insert(name, ix);
        }
    }
    map
}

/// A synonym entry is a candidate for a source name when the name equals the
/// canonical label, equals one of the aliases, or case-insensitively contains
/// one of the aliases as a substring (catches decorated names like
/// `"l_thigh_twist"`).
fn entry_matches(entry: &SynonymEntry, source: &str, source_lower: &str) -> bool {
    source == entry.canonical
        || entry.aliases.iter().any(|a| *a == source)
        || entry
            .aliases
            .iter()
            .any(|a| source_lower.contains(&a.to_lowercase()))
}

fn resolve_via_synonyms(target: &Skeleton, source: &str) -> Option<usize> {
    let source_lower = source.to_lowercase();
    for entry in BONE_SYNONYMS {
        if !entry_matches(entry, source, &source_lower) {
            continue;
        }
        // The target may itself use any of this entry's names.
        if let Some(ix) = target.resolve_ix(entry.canonical) {
            return Some(ix);
        }
        for alias in entry.aliases {
            if let Some(ix) = target.resolve_ix(alias) {
                return Some(ix);
            }
        }
    }
    None
}
