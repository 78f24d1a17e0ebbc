//! Skeleton and bone rest-pose data supplied by the host loader.
//!
//! Bones link to their parent by index into the owning skeleton's bone list;
//! the list is in hierarchy order, so index 0 is the hierarchy's first bone.
//! The retargeting engine only reads these structures.

use serde::{Deserialize, Serialize};

fn identity_quat() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// A named joint with a local rest-pose transform and an optional parent link.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bone {
    pub name: String,
    /// Local rest-pose translation (x, y, z). The y component feeds the
    /// hip-height heuristic during root-translation rescaling.
    pub rest_position: [f32; 3],
    /// Local rest-pose rotation quaternion (x, y, z, w).
    #[serde(default = "identity_quat")]
    pub rest_rotation: [f32; 4],
    #[serde(default = "unit_scale")]
    pub rest_scale: [f32; 3],
    /// Index of the parent bone in [`Skeleton::bones`], `None` for roots.
    #[serde(default)]
    pub parent: Option<usize>,
}

/// An ordered bone hierarchy. Identity is by name; duplicate names resolve
/// first-match-wins.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Skeleton {
    pub bones: Vec<Bone>,
}

impl Skeleton {
    pub fn new(bones: Vec<Bone>) -> Self {
        Self { bones }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Find a bone by name, tolerating naming differences. Resolution order,
    /// first hit wins, each step scanning the full bone list:
    /// 1. exact, case-sensitive match
    /// 2. case-insensitive match
    /// 3. strip any namespace prefix from the query (everything up to and
    ///    including the last `:`, e.g. `"mixamorig:Hips"` -> `"Hips"`), then
    ///    retry exact and case-insensitive
    ///
    /// Nothing fuzzier than these three steps: looser matching would silently
    /// corrupt animations with false positives.
    pub fn resolve(&self, name_or_alias: &str) -> Option<&Bone> {
        self.resolve_ix(name_or_alias).map(|ix| &self.bones[ix])
    }

    /// Index form of [`Skeleton::resolve`], used when building bone maps.
    pub fn resolve_ix(&self, name_or_alias: &str) -> Option<usize> {
        if let Some(ix) = self.find_exact(name_or_alias) {
            return Some(ix);
        }
        if let Some(ix) = self.find_case_insensitive(name_or_alias) {
            return Some(ix);
        }
        if let Some((_, stripped)) = name_or_alias.rsplit_once(':') {
            if let Some(ix) = self.find_exact(stripped) {
                return Some(ix);
            }
            if let Some(ix) = self.find_case_insensitive(stripped) {
                return Some(ix);
            }
        }
        None
    }

    fn find_exact(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|b| b.name == name)
    }

    fn find_case_insensitive(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.bones
            .iter()
            .position(|b| b.name.to_lowercase() == needle)
    }
}
