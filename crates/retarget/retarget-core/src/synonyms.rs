//! Semantic bone-name synonyms across rig naming conventions.
//!
//! Process-wide, read-only data: each entry pairs a canonical humanoid bone
//! label (Mixamo-style) with the aliases other conventions use for the same
//! semantic bone. Declaration order is load-bearing: correspondence building
//! walks entries and alias lists front to back, so ties resolve identically
//! across runs. Shared by reference, never copied per call, never mutated.

/// One canonical bone label and its ordered aliases.
#[derive(Clone, Copy, Debug)]
pub struct SynonymEntry {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

pub static BONE_SYNONYMS: &[SynonymEntry] = &[
    SynonymEntry {
        canonical: "Hips",
        aliases: &["Hips", "Pelvis", "Root", "Hip"],
    },
    SynonymEntry {
        canonical: "Spine",
        aliases: &["Spine", "Spine1", "Spine_01"],
    },
    SynonymEntry {
        canonical: "Spine1",
        aliases: &["Spine1", "Spine2", "Spine_02", "Chest"],
    },
    SynonymEntry {
        canonical: "Spine2",
        aliases: &["Spine2", "Spine3", "Spine_03", "UpperChest"],
    },
    SynonymEntry {
        canonical: "Neck",
        aliases: &["Neck", "Neck1"],
    },
    SynonymEntry {
        canonical: "Head",
        aliases: &["Head"],
    },
    SynonymEntry {
        canonical: "LeftUpLeg",
        aliases: &["LeftUpLeg", "L_Hip", "Left_Thigh", "L_Thigh", "Thigh_L"],
    },
    SynonymEntry {
        canonical: "LeftLeg",
        aliases: &["LeftLeg", "L_Knee", "Left_Knee", "L_Calf", "Calf_L"],
    },
    SynonymEntry {
        canonical: "LeftFoot",
        aliases: &["LeftFoot", "L_Ankle", "Left_Ankle", "L_Foot", "Foot_L"],
    },
    SynonymEntry {
        canonical: "RightUpLeg",
        aliases: &["RightUpLeg", "R_Hip", "Right_Thigh", "R_Thigh", "Thigh_R"],
    },
    SynonymEntry {
        canonical: "RightLeg",
        aliases: &["RightLeg", "R_Knee", "Right_Knee", "R_Calf", "Calf_R"],
    },
    SynonymEntry {
        canonical: "RightFoot",
        aliases: &["RightFoot", "R_Ankle", "Right_Ankle", "R_Foot", "Foot_R"],
    },
    SynonymEntry {
        canonical: "LeftShoulder",
        aliases: &["LeftShoulder", "L_Clavicle", "Left_Clavicle", "Clavicle_L"],
    },
    SynonymEntry {
        canonical: "LeftArm",
        aliases: &["LeftArm", "L_Shoulder", "Left_Shoulder", "L_UpperArm", "UpperArm_L"],
    },
    SynonymEntry {
        canonical: "LeftForeArm",
        aliases: &["LeftForeArm", "L_Elbow", "Left_Elbow", "L_Forearm", "Forearm_L"],
    },
    SynonymEntry {
        canonical: "LeftHand",
        aliases: &["LeftHand", "L_Wrist", "Left_Wrist", "L_Hand", "Hand_L"],
    },
    SynonymEntry {
        canonical: "RightShoulder",
        aliases: &["RightShoulder", "R_Clavicle", "Right_Clavicle", "Clavicle_R"],
    },
    SynonymEntry {
        canonical: "RightArm",
        aliases: &["RightArm", "R_Shoulder", "Right_Shoulder", "R_UpperArm", "UpperArm_R"],
    },
    SynonymEntry {
        canonical: "RightForeArm",
        aliases: &["RightForeArm", "R_Elbow", "Right_Elbow", "R_Forearm", "Forearm_R"],
    },
    SynonymEntry {
        canonical: "RightHand",
        aliases: &["RightHand", "R_Wrist", "Right_Wrist", "R_Hand", "Hand_R"],
    },
];
