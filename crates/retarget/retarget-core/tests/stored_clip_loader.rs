use retarget_core::{
    parse_stored_clip_json, parse_stored_skeleton_json, retarget_clip, ClipError, RetargetOptions,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

const SKELETON_JSON: &str = r#"{
  "bones": [
    { "name": "Hips", "parent": -1, "position": { "x": 0.0, "y": 1.0, "z": 0.0 } },
    { "name": "Spine", "parent": 0, "position": { "x": 0.0, "y": 0.12, "z": 0.0 },
      "quaternion": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 },
      "scale": { "x": 1.0, "y": 1.0, "z": 1.0 } }
  ]
}"#;

const CLIP_JSON: &str = r#"{
  "name": "mixamo.com",
  "duration": 2.0,
  "uuid": "0d259f3a-4c23-4b34-9f9c-9a6a2f1ab359",
  "blendMode": 2500,
  "tracks": [
    { "name": "mixamorig:Hips.position", "type": "vector",
      "times": [0.0, 1.0, 2.0],
      "values": [0.0, 0.5, 0.0, 0.1, 0.55, 0.0, 0.0, 0.5, 0.1] },
    { "name": "mixamorig:Spine.quaternion", "type": "quaternion",
      "times": [0.0, 2.0],
      "values": [0.0, 0.0, 0.0, 1.0, 0.0, 0.7071, 0.0, 0.7071] }
  ]
}"#;

#[test]
fn parses_stored_skeleton_with_defaults() {
    let skeleton = parse_stored_skeleton_json(SKELETON_JSON).expect("parse skeleton");
    assert_eq!(skeleton.bones.len(), 2);

    let hips = &skeleton.bones[0];
    assert_eq!(hips.name, "Hips");
    assert_eq!(hips.parent, None); // -1 marks a root
    approx(hips.rest_position[1], 1.0, 1e-6);
    // Missing quaternion/scale fall back to identity / unit
    assert_eq!(hips.rest_rotation, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(hips.rest_scale, [1.0, 1.0, 1.0]);

    assert_eq!(skeleton.bones[1].parent, Some(0));
}

#[test]
fn parses_stored_clip_and_ignores_extra_fields() {
    let clip = parse_stored_clip_json(CLIP_JSON).expect("parse clip");
    assert_eq!(clip.name, "mixamo.com");
    approx(clip.duration, 2.0, 1e-6);
    assert_eq!(clip.tracks.len(), 2);
    assert_eq!(clip.tracks[0].times.len(), 3);
    assert_eq!(clip.tracks[0].values.len(), 9);
}

#[test]
fn rejects_malformed_value_arrays() {
    let truncated = r#"{
      "name": "bad", "duration": 1.0,
      "tracks": [
        { "name": "Hips.position", "times": [0.0, 1.0], "values": [0.0, 0.5, 0.0] }
      ]
    }"#;
    match parse_stored_clip_json(truncated) {
        Err(ClipError::ValueLengthMismatch { times, got, .. }) => {
            assert_eq!(times, 2);
            assert_eq!(got, 3);
        }
        other => panic!("expected ValueLengthMismatch, got {other:?}"),
    }
}

#[test]
fn rejects_non_monotonic_times() {
    let backwards = r#"{
      "name": "bad", "duration": 1.0,
      "tracks": [
        { "name": "Hips.quaternion", "times": [1.0, 0.0],
          "values": [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0] }
      ]
    }"#;
    assert!(matches!(
        parse_stored_clip_json(backwards),
        Err(ClipError::NonMonotonicTimes(_))
    ));
}

#[test]
fn rejects_invalid_json_with_parse_error() {
    assert!(matches!(
        parse_stored_clip_json("{not json"),
        Err(ClipError::Parse(_))
    ));
    assert!(matches!(
        parse_stored_skeleton_json("[]"),
        Err(ClipError::Parse(_))
    ));
}

/// it should round-trip the canonical shapes through serde
#[test]
fn canonical_shapes_serde_roundtrip() {
    let skeleton = parse_stored_skeleton_json(SKELETON_JSON).expect("parse skeleton");
    let s = serde_json::to_string(&skeleton).unwrap();
    let skeleton2: retarget_core::Skeleton = serde_json::from_str(&s).unwrap();
    assert_eq!(skeleton, skeleton2);

    let clip = parse_stored_clip_json(CLIP_JSON).expect("parse clip");
    let s = serde_json::to_string(&clip).unwrap();
    let clip2: retarget_core::AnimationClip = serde_json::from_str(&s).unwrap();
    assert_eq!(clip, clip2);
}

/// it should drive the whole pipeline from stored JSON to a retargeted clip
#[test]
fn stored_inputs_retarget_end_to_end() {
    let skeleton = parse_stored_skeleton_json(SKELETON_JSON).expect("parse skeleton");
    let clip = parse_stored_clip_json(CLIP_JSON).expect("parse clip");

    let out = retarget_clip(&skeleton, &clip, &RetargetOptions::default());
    let names: Vec<&str> = out.tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Hips.position", "Spine.quaternion"]);

    // ratio = |1.0 / 0.5| = 2.0 over every position component
    let hips = &out.tracks[0];
    approx(hips.values[1], 1.0, 1e-6);
    approx(hips.values[3], 0.2, 1e-6);
    approx(out.duration, 2.0, 1e-6);
}
