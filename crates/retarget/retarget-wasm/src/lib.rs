//! wasm-bindgen boundary for the retargeting core.
//!
//! The JS host (asset loader / 3D viewer) passes skeletons and clips either
//! as canonical serde shapes or as raw stored JSON (three.js
//! `AnimationClip.toJSON()`); results come back as plain JS objects.

use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use retarget_core::{
    parse_stored_clip_json, parse_stored_skeleton_json, AnimationClip, RetargetOptions, Skeleton,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn options_from_js(options: JsValue) -> Result<RetargetOptions, JsError> {
    if jsvalue_is_undefined_or_null(&options) {
        Ok(RetargetOptions::default())
    } else {
        swb::from_value(options).map_err(|e| JsError::new(&format!("options error: {e}")))
    }
}

fn stringify(v: &JsValue, what: &str) -> Result<String, JsError> {
    JSON::stringify(v)
        .map_err(|e| JsError::new(&format!("{what} stringify error: {e:?}")))?
        .as_string()
        .ok_or_else(|| JsError::new(&format!("{what}: stringify produced non-string")))
}

/// Retarget a clip onto a target skeleton. `skeleton` and `clip` use the
/// canonical serde shapes; `options` is an optional
/// `{ name?: string, hipScale?: boolean }` object. Returns the new clip.
#[wasm_bindgen]
pub fn retarget_clip(
    skeleton: JsValue,
    clip: JsValue,
    options: JsValue,
) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();

    let skeleton: Skeleton =
        swb::from_value(skeleton).map_err(|e| JsError::new(&format!("skeleton error: {e}")))?;
    let clip: AnimationClip =
        swb::from_value(clip).map_err(|e| JsError::new(&format!("clip error: {e}")))?;
    let opts = options_from_js(options)?;

    let out = retarget_core::retarget_clip(&skeleton, &clip, &opts);
    swb::to_value(&out).map_err(|e| JsError::new(&format!("output error: {e}")))
}

/// Retarget from raw stored JSON: a serialized bone list and a three.js
/// `AnimationClip.toJSON()` object. Shape validation runs during parsing and
/// surfaces as an error here rather than inside the retarget pass.
#[wasm_bindgen]
pub fn retarget_stored_clip(
    skeleton_json: JsValue,
    clip_json: JsValue,
    options: JsValue,
) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();

    if jsvalue_is_undefined_or_null(&skeleton_json) || jsvalue_is_undefined_or_null(&clip_json) {
        return Err(JsError::new(
            "retarget_stored_clip: skeleton/clip is null/undefined",
        ));
    }
    let skeleton = parse_stored_skeleton_json(&stringify(&skeleton_json, "skeleton")?)
        .map_err(|e| JsError::new(&format!("skeleton parse error: {e}")))?;
    let clip = parse_stored_clip_json(&stringify(&clip_json, "clip")?)
        .map_err(|e| JsError::new(&format!("clip parse error: {e}")))?;
    let opts = options_from_js(options)?;

    let out = retarget_core::retarget_clip(&skeleton, &clip, &opts);
    swb::to_value(&out).map_err(|e| JsError::new(&format!("output error: {e}")))
}

/// Diagnostic lookup: resolve a bone name (exact, case-insensitive, or
/// namespaced) against a skeleton. Returns the bone or `null`.
#[wasm_bindgen]
pub fn resolve_bone(skeleton: JsValue, name: String) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();

    let skeleton: Skeleton =
        swb::from_value(skeleton).map_err(|e| JsError::new(&format!("skeleton error: {e}")))?;
    match skeleton.resolve(&name) {
        Some(bone) => swb::to_value(bone).map_err(|e| JsError::new(&format!("bone error: {e}"))),
        None => Ok(JsValue::NULL),
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
