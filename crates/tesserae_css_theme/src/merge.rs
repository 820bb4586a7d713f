use serde_json::Value;

/// Layers `overlay` onto `base` in place.
///
/// Objects present on both sides are merged key by key. Any other overlay
/// value, arrays included, replaces the base value wholesale. `null` overlay
/// leaves are skipped so they inherit the base value, and keys only present
/// in `base` are never removed.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, overlay_value) in overlay {
                if overlay_value.is_null() {
                    continue;
                }

                match base.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        base.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Returns a merged copy, leaving `base` untouched.
pub fn merged(base: &Value, overlay: &Value) -> Value {
    let mut value = base.clone();
    deep_merge(&mut value, overlay);
    value
}
