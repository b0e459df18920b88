use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Inclusive bounds enforced by the circle count control.
pub const MIN_CIRCLE_COUNT: usize = 1;
pub const MAX_CIRCLE_COUNT: usize = 15;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Gooey Background".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CircleSetConfig {
    /// Initial circle count; runtime changes stay within the 1..=15 bounds.
    pub count: usize,
    /// Radius of the ring orbit centers are distributed on.
    pub ring_radius: f32,
    pub radius_range: SpawnRange<f32>,
    pub speed_range: SpawnRange<f32>,
}
impl Default for CircleSetConfig {
    fn default() -> Self {
        Self {
            count: 5,
            ring_radius: 30.0,
            radius_range: SpawnRange {
                min: 10.0,
                max: 20.0,
            },
            speed_range: SpawnRange {
                min: 0.005,
                max: 0.025,
            },
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GooRenderConfig {
    /// Field threshold the merge surface sits at.
    pub iso: f32,
    /// Width of the soft edge around the iso contour (view units of field).
    pub softness: f32,
    /// Visual scale applied to every circle radius before field evaluation.
    pub radius_multiplier: f32,
}
impl Default for GooRenderConfig {
    fn default() -> Self {
        Self {
            iso: 0.6,
            softness: 0.04,
            radius_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GooeyConfig {
    pub window: WindowConfig,
    pub circles: CircleSetConfig,
    pub goo: GooRenderConfig,
}

impl GooeyConfig {
    /// Merge a base file and any number of overrides (later wins, per key).
    /// Unreadable or unparsable layers are skipped and reported; a config is
    /// always produced, falling back to defaults when nothing merges.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        if let Some(val) = merged {
            match val.clone().into_rust::<GooeyConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (GooeyConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (GooeyConfig::default(), used, errors)
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if !(MIN_CIRCLE_COUNT..=MAX_CIRCLE_COUNT).contains(&self.circles.count) {
            w.push(format!(
                "circles.count {} outside {MIN_CIRCLE_COUNT}..={MAX_CIRCLE_COUNT}; will be clamped",
                self.circles.count
            ));
        }
        if self.circles.ring_radius <= 0.0 {
            w.push("circles.ring_radius must be > 0".into());
        }
        if self.circles.ring_radius > 50.0 {
            w.push(format!(
                "circles.ring_radius {} pushes orbit centers outside the 100x100 view",
                self.circles.ring_radius
            ));
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
            if (r.max - r.min).abs() < f32::EPSILON {
                w.push(format!("{label} min == max ({}) -> zero variation", r.min));
            }
        }
        check_range_f32(&mut w, "circles.radius_range", &self.circles.radius_range);
        if self.circles.radius_range.min <= 0.0 {
            w.push("circles.radius_range.min must be > 0".into());
        }
        check_range_f32(&mut w, "circles.speed_range", &self.circles.speed_range);
        if self.circles.speed_range.min < 0.0 {
            w.push("circles.speed_range.min negative -> circles orbit backwards".into());
        }
        if !(0.0..=1.5).contains(&self.goo.iso) {
            w.push(format!("goo.iso {} outside recommended 0..1.5", self.goo.iso));
        }
        if self.goo.softness < 0.0 {
            w.push("goo.softness negative -> hard edge assumed".into());
        }
        if self.goo.radius_multiplier <= 0.0 {
            w.push(format!(
                "goo.radius_multiplier {} must be > 0 (visual scaling)",
                self.goo.radius_multiplier
            ));
        } else if self.goo.radius_multiplier > 5.0 {
            w.push(format!(
                "goo.radius_multiplier {} very large (view may become one blob)",
                self.goo.radius_multiplier
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_component_constants() {
        let cfg = GooeyConfig::default();
        assert_eq!(cfg.circles.count, 5);
        assert_eq!(cfg.circles.ring_radius, 30.0);
        assert_eq!(cfg.circles.radius_range.min, 10.0);
        assert_eq!(cfg.circles.radius_range.max, 20.0);
        assert_eq!(cfg.circles.speed_range.min, 0.005);
        assert_eq!(cfg.circles.speed_range.max, 0.025);
        assert!(cfg.validate().is_empty(), "defaults must validate clean");
    }

    #[test]
    fn partial_ron_overrides_single_section() {
        let cfg: GooeyConfig =
            ron::from_str("(circles: (count: 9))").expect("partial config parses");
        assert_eq!(cfg.circles.count, 9);
        // untouched sections keep defaults
        assert_eq!(cfg.window.title, WindowConfig::default().title);
        assert_eq!(cfg.goo.iso, 0.6);
    }

    #[test]
    fn out_of_range_count_warns() {
        let mut cfg = GooeyConfig::default();
        cfg.circles.count = 40;
        let warnings = cfg.validate();
        assert!(
            warnings.iter().any(|w| w.contains("circles.count")),
            "expected count warning, got: {warnings:?}"
        );
    }

    #[test]
    fn inverted_range_warns() {
        let mut cfg = GooeyConfig::default();
        cfg.circles.speed_range = SpawnRange {
            min: 0.5,
            max: 0.1,
        };
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.contains("circles.speed_range") && w.contains("greater than max")));
    }
}
