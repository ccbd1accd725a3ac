//! Shading surfaces owned by a body.
//!
//! A [`BodyRenderers`] component is the body's ordered set of renderers, each
//! with its own [`SurfaceMaterial`] and [`ShadowCasting`] mode. The set is
//! built once when the character spawns and afterwards only the visibility
//! transition writes to it.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector3};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Whether a renderer contributes to shadows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowCasting {
    #[default]
    On,
    Off,
}

/// Material instance with named float parameters, like a shader uniform block.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMaterial {
    pub params: FxHashMap<String, f32>,
}

impl SurfaceMaterial {
    pub fn set_float(&mut self, name: impl Into<String>, value: f32) {
        self.params.insert(name.into(), value);
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.params.get(name).copied()
    }
}

/// One drawable part of the body.
#[derive(Debug, Clone)]
pub struct BodyRenderer {
    pub label: String,
    /// Part offset from the body origin, in body space (x right, y up, z forward).
    pub offset: Vector3,
    pub size: Vector3,
    pub color: Color,
    pub material: SurfaceMaterial,
    pub shadow_casting: ShadowCasting,
}

impl BodyRenderer {
    pub fn new(label: impl Into<String>, offset: Vector3, size: Vector3, color: Color) -> Self {
        Self {
            label: label.into(),
            offset,
            size,
            color,
            material: SurfaceMaterial::default(),
            shadow_casting: ShadowCasting::On,
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct BodyRenderers {
    pub renderers: SmallVec<[BodyRenderer; 4]>,
}

impl BodyRenderers {
    pub fn new(renderers: impl IntoIterator<Item = BodyRenderer>) -> Self {
        Self {
            renderers: renderers.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Write `value` into the named parameter of every material.
    pub fn set_all_floats(&mut self, name: &str, value: f32) {
        for renderer in self.renderers.iter_mut() {
            renderer.material.set_float(name, value);
        }
    }

    pub fn set_all_shadow_casting(&mut self, mode: ShadowCasting) {
        for renderer in self.renderers.iter_mut() {
            renderer.shadow_casting = mode;
        }
    }

    /// Parameter values in renderer order; `None` where a material lacks it.
    pub fn floats(&self, name: &str) -> Vec<Option<f32>> {
        self.renderers
            .iter()
            .map(|r| r.material.get_float(name))
            .collect()
    }

    /// Default humanoid silhouette: legs, torso and head boxes.
    pub fn humanoid(param: &str) -> Self {
        let mut set = Self::new([
            BodyRenderer::new(
                "legs",
                Vector3::new(0.0, 0.45, 0.0),
                Vector3::new(0.5, 0.9, 0.35),
                Color::DARKBLUE,
            ),
            BodyRenderer::new(
                "torso",
                Vector3::new(0.0, 1.2, 0.0),
                Vector3::new(0.6, 0.6, 0.4),
                Color::MAROON,
            ),
            BodyRenderer::new(
                "head",
                Vector3::new(0.0, 1.7, 0.05),
                Vector3::new(0.35, 0.35, 0.35),
                Color::BEIGE,
            ),
        ]);
        set.set_all_floats(param, 0.0);
        set
    }
}
