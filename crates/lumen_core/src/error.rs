//! Errors reported by scene construction and lookup.

use thiserror::Error;

/// Errors that can occur while building or querying a [`Scene`](crate::Scene).
///
/// Geometric misses, occluded lights and numerical degeneracies are not
/// errors; they are ordinary results of the respective queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("material index {index} out of range (scene has {material_count} materials)")]
    InvalidMaterialIndex { index: usize, material_count: usize },

    #[error("light index {index} out of range (scene has {light_count} lights)")]
    InvalidLightIndex { index: usize, light_count: usize },
}

pub type SceneResult<T> = Result<T, SceneError>;
