//! File-backed truncated SVD projection.
//!
//! A fitted truncated SVD transforms `X` as `X · Vᵀ`, where `V` holds one
//! fitted component per row. The artifact stores `V` as JSON:
//!
//! ```json
//! {
//!   "feature_names": ["SAT", "Top10", "Accept", "SFRatio", "Expenses", "GradRate"],
//!   "components": [[0.1, 0.2, 0.3, 0.4, 0.5, 0.6], ...]
//! }
//! ```
//!
//! `feature_names` is optional; when present it must match the component
//! width and, for serving, the upload schema.

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::checksum::model_fingerprint;
use super::{DimensionReducer, TransformError};
use crate::models::{FeatureRow, RequiredSchema, N_COMPONENTS};

/// Errors raised while loading or checking a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid model: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<String>>,
    components: Vec<Vec<f64>>,
}

/// Pre-fit SVD components, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct SvdModel {
    /// `n_components × n_features`, one fitted component per row
    components: Array2<f64>,
    feature_names: Option<Vec<String>>,
    fingerprint: String,
}

impl SvdModel {
    /// Build a model from an `n_components × n_features` matrix.
    pub fn from_components(components: Vec<Vec<f64>>) -> Result<Self, ModelError> {
        let artifact = ModelArtifact {
            feature_names: None,
            components,
        };
        let bytes = serde_json::to_vec(&artifact)?;
        Self::from_artifact(artifact, model_fingerprint(&bytes))
    }

    /// Parse a model from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
        Self::from_artifact(artifact, model_fingerprint(bytes))
    }

    /// Load a model from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json_slice(&bytes)?;
        debug!(
            path = %path.display(),
            n_features = model.n_features(),
            n_components = model.n_components(),
            "Loaded SVD model"
        );
        Ok(model)
    }

    fn from_artifact(artifact: ModelArtifact, fingerprint: String) -> Result<Self, ModelError> {
        let ModelArtifact {
            feature_names,
            components,
        } = artifact;

        let width = components
            .first()
            .map(Vec::len)
            .ok_or_else(|| ModelError::Invalid("components matrix is empty".to_string()))?;
        if width == 0 {
            return Err(ModelError::Invalid("components have zero features".to_string()));
        }
        for (i, component) in components.iter().enumerate() {
            if component.len() != width {
                return Err(ModelError::Invalid(format!(
                    "component {} has {} features, expected {}",
                    i,
                    component.len(),
                    width
                )));
            }
            if component.iter().any(|v| !v.is_finite()) {
                return Err(ModelError::Invalid(format!(
                    "component {} contains a non-finite value",
                    i
                )));
            }
        }
        if let Some(names) = &feature_names {
            if names.len() != width {
                return Err(ModelError::Invalid(format!(
                    "{} feature names for {} features",
                    names.len(),
                    width
                )));
            }
        }

        let n_components = components.len();
        let flat: Vec<f64> = components.into_iter().flatten().collect();
        let components = Array2::from_shape_vec((n_components, width), flat)
            .map_err(|e| ModelError::Invalid(format!("components matrix: {}", e)))?;

        Ok(Self {
            components,
            feature_names,
            fingerprint,
        })
    }

    /// Check that this model can serve uploads of `schema`.
    pub fn ensure_compatible(&self, schema: &RequiredSchema) -> Result<(), ModelError> {
        if self.n_features() != schema.features.len() {
            return Err(ModelError::Invalid(format!(
                "model expects {} features, uploads provide {}",
                self.n_features(),
                schema.features.len()
            )));
        }
        if self.n_components() != N_COMPONENTS {
            return Err(ModelError::Invalid(format!(
                "model produces {} components, expected {}",
                self.n_components(),
                N_COMPONENTS
            )));
        }
        if let Some(names) = &self.feature_names {
            if names.iter().map(String::as_str).ne(schema.features.iter().copied()) {
                return Err(ModelError::Invalid(format!(
                    "model was fit on {:?}, uploads provide {:?}",
                    names, schema.features
                )));
            }
        }
        Ok(())
    }

    /// SHA-256 of the artifact the model was read from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}

impl DimensionReducer for SvdModel {
    fn n_features(&self) -> usize {
        self.components.ncols()
    }

    fn n_components(&self) -> usize {
        self.components.nrows()
    }

    fn transform(&self, rows: &[FeatureRow]) -> Result<Array2<f64>, TransformError> {
        let n_features = self.n_features();
        if let Some(row) = rows.first() {
            if row.len() != n_features {
                return Err(TransformError::FeatureMismatch {
                    expected: n_features,
                    found: row.len(),
                });
            }
        }

        let mut x = Array2::<f64>::zeros((rows.len(), n_features));
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let value = cell.ok_or(TransformError::MissingValue { row: r, column: c })?;
                if !value.is_finite() {
                    return Err(TransformError::NonFinite { row: r, column: c });
                }
                x[[r, c]] = value;
            }
        }

        Ok(x.dot(&self.components.t()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::N_FEATURES;
    use ndarray::array;

    fn identity(n: usize) -> Vec<Vec<f64>> {
        (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect()
    }

    #[test]
    fn test_identity_projection() {
        let model = SvdModel::from_components(identity(N_FEATURES)).unwrap();
        let row: FeatureRow = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)];
        let out = model.transform(&[row]).unwrap();
        assert_eq!(out, array![[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_projection_is_dot_product() {
        let mut components = identity(N_FEATURES);
        components[0] = vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        components[1] = vec![0.5, 0.0, 0.0, 0.0, 0.0, -0.5];
        let model = SvdModel::from_components(components).unwrap();
        let row: FeatureRow = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)];
        let out = model.transform(&[row]).unwrap();
        assert_eq!(out.dim(), (1, N_FEATURES));
        assert_eq!(out[[0, 0]], 21.0);
        assert_eq!(out[[0, 1]], -2.5);
    }

    #[test]
    fn test_rows_are_projected_independently() {
        let mut components = identity(N_FEATURES);
        components[0] = vec![1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        let model = SvdModel::from_components(components).unwrap();
        let rows: [FeatureRow; 2] = [[Some(1.0); N_FEATURES], [Some(2.0); N_FEATURES]];
        let out = model.transform(&rows).unwrap();
        assert_eq!(out.dim(), (2, N_FEATURES));
        assert_eq!(out[[0, 0]], 2.0);
        assert_eq!(out[[1, 0]], 4.0);
        assert_eq!(out[[1, 5]], 2.0);
    }

    #[test]
    fn test_no_rows_gives_empty_projection() {
        let model = SvdModel::from_components(identity(N_FEATURES)).unwrap();
        assert_eq!(model.transform(&[]).unwrap().dim(), (0, N_FEATURES));
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let model = SvdModel::from_components(identity(N_FEATURES)).unwrap();
        let row: FeatureRow = [Some(1.0), None, Some(3.0), Some(4.0), Some(5.0), Some(6.0)];
        let err = model.transform(&[row]).unwrap_err();
        assert_eq!(err, TransformError::MissingValue { row: 0, column: 1 });
    }

    #[test]
    fn test_infinite_value_is_rejected() {
        let model = SvdModel::from_components(identity(N_FEATURES)).unwrap();
        let row: FeatureRow = [Some(f64::INFINITY), Some(1.0), Some(1.0), Some(1.0), Some(1.0), Some(1.0)];
        assert!(matches!(
            model.transform(&[row]),
            Err(TransformError::NonFinite { row: 0, column: 0 })
        ));
    }

    #[test]
    fn test_feature_mismatch() {
        let model = SvdModel::from_components(identity(4)).unwrap();
        let row: FeatureRow = [Some(1.0); N_FEATURES];
        let err = model.transform(&[row]).unwrap_err();
        assert_eq!(
            err,
            TransformError::FeatureMismatch {
                expected: 4,
                found: N_FEATURES
            }
        );
        assert!(err.to_string().contains("expecting 4 features"));
    }

    #[test]
    fn test_rejects_ragged_components() {
        let err = SvdModel::from_components(vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn test_rejects_empty_components() {
        assert!(SvdModel::from_components(vec![]).is_err());
        assert!(SvdModel::from_components(vec![vec![]]).is_err());
    }

    #[test]
    fn test_rejects_non_finite_components() {
        let err = SvdModel::from_components(vec![vec![f64::NAN]]).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn test_from_json_with_feature_names() {
        let json = serde_json::json!({
            "feature_names": ["SAT", "Top10", "Accept", "SFRatio", "Expenses", "GradRate"],
            "components": identity(N_FEATURES),
        })
        .to_string();
        let model = SvdModel::from_json_slice(json.as_bytes()).unwrap();
        assert_eq!(model.n_features(), 6);
        assert_eq!(model.n_components(), 6);
        assert_eq!(model.feature_names().unwrap()[0], "SAT");
        assert!(model.ensure_compatible(&RequiredSchema::default()).is_ok());
    }

    #[test]
    fn test_feature_name_count_must_match() {
        let json = r#"{"feature_names": ["SAT"], "components": [[1.0, 2.0]]}"#;
        assert!(matches!(
            SvdModel::from_json_slice(json.as_bytes()),
            Err(ModelError::Invalid(_))
        ));
    }

    #[test]
    fn test_incompatible_feature_order() {
        let json = serde_json::json!({
            "feature_names": ["Top10", "SAT", "Accept", "SFRatio", "Expenses", "GradRate"],
            "components": identity(N_FEATURES),
        })
        .to_string();
        let model = SvdModel::from_json_slice(json.as_bytes()).unwrap();
        assert!(model.ensure_compatible(&RequiredSchema::default()).is_err());
    }

    #[test]
    fn test_incompatible_component_count() {
        let model = SvdModel::from_components(identity(N_FEATURES)[..2].to_vec()).unwrap();
        assert!(model.ensure_compatible(&RequiredSchema::default()).is_err());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            SvdModel::from_json_slice(b"{not json"),
            Err(ModelError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = SvdModel::from_file("/nonexistent/svd_model.json").unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }

    #[test]
    fn test_fingerprint_tracks_bytes() {
        let a = SvdModel::from_json_slice(br#"{"components": [[1.0]]}"#).unwrap();
        let b = SvdModel::from_json_slice(br#"{"components": [[1.0]] }"#).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
