//! Persisted shape of the matrix collection.

use super::{Matrix, MatrixId};
use serde::{Deserialize, Serialize};

/// Every matrix plus the selection, as written to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSnapshot {
    /// Matrices in list order.
    #[serde(default)]
    pub matrices: Vec<Matrix>,
    /// Identifier of the selected matrix.
    #[serde(default)]
    pub current_matrix_id: Option<MatrixId>,
}
