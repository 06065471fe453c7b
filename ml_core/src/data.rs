use crate::{MlError, Result};

/// Maximum number of distinct labels a binary dataset may carry.
const MAX_CLASSES: usize = 2;

/// An immutable table of labeled samples.
///
/// Each row pairs one scalar feature with a class index into a shared label
/// table. A `Dataset` only *provides access* to samples; it does not define
/// how they are split, batched, or consumed by a model.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<f32>,
    targets: Vec<usize>,
    labels: Vec<String>,
}

impl Dataset {
    /// Creates a dataset from already-encoded rows.
    ///
    /// # Arguments
    /// * `features` - One scalar feature per row.
    /// * `targets` - Class index per row, aligned with `features`.
    /// * `labels` - Label name for each class index.
    ///
    /// # Errors
    /// Returns `MlError::ShapeMismatch` if `features` and `targets` differ in
    /// length, and `MlError::InvalidInput` if there are more than two labels
    /// or a target refers to a missing label.
    pub fn new(features: Vec<f32>, targets: Vec<usize>, labels: Vec<String>) -> Result<Self> {
        if features.len() != targets.len() {
            return Err(MlError::ShapeMismatch {
                what: "targets",
                got: targets.len(),
                expected: features.len(),
            });
        }
        if labels.len() > MAX_CLASSES {
            return Err(MlError::InvalidInput(
                "a binary dataset allows at most two distinct labels",
            ));
        }
        if targets.iter().any(|&t| t >= labels.len()) {
            return Err(MlError::InvalidInput(
                "a target refers to a class with no label",
            ));
        }

        Ok(Self {
            features,
            targets,
            labels,
        })
    }

    /// Creates a dataset from raw (feature, label) rows.
    ///
    /// Class indices are assigned to labels in order of first appearance.
    ///
    /// # Errors
    /// Returns `MlError::InvalidInput` if the rows carry more than two
    /// distinct labels.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f32, String)>,
    {
        let mut features = Vec::new();
        let mut targets = Vec::new();
        let mut labels: Vec<String> = Vec::new();

        for (feature, label) in rows {
            let target = match labels.iter().position(|l| *l == label) {
                Some(idx) => idx,
                None => {
                    if labels.len() == MAX_CLASSES {
                        return Err(MlError::InvalidInput(
                            "a binary dataset allows at most two distinct labels",
                        ));
                    }
                    labels.push(label);
                    labels.len() - 1
                }
            };

            features.push(feature);
            targets.push(target);
        }

        Ok(Self {
            features,
            targets,
            labels,
        })
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Returns the feature column.
    pub fn features(&self) -> &[f32] {
        &self.features
    }

    /// Returns the class index column, aligned with `features`.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Returns the label name for a class index, if one exists.
    pub fn label_of(&self, class: usize) -> Option<&str> {
        self.labels.get(class).map(String::as_str)
    }

    /// Builds a new dataset from a subset of row indices.
    ///
    /// The label table is shared with the parent so class indices keep their
    /// meaning across partitions.
    ///
    /// # Errors
    /// Returns `MlError::InvalidInput` if an index is out of bounds.
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        let mut features = Vec::with_capacity(indices.len());
        let mut targets = Vec::with_capacity(indices.len());

        for &i in indices {
            let feature = *self
                .features
                .get(i)
                .ok_or(MlError::InvalidInput("subset index is out of bounds"))?;
            features.push(feature);
            targets.push(self.targets[i]);
        }

        Ok(Self {
            features,
            targets,
            labels: self.labels.clone(),
        })
    }
}
