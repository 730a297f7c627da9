//! Train/validation partitioning.

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::BTreeSet;
use std::fmt;

/// The subset a record is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Val,
}

impl Split {
    /// Directory name used under `images/` and `labels/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Split assignment for `total` records, addressed by record index.
///
/// Drawn once up front; lookups never change the assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    total: usize,
    validation: BTreeSet<usize>,
}

impl Partition {
    /// Builds a partition from explicit validation indices.
    ///
    /// Indices at or beyond `total` are dropped.
    pub fn from_validation_indices(
        total: usize,
        indices: impl IntoIterator<Item = usize>,
    ) -> Self {
        let validation = indices.into_iter().filter(|idx| *idx < total).collect();
        Self { total, validation }
    }

    pub fn split_of(&self, index: usize) -> Split {
        if self.validation.contains(&index) {
            Split::Val
        } else {
            Split::Train
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn val_count(&self) -> usize {
        self.validation.len()
    }

    pub fn train_count(&self) -> usize {
        self.total - self.validation.len()
    }

    /// Validation indices in ascending order.
    pub fn validation_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.validation.iter().copied()
    }
}

/// Number of validation records for `total` records at `val_ratio`.
///
/// Truncates `val_ratio × total` and clamps to `[0, total]`, so negative or
/// NaN ratios give no validation records and ratios above one send every
/// record to validation.
pub fn validation_count(total: usize, val_ratio: f64) -> usize {
    let raw = (total as f64 * val_ratio).floor();
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }

    (raw as usize).min(total)
}

/// Draws the validation subset uniformly at random without replacement.
///
/// With `seed` the draw is reproducible; without it every call uses fresh
/// thread-local randomness.
pub fn draw_partition(total: usize, val_ratio: f64, seed: Option<u64>) -> Partition {
    let k = validation_count(total, val_ratio);
    let mut indices: Vec<usize> = (0..total).collect();

    if let Some(seed) = seed {
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    } else {
        let mut rng = rand::rng();
        indices.shuffle(&mut rng);
    }

    indices.truncate(k);
    Partition::from_validation_indices(total, indices)
}
