//! The compiled pattern table: one [`Batch`] per [`BatchKind`].

use tracing::info;

use crate::batch::{Batch, BatchKind};
use crate::error::Result;
use crate::recipe::Recipe;

/// All five batches, compiled from a [`Recipe`].
///
/// A table only exists once every batch compiled; a failed build hands back
/// the error and nothing else.
#[derive(Clone, Debug)]
pub struct PatternTable {
    login: Batch,
    motd: Batch,
    alpha: Batch,
    numeric: Batch,
    stars: Batch,
}

impl PatternTable {
    /// Compiles the batches of `recipe` in [`BatchKind::BUILD_ORDER`].
    pub fn build(recipe: &Recipe) -> Result<Self> {
        let alpha = Batch::compile(BatchKind::Alpha, recipe.alpha)?;
        let numeric = Batch::compile(BatchKind::Numeric, recipe.numeric)?;
        let stars = Batch::compile(BatchKind::Stars, recipe.stars)?;
        let login = Batch::compile(BatchKind::Login, recipe.login)?;
        let motd = Batch::compile(BatchKind::Motd, recipe.motd)?;

        let table = Self {
            login,
            motd,
            alpha,
            numeric,
            stars,
        };
        info!(
            alpha = table.alpha.len(),
            numeric = table.numeric.len(),
            stars = table.stars.len(),
            login = table.login.len(),
            motd = table.motd.len(),
            "Pattern table built"
        );
        Ok(table)
    }

    /// The batch of the given kind.
    pub fn batch(&self, kind: BatchKind) -> &Batch {
        match kind {
            BatchKind::Login => &self.login,
            BatchKind::Motd => &self.motd,
            BatchKind::Alpha => &self.alpha,
            BatchKind::Numeric => &self.numeric,
            BatchKind::Stars => &self.stars,
        }
    }

    /// Total number of compiled entries.
    pub fn len(&self) -> usize {
        BatchKind::BUILD_ORDER
            .iter()
            .map(|kind| self.batch(*kind).len())
            .sum()
    }

    /// Returns true if no batch has any entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
