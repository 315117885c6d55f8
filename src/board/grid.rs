//! The board: a fixed-size grid with an entity anchored per start cell.

use rustc_hash::FxHashMap;

use super::entity::BoardEntity;

/// A square board of `side * side` cells.
///
/// Entities are kept in insertion order for display; a start-cell index
/// backs the per-move lookup. At most one entity may anchor a given
/// start cell; later adds at an occupied cell are dropped.
#[derive(Clone, Debug, Default)]
pub struct Board {
    size: u32,
    entities: Vec<BoardEntity>,
    lookup: FxHashMap<u32, usize>,
}

impl Board {
    /// Create an empty board with `side * side` cells.
    #[must_use]
    pub fn new(side: u32) -> Self {
        Self {
            size: side.saturating_mul(side),
            entities: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    /// Total number of cells.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether `pos` is free to anchor a new entity.
    #[must_use]
    pub fn can_add(&self, pos: u32) -> bool {
        !self.lookup.contains_key(&pos)
    }

    /// Add an entity if its start cell is free.
    ///
    /// Returns true if the entity was placed. A collision drops the
    /// entity and returns false; per the setup semantics this is not an
    /// error, just a no-op.
    pub fn add_entity(&mut self, entity: BoardEntity) -> bool {
        if !self.can_add(entity.start()) {
            tracing::debug!(start = entity.start(), "start cell occupied, entity dropped");
            return false;
        }
        self.lookup.insert(entity.start(), self.entities.len());
        self.entities.push(entity);
        true
    }

    /// The entity anchored at `pos`, if any.
    #[must_use]
    pub fn entity_at(&self, pos: u32) -> Option<&BoardEntity> {
        self.lookup.get(&pos).map(|&i| &self.entities[i])
    }

    /// All placed entities, in insertion order.
    #[must_use]
    pub fn entities(&self) -> &[BoardEntity] {
        &self.entities
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Board ===")?;
        writeln!(f, "Size: {}", self.size)?;
        for entity in &self.entities {
            writeln!(f, "{}", entity)?;
        }
        Ok(())
    }
}
