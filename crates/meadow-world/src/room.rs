//! Capacity-limited rooms.
//!
//! A [`Room`] groups entity ids under a purpose ([`RoomKind`]). Rooms do
//! not own entities and nothing in the tick cycle reads them; they only
//! answer "who is where" for reporting.

use meadow_agents::SetupError;
use meadow_types::{EntityId, RoomKind};
use serde::Serialize;

/// A named container for up to `capacity` entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    name: String,
    kind: RoomKind,
    capacity: u32,
    occupants: Vec<EntityId>,
}

impl Room {
    /// Create an empty room.
    pub fn new(name: impl Into<String>, kind: RoomKind, capacity: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            capacity,
            occupants: Vec::new(),
        }
    }

    /// Room name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Room purpose.
    pub const fn kind(&self) -> RoomKind {
        self.kind
    }

    /// Maximum number of occupants.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Entities currently assigned to this room, in admission order.
    pub fn occupants(&self) -> &[EntityId] {
        &self.occupants
    }

    /// Number of occupants.
    ///
    /// Saturates at `u32::MAX`, which a room can never reach because
    /// admission is capped by `capacity`.
    pub fn occupant_count(&self) -> u32 {
        u32::try_from(self.occupants.len()).unwrap_or(u32::MAX)
    }

    /// Whether another entity fits.
    pub fn has_capacity(&self) -> bool {
        self.occupant_count() < self.capacity
    }

    /// Whether `entity` is assigned here.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.occupants.contains(&entity)
    }

    /// Assign an entity to this room.
    ///
    /// Admitting an entity that is already present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::RoomFull`] if the room is at capacity.
    pub fn admit(&mut self, entity: EntityId) -> Result<(), SetupError> {
        if self.contains(entity) {
            return Ok(());
        }
        if !self.has_capacity() {
            return Err(SetupError::RoomFull {
                room: self.name.clone(),
                capacity: self.capacity,
            });
        }
        self.occupants.push(entity);
        Ok(())
    }

    /// Remove an entity from this room. Returns whether it was present.
    pub fn release(&mut self, entity: EntityId) -> bool {
        let before = self.occupants.len();
        self.occupants.retain(|id| *id != entity);
        self.occupants.len() != before
    }
}
