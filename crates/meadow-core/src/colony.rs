//! Colonies: resource accounting and lifecycle.
//!
//! A colony owns its members outright and holds its leader as an
//! [`EntityId`] key into the member list. The lifecycle is a one-way
//! switch: `active` starts `true` and flips to `false` the first time a
//! member cannot draw its food. It never flips back.
//!
//! # Tick rule
//!
//! When the colony is alive (active and led), each member in insertion
//! order first applies its energy transition and then withdraws its food.
//! The first failed withdrawal deactivates the colony and ends the tick on
//! the spot; members after it are neither stepped nor charged. Insertion
//! order therefore decides which member starves the colony.

use meadow_agents::{BehaviorConfig, Entity, SetupError};
use meadow_types::{
    ColonyId, ColonySnapshot, EntityId, EntityKind, LeaderSuccession, SpeciesId,
};
use meadow_world::Room;
use serde::Serialize;

/// Food a colony starts with unless configured otherwise.
pub const DEFAULT_RESOURCE_POOL: u32 = 1000;

/// What a single call to [`Colony::step`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ColonyStepOutcome {
    /// The colony was inactive or leaderless and nothing changed.
    Idle,
    /// Every member stepped and was fed.
    Advanced {
        /// Food drawn from the pool this tick.
        consumed: u32,
    },
    /// A member could not be fed; the colony is now inactive.
    Exhausted {
        /// The member whose withdrawal failed.
        member: EntityId,
        /// That member's name.
        member_name: String,
        /// Food the member needed.
        needed: u32,
        /// Food left in the pool.
        available: u32,
    },
}

/// An independently resourced group of entities with one designated leader.
#[derive(Debug, Clone)]
pub struct Colony {
    id: ColonyId,
    name: String,
    species: SpeciesId,
    leader: Option<EntityId>,
    members: Vec<Entity>,
    resource_pool: u32,
    active: bool,
    succession: LeaderSuccession,
    rooms: Vec<Room>,
}

impl Colony {
    /// Create an empty colony with [`DEFAULT_RESOURCE_POOL`] food.
    pub fn new(name: impl Into<String>, species: SpeciesId) -> Self {
        Self::with_resource_pool(name, species, DEFAULT_RESOURCE_POOL)
    }

    /// Create an empty colony with an explicit amount of food.
    pub fn with_resource_pool(
        name: impl Into<String>,
        species: SpeciesId,
        resource_pool: u32,
    ) -> Self {
        Self {
            id: ColonyId::new(),
            name: name.into(),
            species,
            leader: None,
            members: Vec::new(),
            resource_pool,
            active: true,
            succession: LeaderSuccession::default(),
            rooms: Vec::new(),
        }
    }

    /// Set the policy applied when a leader is replaced.
    #[must_use]
    pub const fn with_succession(mut self, succession: LeaderSuccession) -> Self {
        self.succession = succession;
        self
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Append a member. Members are stepped in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateEntity`] if an entity with the same
    /// id is already a member.
    pub fn add_member(&mut self, entity: Entity) -> Result<EntityId, SetupError> {
        let id = entity.id();
        if self.member(id).is_some() {
            return Err(SetupError::DuplicateEntity(id));
        }
        self.members.push(entity);
        Ok(id)
    }

    /// Make `entity` this colony's leader, adding it to the members if it
    /// is not one already.
    ///
    /// When the entity is already a member, the stored member is kept and
    /// the passed value is dropped. Replacing an existing leader follows
    /// the colony's [`LeaderSuccession`] policy.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NotALeader`] if `entity` is not of kind
    /// [`EntityKind::Leader`].
    pub fn set_leader(&mut self, entity: Entity) -> Result<(), SetupError> {
        if entity.kind() != EntityKind::Leader {
            return Err(SetupError::NotALeader {
                name: entity.name().to_owned(),
                kind: entity.kind(),
            });
        }
        let id = entity.id();
        if self.member(id).is_none() {
            self.members.push(entity);
        }
        self.install_leader(id);
        Ok(())
    }

    /// Promote an existing member to leader.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownMember`] if no member has this id, or
    /// [`SetupError::NotALeader`] if the member is not leader-kind.
    pub fn appoint_leader(&mut self, id: EntityId) -> Result<(), SetupError> {
        let member = self.member(id).ok_or(SetupError::UnknownMember(id))?;
        if member.kind() != EntityKind::Leader {
            return Err(SetupError::NotALeader {
                name: member.name().to_owned(),
                kind: member.kind(),
            });
        }
        self.install_leader(id);
        Ok(())
    }

    fn install_leader(&mut self, id: EntityId) {
        let previous = self.leader.replace(id);
        if self.succession == LeaderSuccession::Depose
            && let Some(former) = previous
            && former != id
        {
            self.members.retain(|m| m.id() != former);
            for room in &mut self.rooms {
                room.release(former);
            }
        }
    }

    /// Attach a room to this colony.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Place a member in one of this colony's rooms.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownMember`] if `entity` is not a member,
    /// [`SetupError::UnknownRoom`] if no room has this name, or
    /// [`SetupError::RoomFull`] if the room is at capacity.
    pub fn assign_room(&mut self, room_name: &str, entity: EntityId) -> Result<(), SetupError> {
        if self.member(entity).is_none() {
            return Err(SetupError::UnknownMember(entity));
        }
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.name() == room_name)
            .ok_or_else(|| SetupError::UnknownRoom(room_name.to_owned()))?;
        room.admit(entity)
    }

    // -----------------------------------------------------------------------
    // Tick
    // -----------------------------------------------------------------------

    /// Advance every member by one tick and charge their food.
    ///
    /// Does nothing unless the colony [`is_alive`](Self::is_alive).
    pub fn step(&mut self, config: &BehaviorConfig) -> ColonyStepOutcome {
        if !self.is_alive() {
            return ColonyStepOutcome::Idle;
        }

        let before = self.resource_pool;
        for member in &mut self.members {
            member.step(config);
            if !member.withdraw(&mut self.resource_pool) {
                self.active = false;
                return ColonyStepOutcome::Exhausted {
                    member: member.id(),
                    member_name: member.name().to_owned(),
                    needed: member.consumption_rate(),
                    available: self.resource_pool,
                };
            }
        }

        ColonyStepOutcome::Advanced {
            consumed: before.saturating_sub(self.resource_pool),
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Active and led.
    pub const fn is_alive(&self) -> bool {
        self.active && self.leader.is_some()
    }

    /// Whether the colony has not yet failed a withdrawal.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Colony identifier.
    pub const fn id(&self) -> ColonyId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Species this colony belongs to.
    pub const fn species(&self) -> SpeciesId {
        self.species
    }

    /// Remaining food.
    pub const fn resource_pool(&self) -> u32 {
        self.resource_pool
    }

    /// Replacement policy for leaders.
    pub const fn succession(&self) -> LeaderSuccession {
        self.succession
    }

    /// Id of the current leader.
    pub const fn leader_id(&self) -> Option<EntityId> {
        self.leader
    }

    /// The current leader.
    pub fn leader(&self) -> Option<&Entity> {
        self.leader.and_then(|id| self.member(id))
    }

    /// Members in iteration order.
    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    /// Look up a member by id.
    pub fn member(&self, id: EntityId) -> Option<&Entity> {
        self.members.iter().find(|m| m.id() == id)
    }

    /// Rooms attached to this colony.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Copy the observable state of this colony.
    pub fn snapshot(&self) -> ColonySnapshot {
        ColonySnapshot {
            id: self.id,
            name: self.name.clone(),
            species: self.species,
            resource_pool: self.resource_pool,
            active: self.active,
            alive: self.is_alive(),
            leader: self.leader,
            members: self.members.iter().map(Entity::snapshot).collect(),
        }
    }
}
