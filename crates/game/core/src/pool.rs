//! Bounded object pool with least-recently-dispensed recycling.
//!
//! A [`Pool`] owns a fixed-then-resizable sequence of homogeneous entities
//! (projectiles, particles, pickups). Dispensing prefers entities whose
//! active flag is down; when every slot is in use the pool evicts the slot
//! the recency cursor points at, so under sustained pressure slots are
//! recycled round-robin in dispense order.
//!
//! The pool is the sole owner of its entities but deliberately does not
//! enforce the Free → InUse → Free lifecycle: it reads the active flag to
//! pick slots and trusts callers to raise the flag when they initialize a
//! dispensed entity. The one exception is eviction, where the pool forces
//! the previous holder's entity inactive before re-dispensing it so a stale
//! timer cannot keep mutating a recycled slot.

/// A recyclable entity managed by a [`Pool`].
///
/// Implementors carry their own `active` flag; the pool only ever reads it
/// via [`Recyclable::is_active`] and lowers it via [`Recyclable::deactivate`]
/// on eviction. Raising the flag is the dispensing caller's job.
pub trait Recyclable {
    /// Whether the entity is currently held by a caller.
    fn is_active(&self) -> bool;

    /// Returns the entity to the free state, cancelling any in-flight
    /// timers or motion it carries.
    fn deactivate(&mut self);
}

/// Index of a slot inside its owning [`Pool`].
///
/// Handles are only meaningful for the pool that produced them; they stay
/// valid across dispenses (slots are never removed from the middle) but a
/// shrink can truncate the slot they point at, after which lookups return
/// `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(u32);

impl SlotId {
    /// Position of the slot in the pool's sequence.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// Result of a successful [`Pool::acquire`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Acquired {
    /// The dispensed slot. Not yet activated; the caller initializes the
    /// entity and raises its active flag.
    pub slot: SlotId,
    /// True when the slot was reclaimed from a previous holder rather than
    /// found free. The previous holder's entity has already been forced
    /// inactive; callers that care (logging, diagnostics) can tell the two
    /// cases apart here.
    pub evicted: bool,
}

/// Bounded pool of recyclable entities of one kind.
///
/// Invariants:
/// - `capacity() == slots.len()` at all times
/// - the recency cursor stays in `0..capacity()` whenever capacity is
///   non-zero
/// - slots are only appended (grow) or truncated from the tail (shrink);
///   an entity's slot index never changes while it exists
#[derive(Debug)]
pub struct Pool<T> {
    slots: Vec<T>,
    cursor: usize,
}

impl<T: Recyclable> Pool<T> {
    /// Creates an empty pool. Size it with [`Pool::resize_with`].
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            cursor: 0,
        }
    }

    /// Current number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots whose active flag is raised.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_active()).count()
    }

    /// Resizes the pool to exactly `new_size` slots.
    ///
    /// No-op when the size already matches. Growth appends entities
    /// produced by `fill` (expected inactive); shrink truncates from the
    /// tail, destroying the highest-indexed entities regardless of whether
    /// they are still in flight, and resets the recency cursor to 0 if it
    /// fell out of range. The operation never removes a slot from the
    /// middle, so surviving handles keep pointing at the same entities.
    pub fn resize_with(&mut self, new_size: usize, fill: impl FnMut() -> T) {
        if new_size == self.slots.len() {
            return;
        }
        self.slots.resize_with(new_size, fill);
        if self.cursor >= new_size {
            self.cursor = 0;
        }
    }

    /// Dispenses a slot, preferring free entities over eviction.
    ///
    /// Scans slots in index order and returns the first whose active flag
    /// is down. If every slot is in use, reclaims the slot under the
    /// recency cursor (forcing its entity inactive first) and advances the
    /// cursor one step with wrap-around. Returns `None` only when the pool
    /// has zero capacity.
    pub fn acquire(&mut self) -> Option<Acquired> {
        if self.slots.is_empty() {
            return None;
        }
        if let Some(index) = self.slots.iter().position(|slot| !slot.is_active()) {
            return Some(Acquired {
                slot: SlotId(index as u32),
                evicted: false,
            });
        }
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.slots.len();
        // Cancel the previous holder before handing the slot out again.
        self.slots[index].deactivate();
        Some(Acquired {
            slot: SlotId(index as u32),
            evicted: true,
        })
    }

    /// Looks up a dispensed slot.
    pub fn get(&self, slot: SlotId) -> Option<&T> {
        self.slots.get(slot.index())
    }

    /// Looks up a dispensed slot for initialization or mutation.
    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut T> {
        self.slots.get_mut(slot.index())
    }

    /// Iterates every slot, active or not.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    /// Mutable sweep over every slot, used by per-tick entity updates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }
}

impl<T: Recyclable> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}
