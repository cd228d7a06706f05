//! Fixed-size container of item slots

use crate::definition::ItemDefinition;
use crate::slot::{ItemSlot, MergeOutcome};
use crate::stack::ItemStack;
use crate::StackSize;
use std::sync::Arc;

/// Result of inserting a stack into a container
#[derive(Debug, Clone)]
pub struct InsertOutcome {
    /// Slot that accepted the stack, `None` if no slot changed
    pub index: Option<usize>,
    /// What is left of the incoming stack
    pub remainder: ItemStack,
}

impl InsertOutcome {
    /// Check if any slot accepted units
    #[inline]
    pub fn is_inserted(&self) -> bool {
        self.index.is_some()
    }
}

/// Result of distributing a stack over as many slots as needed
#[derive(Debug, Clone)]
pub struct DistributeOutcome {
    /// Slots that accepted units, in the order they were filled
    pub indices: Vec<usize>,
    /// Units no slot could take
    pub remainder: ItemStack,
}

impl DistributeOutcome {
    /// Check if the whole stack found a place
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remainder.is_depleted()
    }
}

/// Fixed-capacity ordered collection of slots
///
/// Slot `i` always sits at index `i`; the slot count never changes after
/// construction. Indexing past the end panics.
#[derive(Debug, Clone)]
pub struct ItemContainer {
    slots: Box<[ItemSlot]>,
}

impl ItemContainer {
    /// Create a container with `capacity` empty slots. `capacity` must be
    /// positive.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "container capacity must be positive");
        Self {
            slots: (0..capacity).map(ItemSlot::new).collect(),
        }
    }

    /// Number of slots
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the container has no slots
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if `index` addresses a slot
    #[inline]
    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.slots.len()
    }

    /// Check if the slot at `index` holds nothing
    pub fn is_slot_empty(&self, index: usize) -> bool {
        self.slot(index).is_empty()
    }

    /// Get the slot at `index`
    pub fn slot(&self, index: usize) -> &ItemSlot {
        self.check_index(index);
        &self.slots[index]
    }

    /// Contents of the slot at `index`
    pub fn stack(&self, index: usize) -> &ItemStack {
        self.slot(index).stack()
    }

    /// All slots in index order
    pub fn slots(&self) -> impl Iterator<Item = &ItemSlot> {
        self.slots.iter()
    }

    /// Occupied slots as `(index, stack)`
    pub fn items(&self) -> impl Iterator<Item = (usize, &ItemStack)> {
        self.slots
            .iter()
            .filter(|slot| !slot.is_empty())
            .map(|slot| (slot.index(), slot.stack()))
    }

    /// Total units of `definition` across all slots
    pub fn count_of(&self, definition: &Arc<ItemDefinition>) -> u64 {
        self.slots
            .iter()
            .filter(|slot| slot.is_definition_equal(definition))
            .map(|slot| u64::from(slot.stack().quantity()))
            .sum()
    }

    /// Check if the slot at `index` would take any of `incoming`
    pub fn can_merge_stack(&self, index: usize, incoming: &ItemStack) -> bool {
        self.slot(index).can_merge(incoming)
    }

    /// Check if some slot would take any of `incoming`
    pub fn can_insert_stack(&self, incoming: &ItemStack) -> bool {
        self.slots.iter().any(|slot| slot.can_merge(incoming))
    }

    /// Merge `incoming` into the slot at `index`
    pub fn try_merge_stack(&mut self, index: usize, incoming: ItemStack) -> MergeOutcome {
        self.check_index(index);
        self.slots[index].try_merge_stack(incoming)
    }

    /// Put `incoming` down on the slot at `index`, merging when the stacks
    /// are compatible and swapping them when they are not
    pub fn try_drop_stack(&mut self, index: usize, incoming: ItemStack) -> MergeOutcome {
        self.check_index(index);
        self.slots[index].try_drop_stack(incoming)
    }

    /// Withdraw the whole stack at `index`
    pub fn try_pickup_stack(&mut self, index: usize) -> Option<ItemStack> {
        self.check_index(index);
        let picked = self.slots[index].try_pickup_stack();
        if let Some(stack) = &picked {
            log::debug!("Picked up {} units from slot {}", stack.quantity(), index);
        }
        picked
    }

    /// Withdraw up to `amount` units from the slot at `index`.
    ///
    /// Takes everything if `amount` exceeds what the slot holds; a drained
    /// slot becomes empty. Returns `None` for an empty slot or `amount == 0`.
    pub fn try_take_from_stack(&mut self, index: usize, amount: StackSize) -> Option<ItemStack> {
        self.check_index(index);
        let taken = self.slots[index].take_units(amount);
        if let Some(stack) = &taken {
            log::debug!(
                "Took {} of {} requested units from slot {}",
                stack.quantity(),
                amount,
                index
            );
        }
        taken
    }

    /// Withdraw half the units at `index`, rounding the taken half up
    pub fn try_split_stack(&mut self, index: usize) -> Option<ItemStack> {
        let quantity = self.stack(index).quantity();
        self.try_take_from_stack(index, quantity.div_ceil(2))
    }

    /// Insert `incoming` into the first slot, in ascending index order,
    /// that accepts any of it.
    ///
    /// Stops at that slot even when it only absorbs part of the stack; the
    /// rest comes back in the outcome. Use
    /// [`try_insert_stack_all`](Self::try_insert_stack_all) to keep going.
    pub fn try_insert_stack(&mut self, mut incoming: ItemStack) -> InsertOutcome {
        for slot in self.slots.iter_mut() {
            let outcome = slot.try_merge_stack(incoming);
            if outcome.changed {
                log::debug!(
                    "Inserted into slot {}, {} units left over",
                    slot.index(),
                    outcome.remainder.quantity()
                );
                return InsertOutcome {
                    index: Some(slot.index()),
                    remainder: outcome.remainder,
                };
            }
            incoming = outcome.remainder;
        }

        log::debug!("No slot accepted {} units", incoming.quantity());
        InsertOutcome {
            index: None,
            remainder: incoming,
        }
    }

    /// Distribute `incoming` over as many slots as needed.
    ///
    /// Repeats [`try_insert_stack`](Self::try_insert_stack) until the stack
    /// is used up or no slot accepts any more, so slots fill in the same
    /// ascending order.
    pub fn try_insert_stack_all(&mut self, incoming: ItemStack) -> DistributeOutcome {
        let mut indices = Vec::new();
        let mut remainder = incoming;

        loop {
            let outcome = self.try_insert_stack(remainder);
            remainder = outcome.remainder;
            match outcome.index {
                Some(index) => indices.push(index),
                None => break,
            }
            if remainder.is_depleted() {
                break;
            }
        }

        DistributeOutcome { indices, remainder }
    }

    #[inline]
    fn check_index(&self, index: usize) {
        debug_assert!(
            self.is_valid_index(index),
            "slot index {} out of range for container of {}",
            index,
            self.slots.len()
        );
    }
}
