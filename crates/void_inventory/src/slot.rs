//! Single storage cell

use crate::definition::ItemDefinition;
use crate::merge::merge_count;
use crate::stack::ItemStack;
use crate::StackSize;
use std::sync::Arc;

/// Result of merging a stack into a slot
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Whether the slot's contents changed
    pub changed: bool,
    /// What is left of the incoming stack
    pub remainder: ItemStack,
}

/// One storage cell holding at most one stack
#[derive(Debug, Clone)]
pub struct ItemSlot {
    index: usize,
    stack: ItemStack,
}

impl ItemSlot {
    /// Create an empty slot at `index`
    pub fn new(index: usize) -> Self {
        Self {
            index,
            stack: ItemStack::Empty,
        }
    }

    /// Position within the owning container
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current contents
    #[inline]
    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    /// Check if the slot holds nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Check if `incoming` could add anything to this slot
    pub fn can_merge(&self, incoming: &ItemStack) -> bool {
        if self.stack.is_empty() {
            return true;
        }
        self.stack.can_stack_with(incoming) && !self.stack.is_full()
    }

    /// Check if the slot holds exactly `definition`
    pub fn is_definition_equal(&self, definition: &Arc<ItemDefinition>) -> bool {
        self.stack.is_definition_equal(definition)
    }

    /// Merge `incoming` into this slot.
    ///
    /// An empty slot adopts the whole stack. A compatible slot absorbs as
    /// many units as fit and hands the rest back, or `Empty` once nothing
    /// is left. Units are conserved: slot quantity plus remainder quantity
    /// is the same before and after.
    pub fn try_merge_stack(&mut self, incoming: ItemStack) -> MergeOutcome {
        if self.stack.is_empty() {
            self.stack = incoming;
            log::trace!("Slot {} adopted {:?}", self.index, self.stack.definition().map(|d| &d.id));
            return MergeOutcome {
                changed: true,
                remainder: ItemStack::Empty,
            };
        }

        let (contained, mut arriving) = match (self.stack.as_occupied_mut(), incoming) {
            (Some(contained), ItemStack::Occupied(arriving))
                if Arc::ptr_eq(contained.definition(), arriving.definition()) =>
            {
                (contained, arriving)
            }
            (_, incoming) => {
                // Incompatible, or nothing to add
                return MergeOutcome {
                    changed: false,
                    remainder: incoming,
                };
            }
        };

        let merge = merge_count(
            contained.quantity(),
            i32::from(arriving.quantity()),
            contained.max_size(),
        );

        if merge.changed {
            contained.set_quantity(merge.resulting_amount);
            arriving.set_quantity(merge.overflow());
        }
        log::trace!(
            "Slot {} merge {}: now {}, remainder {}",
            self.index,
            contained.definition().id,
            contained.quantity(),
            arriving.quantity()
        );

        let remainder = if arriving.quantity() == 0 {
            ItemStack::Empty
        } else {
            ItemStack::Occupied(arriving)
        };
        MergeOutcome {
            changed: merge.changed,
            remainder,
        }
    }

    /// Put `incoming` down on this slot.
    ///
    /// Compatible stacks merge as in [`try_merge_stack`](Self::try_merge_stack).
    /// Anything else trades places: the slot takes `incoming` and its previous
    /// stack comes back as the remainder.
    pub fn try_drop_stack(&mut self, incoming: ItemStack) -> MergeOutcome {
        if self.stack.can_stack_with(&incoming) {
            return self.try_merge_stack(incoming);
        }

        let previous = std::mem::replace(&mut self.stack, incoming);
        log::trace!(
            "Slot {} swapped {:?} for {:?}",
            self.index,
            previous.definition().map(|d| &d.id),
            self.stack.definition().map(|d| &d.id)
        );
        MergeOutcome {
            changed: true,
            remainder: previous,
        }
    }

    /// Withdraw the whole stack, leaving the slot empty.
    /// Returns `None` if the slot was already empty.
    pub fn try_pickup_stack(&mut self) -> Option<ItemStack> {
        if self.stack.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.stack))
    }

    /// Remove up to `amount` units, resetting the slot when it drains.
    /// Returns the withdrawn units, or `None` if nothing could be taken.
    pub(crate) fn take_units(&mut self, amount: StackSize) -> Option<ItemStack> {
        let contained = self.stack.as_occupied_mut()?;
        if amount == 0 {
            return None;
        }

        let before = contained.quantity();
        let merge = merge_count(before, -i32::from(amount), contained.max_size());
        if !merge.changed {
            return None;
        }

        contained.set_quantity(merge.resulting_amount);
        let taken = self.stack.with_quantity(before - merge.resulting_amount);
        if merge.resulting_amount == 0 {
            self.stack = ItemStack::Empty;
        }
        Some(taken)
    }
}
