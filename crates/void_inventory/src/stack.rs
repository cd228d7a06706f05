//! Item stacks

use crate::definition::ItemDefinition;
use crate::error::{InventoryError, Result};
use crate::StackSize;
use std::sync::Arc;

/// Some units of one definition
///
/// Fields are private so every quantity write goes through the bound check.
#[derive(Debug, Clone)]
pub struct OccupiedStack {
    definition: Arc<ItemDefinition>,
    quantity: StackSize,
}

impl OccupiedStack {
    /// Definition this stack holds
    #[inline]
    pub fn definition(&self) -> &Arc<ItemDefinition> {
        &self.definition
    }

    /// Units held
    #[inline]
    pub fn quantity(&self) -> StackSize {
        self.quantity
    }

    /// Capacity of this stack
    #[inline]
    pub fn max_size(&self) -> StackSize {
        self.definition.max_stack_size
    }

    /// Set the quantity. Must stay within `0..=max_size()`.
    pub fn set_quantity(&mut self, quantity: StackSize) {
        debug_assert!(
            quantity <= self.max_size(),
            "quantity {} exceeds max stack size {} of '{}'",
            quantity,
            self.max_size(),
            self.definition.id
        );
        self.quantity = quantity;
    }
}

/// Either nothing, or some units of one definition
#[derive(Debug, Clone, Default)]
pub enum ItemStack {
    /// No item
    #[default]
    Empty,
    /// Units of a definition
    Occupied(OccupiedStack),
}

impl ItemStack {
    /// Create a stack of `quantity` units. `quantity` must not exceed the
    /// definition's max stack size.
    pub fn new(definition: Arc<ItemDefinition>, quantity: StackSize) -> Self {
        let mut stack = OccupiedStack {
            definition,
            quantity: 0,
        };
        stack.set_quantity(quantity);
        Self::Occupied(stack)
    }

    /// Create a stack, rejecting quantities above the max stack size
    pub fn try_new(definition: Arc<ItemDefinition>, quantity: StackSize) -> Result<Self> {
        if quantity > definition.max_stack_size {
            return Err(InventoryError::QuantityOutOfRange {
                item: definition.id.to_string(),
                quantity,
                max: definition.max_stack_size,
            });
        }
        Ok(Self::new(definition, quantity))
    }

    /// Check if this is the empty stack
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check if this stack holds zero units (always true for `Empty`)
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.quantity() == 0
    }

    /// Check if no more units fit (always true for `Empty`, whose
    /// max size is 0)
    #[inline]
    pub fn is_full(&self) -> bool {
        self.quantity() == self.max_size()
    }

    /// Units held, 0 for `Empty`
    #[inline]
    pub fn quantity(&self) -> StackSize {
        match self {
            Self::Empty => 0,
            Self::Occupied(stack) => stack.quantity,
        }
    }

    /// Capacity, 0 for `Empty`
    #[inline]
    pub fn max_size(&self) -> StackSize {
        match self {
            Self::Empty => 0,
            Self::Occupied(stack) => stack.max_size(),
        }
    }

    /// Definition held, `None` for `Empty`
    #[inline]
    pub fn definition(&self) -> Option<&Arc<ItemDefinition>> {
        match self {
            Self::Empty => None,
            Self::Occupied(stack) => Some(&stack.definition),
        }
    }

    /// Borrow the occupied payload
    #[inline]
    pub fn as_occupied(&self) -> Option<&OccupiedStack> {
        match self {
            Self::Empty => None,
            Self::Occupied(stack) => Some(stack),
        }
    }

    /// Mutably borrow the occupied payload
    #[inline]
    pub fn as_occupied_mut(&mut self) -> Option<&mut OccupiedStack> {
        match self {
            Self::Empty => None,
            Self::Occupied(stack) => Some(stack),
        }
    }

    /// Copy this stack with a different quantity.
    ///
    /// `quantity` must lie in `0..=max_size()`; on `Empty` the only valid
    /// quantity is 0 and the copy is `Empty`.
    pub fn with_quantity(&self, quantity: StackSize) -> Self {
        match self {
            Self::Empty => {
                debug_assert!(quantity == 0, "cannot give an empty stack {} units", quantity);
                Self::Empty
            }
            Self::Occupied(stack) => Self::new(Arc::clone(&stack.definition), quantity),
        }
    }

    /// Copy this stack with a different quantity, rejecting out-of-range values
    pub fn try_with_quantity(&self, quantity: StackSize) -> Result<Self> {
        match self {
            Self::Empty if quantity == 0 => Ok(Self::Empty),
            Self::Empty => Err(InventoryError::QuantityOutOfRange {
                item: String::from("<empty>"),
                quantity,
                max: 0,
            }),
            Self::Occupied(stack) => Self::try_new(Arc::clone(&stack.definition), quantity),
        }
    }

    /// Check if two stacks may be combined: either is `Empty`, or both
    /// hold the same definition (by reference)
    pub fn can_stack_with(&self, other: &ItemStack) -> bool {
        match (self, other) {
            (Self::Occupied(a), Self::Occupied(b)) => Arc::ptr_eq(&a.definition, &b.definition),
            _ => true,
        }
    }

    /// Check if this stack holds exactly `definition` (by reference)
    pub fn is_definition_equal(&self, definition: &Arc<ItemDefinition>) -> bool {
        match self {
            Self::Empty => false,
            Self::Occupied(stack) => Arc::ptr_eq(&stack.definition, definition),
        }
    }
}
