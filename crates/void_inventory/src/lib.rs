//! Void Inventory - Item Stacks and Containers
//!
//! This crate provides the stacking rules behind slot-based inventories.
//!
//! # Features
//!
//! - Item definitions with per-item max stack sizes
//! - Stacks that are either empty or hold units of one definition
//! - Clamped merge arithmetic with overflow/shortfall remainders
//! - Fixed-size containers with deterministic first-fit insertion
//! - Partial withdrawal and stack splitting
//! - Catalog of shared definitions
//! - Single-owner mailbox for multi-threaded producers
//!
//! # Example
//!
//! ```
//! use void_inventory::prelude::*;
//!
//! let mut catalog = ItemCatalog::new();
//! catalog.register(ItemDefinition::new("arrow", 20)).unwrap();
//!
//! let mut container = ItemContainer::new(4);
//! let outcome = container.try_insert_stack(catalog.stack("arrow", 15).unwrap());
//! assert_eq!(outcome.index, Some(0));
//!
//! // First slot can only take 5 more; the rest comes back
//! let outcome = container.try_insert_stack(catalog.stack("arrow", 12).unwrap());
//! assert_eq!(outcome.index, Some(0));
//! assert_eq!(outcome.remainder.quantity(), 7);
//! ```

pub mod catalog;
pub mod component;
pub mod container;
pub mod definition;
pub mod error;
pub mod mailbox;
pub mod merge;
pub mod slot;
pub mod stack;

/// Quantity of units in a stack
pub type StackSize = u16;

pub mod prelude {
    pub use crate::catalog::ItemCatalog;
    pub use crate::component::{ContainerConfig, ItemContainerComponent};
    pub use crate::container::{DistributeOutcome, InsertOutcome, ItemContainer};
    pub use crate::definition::{ItemDefinition, ItemId};
    pub use crate::error::{InventoryError, Result};
    pub use crate::mailbox::ContainerHandle;
    pub use crate::merge::{merge_count, MergeCount};
    pub use crate::slot::{ItemSlot, MergeOutcome};
    pub use crate::stack::{ItemStack, OccupiedStack};
    pub use crate::StackSize;
}

pub use prelude::*;
