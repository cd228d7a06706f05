//! Single-owner access to a container from several threads
//!
//! The container lives on its own thread and applies commands one at a
//! time in arrival order, so insertion keeps its plain ascending scan.
//! Producers talk to it through a cloneable [`ContainerHandle`].

use crate::container::{DistributeOutcome, InsertOutcome, ItemContainer};
use crate::error::{InventoryError, Result};
use crate::slot::MergeOutcome;
use crate::stack::ItemStack;
use crossbeam_channel::{Receiver, Sender};
use std::thread::{self, JoinHandle};

enum Command {
    Merge {
        index: usize,
        incoming: ItemStack,
        reply: Sender<MergeOutcome>,
    },
    Drop {
        index: usize,
        incoming: ItemStack,
        reply: Sender<MergeOutcome>,
    },
    Pickup {
        index: usize,
        reply: Sender<Option<ItemStack>>,
    },
    Insert {
        incoming: ItemStack,
        reply: Sender<InsertOutcome>,
    },
    InsertAll {
        incoming: ItemStack,
        reply: Sender<DistributeOutcome>,
    },
    Snapshot {
        reply: Sender<ItemContainer>,
    },
    Shutdown,
}

/// Cloneable handle to a container owned by a mailbox thread
///
/// Slot indices are checked against the container's capacity before a
/// command is queued; a bad index panics the caller, not the owner.
#[derive(Debug, Clone)]
pub struct ContainerHandle {
    commands: Sender<Command>,
    capacity: usize,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::Merge { .. } => "Merge",
            Command::Drop { .. } => "Drop",
            Command::Pickup { .. } => "Pickup",
            Command::Insert { .. } => "Insert",
            Command::InsertAll { .. } => "InsertAll",
            Command::Snapshot { .. } => "Snapshot",
            Command::Shutdown => "Shutdown",
        };
        f.write_str(name)
    }
}

/// Move `container` onto a new owner thread.
///
/// The join handle yields the container once every handle is dropped or
/// [`ContainerHandle::shutdown`] is called.
pub fn spawn(container: ItemContainer) -> Result<(ContainerHandle, JoinHandle<ItemContainer>)> {
    let capacity = container.len();
    let (commands, inbox) = crossbeam_channel::unbounded();
    let owner = thread::Builder::new()
        .name(String::from("item-container"))
        .spawn(move || run(container, inbox))
        .map_err(|e| InventoryError::MailboxSpawn(e.to_string()))?;
    log::info!("Container mailbox started with {} slots", capacity);
    Ok((ContainerHandle { commands, capacity }, owner))
}

fn run(mut container: ItemContainer, inbox: Receiver<Command>) -> ItemContainer {
    for command in inbox.iter() {
        log::trace!("Mailbox command: {:?}", command);
        // A failed reply means the caller stopped waiting; the change stands
        let delivered = match command {
            Command::Merge {
                index,
                incoming,
                reply,
            } => reply.send(container.try_merge_stack(index, incoming)).is_ok(),
            Command::Drop {
                index,
                incoming,
                reply,
            } => reply.send(container.try_drop_stack(index, incoming)).is_ok(),
            Command::Pickup { index, reply } => {
                reply.send(container.try_pickup_stack(index)).is_ok()
            }
            Command::Insert { incoming, reply } => {
                reply.send(container.try_insert_stack(incoming)).is_ok()
            }
            Command::InsertAll { incoming, reply } => {
                reply.send(container.try_insert_stack_all(incoming)).is_ok()
            }
            Command::Snapshot { reply } => reply.send(container.clone()).is_ok(),
            Command::Shutdown => break,
        };
        if !delivered {
            log::warn!("Container mailbox reply dropped");
        }
    }
    log::info!("Container mailbox stopped");
    container
}

impl ContainerHandle {
    fn request<T>(&self, build: impl FnOnce(Sender<T>) -> Command) -> Result<T> {
        let (reply, response) = crossbeam_channel::bounded(1);
        self.commands
            .send(build(reply))
            .map_err(|_| InventoryError::MailboxClosed)?;
        response.recv().map_err(|_| InventoryError::MailboxClosed)
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.capacity,
            "slot index {} out of range for container of {}",
            index,
            self.capacity
        );
    }

    /// Number of slots in the owned container
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Merge into the slot at `index`
    pub fn merge(&self, index: usize, incoming: ItemStack) -> Result<MergeOutcome> {
        self.check_index(index);
        self.request(|reply| Command::Merge {
            index,
            incoming,
            reply,
        })
    }

    /// Drop onto the slot at `index`, swapping with an incompatible stack
    pub fn drop_stack(&self, index: usize, incoming: ItemStack) -> Result<MergeOutcome> {
        self.check_index(index);
        self.request(|reply| Command::Drop {
            index,
            incoming,
            reply,
        })
    }

    /// Withdraw the stack at `index`
    pub fn pickup(&self, index: usize) -> Result<Option<ItemStack>> {
        self.check_index(index);
        self.request(|reply| Command::Pickup { index, reply })
    }

    /// Insert into the first accepting slot
    pub fn insert(&self, incoming: ItemStack) -> Result<InsertOutcome> {
        self.request(|reply| Command::Insert { incoming, reply })
    }

    /// Insert across as many slots as needed
    pub fn insert_all(&self, incoming: ItemStack) -> Result<DistributeOutcome> {
        self.request(|reply| Command::InsertAll { incoming, reply })
    }

    /// Copy of the container as of this command
    pub fn snapshot(&self) -> Result<ItemContainer> {
        self.request(|reply| Command::Snapshot { reply })
    }

    /// Stop the owner thread. Commands already queued are applied first.
    pub fn shutdown(&self) -> Result<()> {
        self.commands
            .send(Command::Shutdown)
            .map_err(|_| InventoryError::MailboxClosed)
    }
}
