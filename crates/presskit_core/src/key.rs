//! Instance identity allocation.
//!
//! Every mounted control holds an [`IdLease`] from an [`IdAllocator`]. The lease
//! pins the control's [`InstanceId`] for the life of the mount, so every
//! re-render reads the same id; dropping the lease (unmount) frees it.
//!
//! The allocator is an explicit service handed to a control when it mounts.
//! Ids are unique among instances concurrently mounted on the same allocator.
//!
//! # Example
//!
//! ```rust
//! use presskit_core::key::IdAllocator;
//!
//! let allocator = IdAllocator::new();
//! let first = allocator.allocate("button");
//! let second = allocator.allocate("button");
//! assert_ne!(first.id(), second.id());
//!
//! // Explicit id for deterministic lookups (tests, external labels)
//! let save = allocator.claim("settings-save").unwrap();
//! assert_eq!(save.id().as_str(), "settings-save");
//! assert_eq!(save.id().derive("label"), "settings-save-label");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ComposeError, Result};

/// Identifier of a mounted control instance
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create a derived id for a correlated sub-part.
    ///
    /// ```ignore
    /// let label_id = props.id.derive("label"); // "button-3-label"
    /// ```
    pub fn derive(&self, suffix: &str) -> String {
        format!("{}-{}", self.0, suffix)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InstanceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for InstanceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// How fresh ids are generated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `{prefix}-{n}` from a counter that never rewinds
    #[default]
    Sequential,
    /// `{prefix}-{uuid}` with a random v4 UUID
    Uuid,
}

struct AllocatorState {
    strategy: IdStrategy,
    next: u64,
    live: FxHashSet<InstanceId>,
}

impl AllocatorState {
    fn generate(&mut self, prefix: &str) -> InstanceId {
        loop {
            let candidate = match self.strategy {
                IdStrategy::Sequential => {
                    let n = self.next;
                    self.next += 1;
                    format!("{}-{}", prefix, n)
                }
                IdStrategy::Uuid => format!("{}-{}", prefix, Uuid::new_v4().as_simple()),
            };
            // A claimed explicit id may shadow a generated one
            let id = InstanceId(candidate);
            if !self.live.contains(&id) {
                return id;
            }
        }
    }
}

/// Issues instance ids and tracks which are currently mounted
///
/// Cloning yields another handle to the same allocator. Uses `Rc` since UI
/// is single-threaded.
#[derive(Clone)]
pub struct IdAllocator {
    state: Rc<RefCell<AllocatorState>>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Create an allocator issuing sequential ids
    pub fn new() -> Self {
        Self::with_strategy(IdStrategy::Sequential)
    }

    /// Create an allocator with an explicit strategy
    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self {
            state: Rc::new(RefCell::new(AllocatorState {
                strategy,
                next: 0,
                live: FxHashSet::default(),
            })),
        }
    }

    /// The strategy used for fresh ids
    pub fn strategy(&self) -> IdStrategy {
        self.state.borrow().strategy
    }

    /// Allocate a fresh id for a newly mounted instance
    pub fn allocate(&self, prefix: &str) -> IdLease {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.generate(prefix);
            state.live.insert(id.clone());
            id
        };
        tracing::debug!(id = %id, "allocated instance id");
        IdLease {
            id,
            allocator: self.clone(),
        }
    }

    /// Claim a caller-chosen id
    ///
    /// Fails if an instance holding that id is still mounted.
    pub fn claim(&self, id: impl Into<String>) -> Result<IdLease> {
        let id = InstanceId(id.into());
        {
            let mut state = self.state.borrow_mut();
            if !state.live.insert(id.clone()) {
                return Err(ComposeError::DuplicateId(id.0));
            }
        }
        tracing::debug!(id = %id, "claimed explicit instance id");
        Ok(IdLease {
            id,
            allocator: self.clone(),
        })
    }

    /// Whether an instance holding `id` is currently mounted
    pub fn is_mounted(&self, id: &str) -> bool {
        self.state.borrow().live.contains(id)
    }

    /// Number of currently mounted instances
    pub fn mounted_count(&self) -> usize {
        self.state.borrow().live.len()
    }

    fn release(&self, id: &InstanceId) {
        if self.state.borrow_mut().live.remove(id) {
            tracing::debug!(id = %id, "released instance id");
        }
    }
}

impl fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("IdAllocator")
            .field("strategy", &state.strategy)
            .field("mounted", &state.live.len())
            .finish()
    }
}

/// A mounted instance's hold on its id
///
/// Released back to the allocator on drop.
pub struct IdLease {
    id: InstanceId,
    allocator: IdAllocator,
}

impl IdLease {
    /// The leased id
    pub fn id(&self) -> &InstanceId {
        &self.id
    }
}

impl Drop for IdLease {
    fn drop(&mut self) {
        self.allocator.release(&self.id);
    }
}

impl fmt::Debug for IdLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdLease({})", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_in_loop() {
        let allocator = IdAllocator::new();
        let leases: Vec<_> = (0..5).map(|_| allocator.allocate("test")).collect();
        let unique: std::collections::HashSet<_> = leases.iter().map(|l| l.id().clone()).collect();
        assert_eq!(unique.len(), 5);
        assert_eq!(allocator.mounted_count(), 5);
    }

    #[test]
    fn test_sequential_format() {
        let allocator = IdAllocator::new();
        let a = allocator.allocate("button");
        let b = allocator.allocate("button");
        assert_eq!(a.id().as_str(), "button-0");
        assert_eq!(b.id().as_str(), "button-1");
    }

    #[test]
    fn test_sequential_never_reuses_after_release() {
        let allocator = IdAllocator::new();
        let first = allocator.allocate("button").id().clone();
        let second = allocator.allocate("button");
        assert_ne!(&first, second.id());
        assert!(!allocator.is_mounted(first.as_str()));
    }

    #[test]
    fn test_uuid_strategy() {
        let allocator = IdAllocator::with_strategy(IdStrategy::Uuid);
        let a = allocator.allocate("button");
        let b = allocator.allocate("button");
        assert!(a.id().as_str().starts_with("button-"));
        assert_eq!(a.id().as_str().len(), "button-".len() + 32);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_release_on_drop() {
        let allocator = IdAllocator::new();
        let lease = allocator.allocate("button");
        let id = lease.id().clone();
        assert!(allocator.is_mounted(id.as_str()));
        drop(lease);
        assert!(!allocator.is_mounted(id.as_str()));
        assert_eq!(allocator.mounted_count(), 0);
    }

    #[test]
    fn test_explicit_claim_collision() {
        let allocator = IdAllocator::new();
        let lease = allocator.claim("save").unwrap();
        assert!(matches!(
            allocator.claim("save"),
            Err(ComposeError::DuplicateId(id)) if id == "save"
        ));
        drop(lease);
        assert!(allocator.claim("save").is_ok());
    }

    #[test]
    fn test_generated_id_skips_claimed() {
        let allocator = IdAllocator::new();
        let _claimed = allocator.claim("button-0").unwrap();
        let lease = allocator.allocate("button");
        assert_eq!(lease.id().as_str(), "button-1");
    }

    #[test]
    fn test_derive() {
        let allocator = IdAllocator::new();
        let lease = allocator.claim("base").unwrap();
        assert_eq!(lease.id().derive("label"), "base-label");
        assert_eq!(lease.id().derive("icon"), "base-icon");
    }

    #[test]
    fn test_clone_shares_live_set() {
        let allocator = IdAllocator::new();
        let handle = allocator.clone();
        let _lease = handle.allocate("button");
        assert_eq!(allocator.mounted_count(), 1);
    }
}
