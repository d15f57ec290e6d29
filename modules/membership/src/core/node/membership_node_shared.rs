//! Shared wrapper for MembershipNode.

use alloc::sync::Arc;

use spin::Mutex;

use super::MembershipNode;

/// Shared handle enabling interior mutability for [`MembershipNode`].
///
/// Every access takes the same lock, so the node keeps a single mutation timeline even when a
/// background task and callers both hold the handle.
pub struct MembershipNodeShared<R> {
  inner: Arc<Mutex<MembershipNode<R>>>,
}

impl<R> MembershipNodeShared<R> {
  /// Wraps a node in a shared mutex.
  #[must_use]
  pub fn new(node: MembershipNode<R>) -> Self {
    Self { inner: Arc::new(Mutex::new(node)) }
  }

  /// Runs `f` with shared access to the node.
  pub fn with_read<T>(&self, f: impl FnOnce(&MembershipNode<R>) -> T) -> T {
    let guard = self.inner.lock();
    f(&guard)
  }

  /// Runs `f` with exclusive access to the node.
  pub fn with_write<T>(&self, f: impl FnOnce(&mut MembershipNode<R>) -> T) -> T {
    let mut guard = self.inner.lock();
    f(&mut guard)
  }
}

impl<R> Clone for MembershipNodeShared<R> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}
