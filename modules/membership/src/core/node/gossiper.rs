//! Abstraction over the gossip lifecycle.

/// Starts and stops the task that drives a [`MembershipNode`](super::MembershipNode).
pub trait Gossiper: Send {
  /// Starts gossip dissemination.
  ///
  /// # Errors
  ///
  /// Returns an error when already started or misconfigured.
  fn start(&mut self) -> Result<(), &'static str>;

  /// Stops gossip dissemination.
  ///
  /// # Errors
  ///
  /// Returns an error when not started.
  fn stop(&mut self) -> Result<(), &'static str>;
}
