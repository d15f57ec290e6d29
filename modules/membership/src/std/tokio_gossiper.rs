//! Tokio-based gossiper implementation.

#[cfg(test)]
mod tests;

use alloc::sync::Arc;
use core::time::Duration;

use rand::Rng;
use tokio::{runtime::Handle, sync::oneshot, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
  core::node::{Gossiper, MembershipClock, MembershipNodeShared},
  std::{tokio_gossip_transport::TokioGossipTransport, tokio_gossiper_config::TokioGossiperConfig},
};

/// Drives a [`MembershipNode`](crate::core::node::MembershipNode) from a tokio interval.
///
/// Every tick polls the node with the current clock reading. Transport failures are logged and
/// the loop keeps ticking.
pub struct TokioGossiper<R> {
  config:    TokioGossiperConfig,
  node:      MembershipNodeShared<R>,
  transport: Option<TokioGossipTransport>,
  clock:     Arc<dyn MembershipClock>,
  runtime:   Handle,
  shutdown:  Option<oneshot::Sender<()>>,
  task:      Option<JoinHandle<()>>,
}

impl<R> TokioGossiper<R>
where
  R: Rng + Send + 'static,
{
  /// Creates a new Tokio gossiper.
  ///
  /// `clock` must be the time source the node was created with.
  #[must_use]
  pub fn new(
    config: TokioGossiperConfig,
    node: MembershipNodeShared<R>,
    transport: TokioGossipTransport,
    clock: Arc<dyn MembershipClock>,
    runtime: Handle,
  ) -> Self {
    Self { config, node, transport: Some(transport), clock, runtime, shutdown: None, task: None }
  }

  /// Returns the shared node handle.
  #[must_use]
  pub const fn node(&self) -> &MembershipNodeShared<R> {
    &self.node
  }
}

impl<R> Gossiper for TokioGossiper<R>
where
  R: Rng + Send + 'static,
{
  fn start(&mut self) -> Result<(), &'static str> {
    if self.task.is_some() {
      return Err("already started");
    }
    if self.config.tick_interval == Duration::from_millis(0) {
      return Err("tick_interval must be > 0");
    }
    let mut transport = self.transport.take().ok_or("transport missing")?;
    let node = self.node.clone();
    let clock = self.clock.clone();
    let tick_interval = self.config.tick_interval;
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

    let task = self.runtime.spawn(async move {
      let mut interval = tokio::time::interval(tick_interval);
      loop {
        tokio::select! {
          _ = &mut shutdown_rx => {
            break;
          }
          _ = interval.tick() => {
            let now_ms = clock.now_ms();
            if let Err(error) = node.with_write(|node| node.poll(now_ms, &mut transport)) {
              warn!(%error, "gossip poll failed");
            }
          }
        }
      }
      debug!("gossiper stopped");
    });
    self.shutdown = Some(shutdown_tx);
    self.task = Some(task);
    Ok(())
  }

  fn stop(&mut self) -> Result<(), &'static str> {
    let shutdown = self.shutdown.take().ok_or("not started")?;
    let _ = shutdown.send(());
    if let Some(task) = self.task.take() {
      let _ = self.runtime.spawn(async move {
        let _ = task.await;
      });
    }
    Ok(())
  }
}

impl<R> Drop for TokioGossiper<R> {
  fn drop(&mut self) {
    if let Some(shutdown) = self.shutdown.take() {
      let _ = shutdown.send(());
    }
  }
}
