//! UDP gossip transport on tokio.


extern crate std;

use alloc::{
  collections::VecDeque,
  format,
  string::{String, ToString},
  sync::Arc,
  vec,
  vec::Vec,
};
use core::{fmt, time::Duration};
use std::net::{SocketAddr, UdpSocket as StdUdpSocket};

use spin::Mutex;
use tokio::{
  net::UdpSocket,
  runtime::Handle,
  sync::mpsc::{self, error::TrySendError},
  task::JoinHandle,
};
use tracing::{debug, warn};

use crate::{
  core::gossip::{GossipInbound, GossipOutbound, GossipTransport, GossipTransportError},
  std::{gossip_wire_message_v1::GossipWireMessageV1, tokio_gossip_transport_config::TokioGossipTransportConfig},
};

const OUTBOUND_BUFFER_SIZE: usize = 256;
const RECEIVE_RETRY_DELAY: Duration = Duration::from_millis(20);

type InboundQueue = Arc<Mutex<VecDeque<GossipInbound>>>;

struct OutboundDatagram {
  target: SocketAddr,
  bytes:  Vec<u8>,
}

/// One UDP datagram per gossip message.
///
/// A background task decodes received datagrams into a bounded queue that
/// [`poll_inbound`](GossipTransport::poll_inbound) drains. Sends never wait: encoded datagrams go
/// into a bounded channel drained by a writer task, and only a full channel is reported as
/// [`GossipTransportError::SendFailed`].
pub struct TokioGossipTransport {
  local_addr:         SocketAddr,
  max_datagram_bytes: usize,
  inbound:            InboundQueue,
  outbound:           mpsc::Sender<OutboundDatagram>,
  receiver:           JoinHandle<()>,
  writer:             JoinHandle<()>,
}

impl TokioGossipTransport {
  /// Binds the socket and starts the receive and writer tasks on `runtime`.
  ///
  /// # Errors
  ///
  /// Returns [`GossipTransportError::BindFailed`] when the socket cannot be bound or registered.
  pub fn bind(config: TokioGossipTransportConfig, runtime: Handle) -> Result<Self, GossipTransportError> {
    let bind_failed = |error: std::io::Error| GossipTransportError::BindFailed(format!("{}: {error}", config.bind_addr));
    let std_socket = StdUdpSocket::bind(config.bind_addr.as_str()).map_err(bind_failed)?;
    std_socket.set_nonblocking(true).map_err(bind_failed)?;
    let local_addr = std_socket.local_addr().map_err(bind_failed)?;
    let socket = {
      let _guard = runtime.enter();
      UdpSocket::from_std(std_socket).map_err(bind_failed)?
    };

    let socket = Arc::new(socket);
    let inbound: InboundQueue = Arc::new(Mutex::new(VecDeque::new()));
    let receiver = runtime.spawn(receive_loop(
      socket.clone(),
      inbound.clone(),
      config.max_datagram_bytes,
      config.inbound_capacity.max(1),
    ));
    let (outbound, queued) = mpsc::channel(OUTBOUND_BUFFER_SIZE);
    let writer = runtime.spawn(sender_loop(socket, queued));
    debug!(%local_addr, "gossip transport bound");

    Ok(Self { local_addr, max_datagram_bytes: config.max_datagram_bytes, inbound, outbound, receiver, writer })
  }

  /// Address the socket is bound to.
  #[must_use]
  pub const fn local_addr(&self) -> SocketAddr {
    self.local_addr
  }
}

impl GossipTransport for TokioGossipTransport {
  fn send(&mut self, outbound: GossipOutbound) -> Result<(), GossipTransportError> {
    let target: SocketAddr =
      outbound.target.parse().map_err(|_| GossipTransportError::InvalidTarget(outbound.target.clone()))?;
    let bytes = GossipWireMessageV1::from_message(&outbound.message).encode()?;
    if bytes.len() > self.max_datagram_bytes {
      return Err(GossipTransportError::Oversized { size: bytes.len(), limit: self.max_datagram_bytes });
    }
    self.outbound.try_send(OutboundDatagram { target, bytes }).map_err(|error| match error {
      | TrySendError::Full(_) => GossipTransportError::SendFailed(String::from("outbound queue full")),
      | TrySendError::Closed(_) => GossipTransportError::SendFailed(String::from("writer stopped")),
    })
  }

  fn poll_inbound(&mut self) -> Vec<GossipInbound> {
    self.inbound.lock().drain(..).collect()
  }
}

impl fmt::Debug for TokioGossipTransport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TokioGossipTransport").field("local_addr", &self.local_addr).finish_non_exhaustive()
  }
}

impl Drop for TokioGossipTransport {
  fn drop(&mut self) {
    self.receiver.abort();
    self.writer.abort();
  }
}

async fn receive_loop(socket: Arc<UdpSocket>, inbound: InboundQueue, max_datagram_bytes: usize, capacity: usize) {
  let mut buffer = vec![0_u8; max_datagram_bytes];
  loop {
    let (len, from) = match socket.recv_from(&mut buffer).await {
      | Ok(received) => received,
      | Err(error) => {
        warn!(%error, "gossip receive failed");
        tokio::time::sleep(RECEIVE_RETRY_DELAY).await;
        continue;
      },
    };
    let Some(wire) = GossipWireMessageV1::decode(&buffer[..len]) else {
      debug!(%from, len, "undecodable gossip datagram dropped");
      continue;
    };

    let mut queue = inbound.lock();
    if queue.len() >= capacity {
      queue.pop_front();
    }
    queue.push_back(GossipInbound::new(from.to_string(), wire.into_message()));
  }
}

async fn sender_loop(socket: Arc<UdpSocket>, mut queued: mpsc::Receiver<OutboundDatagram>) {
  while let Some(datagram) = queued.recv().await {
    if let Err(error) = socket.send_to(&datagram.bytes, datagram.target).await {
      warn!(%error, target = %datagram.target, "gossip send failed");
    }
  }
}
