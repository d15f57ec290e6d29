use alloc::{string::String, vec};

use super::GossipWireMessageV1;
use crate::core::{gossip::GossipMessage, membership::Endpoint};

#[test]
fn full_reply_survives_the_wire() {
  let endpoint = Endpoint::new(String::from("id-a"), String::from("10.0.0.1"), 4050, 4051, String::from("gossip"), -3, 17);
  let message = GossipMessage::Full {
    hash:      String::from("rzhcX9WgM1AwjqKNBz6eJg=="),
    endpoints: vec![endpoint],
    deletes:   vec![String::from("id-x")],
  };

  let bytes = GossipWireMessageV1::from_message(&message).encode().unwrap();
  let decoded = GossipWireMessageV1::decode(&bytes).map(GossipWireMessageV1::into_message);

  assert_eq!(decoded, Some(message));
}

#[test]
fn integers_use_fixed_width_encoding() {
  let digest = GossipMessage::Digest { hash: String::new(), counters: vec![] };

  let bytes = GossipWireMessageV1::from_message(&digest).encode().unwrap();

  // u32 variant tag, u64 string length, u64 vector length.
  assert_eq!(bytes.len(), 20);
}

#[test]
fn garbage_does_not_decode() {
  assert!(GossipWireMessageV1::decode(&[0xff, 0xff, 0xff, 0xff, 0x01]).is_none());
  assert!(GossipWireMessageV1::decode(&[]).is_none());
}
