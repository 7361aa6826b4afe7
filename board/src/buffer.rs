//! Session vote buffer.
//!
//! Placements accumulate here until the user explicitly submits; the
//! whole map is serialized into one request and never partially
//! flushed. Dropping the same dish again overwrites the earlier
//! entry, so only the last placement before submission counts.

use std::collections::BTreeMap;

use crate::models::{Position, SubmitVotes, VoteInput};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoteBuffer {
    placements: BTreeMap<i64, Position>,
}

impl VoteBuffer {
    pub fn place(&mut self, item_id: i64, x: f64, y: f64) {
        self.placements.insert(item_id, Position { x, y });
    }

    pub fn get(&self, item_id: i64) -> Option<Position> {
        self.placements.get(&item_id).copied()
    }

    pub fn contains(&self, item_id: i64) -> bool {
        self.placements.contains_key(&item_id)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, Position)> + '_ {
        self.placements.iter().map(|(id, pos)| (*id, *pos))
    }

    /// The full buffer as one submission payload, ordered by item id.
    pub fn to_payload(&self) -> SubmitVotes {
        SubmitVotes {
            votes: self
                .placements
                .iter()
                .map(|(id, pos)| VoteInput {
                    item_id: *id,
                    x: pos.x,
                    y: pos.y,
                    voter_id: None,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_placement_overwrites_earlier() {
        let mut buffer = VoteBuffer::default();
        buffer.place(1, 0.2, 0.8);
        buffer.place(1, 0.6, 0.4);

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(1), Some(Position { x: 0.6, y: 0.4 }));
    }

    #[test]
    fn payload_covers_every_placement_once() {
        let mut buffer = VoteBuffer::default();
        buffer.place(3, 0.3, 0.3);
        buffer.place(1, 0.1, 0.1);
        buffer.place(2, 0.2, 0.2);

        let payload = buffer.to_payload();
        assert_eq!(payload.votes.len(), 3);

        let ids: Vec<i64> = payload.votes.iter().map(|v| v.item_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_buffer_yields_empty_payload() {
        let buffer = VoteBuffer::default();
        assert!(buffer.is_empty());
        assert!(buffer.to_payload().votes.is_empty());
    }

    #[test]
    fn payload_serializes_with_camel_case_fields() {
        let mut buffer = VoteBuffer::default();
        buffer.place(1, 0.25, 0.75);

        let json = serde_json::to_value(buffer.to_payload()).unwrap();
        assert_eq!(json["votes"][0]["itemId"], 1);
        assert_eq!(json["votes"][0]["x"], 0.25);
        assert_eq!(json["votes"][0]["y"], 0.75);
        // voterId is omitted entirely when unset.
        assert!(json["votes"][0].get("voterId").is_none());
    }
}
