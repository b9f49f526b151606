use super::*;
use commonware_codec::{DecodeExt, Encode, EncodeSize, ReadExt};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn sample_hand(sequence: u64) -> Hand {
    Hand {
        sequence,
        player_score: 3,
        banker_score: 6,
        outcome: Outcome::Banker,
        prior_prediction: Some(Side::Player),
        result: EvaluationResult::Loss,
        running_total: -1,
        margin: 3,
    }
}

#[test]
fn test_outcome_side() {
    assert_eq!(Outcome::Player.side(), Some(Side::Player));
    assert_eq!(Outcome::Banker.side(), Some(Side::Banker));
    assert_eq!(Outcome::Tie.side(), None);
}

#[test]
fn test_side_opposite() {
    assert_eq!(Side::Player.opposite(), Side::Banker);
    assert_eq!(Side::Banker.opposite(), Side::Player);
    assert_eq!(Side::Player.opposite().opposite(), Side::Player);
}

#[test]
fn test_side_into_outcome() {
    assert_eq!(Outcome::from(Side::Player), Outcome::Player);
    assert_eq!(Outcome::from(Side::Banker), Outcome::Banker);
}

#[test]
fn test_unit_delta() {
    assert_eq!(EvaluationResult::Win.unit_delta(), 1);
    assert_eq!(EvaluationResult::Loss.unit_delta(), -1);
    assert_eq!(EvaluationResult::Push.unit_delta(), 0);
    assert_eq!(sample_hand(1).unit_delta(), -1);
}

#[test]
fn test_display_labels() {
    assert_eq!(Outcome::Tie.to_string(), "Tie");
    assert_eq!(Side::Banker.to_string(), "Banker");
    assert_eq!(EvaluationResult::Push.to_string(), "Push");
    assert_eq!(Side::Player.letter(), 'P');
    assert_eq!(Side::Banker.letter(), 'B');
}

#[test]
fn test_outcome_rejects_unknown_tag() {
    let result = Outcome::read(&mut &[3u8][..]);
    assert!(matches!(result, Err(commonware_codec::Error::InvalidEnum(3))));
}

#[test]
fn test_side_rejects_tie_tag() {
    // Tag 2 is a tie outcome, which is never a valid prediction.
    let result = Side::read(&mut &[2u8][..]);
    assert!(matches!(result, Err(commonware_codec::Error::InvalidEnum(2))));
}

#[test]
fn test_hand_roundtrip() {
    let hand = sample_hand(2);
    let encoded = hand.encode();
    assert_eq!(encoded.len(), hand.encode_size());
    let decoded = Hand::decode(encoded).unwrap();
    assert_eq!(hand, decoded);
}

#[test]
fn test_first_hand_roundtrip() {
    let hand = Hand {
        sequence: 1,
        player_score: 8,
        banker_score: 2,
        outcome: Outcome::Player,
        prior_prediction: None,
        result: EvaluationResult::Push,
        running_total: 0,
        margin: 6,
    };
    let decoded = Hand::decode(hand.encode()).unwrap();
    assert_eq!(decoded.prior_prediction, None);
    assert_eq!(hand, decoded);
}

#[test]
fn test_snapshot_roundtrip() {
    let mut rng = StdRng::seed_from_u64(42);
    let hands = (1..=25)
        .map(|sequence| {
            let mut hand = sample_hand(sequence);
            hand.running_total = rng.gen_range(-10..10);
            hand
        })
        .collect();
    let snapshot = Snapshot {
        hands,
        current_prediction: Some(Side::Banker),
    };
    let decoded = Snapshot::decode(snapshot.encode()).unwrap();
    assert_eq!(snapshot, decoded);
}

#[test]
fn test_empty_snapshot_roundtrip() {
    let snapshot = Snapshot::default();
    let decoded = Snapshot::decode(snapshot.encode()).unwrap();
    assert!(decoded.hands.is_empty());
    assert_eq!(decoded.current_prediction, None);
}

#[test]
fn test_snapshot_truncated() {
    let snapshot = Snapshot {
        hands: vec![sample_hand(1)],
        current_prediction: Some(Side::Player),
    };
    let encoded = snapshot.encode();
    let truncated = &encoded[..encoded.len() - 3];
    assert!(Snapshot::decode(truncated).is_err());
}
