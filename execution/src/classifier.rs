//! Outcome classification for a raw score pair.
//!
//! Both functions are total: scores outside 0-9 compare normally.

use navigator_types::Outcome;

/// Classify a hand by comparing the two scores.
pub fn classify(player_score: u8, banker_score: u8) -> Outcome {
    if player_score > banker_score {
        Outcome::Player
    } else if banker_score > player_score {
        Outcome::Banker
    } else {
        Outcome::Tie
    }
}

/// Absolute difference between the two scores.
pub fn margin(player_score: u8, banker_score: u8) -> u8 {
    player_score.abs_diff(banker_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(8, 2), Outcome::Player);
        assert_eq!(classify(3, 6), Outcome::Banker);
        assert_eq!(classify(5, 5), Outcome::Tie);
        assert_eq!(classify(0, 0), Outcome::Tie);
        assert_eq!(classify(9, 0), Outcome::Player);
    }

    #[test]
    fn test_classify_out_of_range() {
        // Values above 9 never reach the engine from the keypad, but must not panic.
        assert_eq!(classify(200, 9), Outcome::Player);
        assert_eq!(classify(0, u8::MAX), Outcome::Banker);
        assert_eq!(classify(u8::MAX, u8::MAX), Outcome::Tie);
    }

    #[test]
    fn test_margin() {
        assert_eq!(margin(8, 2), 6);
        assert_eq!(margin(3, 6), 3);
        assert_eq!(margin(4, 4), 0);
        assert_eq!(margin(0, u8::MAX), u8::MAX);
    }

    #[test]
    fn test_classify_exhaustive_digits() {
        for player in 0..=9u8 {
            for banker in 0..=9u8 {
                let outcome = classify(player, banker);
                match outcome {
                    Outcome::Player => assert!(player > banker),
                    Outcome::Banker => assert!(banker > player),
                    Outcome::Tie => assert_eq!(player, banker),
                }
                assert_eq!(margin(player, banker), margin(banker, player));
            }
        }
    }
}
