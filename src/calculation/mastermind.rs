//! Mastermind guess scoring.

use crate::models::{CODE_LENGTH, Code, Score};

/// Scores `guess` against `secret`.
///
/// The first pass counts exact position matches as hits and reserves those
/// positions on both sides. The second pass matches each remaining guess peg
/// against the first unreserved secret peg of the same color and counts a
/// blow, so repeated colors are never counted twice.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::calculation::score_guess;
/// use whiteboard_challenges::models::{Code, Color::*, Score};
///
/// let secret = Code::new([Red, Red, Blue, Green]);
/// let guess = Code::new([Red, Blue, Red, Yellow]);
/// assert_eq!(score_guess(&secret, &guess), Score { hits: 1, blows: 2 });
/// ```
pub fn score_guess(secret: &Code, guess: &Code) -> Score {
    let secret = secret.pegs();
    let guess = guess.pegs();

    let mut secret_used = [false; CODE_LENGTH];
    let mut guess_used = [false; CODE_LENGTH];
    let mut score = Score::default();

    for i in 0..CODE_LENGTH {
        if guess[i] == secret[i] {
            score.hits += 1;
            secret_used[i] = true;
            guess_used[i] = true;
        }
    }

    for i in (0..CODE_LENGTH).filter(|&i| !guess_used[i]) {
        if let Some(j) = (0..CODE_LENGTH).find(|&j| !secret_used[j] && guess[i] == secret[j]) {
            score.blows += 1;
            secret_used[j] = true;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Color::{self, *};
    use proptest::prelude::*;

    fn code(pegs: [Color; CODE_LENGTH]) -> Code {
        Code::new(pegs)
    }

    #[test]
    fn test_exact_match_is_all_hits() {
        let secret = code([Red, Yellow, Blue, Green]);
        assert_eq!(score_guess(&secret, &secret), Score { hits: 4, blows: 0 });
    }

    #[test]
    fn test_permutation_is_all_blows() {
        let secret = code([Red, Yellow, Blue, Green]);
        let guess = code([Green, Blue, Yellow, Red]);
        assert_eq!(score_guess(&secret, &guess), Score { hits: 0, blows: 4 });
    }

    #[test]
    fn test_no_common_colors() {
        let secret = code([Red, Red, Red, Red]);
        let guess = code([Blue, Blue, Green, Green]);
        assert_eq!(score_guess(&secret, &guess), Score::default());
    }

    #[test]
    fn test_repeated_guess_color_is_not_double_counted() {
        let secret = code([Red, Yellow, Blue, Green]);
        let guess = code([Yellow, Yellow, Yellow, Yellow]);
        assert_eq!(score_guess(&secret, &guess), Score { hits: 1, blows: 0 });
    }

    #[test]
    fn test_repeated_secret_color_matches_once_per_peg() {
        let secret = code([Red, Red, Blue, Blue]);
        let guess = code([Blue, Orange, Red, Purple]);
        assert_eq!(score_guess(&secret, &guess), Score { hits: 0, blows: 2 });
    }

    fn arb_color() -> impl Strategy<Value = Color> {
        prop::sample::select(Color::ALL.to_vec())
    }

    fn arb_code() -> impl Strategy<Value = Code> {
        prop::array::uniform4(arb_color()).prop_map(Code::new)
    }

    proptest! {
        #[test]
        fn test_hits_and_blows_never_exceed_code_length(secret in arb_code(), guess in arb_code()) {
            let score = score_guess(&secret, &guess);
            prop_assert!((score.hits + score.blows) as usize <= CODE_LENGTH);
        }

        #[test]
        fn test_scoring_totals_are_symmetric(secret in arb_code(), guess in arb_code()) {
            let forward = score_guess(&secret, &guess);
            let backward = score_guess(&guess, &secret);
            prop_assert_eq!(forward, backward);
        }
    }
}
