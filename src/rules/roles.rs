//! Dealing roles and words.

use crate::core::{GameConfig, GameRng, Role};
use crate::words::SecretWords;

/// One dealt card: a role and the word that goes with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub role: Role,
    pub word: Option<String>,
}

/// Build the deck of roles for `config` and shuffle it.
///
/// The result has exactly `civilian_count` civilian cards carrying the
/// civilian word, `impostor_count` impostor cards carrying the impostor
/// word, and `mr_white_count` blank cards. Entry `i` goes to seat `i`.
pub fn deal_roles(config: &GameConfig, words: &SecretWords, rng: &mut GameRng) -> Vec<Deal> {
    let civilians = std::iter::repeat_with(|| Deal {
        role: Role::Civilian,
        word: Some(words.civilian.clone()),
    })
    .take(config.civilian_count());
    let impostors = std::iter::repeat_with(|| Deal {
        role: Role::Impostor,
        word: Some(words.impostor.clone()),
    })
    .take(config.impostor_count);
    let mr_whites = std::iter::repeat_with(|| Deal {
        role: Role::MrWhite,
        word: None,
    })
    .take(config.mr_white_count);

    let mut deck: Vec<Deal> = civilians.chain(impostors).chain(mr_whites).collect();
    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> SecretWords {
        SecretWords {
            civilian: "Cat".into(),
            impostor: "Dog".into(),
        }
    }

    #[test]
    fn test_counts_and_words() {
        let config = GameConfig::new(7).with_impostors(2).with_mr_whites(1);
        let deck = deal_roles(&config, &words(), &mut GameRng::new(3));

        assert_eq!(deck.len(), 7);
        for deal in &deck {
            match deal.role {
                Role::Civilian => assert_eq!(deal.word.as_deref(), Some("Cat")),
                Role::Impostor => assert_eq!(deal.word.as_deref(), Some("Dog")),
                Role::MrWhite => assert_eq!(deal.word, None),
            }
        }
        assert_eq!(deck.iter().filter(|d| d.role == Role::Civilian).count(), 4);
        assert_eq!(deck.iter().filter(|d| d.role == Role::Impostor).count(), 2);
        assert_eq!(deck.iter().filter(|d| d.role == Role::MrWhite).count(), 1);
    }

    #[test]
    fn test_every_seat_can_be_impostor() {
        let config = GameConfig::new(4).with_impostors(1);
        let mut hits = [0u32; 4];
        let mut rng = GameRng::new(11);
        for _ in 0..2000 {
            let deck = deal_roles(&config, &words(), &mut rng);
            let seat = deck.iter().position(|d| d.role == Role::Impostor).unwrap();
            hits[seat] += 1;
        }
        for h in hits {
            assert!((400..=600).contains(&h), "biased deal: {:?}", hits);
        }
    }
}
