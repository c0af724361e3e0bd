use super::action::Action;
use crate::Chips;
use crate::N;
use crate::Position;
use crate::cards::card::Card;

/// The acting player's view of the table in between actions, exactly as
/// the engine hands it over: own hand, the public cards revealed so far
/// in reveal order, the committed-chip ledger, what is currently legal,
/// and where we are in the hand. The other seat's hole cards never appear
/// here, so the standard observation path cannot leak them.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub hand: Vec<Card>,
    pub public: Vec<Card>,
    pub chips: [Chips; N],
    pub position: Position,
    pub legal: Vec<Action>,
    pub first: bool,
    pub round: usize,
}

impl Spot {
    /// chips committed by the acting player
    pub fn mine(&self) -> Chips {
        self.chips[self.position]
    }
    /// chips committed across both seats
    pub fn pot(&self) -> Chips {
        self.chips.iter().copied().sum()
    }
}

impl crate::Arbitrary for Spot {
    fn random() -> Self {
        use rand::Rng;
        use rand::seq::SliceRandom;
        let mut rng = rand::rng();
        let mut deck = Card::exhaust().collect::<Vec<_>>();
        deck.shuffle(&mut rng);
        let reveals = rng.random_range(0..=3);
        let public = deck.split_off(deck.len() - reveals);
        let hand = deck.split_off(deck.len() - 2);
        let mut legal = Action::all()
            .iter()
            .copied()
            .filter(|_| rng.random_bool(0.5))
            .collect::<Vec<_>>();
        if !legal.contains(&Action::Check) && !legal.contains(&Action::Fold) {
            legal.push(Action::Fold);
        }
        Self {
            hand,
            public,
            chips: [rng.random_range(0..6), rng.random_range(0..6)],
            position: rng.random_range(0..N),
            legal,
            first: rng.random_bool(0.5),
            round: reveals,
        }
    }
}
