use super::action::Action;
use super::spot::Spot;
use crate::Chips;
use crate::Position;
use crate::cards::card::Card;

/// The surface this layer consumes from the external game engine. The
/// engine owns dealing, betting rules, round transitions, chip accounting,
/// and payoffs; we only read. One invariant is load-bearing downstream:
/// whenever a seat is to act, the engine offers Check or Fold (or both).
pub trait Table {
    /// actions the acting player may take right now, recomputed per call
    fn legal(&self) -> Vec<Action>;
    /// hole cards of a seat
    fn hole(&self, position: Position) -> &[Card];
    /// public cards revealed so far, in reveal order
    fn public(&self) -> &[Card];
    /// chips a seat has committed to the pot
    fn chips(&self, position: Position) -> Chips;
    /// seat currently to act
    fn actor(&self) -> Position;
    /// betting round counter, 0 at the initial round
    fn round(&self) -> usize;
    /// whether the acting seat opened the current round
    fn first(&self) -> bool;

    /// assemble the acting player's view
    fn spot(&self) -> Spot {
        let position = self.actor();
        Spot {
            hand: self.hole(position).to_vec(),
            public: self.public().to_vec(),
            chips: std::array::from_fn(|i| self.chips(i)),
            position,
            legal: self.legal(),
            first: self.first(),
            round: self.round(),
        }
    }
}

/// fixed-state stand-in for the engine
#[cfg(test)]
pub mod rigged {
    use super::*;
    use crate::N;

    pub struct Rigged {
        pub holes: [Vec<Card>; N],
        pub public: Vec<Card>,
        pub chips: [Chips; N],
        pub actor: Position,
        pub round: usize,
        pub first: bool,
        pub legal: Vec<Action>,
    }

    impl Table for Rigged {
        fn legal(&self) -> Vec<Action> {
            self.legal.clone()
        }
        fn hole(&self, position: Position) -> &[Card] {
            &self.holes[position]
        }
        fn public(&self) -> &[Card] {
            &self.public
        }
        fn chips(&self, position: Position) -> Chips {
            self.chips[position]
        }
        fn actor(&self) -> Position {
            self.actor
        }
        fn round(&self) -> usize {
            self.round
        }
        fn first(&self) -> bool {
            self.first
        }
    }
}
