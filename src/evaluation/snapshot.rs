use crate::Chips;
use crate::N;
use crate::Position;
use crate::cards::card::Card;
use crate::gameplay::action::Action;
use serde::Deserialize;
use serde::Serialize;

/// Everything there is to know about the table at one instant: both
/// seats' hole cards, the full chip ledger, the public cards (None when
/// nothing has been dealt), the seat to act, and what it may do. Owned
/// data captured at the moment of the call; it never aliases live engine
/// state. For evaluators, loggers, and full-information search only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub chips: [Chips; N],
    pub public: Option<Vec<Card>>,
    pub hands: [Vec<Card>; N],
    pub actor: Position,
    pub legal: Vec<Action>,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hand = |cards: &[Card]| {
            cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join("")
        };
        write!(
            f,
            "P{} to act | {} ({}) vs {} ({}) | board {}",
            self.actor,
            hand(&self.hands[0]),
            self.chips[0],
            hand(&self.hands[1]),
            self.chips[1],
            match &self.public {
                Some(cards) => hand(cards),
                None => String::from("--"),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::action::Action;

    #[test]
    fn roundtrip_json() {
        let snapshot = Snapshot {
            chips: [4, 6],
            public: Some(vec![Card::from("Tc")]),
            hands: [
                vec![Card::from("2c"), Card::from("7d")],
                vec![Card::from("Ah")],
            ],
            actor: 1,
            legal: vec![Action::Call, Action::Fold],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(snapshot == serde_json::from_str(&json).unwrap());
    }
}
