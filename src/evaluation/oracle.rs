use super::snapshot::Snapshot;
use crate::N;
use crate::Position;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::gameplay::table::Table;

/// Privileged handle for evaluators and full-information solvers.
///
/// Owns the opponent-hand override bookkeeping for one environment
/// instance. Agents never hold an Oracle, and the encoder never consults
/// one, so hidden information stays out of the standard observation path
/// by construction rather than by convention. A pending override
/// substitutes for the true dealt hand in every privileged query until
/// cleared; the engine's own state is never touched.
///
/// Not internally locked: drive each instance from a single caller.
#[derive(Debug, Default)]
pub struct Oracle {
    swaps: [Option<Card>; N],
}

impl Oracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// owned projection of the full table state, overrides applied
    pub fn snapshot(&self, table: &impl Table) -> Snapshot {
        Snapshot {
            chips: std::array::from_fn(|i| table.chips(i)),
            public: match table.public() {
                [] => None,
                cards => Some(cards.to_vec()),
            },
            hands: std::array::from_fn(|i| match self.swaps[i] {
                Some(card) => vec![card],
                None => table.hole(i).to_vec(),
            }),
            actor: table.actor(),
            legal: table.legal(),
        }
    }

    /// substitute a seat's hand in all privileged queries
    pub fn set_override(&mut self, position: Position, card: Card) {
        log::trace!("override P{} hand with {}", position, card);
        self.swaps[position] = Some(card);
    }

    /// drop the substitute; queries fall back to the true dealt hand
    pub fn clear_override(&mut self, position: Position) {
        log::trace!("clear P{} override", position);
        self.swaps[position] = None;
    }

    /// True iff NO substitute is pending for the seat. The inversion is
    /// deliberate and matched to the calling solvers: a revealed (true)
    /// hand is one still worth enumerating hidden possibilities for.
    pub fn has_revealed_card(&self, position: Position) -> bool {
        self.swaps[position].is_none()
    }

    /// rank of the pending substitute, None once cleared
    pub fn card(&self, position: Position) -> Option<Rank> {
        self.swaps[position].map(|card| card.rank())
    }

    /// whether the round counter sits at its initial value
    pub fn is_first_round(&self, table: &impl Table) -> bool {
        table.round() == 0
    }
}
