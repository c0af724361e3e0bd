use crate::cards::index::Index;
use crate::error::Error;
use crate::gameplay::action::Action;
use crate::gameplay::spot::Spot;

/// start of the card region
const CARDS: usize = 0;
/// cell stride between consecutive public reveals of the same base card
const STRIDE: usize = 5;
/// start of the own-chip region
const MINE: usize = 15;
/// start of the opponent-chip region
const THEIRS: usize = 21;
/// start of the legal-action mask
const CHOICES: usize = 27;
/// the first-to-act flag cell
const FIRST: usize = 31;

/// The fixed-size observation handed to a learning agent, together with
/// the legal actions it was built from.
///
/// Cell layout:
///  0..15   cards: hand at its base cell, j-th public reveal at base + 5j
/// 15..21   own committed chips, one-hot
/// 21..27   opponent committed chips, one-hot
/// 27..31   legal-action mask in catalogue order
///     31   first-to-act flag
///
/// Exactly the cells for true game facts are 1.0, all others 0.0. Public
/// reveals from different rounds never collide even when they share a base
/// cell; that is what the stride buys. The opponent's hand is nowhere in
/// the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoding {
    vector: [f32; Self::DIMENSION],
    legal: Vec<Action>,
}

impl Encoding {
    pub const DIMENSION: usize = 32;

    pub fn vector(&self) -> &[f32; Self::DIMENSION] {
        &self.vector
    }
    /// the raw legal actions, in the order the table offered them
    pub fn choices(&self) -> &[Action] {
        &self.legal
    }
    /// the legal actions as dense catalogue ids
    pub fn ids(&self) -> Vec<u8> {
        self.legal.iter().copied().map(u8::from).collect()
    }
}

impl TryFrom<&Spot> for Encoding {
    type Error = Error;
    fn try_from(spot: &Spot) -> Result<Self, Error> {
        let index = Index::global();
        let mut vector = [0f32; Self::DIMENSION];
        for card in spot.hand.iter().copied() {
            let cell = index.cell(card).ok_or_else(|| Error::MalformedState {
                message: format!("hand card {} absent from card index", card),
            })?;
            vector[CARDS + cell] = 1.;
        }
        for (reveal, card) in spot.public.iter().copied().enumerate() {
            let cell = index.cell(card).ok_or_else(|| Error::MalformedState {
                message: format!("public card {} absent from card index", card),
            })?;
            let cell = CARDS + cell + STRIDE * reveal;
            if cell >= MINE {
                return Err(Error::MalformedState {
                    message: format!("public reveal {} beyond the card region", reveal),
                });
            }
            vector[cell] = 1.;
        }
        let mine = spot.mine() as usize;
        let theirs = (spot.pot() - spot.mine()) as usize;
        vector[Self::cell(MINE, mine)?] = 1.;
        vector[Self::cell(THEIRS, theirs)?] = 1.;
        for action in spot.legal.iter().copied() {
            vector[CHOICES + u8::from(action) as usize] = 1.;
        }
        vector[FIRST] = if spot.first { 1. } else { 0. };
        Ok(Self {
            vector,
            legal: spot.legal.clone(),
        })
    }
}

impl Encoding {
    /// one-hot cell for a chip total, if the vector can hold it
    fn cell(base: usize, chips: usize) -> Result<usize, Error> {
        match base + chips {
            cell if cell < Self::DIMENSION => Ok(cell),
            _ => Err(Error::MalformedState {
                message: format!("chip total {} beyond the encoding ceiling", chips),
            }),
        }
    }
}

/// build the observation for a spot
pub fn encode(spot: &Spot) -> Result<Encoding, Error> {
    Encoding::try_from(spot)
}
