use super::card::Card;
use super::rank::Rank;
use std::collections::HashMap;
use std::sync::OnceLock;

const TABLE: &str = include_str!("card2index.json");

static INDEX: OnceLock<Index> = OnceLock::new();

/// Suit-independent mapping from each card to its cell in the card region
/// of the observation vector. Total over the deck, parsed once from the
/// embedded table, shared read-only for the life of the process.
///
/// All four suits of a rank share a cell. Hidden-information comparisons
/// go through this same table, so encoder and evaluator agree on identity.
#[derive(Debug)]
pub struct Index {
    cells: [Option<usize>; Card::DECK],
}

impl Index {
    pub fn global() -> &'static Self {
        INDEX.get_or_init(|| Self::load().expect("embedded card table loads"))
    }

    /// cell of a card, None when the table has no entry for it
    pub fn cell(&self, card: Card) -> Option<usize> {
        self.cells[u8::from(card) as usize]
    }

    fn load() -> anyhow::Result<Self> {
        let table: HashMap<String, usize> = serde_json::from_str(TABLE)?;
        let mut cells = [None; Card::DECK];
        for (name, cell) in table {
            anyhow::ensure!(
                cell < Rank::all().len(),
                "cell {} for {} out of the card region",
                cell,
                name
            );
            cells[u8::from(Card::from(name.as_str())) as usize] = Some(cell);
        }
        Ok(Self { cells })
    }
}
