use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    #[default]
    Two = 0,
    Seven = 1,
    Ten = 2,
    Queen = 3,
    Ace = 4,
}

impl Rank {
    pub const MAX: Self = Rank::Ace;
    pub const MIN: Self = Rank::Two;
    pub const fn all() -> &'static [Self] {
        &[Self::Two, Self::Seven, Self::Ten, Self::Queen, Self::Ace]
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Two,
            1 => Rank::Seven,
            2 => Rank::Ten,
            3 => Rank::Queen,
            4 => Rank::Ace,
            _ => panic!("Invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl From<&str> for Rank {
    fn from(s: &str) -> Self {
        match s {
            "2" => Rank::Two,
            "7" => Rank::Seven,
            "T" => Rank::Ten,
            "Q" => Rank::Queen,
            "A" => Rank::Ace,
            _ => panic!("Invalid rank str: {}", s),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Seven => "7",
                Rank::Ten => "T",
                Rank::Queen => "Q",
                Rank::Ace => "A",
            }
        )
    }
}

impl crate::Arbitrary for Rank {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..Self::all().len()) as u8)
    }
}
