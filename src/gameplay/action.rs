/// The fixed catalogue of discrete actions the agent interface can emit,
/// independent of what the table permits in any given state. Discriminant
/// order is the wire id; it never changes at runtime and is identical
/// across environment instances.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Call = 0,
    Raise = 1,
    Fold = 2,
    Check = 3,
}

impl Action {
    pub const fn all() -> &'static [Self] {
        &[Self::Call, Self::Raise, Self::Fold, Self::Check]
    }
    pub const fn n() -> usize {
        Self::all().len()
    }
}

/// u8 isomorphism
impl From<Action> for u8 {
    fn from(a: Action) -> u8 {
        a as u8
    }
}
impl From<u8> for Action {
    fn from(n: u8) -> Action {
        match n {
            0 => Action::Call,
            1 => Action::Raise,
            2 => Action::Fold,
            3 => Action::Check,
            _ => panic!("Invalid action u8: {}", n),
        }
    }
}

/// str isomorphism
impl From<&str> for Action {
    fn from(s: &str) -> Self {
        match s {
            "call" => Action::Call,
            "raise" => Action::Raise,
            "fold" => Action::Fold,
            "check" => Action::Check,
            _ => panic!("Invalid action str: {}", s),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::Call => write!(f, "{}", "CALL".yellow()),
            Action::Raise => write!(f, "{}", "RAISE".green()),
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Check => write!(f, "{}", "CHECK".cyan()),
        }
    }
}

impl crate::Arbitrary for Action {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..Self::n()) as u8)
    }
}


use colored::*;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
