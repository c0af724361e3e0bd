use crate::error::Error;
use crate::gameplay::action::Action;

/// Map an agent's chosen catalogue id onto an action the table will
/// accept. A legal choice passes through unchanged. An illegal or
/// out-of-range choice falls back to Check, then Fold, in that order.
///
/// Precondition (engine invariant, not re-verified here): whenever a seat
/// is to act, at least one of the two fallback actions is legal. A table
/// that offers neither gets `Error::NoLegalFallback`.
pub fn resolve(choice: usize, legal: &[Action]) -> Result<Action, Error> {
    if let Some(action) = Action::all().get(choice).copied() {
        if legal.contains(&action) {
            return Ok(action);
        }
    }
    for fallback in [Action::Check, Action::Fold] {
        if legal.contains(&fallback) {
            log::debug!("choice {} not legal, submitting {}", choice, fallback);
            return Ok(fallback);
        }
    }
    log::error!("table offered no fallback action: {:?}", legal);
    Err(Error::NoLegalFallback {
        offered: legal.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_preserved() {
        let legal = vec![Action::Call, Action::Raise, Action::Fold];
        for action in legal.iter().copied() {
            let choice = u8::from(action) as usize;
            assert!(resolve(choice, &legal) == Ok(action));
        }
    }

    #[test]
    fn prefers_check() {
        let legal = vec![Action::Check, Action::Fold];
        let choice = u8::from(Action::Raise) as usize;
        assert!(resolve(choice, &legal) == Ok(Action::Check));
    }

    #[test]
    fn falls_to_fold() {
        let legal = vec![Action::Fold];
        let choice = u8::from(Action::Check) as usize;
        assert!(resolve(choice, &legal) == Ok(Action::Fold));
    }

    #[test]
    fn out_of_range_falls_back() {
        let legal = vec![Action::Check, Action::Raise];
        assert!(resolve(99, &legal) == Ok(Action::Check));
    }

    #[test]
    fn broken_invariant_surfaced() {
        let legal = vec![Action::Call, Action::Raise];
        assert!(matches!(
            resolve(usize::MAX, &legal),
            Err(Error::NoLegalFallback { .. })
        ));
    }

    #[test]
    fn always_a_member() {
        use crate::Arbitrary;
        use crate::gameplay::spot::Spot;
        for _ in 0..64 {
            let spot = Spot::random();
            for choice in 0..Action::n() {
                let action = resolve(choice, &spot.legal).unwrap();
                assert!(spot.legal.contains(&action));
            }
        }
    }
}
