//! Quiz question selection
//!
//! The client carries the quiz session: every request lists the ids it has
//! already been served, and the server picks one random question among the
//! rest.

use rand::Rng;

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i32),
}

impl QuizScope {
    /// Category id 0 means every category.
    pub fn from_category_id(id: i32) -> Self {
        if id == 0 {
            Self::All
        } else {
            Self::Category(id)
        }
    }

    pub fn category(self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}

/// Pick one candidate uniformly at random, skipping any id in `previous`.
///
/// Returns None once every candidate has been served.
pub fn pick_question<T, R>(
    candidates: Vec<T>,
    previous: &[i32],
    id_of: impl Fn(&T) -> i32,
    rng: &mut R,
) -> Option<T>
where
    R: Rng,
{
    let mut eligible: Vec<T> = candidates
        .into_iter()
        .filter(|candidate| !previous.contains(&id_of(candidate)))
        .collect();

    if eligible.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..eligible.len());
    Some(eligible.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn scope_from_id() {
        assert_eq!(QuizScope::from_category_id(0), QuizScope::All);
        assert_eq!(QuizScope::from_category_id(3), QuizScope::Category(3));
        assert_eq!(QuizScope::Category(3).category(), Some(3));
        assert_eq!(QuizScope::All.category(), None);
    }

    #[test]
    fn never_returns_previous_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous = [1, 2, 4];
        for _ in 0..200 {
            let picked = pick_question(vec![1, 2, 3, 4, 5], &previous, |id| *id, &mut rng).unwrap();
            assert!(picked == 3 || picked == 5);
        }
    }

    #[test]
    fn exhausted_returns_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_question(vec![1, 2], &[1, 2], |id| *id, &mut rng), None);
        assert_eq!(pick_question(Vec::<i32>::new(), &[], |id| *id, &mut rng), None);
    }

    #[test]
    fn serves_every_question_once_per_session() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: Vec<i32> = (1..=12).collect();
        let mut previous = Vec::new();

        while let Some(id) = pick_question(pool.clone(), &previous, |id| *id, &mut rng) {
            previous.push(id);
        }

        let seen: HashSet<_> = previous.iter().copied().collect();
        assert_eq!(previous.len(), 12);
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn selection_is_spread_across_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(pick_question(vec![10, 20, 30], &[], |id| *id, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }
}
