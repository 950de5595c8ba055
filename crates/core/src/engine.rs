//! Question generation.
//!
//! Phrases are drawn without repeats until every phrase in the pool has been
//! shown once; the shown-set then starts over.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::QuizError;
use crate::model::{OptionItem, Phrase, PhraseId, QuizMode, QuizState};

/// Wrong options offered alongside the correct one.
pub const MAX_DISTRACTORS: usize = 3;

/// Phrases already asked in the current pass over a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShownSet {
    ids: HashSet<PhraseId>,
}

impl ShownSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: PhraseId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    fn insert(&mut self, id: PhraseId) {
        self.ids.insert(id);
    }
}

/// Builds the next question from `pool`.
///
/// The chosen phrase is recorded in `shown`. Options hold the correct answer
/// plus up to [`MAX_DISTRACTORS`] other phrases' answers in random order; a
/// pool of fewer than four phrases yields fewer options.
///
/// Option texts are always distinct: a phrase whose answer text duplicates one
/// already chosen is skipped, so the option count is
/// `min(4, distinct answer texts in pool)` rather than `min(4, pool.len())`.
///
/// # Errors
///
/// Returns `QuizError::EmptyPool` if `pool` is empty.
pub fn generate_question<R: Rng + ?Sized>(
    pool: &[Phrase],
    shown: &mut ShownSet,
    mode: QuizMode,
    streak: u32,
    rng: &mut R,
) -> Result<QuizState, QuizError> {
    let phrase = pick_phrase(pool, shown, rng)?.clone();
    let correct_answer = mode.answer_for(&phrase).to_owned();

    let mut candidates: Vec<&Phrase> = pool.iter().filter(|p| p.id() != phrase.id()).collect();
    candidates.shuffle(rng);

    let mut options = vec![OptionItem::for_phrase(&phrase, mode)];
    for candidate in candidates {
        if options.len() > MAX_DISTRACTORS {
            break;
        }
        let text = mode.answer_for(candidate);
        // identical answer texts would make two options indistinguishable
        if options.iter().any(|o| o.text() == text) {
            continue;
        }
        options.push(OptionItem::for_phrase(candidate, mode));
    }
    options.shuffle(rng);

    log::debug!(
        "question phrase={} mode={:?} options={} shown={}/{}",
        phrase.id(),
        mode,
        options.len(),
        shown.len(),
        pool.len()
    );

    Ok(QuizState::new(phrase, mode, options, correct_answer, streak))
}

fn pick_phrase<'a, R: Rng + ?Sized>(
    pool: &'a [Phrase],
    shown: &mut ShownSet,
    rng: &mut R,
) -> Result<&'a Phrase, QuizError> {
    let fresh: Vec<&Phrase> = pool.iter().filter(|p| !shown.contains(p.id())).collect();
    let picked = match fresh.choose(rng) {
        Some(phrase) => *phrase,
        None => {
            shown.clear();
            pool.choose(rng).ok_or(QuizError::EmptyPool)?
        }
    };
    shown.insert(picked.id());
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(n: u32) -> Vec<Phrase> {
        (1..=n)
            .map(|id| {
                Phrase::new(
                    PhraseId::new(id),
                    Category::Food,
                    format!("thai-{id}"),
                    format!("reading-{id}"),
                    format!("meaning-{id}"),
                )
            })
            .collect()
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_question(&[], &mut ShownSet::new(), QuizMode::Listen, 0, &mut rng)
            .unwrap_err();
        assert_eq!(err, QuizError::EmptyPool);
    }

    #[test]
    fn option_count_is_capped_by_pool_size() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 1..=6 {
            let phrases = pool(size);
            for _ in 0..20 {
                let quiz = generate_question(
                    &phrases,
                    &mut ShownSet::new(),
                    QuizMode::Listen,
                    0,
                    &mut rng,
                )
                .unwrap();
                assert_eq!(quiz.options().len(), (size as usize).min(4));
                let correct = quiz
                    .options()
                    .iter()
                    .filter(|o| o.text() == quiz.correct_answer())
                    .count();
                assert_eq!(correct, 1);
            }
        }
    }

    #[test]
    fn every_phrase_is_shown_before_any_repeats() {
        let phrases = pool(7);
        let mut rng = StdRng::seed_from_u64(42);
        let mut shown = ShownSet::new();

        for _pass in 0..3 {
            let mut seen = HashSet::new();
            for _ in 0..phrases.len() {
                let quiz =
                    generate_question(&phrases, &mut shown, QuizMode::Listen, 0, &mut rng).unwrap();
                assert!(seen.insert(quiz.phrase().id()), "repeated before pass finished");
            }
            assert_eq!(seen.len(), phrases.len());
        }
    }

    #[test]
    fn listen_mode_options_carry_no_guides() {
        let phrases = pool(5);
        let mut rng = StdRng::seed_from_u64(3);
        let quiz = generate_question(&phrases, &mut ShownSet::new(), QuizMode::Listen, 0, &mut rng)
            .unwrap();

        assert_eq!(quiz.correct_answer(), quiz.phrase().meaning());
        assert!(quiz.options().iter().all(|o| o.pronunciation_guide().is_none()));
    }

    #[test]
    fn speak_mode_options_carry_their_own_guides() {
        let phrases = pool(5);
        let mut rng = StdRng::seed_from_u64(4);
        let quiz = generate_question(&phrases, &mut ShownSet::new(), QuizMode::Speak, 2, &mut rng)
            .unwrap();

        assert_eq!(quiz.correct_answer(), quiz.phrase().source_text());
        assert_eq!(quiz.streak_at_display(), 2);
        for option in quiz.options() {
            let source = phrases.iter().find(|p| p.source_text() == option.text()).unwrap();
            assert_eq!(option.pronunciation_guide(), Some(source.pronunciation_guide()));
        }
    }

    #[test]
    fn single_phrase_pool_yields_single_option() {
        let phrases = pool(1);
        let mut rng = StdRng::seed_from_u64(5);
        let mut shown = ShownSet::new();
        for _ in 0..3 {
            let quiz =
                generate_question(&phrases, &mut shown, QuizMode::Speak, 0, &mut rng).unwrap();
            assert_eq!(quiz.options().len(), 1);
            assert_eq!(quiz.options()[0].text(), quiz.correct_answer());
        }
    }

    #[test]
    fn duplicate_answer_texts_are_not_offered_twice() {
        let mut phrases = pool(4);
        phrases.push(Phrase::new(
            PhraseId::new(99),
            Category::Food,
            "thai-99",
            "reading-99",
            "meaning-1",
        ));
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..30 {
            let quiz = generate_question(
                &phrases,
                &mut ShownSet::new(),
                QuizMode::Listen,
                0,
                &mut rng,
            )
            .unwrap();
            let texts: HashSet<&str> = quiz.options().iter().map(OptionItem::text).collect();
            assert_eq!(texts.len(), quiz.options().len());
            assert!(texts.contains(quiz.correct_answer()));
        }
    }
}
