//! Narrowing the word index down to words that fit a roll.

use crate::dictionary::WordIndex;
use crate::letters::LetterMultiset;

/// Identifier of a word: its position in the [`WordIndex`].
pub type WordId = usize;

/// Returns every indexed word whose letters the roll can supply, counting
/// repeats, longest first.
///
/// Ties keep index order (the dictionary is sorted), so the result is fully
/// deterministic for a given dictionary.
pub fn candidates(roll: &LetterMultiset, index: &WordIndex) -> Vec<WordId> {
    let mut fitting: Vec<WordId> = index
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| roll.contains(&entry.letters))
        .map(|(word_id, _)| word_id)
        .collect();

    // stable sort: equal lengths stay alphabetical
    fitting.sort_by_key(|&word_id| std::cmp::Reverse(index.get(word_id).len()));
    fitting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn words(index: &WordIndex, ids: &[WordId]) -> Vec<String> {
        ids.iter().map(|&id| index.word(id).to_owned()).collect()
    }

    #[test]
    fn test_rejects_words_needing_extra_copies() {
        let index = WordIndex::new(&Dictionary::from_words(["tee", "tea", "eat", "teee"]));
        let roll = LetterMultiset::from_word("teabcd");
        assert_eq!(words(&index, &candidates(&roll, &index)), vec!["eat", "tea"]);
    }

    #[test]
    fn test_orders_longest_first() {
        let index = WordIndex::new(&Dictionary::from_words([
            "cat", "cats", "scat", "act", "tacks",
        ]));
        let roll = LetterMultiset::from_word("tacksabcdefg");
        assert_eq!(
            words(&index, &candidates(&roll, &index)),
            vec!["tacks", "cats", "scat", "act", "cat"]
        );
    }

    #[test]
    fn test_every_candidate_fits_the_roll() {
        let index = WordIndex::new(&Dictionary::from_words([
            "apple", "pale", "leap", "peel", "plea", "lap", "pal", "ale",
        ]));
        let roll = LetterMultiset::from_word("applexyzwvut");
        for id in candidates(&roll, &index) {
            let entry = index.get(id);
            for letter in entry.letters.letters() {
                assert!(
                    entry.letters.count(letter) <= roll.count(letter),
                    "{} needs more {letter} than the roll has",
                    entry.word
                );
            }
        }
    }

    #[test]
    fn test_no_candidates_is_empty_not_error() {
        let index = WordIndex::new(&Dictionary::from_words(["zzz"]));
        let roll = LetterMultiset::from_word("abcdefghijkl");
        assert!(candidates(&roll, &index).is_empty());
    }
}
