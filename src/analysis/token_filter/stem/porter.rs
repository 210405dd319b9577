//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a fixed table of suffix rewrite rules in five
//! steps:
//! 1. Plurals and -ed/-ing suffixes, trailing -y after a consonant
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce a final -ll
//!
//! Each rule is guarded by the *measure* of the remaining stem, the number of
//! vowel-consonant runs in it. No dictionary or learned state is involved.
//!
//! # Examples
//!
//! ```
//! use spamprep::analysis::token_filter::stem::Stemmer;
//! use spamprep::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

// "ement" must precede "ment", which must precede "ent".
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
///
/// Digits and other non-vowel ASCII bytes count as consonants, so mixed
/// tokens such as `2nights` are stemmed like words. Words containing
/// non-ASCII characters are returned lowercased but otherwise unchanged.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the byte at `pos` is a consonant.
    ///
    /// Any byte other than `a`, `e`, `i`, `o`, `u` is a consonant, except
    /// `y`, which is a consonant at the start of a word or after a vowel.
    fn is_consonant(&self, word: &[u8], pos: usize) -> bool {
        match word[pos] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => pos == 0 || !self.is_consonant(word, pos - 1),
            _ => true,
        }
    }

    /// Calculate the measure of a stem (number of VC sequences).
    fn measure(&self, stem: &str) -> usize {
        let bytes = stem.as_bytes();
        let mut m = 0;
        let mut previous_vowel = false;

        for pos in 0..bytes.len() {
            let consonant = self.is_consonant(bytes, pos);
            if consonant && previous_vowel {
                m += 1;
            }
            previous_vowel = !consonant;
        }

        m
    }

    /// Check if the stem contains a vowel.
    fn contains_vowel(&self, stem: &str) -> bool {
        let bytes = stem.as_bytes();
        (0..bytes.len()).any(|pos| !self.is_consonant(bytes, pos))
    }

    /// Check if the word ends with a double consonant.
    fn ends_with_double_consonant(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 2 && bytes[len - 1] == bytes[len - 2] && self.is_consonant(bytes, len - 1)
    }

    /// Check if the word ends with consonant-vowel-consonant, where the final
    /// consonant is not `w`, `x` or `y`.
    fn ends_cvc(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 3
            && self.is_consonant(bytes, len - 3)
            && !self.is_consonant(bytes, len - 2)
            && self.is_consonant(bytes, len - 1)
            && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
    }

    /// Apply the first rule whose suffix matches, if the remaining stem has a
    /// measure of at least `min_measure`. Only the first matching rule is
    /// considered, even when its condition fails.
    fn apply_rules(&self, word: &str, rules: &[(&str, &str)], min_measure: usize) -> String {
        for (old_suffix, new_suffix) in rules {
            if let Some(stem) = word.strip_suffix(old_suffix) {
                if self.measure(stem) >= min_measure {
                    return format!("{stem}{new_suffix}");
                }
                return word.to_string();
            }
        }

        word.to_string()
    }

    /// Step 1a: plurals.
    fn step1a(&self, word: &str) -> String {
        if let Some(stem) = word.strip_suffix("sses") {
            format!("{stem}ss")
        } else if let Some(stem) = word.strip_suffix("ies") {
            if word.len() == 4 {
                format!("{stem}ie")
            } else {
                format!("{stem}i")
            }
        } else if word.ends_with("ss") {
            word.to_string()
        } else if let Some(stem) = word.strip_suffix('s') {
            stem.to_string()
        } else {
            word.to_string()
        }
    }

    /// Step 1b: -eed, -ed and -ing.
    fn step1b(&self, word: &str) -> String {
        if let Some(stem) = word.strip_suffix("eed") {
            return if self.measure(stem) > 0 {
                format!("{stem}ee")
            } else {
                word.to_string()
            };
        }

        let stem = match word
            .strip_suffix("ed")
            .or_else(|| word.strip_suffix("ing"))
        {
            Some(stem) if self.contains_vowel(stem) => stem,
            _ => return word.to_string(),
        };

        if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
            format!("{stem}e")
        } else if self.ends_with_double_consonant(stem)
            && !stem.ends_with(['l', 's', 'z'])
        {
            stem[..stem.len() - 1].to_string()
        } else if self.measure(stem) == 1 && self.ends_cvc(stem) {
            format!("{stem}e")
        } else {
            stem.to_string()
        }
    }

    /// Step 1c: trailing y after a consonant becomes i.
    fn step1c(&self, word: &str) -> String {
        let bytes = word.as_bytes();
        let len = bytes.len();
        if len > 2 && bytes[len - 1] == b'y' && self.is_consonant(bytes, len - 2) {
            format!("{}i", &word[..len - 1])
        } else {
            word.to_string()
        }
    }

    /// Step 2: double suffixes to single ones.
    fn step2(&self, word: &str) -> String {
        self.apply_rules(word, STEP2_RULES, 1)
    }

    /// Step 3: -ic-, -full, -ness etc.
    fn step3(&self, word: &str) -> String {
        self.apply_rules(word, STEP3_RULES, 1)
    }

    /// Step 4: strip remaining suffixes when the stem has measure > 1.
    fn step4(&self, word: &str) -> String {
        for suffix in STEP4_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                let ion_allowed = *suffix != "ion" || stem.ends_with(['s', 't']);
                if self.measure(stem) > 1 && ion_allowed {
                    return stem.to_string();
                }
                return word.to_string();
            }
        }

        word.to_string()
    }

    /// Step 5: remove a final -e and reduce -ll.
    fn step5(&self, word: &str) -> String {
        let word = match word.strip_suffix('e') {
            Some(stem) => {
                let m = self.measure(stem);
                if m > 1 || (m == 1 && !self.ends_cvc(stem)) {
                    stem.to_string()
                } else {
                    word.to_string()
                }
            }
            None => word.to_string(),
        };

        if word.ends_with("ll") && self.measure(&word) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = self.step1a(&word);
        let word = self.step1b(&word);
        let word = self.step1c(&word);
        let word = self.step2(&word);
        let word = self.step3(&word);
        let word = self.step4(&word);
        self.step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_porter_classic_vocabulary() {
        let stemmer = PorterStemmer::new();
        let cases = [
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("ties", "tie"),
            ("cats", "cat"),
            ("feed", "feed"),
            ("plastered", "plaster"),
            ("motoring", "motor"),
            ("sing", "sing"),
            ("conflated", "conflat"),
            ("hopping", "hop"),
            ("falling", "fall"),
            ("filing", "file"),
            ("happy", "happi"),
            ("relational", "relat"),
            ("hopeful", "hope"),
            ("goodness", "good"),
            ("adjustment", "adjust"),
            ("controll", "control"),
            ("generalization", "gener"),
            ("prizes", "prize"),
        ];

        for (word, expected) in cases {
            assert_eq!(stemmer.stem(word), expected, "stem({word})");
        }
    }

    #[test]
    fn test_short_and_non_ascii_words_pass_through() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("u"), "u");
        assert_eq!(stemmer.stem("cafés"), "cafés");
        assert_eq!(stemmer.stem("08712300220"), "08712300220");
        assert_eq!(stemmer.stem("Win"), "win");
    }

    #[test]
    fn test_mixed_digit_tokens_are_stemmed() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("2days"), "2day");
        assert_eq!(stemmer.stem("2nights"), "2night");
        assert_eq!(stemmer.stem("4txts"), "4txt");
        assert_eq!(stemmer.stem("150ppm"), "150ppm");
        assert!(stemmer.is_consonant(b"2day", 0));
    }

    #[test]
    fn test_spam_vocabulary_is_stable() {
        let stemmer = PorterStemmer::new();

        for word in ["win", "cash", "call", "later", "free", "text", "prize"] {
            let once = stemmer.stem(word);
            assert_eq!(stemmer.stem(&once), once, "re-stemming {word}");
        }
        assert_eq!(stemmer.stem("later"), "later");
        assert_eq!(stemmer.stem("call"), "call");
    }

    #[test]
    fn test_porter_measure() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.measure("tree"), 0);
        assert_eq!(stemmer.measure("trees"), 1);
        assert_eq!(stemmer.measure("trouble"), 1);
        assert_eq!(stemmer.measure("troubles"), 2);
        assert_eq!(stemmer.measure("oaten"), 2);
    }

    #[test]
    fn test_porter_consonant_detection() {
        let stemmer = PorterStemmer::new();
        let word = b"toy";

        assert!(stemmer.is_consonant(word, 0)); // t
        assert!(!stemmer.is_consonant(word, 1)); // o
        assert!(stemmer.is_consonant(word, 2)); // y after a vowel
        assert!(!stemmer.is_consonant(b"syzygy", 1)); // y after a consonant
    }
}
