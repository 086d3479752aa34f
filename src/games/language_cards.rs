//! # Language Cards
//!
//! Alphabet flashcards for English, Hebrew and Russian. Each language keeps
//! its letters in alphabetical order and in a current display order that can
//! be shuffled and restored. Selecting a card gives its pronunciation.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

const ENGLISH_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const HEBREW_ALPHABET: &str = "אבגדהוזחטיכלמנסעפצקרשת";
const RUSSIAN_ALPHABET: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

const ENGLISH_VOWELS: &str = "AEIOU";
const RUSSIAN_VOWELS: &str = "АЕЁИОУЫЭЮЯ";
const RUSSIAN_SIGNS: &str = "ЪЬ";

const ENGLISH_PHONETICS: &[(char, &str)] = &[
    ('A', "ay"),
    ('B', "bee"),
    ('C', "see"),
    ('D', "dee"),
    ('E', "ee"),
    ('F', "eff"),
    ('G', "jee"),
    ('H', "aych"),
    ('I', "ai"),
    ('J', "jay"),
    ('K', "kay"),
    ('L', "ell"),
    ('M', "em"),
    ('N', "en"),
    ('O', "oh"),
    ('P', "pee"),
    ('Q', "kyoo"),
    ('R', "arr"),
    ('S', "ess"),
    ('T', "tee"),
    ('U', "yoo"),
    ('V', "vee"),
    ('W', "double-yoo"),
    ('X', "eks"),
    ('Y', "wai"),
    ('Z', "zee"),
];

// Final forms are listed for lookups even though the deck shows base letters.
const HEBREW_PHONETICS: &[(char, &str)] = &[
    ('א', "aleph"),
    ('ב', "bet"),
    ('ג', "gimel"),
    ('ד', "dalet"),
    ('ה', "hey"),
    ('ו', "vav"),
    ('ז', "zayin"),
    ('ח', "chet"),
    ('ט', "tet"),
    ('י', "yod"),
    ('כ', "kaf"),
    ('ל', "lamed"),
    ('מ', "mem"),
    ('ן', "nun sofit"),
    ('נ', "nun"),
    ('ס', "samech"),
    ('ע', "ayin"),
    ('פ', "pey"),
    ('ף', "pey sofit"),
    ('צ', "tzadi"),
    ('ץ', "tzadi sofit"),
    ('ק', "quf"),
    ('ר', "resh"),
    ('ש', "shin"),
    ('ת', "tav"),
];

const RUSSIAN_PHONETICS: &[(char, &str)] = &[
    ('А', "ah"),
    ('Б', "beh"),
    ('В', "veh"),
    ('Г', "geh"),
    ('Д', "deh"),
    ('Е', "yeh"),
    ('Ё', "yo"),
    ('Ж', "zheh"),
    ('З', "zeh"),
    ('И', "ee"),
    ('Й', "ee kratkoye"),
    ('К', "kah"),
    ('Л', "el"),
    ('М', "em"),
    ('Н', "en"),
    ('О', "oh"),
    ('П', "peh"),
    ('Р', "er"),
    ('С', "es"),
    ('Т', "teh"),
    ('У', "oo"),
    ('Ф', "ef"),
    ('Х', "khah"),
    ('Ц', "tseh"),
    ('Ч', "cheh"),
    ('Ш', "shah"),
    ('Щ', "shchah"),
    ('Ъ', "tvyordiy znak"),
    ('Ы', "ih"),
    ('Ь', "myagkiy znak"),
    ('Э', "eh"),
    ('Ю', "yoo"),
    ('Я', "yah"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Hebrew,
    Russian,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hebrew, Language::Russian];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hebrew => "Hebrew",
            Language::Russian => "Russian",
        }
    }

    pub fn alphabet(self) -> &'static str {
        match self {
            Language::English => ENGLISH_ALPHABET,
            Language::Hebrew => HEBREW_ALPHABET,
            Language::Russian => RUSSIAN_ALPHABET,
        }
    }

    /// Pronunciation guide for `letter`, if known.
    pub fn phonetic(self, letter: char) -> Option<&'static str> {
        let table = match self {
            Language::English => ENGLISH_PHONETICS,
            Language::Hebrew => HEBREW_PHONETICS,
            Language::Russian => RUSSIAN_PHONETICS,
        };
        table.iter().find(|(l, _)| *l == letter).map(|(_, p)| *p)
    }

    fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Hebrew => 1,
            Language::Russian => 2,
        }
    }
}

/// One flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCard {
    pub letter: char,
    pub phonetic: Option<&'static str>,
    /// Position in alphabetical order.
    pub index: usize,
}

impl LetterCard {
    /// Screen-reader style description, e.g. `Letter A, pronounced ay`.
    pub fn label(&self) -> String {
        match self.phonetic {
            Some(p) => format!("Letter {}, pronounced {}", self.letter, p),
            None => format!("Letter {}", self.letter),
        }
    }

    /// Text shown when the card is selected: the pronunciation, falling back
    /// to the letter itself.
    pub fn feedback(&self) -> String {
        self.phonetic
            .map(str::to_string)
            .unwrap_or_else(|| self.letter.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    pub language: Language,
    original: Vec<LetterCard>,
    current: Vec<LetterCard>,
}

impl Deck {
    pub fn new(language: Language) -> Self {
        let original: Vec<LetterCard> = language
            .alphabet()
            .chars()
            .enumerate()
            .map(|(index, letter)| LetterCard {
                letter,
                phonetic: language.phonetic(letter),
                index,
            })
            .collect();
        Self {
            language,
            current: original.clone(),
            original,
        }
    }

    /// Cards in display order.
    pub fn cards(&self) -> &[LetterCard] {
        &self.current
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn is_in_original_order(&self) -> bool {
        self.current == self.original
    }

    /// Shuffles the display order in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current.shuffle(rng);
    }

    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    pub fn stats(&self) -> LanguageStats {
        let count = |set: &str| self.original.iter().filter(|c| set.contains(c.letter)).count();
        let total = self.original.len();
        match self.language {
            Language::English => {
                let vowels = count(ENGLISH_VOWELS);
                LanguageStats {
                    total,
                    vowels: Some(vowels),
                    consonants: Some(total - vowels),
                    signs: None,
                }
            }
            // The Hebrew alphabet does not mark vowels.
            Language::Hebrew => LanguageStats {
                total,
                vowels: None,
                consonants: None,
                signs: None,
            },
            Language::Russian => {
                let vowels = count(RUSSIAN_VOWELS);
                let signs = count(RUSSIAN_SIGNS);
                LanguageStats {
                    total,
                    vowels: Some(vowels),
                    consonants: Some(total - vowels - signs),
                    signs: Some(signs),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStats {
    pub total: usize,
    pub vowels: Option<usize>,
    pub consonants: Option<usize>,
    pub signs: Option<usize>,
}

/// The flashcard viewer: one deck per language plus a focused card.
#[derive(Debug, Clone)]
pub struct LanguageCards {
    decks: [Deck; 3],
    pub show_phonetics: bool,
    focus_language: Language,
    focus_index: usize,
    feedback: Option<String>,
    rng: Xoshiro256PlusPlus,
}

impl LanguageCards {
    /// Creates the viewer with a shuffle generator seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            decks: Language::ALL.map(Deck::new),
            show_phonetics: false,
            focus_language: Language::English,
            focus_index: 0,
            feedback: None,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    pub fn deck(&self, language: Language) -> &Deck {
        &self.decks[language.index()]
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn shuffle(&mut self) {
        for deck in &mut self.decks {
            deck.shuffle(&mut self.rng);
        }
        debug!("letters shuffled");
    }

    pub fn reset_order(&mut self) {
        for deck in &mut self.decks {
            deck.reset();
        }
        debug!("order reset to original");
    }

    pub fn toggle_phonetics(&mut self) {
        self.show_phonetics = !self.show_phonetics;
        debug!(show = self.show_phonetics, "phonetics toggled");
    }

    pub fn focus(&self) -> (Language, usize) {
        (self.focus_language, self.focus_index)
    }

    /// Moves the focus within the current language row, wrapping at the ends.
    pub fn move_focus(&mut self, delta: isize) {
        let len = self.deck(self.focus_language).len() as isize;
        if len == 0 {
            return;
        }
        self.focus_index = (self.focus_index as isize + delta).rem_euclid(len) as usize;
    }

    /// Moves the focus to the next (or previous) language row.
    pub fn cycle_language(&mut self, forward: bool) {
        let i = self.focus_language.index();
        let next = if forward { (i + 1) % 3 } else { (i + 2) % 3 };
        self.focus_language = Language::ALL[next];
        let len = self.deck(self.focus_language).len();
        self.focus_index = self.focus_index.min(len.saturating_sub(1));
    }

    /// Sets the focus directly, e.g. from a mouse click.
    pub fn set_focus(&mut self, language: Language, index: usize) {
        if index < self.deck(language).len() {
            self.focus_language = language;
            self.focus_index = index;
        }
    }

    /// Selects the focused card and returns its feedback text.
    pub fn select_focused(&mut self) -> Option<String> {
        self.select(self.focus_language, self.focus_index)
    }

    /// Selects the card at `index` of the language row, moving the focus to
    /// it, and returns its feedback text.
    pub fn select(&mut self, language: Language, index: usize) -> Option<String> {
        let card = self.deck(language).cards().get(index).copied()?;
        self.focus_language = language;
        self.focus_index = index;
        debug!(letter = %card.letter, phonetic = ?card.phonetic, "letter selected");
        let text = card.feedback();
        self.feedback = Some(text.clone());
        Some(text)
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }
}
