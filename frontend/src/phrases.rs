use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

pub const PHRASES: &[&str] = &[
    "La fortuna è un’arte, non un dono.",
    "Ogni scelta scolpisce il tuo destino.",
    "L’errore è il tuo maestro.",
    "Il coraggio crea opportunità.",
    "Il rischio è la scintilla della fortuna.",
    "Non aspettare, crea la tua strada.",
    "La fortuna ama gli audaci.",
    "Sbaglia, impara, rialzati.",
    "Il cambiamento è la vera costante.",
    "Coltiva la tua unicità.",
];

/// Uniform pick from a fixed list. Repeats are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhrasePicker {
    phrases: &'static [&'static str],
}

impl Default for PhrasePicker {
    fn default() -> Self {
        Self::new(PHRASES)
    }
}

impl PhrasePicker {
    pub const fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases }
    }

    pub fn next_phrase(&self) -> &'static str {
        self.next_phrase_with(&mut thread_rng())
    }

    pub fn next_phrase_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.phrases.choose(rng).copied().unwrap_or_default()
    }
}
