//! Built-in chemistry content.
//!
//! The game center's curated material on orbitals, hybridization and bonding.
//! Enough of every kind to run each game with default configuration.

use super::item::{Blank, ContentPair, Question, SortingSet};
use super::pool::ContentPool;

impl ContentPool {
    /// The built-in chemistry library.
    #[must_use]
    pub fn chemistry() -> Self {
        Self {
            pairs: chemistry_pairs(),
            sorting_sets: chemistry_sorting_sets(),
            questions: chemistry_questions(),
            blanks: chemistry_blanks(),
        }
    }

    /// The built-in library with its term/definition pairs swapped for `pairs`.
    ///
    /// Sorting sets, questions and blanks stay built-in; only matching and
    /// memory draw from the supplied pairs.
    #[must_use]
    pub fn chemistry_with_pairs(pairs: Vec<ContentPair>) -> Self {
        Self {
            pairs,
            ..Self::chemistry()
        }
    }
}

fn chemistry_pairs() -> Vec<ContentPair> {
    vec![
        ContentPair::new(1, "Carbon", "Element with 4 valence electrons"),
        ContentPair::new(2, "Hybridization", "Mixing of atomic orbitals"),
        ContentPair::new(3, "Sigma Bond", "Head-to-head orbital overlap"),
        ContentPair::new(4, "Pi Bond", "Side-to-side orbital overlap"),
        ContentPair::new(5, "Electronegativity", "Ability to attract electrons"),
        ContentPair::new(6, "sp³ Hybrid", "Tetrahedral geometry (109.5°)"),
        ContentPair::new(7, "sp² Hybrid", "Trigonal planar geometry (120°)"),
        ContentPair::new(8, "sp Hybrid", "Linear geometry (180°)"),
    ]
}

fn chemistry_sorting_sets() -> Vec<SortingSet> {
    vec![
        SortingSet::ordered(
            "Bond Angles (Smallest to Largest)",
            &[
                "H₂O (104.5°)",
                "NH₃ (107°)",
                "CH₄ (109.5°)",
                "BF₃ (120°)",
                "CO₂ (180°)",
            ],
        ),
        SortingSet::ordered(
            "Electronegativity (Lowest to Highest)",
            &[
                "Carbon (2.5)",
                "Nitrogen (3.0)",
                "Chlorine (3.2)",
                "Oxygen (3.5)",
                "Fluorine (4.0)",
            ],
        ),
        SortingSet::ordered(
            "Bond Strength (Weakest to Strongest)",
            &["Van der Waals", "Hydrogen Bond", "Ionic Bond", "Covalent Bond"],
        ),
    ]
}

fn chemistry_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "What is the bond angle in methane (CH₄)?",
            ["90°", "107°", "109.5°", "120°"],
            2,
        ),
        Question::new(
            2,
            "sp² hybridization gives which geometry?",
            ["Linear", "Tetrahedral", "Trigonal Planar", "Bent"],
            2,
        ),
        Question::new(
            3,
            "How many sigma bonds in a triple bond?",
            ["0", "1", "2", "3"],
            1,
        ),
        Question::new(
            4,
            "What is the shape of water (H₂O)?",
            ["Linear", "Bent", "Trigonal", "Tetrahedral"],
            1,
        ),
        Question::new(
            5,
            "Which element is most electronegative?",
            ["Oxygen", "Carbon", "Fluorine", "Nitrogen"],
            2,
        ),
        Question::new(
            6,
            "Pi bonds form from which orbital overlap?",
            ["Head-on", "Side-by-side", "s-s", "s-p"],
            1,
        ),
        Question::new(
            7,
            "Bond order of N₂?",
            ["1", "2", "3", "4"],
            2,
        ),
        Question::new(
            8,
            "Lone pairs occupy more space than bonding pairs?",
            ["True", "False", "Sometimes", "Never"],
            0,
        ),
    ]
}

fn chemistry_blanks() -> Vec<Blank> {
    vec![
        Blank::new(
            "Carbon has ___ valence electrons.",
            "4",
            ["2", "4", "6", "8"],
        ),
        Blank::new(
            "A double bond consists of 1 sigma and ___ pi bond(s).",
            "1",
            ["0", "1", "2", "3"],
        ),
        Blank::new(
            "sp³ hybridization creates ___ degree bond angles.",
            "109.5",
            ["90", "109.5", "120", "180"],
        ),
        Blank::new(
            "The molecular shape of NH₃ is trigonal ___.",
            "pyramidal",
            ["planar", "pyramidal", "linear", "bipyramidal"],
        ),
        Blank::new(
            "Rotation is restricted around ___ bonds.",
            "double",
            ["single", "double", "ionic", "hydrogen"],
        ),
    ]
}
