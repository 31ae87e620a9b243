// ABOUTME: Static Ars Magica domain lists used as iteration sources
// ABOUTME: Characteristics, the two axes of the magic system, and the dice kinds

/// Character characteristics, in sheet order
pub const CHARACTERISTICS: &[&str] = &[
    "intelligence",
    "perception",
    "strength",
    "stamina",
    "presence",
    "communication",
    "dexterity",
    "quickness",
];

/// Hermetic techniques (the verbs of the magic system)
pub const TECHNIQUES: &[&str] = &["creo", "intellego", "muto", "perdo", "rego"];

/// Hermetic forms (the nouns of the magic system)
pub const FORMS: &[&str] = &[
    "animal", "aquam", "auram", "corpus", "herbam", "ignem", "imaginem", "mentem", "terram", "vim",
];

/// Number of forms shown in the first column of the arts table
pub const FORMS_FIRST_COLUMN: usize = 5;

/// Die used by a roll button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Die {
    Simple,
    Stress,
}

impl Die {
    pub fn all() -> &'static [Die] {
        &[Die::Simple, Die::Stress]
    }

    /// Sheet attribute holding the die expression
    pub fn attribute(&self) -> &'static str {
        match self {
            Die::Simple => "@{simple-die}",
            Die::Stress => "@{stress-die}",
        }
    }

    /// Suffix of the fragment name carrying this die
    pub fn suffix(&self) -> &'static str {
        match self {
            Die::Simple => "simple",
            Die::Stress => "stress",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sizes() {
        assert_eq!(CHARACTERISTICS.len(), 8);
        assert_eq!(TECHNIQUES.len(), 5);
        assert_eq!(FORMS.len(), 10);
        assert!(FORMS_FIRST_COLUMN < FORMS.len());
    }

    #[test]
    fn test_die_attributes() {
        assert_eq!(Die::Simple.attribute(), "@{simple-die}");
        assert_eq!(Die::Stress.attribute(), "@{stress-die}");
        assert_eq!(Die::all().len(), 2);
    }
}
