//! Character categories and password alphabet resolution.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::errors::{RandError, Result};

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBER: &str = "0123456789";
const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Alphabet,
    Lower,
    Upper,
    Number,
    Special,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Alphabet,
        Category::Lower,
        Category::Upper,
        Category::Number,
        Category::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Alphabet => "alphabet",
            Category::Lower => "lower",
            Category::Upper => "upper",
            Category::Number => "number",
            Category::Special => "special",
        }
    }

    fn groups(self) -> &'static [&'static str] {
        match self {
            Category::Alphabet => &[LOWER, UPPER],
            Category::Lower => &[LOWER],
            Category::Upper => &[UPPER],
            Category::Number => &[NUMBER],
            Category::Special => &[SPECIAL],
        }
    }

    pub fn names() -> String {
        Category::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = RandError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| RandError::UnknownCategory {
                name: s.to_string(),
                expected: Category::names(),
            })
    }
}

pub fn parse_categories(names: &[String]) -> Result<Vec<Category>> {
    names.iter().map(|n| n.parse()).collect()
}

/// Category lookup, with the one configurable knob: whether `special`
/// carries a space.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTable {
    special_includes_space: bool,
}

impl CharTable {
    pub fn new(special_includes_space: bool) -> Self {
        Self {
            special_includes_space,
        }
    }

    pub fn category(&self, category: Category) -> BTreeSet<char> {
        let mut chars: BTreeSet<char> = category
            .groups()
            .iter()
            .flat_map(|group| group.chars())
            .collect();
        if category == Category::Special && self.special_includes_space {
            chars.insert(' ');
        }
        chars
    }

    pub fn all(&self) -> BTreeSet<char> {
        [Category::Alphabet, Category::Number, Category::Special]
            .into_iter()
            .flat_map(|c| self.category(c))
            .collect()
    }
}

/// What the caller asked for on the include and exclude sides.
#[derive(Debug, Clone, Default)]
pub struct ResolutionRequest {
    pub include_chars: BTreeSet<char>,
    pub include_categories: Vec<Category>,
    pub exclude_chars: BTreeSet<char>,
    pub exclude_categories: Vec<Category>,
}

impl ResolutionRequest {
    fn includes(&self) -> bool {
        !self.include_chars.is_empty() || !self.include_categories.is_empty()
    }

    fn excludes(&self) -> bool {
        !self.exclude_chars.is_empty() || !self.exclude_categories.is_empty()
    }

    /// Computes the set of characters eligible for drawing.
    ///
    /// The include and exclude sides may not be combined. The result can be
    /// empty; rejecting that is up to the caller.
    pub fn resolve(&self, table: &CharTable) -> Result<BTreeSet<char>> {
        let resolved = match (self.includes(), self.excludes()) {
            (true, true) => return Err(RandError::IncludeExcludeConflict),
            (false, true) => {
                let mut remaining: BTreeSet<char> =
                    table.all().difference(&self.exclude_chars).copied().collect();
                for category in &self.exclude_categories {
                    let drop = table.category(*category);
                    remaining.retain(|c| !drop.contains(c));
                }
                remaining
            }
            (true, false) => {
                let mut chosen = self.include_chars.clone();
                for category in &self.include_categories {
                    chosen.extend(table.category(*category));
                }
                chosen
            }
            (false, false) => table.all(),
        };
        debug!(size = resolved.len(), "resolved password alphabet");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chars(s: &str) -> BTreeSet<char> {
        s.chars().collect()
    }

    #[test]
    fn default_alphabet_has_94_characters() {
        let table = CharTable::default();
        let all = ResolutionRequest::default().resolve(&table).unwrap();
        assert_eq!(all.len(), 94);
        assert!(!all.contains(&' '));
        assert!(all.contains(&'~'));
        assert!(all.contains(&'\\'));
    }

    #[test]
    fn space_option_extends_special() {
        let table = CharTable::new(true);
        assert_eq!(table.category(Category::Special).len(), 33);
        assert_eq!(table.all().len(), 95);
        assert!(table.all().contains(&' '));
    }

    #[test]
    fn alphabet_is_lower_and_upper() {
        let table = CharTable::default();
        let mut both = table.category(Category::Lower);
        both.extend(table.category(Category::Upper));
        assert_eq!(table.category(Category::Alphabet), both);
    }

    #[test]
    fn parses_known_names_only() {
        assert_eq!("number".parse::<Category>().unwrap(), Category::Number);
        let err = "digits".parse::<Category>().unwrap_err();
        assert!(matches!(err, RandError::UnknownCategory { ref name, .. } if name == "digits"));
        assert!(err.to_string().contains("alphabet, lower, upper, number, special"));
    }

    #[test]
    fn include_only_chars_yields_exactly_those() {
        let request = ResolutionRequest {
            include_chars: chars("abc"),
            ..Default::default()
        };
        assert_eq!(request.resolve(&CharTable::default()).unwrap(), chars("abc"));
    }

    #[test]
    fn include_chars_and_category_union() {
        let request = ResolutionRequest {
            include_chars: chars("!"),
            include_categories: vec![Category::Number],
            ..Default::default()
        };
        assert_eq!(
            request.resolve(&CharTable::default()).unwrap(),
            chars("!0123456789")
        );
    }

    #[test]
    fn exclude_chars_and_categories_subtract() {
        let request = ResolutionRequest {
            exclude_chars: chars("xyz"),
            exclude_categories: vec![Category::Upper, Category::Number, Category::Special],
            ..Default::default()
        };
        assert_eq!(
            request.resolve(&CharTable::default()).unwrap(),
            chars("abcdefghijklmnopqrstuvw")
        );
    }

    #[test]
    fn excluding_everything_is_empty() {
        let request = ResolutionRequest {
            exclude_categories: vec![Category::Alphabet, Category::Number, Category::Special],
            ..Default::default()
        };
        assert!(request.resolve(&CharTable::default()).unwrap().is_empty());
    }

    fn any_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn exclude_order_does_not_matter(cats in prop::collection::vec(any_category(), 0..6)) {
            let table = CharTable::default();
            let forward = ResolutionRequest {
                exclude_categories: cats.clone(),
                ..Default::default()
            };
            let mut reversed_cats = cats;
            reversed_cats.reverse();
            let reversed = ResolutionRequest {
                exclude_categories: reversed_cats,
                ..Default::default()
            };
            prop_assert_eq!(forward.resolve(&table).unwrap(), reversed.resolve(&table).unwrap());
        }

        #[test]
        fn include_with_exclude_always_fails(
            inc in "[a-z]{0,4}",
            inc_cats in prop::collection::vec(any_category(), 0..3),
            exc in "[a-z]{0,4}",
            exc_cats in prop::collection::vec(any_category(), 0..3),
        ) {
            prop_assume!(!inc.is_empty() || !inc_cats.is_empty());
            prop_assume!(!exc.is_empty() || !exc_cats.is_empty());
            let request = ResolutionRequest {
                include_chars: chars(&inc),
                include_categories: inc_cats,
                exclude_chars: chars(&exc),
                exclude_categories: exc_cats,
            };
            prop_assert!(matches!(
                request.resolve(&CharTable::default()),
                Err(RandError::IncludeExcludeConflict)
            ));
        }
    }
}
