//! Keyword vocabularies.
//!
//! The filter grammar only knows token kinds. Which words act as operators,
//! connectives, sort directions and order-list delimiters is decided by a
//! [`Vocabulary`] handed to the parser, so several vocabularies can coexist
//! and each can be tested on its own.
//!
//! Vocabularies are built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "case_sensitive": false,
//!   "connectives": { "and": "and", "or": "or" },
//!   "operators": { "eq": "is_equal_to", ">=": "is_greater_than_or_equal_to" },
//!   "directions": { "asc": "ascending", "desc": "descending" },
//!   "order_delimiters": [","]
//! }
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::ast::{Connective, Direction, OperatorCode, Token};
use crate::lexer::Lexer;

/// Errors raised while loading a vocabulary from configuration.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read vocabulary file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keyword {keyword:?} does not read as a single word")]
    InvalidKeyword { keyword: String },
}

/// Word-to-meaning maps consulted by the parser.
///
/// The `with_*` builders store keywords as given. A keyword only ever matches
/// if the lexer reads it as one word: `"is equal"`, `"-"` or `"1"` are
/// accepted here but can never resolve, and are skipped by the reverse
/// lookups. [`Vocabulary::from_json`] rejects such keywords with
/// [`VocabularyError::InvalidKeyword`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    case_sensitive: bool,
    connectives: BTreeMap<String, Connective>,
    operators: BTreeMap<String, OperatorCode>,
    directions: BTreeMap<String, Direction>,
    order_delimiters: BTreeSet<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VocabularyFile {
    #[serde(default)]
    case_sensitive: bool,
    #[serde(default)]
    connectives: BTreeMap<String, Connective>,
    #[serde(default)]
    operators: BTreeMap<String, OperatorCode>,
    #[serde(default)]
    directions: BTreeMap<String, Direction>,
    #[serde(default)]
    order_delimiters: Vec<String>,
}

impl Vocabulary {
    /// Empty, case-insensitive vocabulary.
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Empty vocabulary that matches keywords exactly.
    pub fn case_sensitive() -> Self {
        Vocabulary {
            case_sensitive: true,
            ..Vocabulary::default()
        }
    }

    /// OData-flavoured preset: `eq`/`ne`/`gt`..., their symbolic forms,
    /// `and`/`or`, `asc`/`desc`, and `,` between order entries.
    pub fn odata() -> Self {
        use OperatorCode::*;

        let operators = [
            ("eq", IsEqualTo),
            ("=", IsEqualTo),
            ("==", IsEqualTo),
            ("ne", IsNotEqualTo),
            ("!=", IsNotEqualTo),
            ("<>", IsNotEqualTo),
            ("lt", IsLessThan),
            ("<", IsLessThan),
            ("le", IsLessThanOrEqualTo),
            ("<=", IsLessThanOrEqualTo),
            ("gt", IsGreaterThan),
            (">", IsGreaterThan),
            ("ge", IsGreaterThanOrEqualTo),
            (">=", IsGreaterThanOrEqualTo),
            ("startswith", StartsWith),
            ("endswith", EndsWith),
            ("contains", Contains),
            ("doesnotcontain", DoesNotContain),
            ("in", IsContainedIn),
        ];

        let mut vocabulary = Vocabulary::new()
            .with_connective("and", Connective::And)
            .with_connective("&&", Connective::And)
            .with_connective("or", Connective::Or)
            .with_connective("||", Connective::Or)
            .with_direction("asc", Direction::Ascending)
            .with_direction("ascending", Direction::Ascending)
            .with_direction("desc", Direction::Descending)
            .with_direction("descending", Direction::Descending)
            .with_order_delimiter(",");

        for (word, code) in operators {
            vocabulary = vocabulary.with_operator(word, code);
        }
        vocabulary
    }

    /// Parse a JSON vocabulary document.
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let file: VocabularyFile = serde_json::from_str(json)?;

        let mut vocabulary = if file.case_sensitive {
            Vocabulary::case_sensitive()
        } else {
            Vocabulary::new()
        };

        let keywords = file
            .connectives
            .keys()
            .chain(file.operators.keys())
            .chain(file.directions.keys())
            .chain(file.order_delimiters.iter());
        for keyword in keywords {
            if !is_single_word(keyword) {
                return Err(VocabularyError::InvalidKeyword {
                    keyword: keyword.clone(),
                });
            }
        }

        for (word, connective) in file.connectives {
            vocabulary = vocabulary.with_connective(word, connective);
        }
        for (word, code) in file.operators {
            vocabulary = vocabulary.with_operator(word, code);
        }
        for (word, direction) in file.directions {
            vocabulary = vocabulary.with_direction(word, direction);
        }
        for word in file.order_delimiters {
            vocabulary = vocabulary.with_order_delimiter(word);
        }
        Ok(vocabulary)
    }

    /// Read and parse a JSON vocabulary file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Vocabulary::from_json(&json)
    }

    pub fn with_connective(mut self, word: impl Into<String>, connective: Connective) -> Self {
        let key = self.key(word.into());
        self.connectives.insert(key, connective);
        self
    }

    pub fn with_operator(mut self, word: impl Into<String>, code: OperatorCode) -> Self {
        let key = self.key(word.into());
        self.operators.insert(key, code);
        self
    }

    pub fn with_direction(mut self, word: impl Into<String>, direction: Direction) -> Self {
        let key = self.key(word.into());
        self.directions.insert(key, direction);
        self
    }

    pub fn with_order_delimiter(mut self, word: impl Into<String>) -> Self {
        let key = self.key(word.into());
        self.order_delimiters.insert(key);
        self
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn connective(&self, word: &str) -> Option<Connective> {
        self.connectives.get(self.lookup_key(word).as_ref()).copied()
    }

    pub fn operator(&self, word: &str) -> Option<OperatorCode> {
        self.operators.get(self.lookup_key(word).as_ref()).copied()
    }

    pub fn direction(&self, word: &str) -> Option<Direction> {
        self.directions.get(self.lookup_key(word).as_ref()).copied()
    }

    pub fn is_order_delimiter(&self, word: &str) -> bool {
        self.order_delimiters.contains(self.lookup_key(word).as_ref())
    }

    // Reverse lookups pick a keyword that reads back as a single word,
    // preferring spelled-out words over symbols, then sorted order.

    pub fn connective_keyword(&self, connective: Connective) -> Option<&str> {
        first_keyword(&self.connectives, connective)
    }

    pub fn operator_keyword(&self, code: OperatorCode) -> Option<&str> {
        first_keyword(&self.operators, code)
    }

    pub fn direction_keyword(&self, direction: Direction) -> Option<&str> {
        first_keyword(&self.directions, direction)
    }

    /// Unlike the other reverse lookups, symbols such as `,` win here.
    pub fn order_delimiter_keyword(&self) -> Option<&str> {
        self.order_delimiters
            .iter()
            .map(String::as_str)
            .filter(|word| is_single_word(word))
            .min_by_key(|word| (!is_symbolic(word), *word))
    }

    fn key(&self, word: String) -> String {
        if self.case_sensitive {
            word
        } else {
            word.to_ascii_lowercase()
        }
    }

    fn lookup_key<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(word.to_ascii_lowercase())
        }
    }
}

fn first_keyword<T: PartialEq + Copy>(map: &BTreeMap<String, T>, wanted: T) -> Option<&str> {
    map.iter()
        .filter(|(_, value)| **value == wanted)
        .map(|(word, _)| word.as_str())
        .filter(|word| is_single_word(word))
        .min_by_key(|word| (is_symbolic(word), *word))
}

pub(crate) fn is_symbolic(word: &str) -> bool {
    word.chars().all(|c| !c.is_alphanumeric())
}

/// True when `text` lexes as exactly one word token equal to itself.
pub(crate) fn is_single_word(text: &str) -> bool {
    let mut lexer = Lexer::new(text);
    matches!(lexer.next_token(), Token::Word(word) if word == text)
        && lexer.next_token() == Token::EndOfInput
}
