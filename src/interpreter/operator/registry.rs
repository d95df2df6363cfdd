use std::{
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};

use crate::interpreter::operator::{OPERATORS, Operator, OperatorDef};

static REGISTRY: LazyLock<OperatorRegistry> =
    LazyLock::new(|| OperatorRegistry::with_operators(&OPERATORS));

/// Lookup structure over a set of operator definitions.
///
/// The registry keeps two indexes:
/// - literal to definition, for exact lookups;
/// - first byte of the literal to `{literal length -> definition}`, so the
///   lexer can try every operator starting with the current byte, longest
///   first.
///
/// It is filled once and never changes afterwards. The process-wide instance
/// over [`OPERATORS`] is returned by [`OperatorRegistry::global`].
#[derive(Debug, Default)]
pub struct OperatorRegistry {
    by_literal:    HashMap<&'static str, &'static OperatorDef>,
    by_first_byte: HashMap<u8, BTreeMap<usize, &'static OperatorDef>>,
}

impl OperatorRegistry {
    /// Returns the registry over the built-in operator table.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Builds a registry from a table of definitions.
    ///
    /// # Panics
    /// Panics if an entry is not at the index of its `Operator` discriminant, or
    /// if [`register`](Self::register) rejects it.
    #[must_use]
    pub fn with_operators(defs: &'static [OperatorDef]) -> Self {
        let mut registry = Self::default();
        for (index, def) in defs.iter().enumerate() {
            assert!(def.operator as usize == index,
                    "operator '{}' is out of order in the operator table",
                    def.literal);
            registry.register(def);
        }
        registry
    }

    /// Adds one definition to both indexes.
    ///
    /// # Panics
    /// Panics if the literal is empty or already registered. Both are mistakes
    /// in the operator table, not in user input.
    pub fn register(&mut self, def: &'static OperatorDef) {
        let Some(&first) = def.literal.as_bytes().first() else {
            panic!("operator literal cannot be empty");
        };
        assert!(!self.by_literal.contains_key(def.literal),
                "operator '{}' already registered",
                def.literal);

        self.by_literal.insert(def.literal, def);
        self.by_first_byte
            .entry(first)
            .or_default()
            .insert(def.literal.len(), def);
    }

    /// Recognises an operator at `cursor`.
    ///
    /// `input` must not contain whitespace. Candidates sharing the byte at
    /// `cursor` are tried from the longest literal down, and the first one whose
    /// lexing rule succeeds wins, so `**` is found before `*`.
    ///
    /// # Returns
    /// The operator and the cursor just past it, or `None` if no operator starts
    /// at `cursor`.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::operator::{Operator, OperatorRegistry};
    ///
    /// let registry = OperatorRegistry::global();
    /// assert_eq!(registry.lex("2**3", 1), Some((Operator::Power, 3)));
    /// assert_eq!(registry.lex("2*3", 1), Some((Operator::Multiply, 2)));
    /// assert_eq!(registry.lex("2*3", 0), None);
    /// ```
    #[must_use]
    pub fn lex(&self, input: &str, cursor: usize) -> Option<(Operator, usize)> {
        let first = input.as_bytes().get(cursor)?;
        self.by_first_byte
            .get(first)?
            .values()
            .rev()
            .find_map(|def| (def.lex)(input, cursor).map(|next| (def.operator, next)))
    }

    /// Returns the operator registered under `literal`.
    ///
    /// # Panics
    /// Panics if no such operator exists. Literals come from the operator table
    /// itself, so a miss is an internal inconsistency.
    #[must_use]
    pub fn get_by_literal(&self, literal: &str) -> Operator {
        match self.by_literal.get(literal) {
            Some(def) => def.operator,
            None => panic!("operator not found: '{literal}'"),
        }
    }

    /// Number of registered operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_literal.len()
    }

    /// `true` if no operator has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_literal.is_empty()
    }
}
