//! Input parser: tokenizes user input and resolves tokens against the
//! command tree by prefix.
//!
//! Resolution walks one tree level per token. At each level the FIRST child
//! (declaration order) whose name starts with the token is selected. The walk
//! stops at the first token with no match; later tokens stay unresolved.

use unicode_normalization::UnicodeNormalization;

use crate::models::Entity;

// =============================================================================
// Tokenizer
// =============================================================================

/// Split input into whitespace-delimited, NFC-normalized tokens.
///
/// Empty or all-whitespace input yields no tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|token| token.nfc().collect())
        .collect()
}

// =============================================================================
// Parsed Command
// =============================================================================

/// A raw input token and the entity it resolved to at its depth, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedToken<'w> {
    pub token: String,
    pub entity: Option<&'w Entity>,
}

/// Result of parsing one line of input: every token in input order, paired
/// with its resolved entity. Resolved tokens always form a prefix.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedCommand<'w> {
    tokens: Vec<ParsedToken<'w>>,
}

impl<'w> ParsedCommand<'w> {
    pub fn tokens(&self) -> &[ParsedToken<'w>] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn resolved_count(&self) -> usize {
        self.tokens.iter().take_while(|t| t.entity.is_some()).count()
    }

    /// Resolved entities, root-to-leaf.
    ///
    /// With `strict`, the chain is returned only if every token resolved;
    /// otherwise the result is empty. Callers compare its length against
    /// [`token_count`](Self::token_count) to decide whether the input is an
    /// exact command.
    pub fn entities(&self, strict: bool) -> Vec<&'w Entity> {
        if strict && !self.is_exact() {
            return Vec::new();
        }
        self.tokens.iter().map_while(|t| t.entity).collect()
    }

    /// Every token resolved (and there is at least one).
    pub fn is_exact(&self) -> bool {
        !self.tokens.is_empty() && self.resolved_count() == self.tokens.len()
    }

    /// The deepest resolved entity.
    pub fn deepest(&self) -> Option<&'w Entity> {
        self.tokens.iter().map_while(|t| t.entity).last()
    }

    /// The first token that did not resolve.
    pub fn unconsumed(&self) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| t.entity.is_none())
            .map(|t| t.token.as_str())
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Resolves input against the children of a root entity.
#[derive(Clone, Copy, Debug)]
pub struct InputParser<'w> {
    root: &'w Entity,
}

impl<'w> InputParser<'w> {
    pub fn new(root: &'w Entity) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &'w Entity {
        self.root
    }

    /// Tokenize `input` and resolve the tokens.
    pub fn parse(&self, input: &str) -> ParsedCommand<'w> {
        self.resolve(tokenize(input))
    }

    /// Resolve already tokenized input.
    pub fn resolve(&self, tokens: Vec<String>) -> ParsedCommand<'w> {
        let mut current = Some(self.root);
        let tokens = tokens
            .into_iter()
            .map(|token| {
                let entity = current.and_then(|parent| parent.child_with_prefix(&token));
                current = entity;
                ParsedToken { token, entity }
            })
            .collect();

        let parsed = ParsedCommand { tokens };
        tracing::trace!(
            tokens = parsed.token_count(),
            resolved = parsed.resolved_count(),
            "parsed input"
        );
        parsed
    }
}
