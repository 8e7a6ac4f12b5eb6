//! Branch glyph vocabulary for tree rendering

use crate::error::DecoratorError;

/// Role a glyph plays within a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphRole {
    /// Branch for a sibling that has later siblings.
    Middle,
    /// Branch for the last sibling at its level.
    Terminal,
    /// Continuation line under a `Middle` ancestor.
    ParentJoin,
    /// Blank filler under a `Terminal` ancestor.
    ParentEmpty,
}

impl GlyphRole {
    pub const ALL: [GlyphRole; 4] = [
        GlyphRole::Middle,
        GlyphRole::Terminal,
        GlyphRole::ParentJoin,
        GlyphRole::ParentEmpty,
    ];
}

/// Pluggable glyph vocabulary.
///
/// Glyphs may be multi-character but are compared atomically: the prefix
/// rewrite detects a full glyph at the tail, never a single character.
/// Swapping the decorator changes rendering only; traversal order and the
/// event sequence are unaffected.
pub trait Decorator {
    /// The glyph drawn for `role`.
    fn glyph(&self, role: GlyphRole) -> &str;

    /// Whether `candidate` is exactly the glyph for `role`.
    fn is_glyph(&self, role: GlyphRole, candidate: &str) -> bool {
        self.glyph(role) == candidate
    }
}

/// Owned four-glyph set.
///
/// The constructor rejects sets whose glyphs are not pairwise distinct;
/// a duplicate would make rendered prefixes ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    middle: String,
    terminal: String,
    parent_join: String,
    parent_empty: String,
}

impl GlyphSet {
    pub fn new(
        middle: impl Into<String>,
        terminal: impl Into<String>,
        parent_join: impl Into<String>,
        parent_empty: impl Into<String>,
    ) -> Result<Self, DecoratorError> {
        let glyphs = [
            (GlyphRole::Middle, middle.into()),
            (GlyphRole::Terminal, terminal.into()),
            (GlyphRole::ParentJoin, parent_join.into()),
            (GlyphRole::ParentEmpty, parent_empty.into()),
        ];
        for (i, (role, glyph)) in glyphs.iter().enumerate() {
            if let Some((first, _)) = glyphs[..i].iter().find(|(_, g)| g == glyph) {
                return Err(DecoratorError::DuplicateGlyph {
                    first: *first,
                    second: *role,
                    glyph: glyph.clone(),
                });
            }
        }
        let [(_, middle), (_, terminal), (_, parent_join), (_, parent_empty)] = glyphs;
        Ok(Self {
            middle,
            terminal,
            parent_join,
            parent_empty,
        })
    }

    /// The classic box-drawing set. Default.
    pub fn unicode() -> Self {
        Self {
            middle: "├".to_string(),
            terminal: "└".to_string(),
            parent_join: "│".to_string(),
            parent_empty: " ".to_string(),
        }
    }

    /// Plain-ASCII set for terminals without box-drawing support.
    pub fn ascii() -> Self {
        Self {
            middle: "|-".to_string(),
            terminal: "`-".to_string(),
            parent_join: "| ".to_string(),
            parent_empty: "  ".to_string(),
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::unicode()
    }
}

impl Decorator for GlyphSet {
    fn glyph(&self, role: GlyphRole) -> &str {
        match role {
            GlyphRole::Middle => &self.middle,
            GlyphRole::Terminal => &self.terminal,
            GlyphRole::ParentJoin => &self.parent_join,
            GlyphRole::ParentEmpty => &self.parent_empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode() {
        let set = GlyphSet::default();
        assert_eq!(set.glyph(GlyphRole::Middle), "├");
        assert_eq!(set.glyph(GlyphRole::Terminal), "└");
        assert_eq!(set.glyph(GlyphRole::ParentJoin), "│");
        assert_eq!(set.glyph(GlyphRole::ParentEmpty), " ");
    }

    #[test]
    fn test_builtin_sets_are_pairwise_distinct() {
        for set in [GlyphSet::unicode(), GlyphSet::ascii()] {
            for a in GlyphRole::ALL {
                for b in GlyphRole::ALL {
                    if a != b {
                        assert_ne!(set.glyph(a), set.glyph(b), "{a:?} vs {b:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_new_rejects_duplicate_glyphs() {
        let err = GlyphSet::new("|", "`", "|", " ").unwrap_err();
        match err {
            DecoratorError::DuplicateGlyph { first, second, glyph } => {
                assert_eq!(first, GlyphRole::Middle);
                assert_eq!(second, GlyphRole::ParentJoin);
                assert_eq!(glyph, "|");
            }
        }
    }

    #[test]
    fn test_is_glyph_compares_whole_glyphs() {
        let set = GlyphSet::ascii();
        assert!(set.is_glyph(GlyphRole::Middle, "|-"));
        // A bare "|" is not the middle glyph even though it is its first char
        assert!(!set.is_glyph(GlyphRole::Middle, "|"));
        assert!(!set.is_glyph(GlyphRole::Terminal, "|-"));
    }

    #[test]
    fn test_custom_set_accepted() {
        let set = GlyphSet::new("+", "\\", "!", ".").unwrap();
        assert_eq!(set.glyph(GlyphRole::Terminal), "\\");
        assert!(set.is_glyph(GlyphRole::ParentEmpty, "."));
    }
}
