//! Connector prefixes describing a node's ancestor chain

use std::fmt;

use super::decorator::{Decorator, GlyphRole};

/// An ordered sequence of glyphs, one per ancestor level.
///
/// The traversal root carries the empty prefix; a node's depth equals its
/// glyph count. Prefixes are derived, never mutated in place: each recursion
/// level builds a child prefix from its parent's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefix {
    glyphs: Vec<String>,
}

impl Prefix {
    /// The empty prefix carried by the traversal root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.glyphs.len()
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// The trailing glyph, i.e. this node's own connector.
    pub fn last(&self) -> Option<&str> {
        self.glyphs.last().map(String::as_str)
    }

    /// Concatenate the glyphs into the rendered prefix string.
    pub fn render(&self) -> String {
        self.glyphs.concat()
    }

    /// Derive the prefix for a child of the node carrying `self`.
    ///
    /// The tail glyph is rewritten first: an ancestor drawn with `Middle`
    /// still has later siblings and must keep showing a vertical line
    /// (`ParentJoin`), while a `Terminal` ancestor contributes blank space
    /// (`ParentEmpty`). An empty prefix stays empty. Then the child's own
    /// connector is appended: `Terminal` when it is the last of its
    /// siblings, `Middle` otherwise.
    pub fn child<D: Decorator + ?Sized>(&self, decorator: &D, is_last: bool) -> Prefix {
        let mut glyphs = self.glyphs.clone();
        if let Some(tail) = glyphs.last_mut() {
            if decorator.is_glyph(GlyphRole::Middle, tail) {
                *tail = decorator.glyph(GlyphRole::ParentJoin).to_string();
            } else if decorator.is_glyph(GlyphRole::Terminal, tail) {
                *tail = decorator.glyph(GlyphRole::ParentEmpty).to_string();
            }
        }
        let connector = if is_last {
            GlyphRole::Terminal
        } else {
            GlyphRole::Middle
        };
        glyphs.push(decorator.glyph(connector).to_string());
        Prefix { glyphs }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            f.write_str(glyph)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::GlyphSet;

    #[test]
    fn test_root_is_empty() {
        let root = Prefix::root();
        assert_eq!(root.depth(), 0);
        assert_eq!(root.render(), "");
        assert_eq!(root.last(), None);
    }

    #[test]
    fn test_child_of_root_gets_single_connector() {
        let set = GlyphSet::unicode();
        let root = Prefix::root();
        assert_eq!(root.child(&set, false).render(), "├");
        assert_eq!(root.child(&set, true).render(), "└");
    }

    #[test]
    fn test_middle_tail_rewrites_to_join() {
        let set = GlyphSet::unicode();
        let parent = Prefix::root().child(&set, false); // "├"
        let child = parent.child(&set, true);
        assert_eq!(child.render(), "│└");
        assert_eq!(child.depth(), 2);
    }

    #[test]
    fn test_terminal_tail_rewrites_to_empty() {
        let set = GlyphSet::unicode();
        let parent = Prefix::root().child(&set, true); // "└"
        let child = parent.child(&set, false);
        assert_eq!(child.render(), " ├");
    }

    #[test]
    fn test_parent_is_not_mutated() {
        let set = GlyphSet::unicode();
        let parent = Prefix::root().child(&set, false);
        let _ = parent.child(&set, true);
        assert_eq!(parent.render(), "├");
    }

    #[test]
    fn test_depth_tracks_ancestor_levels() {
        let set = GlyphSet::unicode();
        let mut prefix = Prefix::root();
        for depth in 1..=5 {
            prefix = prefix.child(&set, false);
            assert_eq!(prefix.depth(), depth);
        }
        // Rewritten levels never show a branch connector mid-prefix
        assert_eq!(prefix.render(), "││││├");
    }

    #[test]
    fn test_multichar_glyphs_rewrite_atomically() {
        let set = GlyphSet::ascii();
        let parent = Prefix::root().child(&set, false); // "|-"
        let child = parent.child(&set, true);
        assert_eq!(child.render(), "| `-");
        assert_eq!(child.glyphs(), ["| ", "`-"]);
    }
}
