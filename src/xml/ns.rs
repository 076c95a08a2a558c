//! Namespace registry for the drawing vocabulary.
//!
//! The element and attribute names handled by this crate come from a fixed,
//! closed set of OOXML namespaces. Each one is represented by an [`Ns`]
//! variant carrying its conventional prefix and URI; prefix resolution uses
//! a compile-time perfect hash map.

use phf::phf_map;

/// A namespace from the fixed set used by the drawing vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ns {
    /// `wp:` — WordprocessingML drawing wrapper (inline/anchor containers)
    WpDrawing,
    /// `a:` — DrawingML main
    DrawingMl,
    /// `pic:` — DrawingML picture
    Picture,
    /// `r:` — OfficeDocument relationships
    Relationships,
    /// `wp14:` — 2010 WordprocessingML drawing extensions
    Wp14,
    /// `w:` — WordprocessingML main
    Wordprocessing,
    /// `c:` — DrawingML chart
    Chart,
    /// `dgm:` — DrawingML diagram (SmartArt)
    Diagram,
}

/// Fast prefix to namespace lookup using PHF.
static PREFIXES: phf::Map<&'static str, Ns> = phf_map! {
    "wp" => Ns::WpDrawing,
    "a" => Ns::DrawingMl,
    "pic" => Ns::Picture,
    "r" => Ns::Relationships,
    "wp14" => Ns::Wp14,
    "w" => Ns::Wordprocessing,
    "c" => Ns::Chart,
    "dgm" => Ns::Diagram,
};

impl Ns {
    /// Get the conventional prefix for this namespace.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::WpDrawing => "wp",
            Self::DrawingMl => "a",
            Self::Picture => "pic",
            Self::Relationships => "r",
            Self::Wp14 => "wp14",
            Self::Wordprocessing => "w",
            Self::Chart => "c",
            Self::Diagram => "dgm",
        }
    }

    /// Get the namespace URI.
    #[inline]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::WpDrawing => {
                "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing"
            },
            Self::DrawingMl => "http://schemas.openxmlformats.org/drawingml/2006/main",
            Self::Picture => "http://schemas.openxmlformats.org/drawingml/2006/picture",
            Self::Relationships => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships"
            },
            Self::Wp14 => "http://schemas.microsoft.com/office/word/2010/wordprocessingDrawing",
            Self::Wordprocessing => {
                "http://schemas.openxmlformats.org/wordprocessingml/2006/main"
            },
            Self::Chart => "http://schemas.openxmlformats.org/drawingml/2006/chart",
            Self::Diagram => "http://schemas.openxmlformats.org/drawingml/2006/diagram",
        }
    }

    /// Resolve a prefix to its namespace.
    ///
    /// Returns `None` for prefixes outside the fixed set.
    #[inline]
    pub fn from_prefix(prefix: &str) -> Option<Ns> {
        PREFIXES.get(prefix).copied()
    }
}
