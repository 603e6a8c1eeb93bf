//! Error categories and the keyword classifier

use ratatui::style::Color;

/// Closed set of categories a suggestion can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    SyntaxError,
    LogicError,
    StyleError,
    CodeSmell,
    SecurityIssue,
    Performance,
    Other,
}

/// Keyword sets in priority order. The first category with a matching
/// keyword wins; `Other` is the fallback and has no entry here.
const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::SyntaxError, &["syntax", "unexpected", "missing"]),
    (
        Category::LogicError,
        &["null", "logic", "unreachable", "condition"],
    ),
    (
        Category::StyleError,
        &["style", "format", "indent", "spacing"],
    ),
    (Category::CodeSmell, &["deprecated", "unused", "optimize"]),
    (
        Category::SecurityIssue,
        &["security", "vulnerability", "injection"],
    ),
    (
        Category::Performance,
        &["performance", "slow", "efficiency"],
    ),
];

/// Classify a suggestion text by lower-cased keyword match
pub fn classify(suggestion: &str) -> Category {
    let text = suggestion.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|word| text.contains(word)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::SyntaxError,
        Category::LogicError,
        Category::StyleError,
        Category::CodeSmell,
        Category::SecurityIssue,
        Category::Performance,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::SyntaxError => "Syntax Error",
            Category::LogicError => "Logic Error",
            Category::StyleError => "Style Error",
            Category::CodeSmell => "Code Smell",
            Category::SecurityIssue => "Security Issue",
            Category::Performance => "Performance",
            Category::Other => "Other",
        }
    }

    /// Compact label for chart axes
    pub fn short_label(&self) -> &'static str {
        match self {
            Category::SyntaxError => "Syntax",
            Category::LogicError => "Logic",
            Category::StyleError => "Style",
            Category::CodeSmell => "Smell",
            Category::SecurityIssue => "Security",
            Category::Performance => "Perf",
            Category::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::SyntaxError => "🚫",
            Category::LogicError => "🧠",
            Category::StyleError => "🎨",
            Category::CodeSmell => "👃",
            Category::SecurityIssue => "🔒",
            Category::Performance => "⚡",
            Category::Other => "❓",
        }
    }

    /// Start and end colors of the card gradient
    pub fn gradient(&self) -> (Color, Color) {
        match self {
            Category::SyntaxError => (rgb(0xff6b6b), rgb(0xee5a24)),
            Category::LogicError => (rgb(0x74b9ff), rgb(0x0984e3)),
            Category::StyleError => (rgb(0xa29bfe), rgb(0x6c5ce7)),
            Category::CodeSmell => (rgb(0xfd79a8), rgb(0xe84393)),
            Category::SecurityIssue => (rgb(0xfdcb6e), rgb(0xe17055)),
            Category::Performance => (rgb(0x55efc4), rgb(0x00b894)),
            Category::Other => (rgb(0xddd6fe), rgb(0x8b5cf6)),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::SyntaxError => "Missing semicolons, brackets, or invalid syntax",
            Category::LogicError => "Incorrect conditions, null references, unreachable code",
            Category::StyleError => "Formatting, indentation, and coding style issues",
            Category::CodeSmell => "Deprecated methods, unused variables, optimization needed",
            Category::SecurityIssue => "Potential vulnerabilities and security concerns",
            Category::Performance => {
                "Inefficient code, slow algorithms, optimization opportunities"
            }
            Category::Other => "Miscellaneous suggestions and improvements",
        }
    }

    /// Keywords tested for this category (empty for `Other`)
    pub fn keywords(&self) -> &'static [&'static str] {
        KEYWORDS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, words)| *words)
            .unwrap_or(&[])
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Chart palette, assigned by bucket position
pub const PALETTE: [Color; 8] = [
    rgb(0x667eea),
    rgb(0x764ba2),
    rgb(0xf093fb),
    rgb(0xf5576c),
    rgb(0x4facfe),
    rgb(0x00f2fe),
    rgb(0x96fbc4),
    rgb(0xf9f047),
];

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}
