//! Static catalog of the available tools

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    /// Subcommand name.
    pub command: &'static str,
    /// Stable identifier.
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const TOOLS: &[ToolInfo] = &[
    ToolInfo {
        command: "case",
        slug: "case-converter",
        name: "Case Converter",
        description: "Convert text between upper, lower, title, sentence, camel, pascal, snake and kebab case",
        category: "Text",
    },
    ToolInfo {
        command: "find",
        slug: "find-replace",
        name: "Find & Replace",
        description: "Find and replace text with case, whole-word and regex options",
        category: "Text",
    },
    ToolInfo {
        command: "diff",
        slug: "text-diff",
        name: "Text Diff",
        description: "Compare two texts line by line",
        category: "Text",
    },
    ToolInfo {
        command: "list",
        slug: "list-sorter",
        name: "List Sorter",
        description: "Sort, shuffle, reverse and deduplicate lists",
        category: "Text",
    },
    ToolInfo {
        command: "count",
        slug: "word-counter",
        name: "Word Counter",
        description: "Count words, characters, sentences and paragraphs",
        category: "Text",
    },
    ToolInfo {
        command: "reverse",
        slug: "text-reverser",
        name: "Text Reverser",
        description: "Reverse text by characters or by words",
        category: "Text",
    },
    ToolInfo {
        command: "words",
        slug: "number-to-words",
        name: "Number to Words",
        description: "Spell out numbers in English words",
        category: "Converters",
    },
    ToolInfo {
        command: "url",
        slug: "url-encoder",
        name: "URL Encoder/Decoder",
        description: "Percent-encode and decode URL components",
        category: "Converters",
    },
    ToolInfo {
        command: "timestamp",
        slug: "timestamp-converter",
        name: "Timestamp Converter",
        description: "Convert Unix timestamps to dates and back",
        category: "Converters",
    },
    ToolInfo {
        command: "json",
        slug: "json-formatter",
        name: "JSON Formatter",
        description: "Pretty print or minify JSON",
        category: "Converters",
    },
    ToolInfo {
        command: "age",
        slug: "age-calculator",
        name: "Age Calculator",
        description: "Calculate age in years, months and days",
        category: "Converters",
    },
    ToolInfo {
        command: "color",
        slug: "color-converter",
        name: "Color Converter",
        description: "Convert hex colors to RGB and HSL",
        category: "Converters",
    },
    ToolInfo {
        command: "hash",
        slug: "hash-generator",
        name: "Hash Generator",
        description: "Generate string hashes and MD5/SHA-256 checksums",
        category: "Generators",
    },
    ToolInfo {
        command: "uuid",
        slug: "uuid-generator",
        name: "UUID Generator",
        description: "Generate version 4 UUIDs",
        category: "Generators",
    },
    ToolInfo {
        command: "password",
        slug: "password-generator",
        name: "Password Generator",
        description: "Generate random passwords with a strength rating",
        category: "Generators",
    },
    ToolInfo {
        command: "username",
        slug: "username-generator",
        name: "Username Generator",
        description: "Generate adjective + noun usernames",
        category: "Generators",
    },
    ToolInfo {
        command: "lorem",
        slug: "lorem-ipsum",
        name: "Lorem Ipsum Generator",
        description: "Generate placeholder paragraphs",
        category: "Generators",
    },
    ToolInfo {
        command: "qr",
        slug: "qr-generator",
        name: "QR Code Generator",
        description: "Create QR codes from text or URLs and export them as PNG, SVG or JPEG",
        category: "Generators",
    },
];

/// Look a tool up by command name or slug.
pub fn find_tool(key: &str) -> Option<&'static ToolInfo> {
    let key = key.trim().to_lowercase();
    TOOLS.iter().find(|tool| tool.command == key || tool.slug == key)
}
