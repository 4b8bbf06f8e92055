//! Robots.txt line parser
//!
//! This is line matching, not a robots grammar. Each line is checked against
//! [`DIRECTIVES`] in order by looking at a fixed-width, case-insensitive
//! window at the start of the line. A later match on the same line
//! overwrites an earlier one.

use crate::output::{Permission, RobotsRecord, SourceKind};

/// What a matched directive does to the parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Sets the current user agent and clears permission and path
    UserAgent,
    /// Sets permission and path for this line
    Permission(Permission),
}

/// One row of the directive table
#[derive(Debug, Clone, Copy)]
pub struct Directive {
    /// Upper-case keyword searched for
    pub keyword: &'static str,
    /// How many leading characters are searched
    pub window: usize,
    pub effect: Effect,
    /// How many leading characters (plus `": "`) are removed to get the value
    pub split: usize,
}

/// Directive table, evaluated top to bottom on every line
///
/// `Sitemap:` shares the Disallow bucket and splits one character earlier
/// than its window.
pub const DIRECTIVES: [Directive; 4] = [
    Directive {
        keyword: "USER-AGENT",
        window: 10,
        effect: Effect::UserAgent,
        split: 10,
    },
    Directive {
        keyword: "DISALLOW",
        window: 8,
        effect: Effect::Permission(Permission::Disallow),
        split: 8,
    },
    Directive {
        keyword: "SITEMAP",
        window: 8,
        effect: Effect::Permission(Permission::Disallow),
        split: 7,
    },
    Directive {
        keyword: "ALLOW",
        window: 5,
        effect: Effect::Permission(Permission::Allow),
        split: 5,
    },
];

impl Directive {
    /// Whether the keyword appears in the line's leading window
    pub fn matches(&self, line: &str) -> bool {
        leading(line, self.window)
            .to_uppercase()
            .contains(self.keyword)
    }

    /// The directive value: the line with every `{prefix}: ` removed
    pub fn value(&self, line: &str) -> String {
        line.replace(&format!("{}: ", leading(line, self.split)), "")
    }
}

/// First `n` characters of `line`
fn leading(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// Parses robots.txt content into records
///
/// # Arguments
///
/// * `content` - The decoded robots.txt body
/// * `base_url` - Site base URL without trailing slash; paths starting with
///   `/` are prefixed with it
///
/// # Returns
///
/// One record per non-blank line, in file order
///
/// # Example
///
/// ```
/// use mapboy::robots::parse_robots;
/// use mapboy::Permission;
///
/// let records = parse_robots("User-agent: *\nDisallow: /admin", "https://example.com");
/// assert_eq!(records[1].permission, Permission::Disallow);
/// assert_eq!(records[1].extracted_path, "https://example.com/admin");
/// ```
pub fn parse_robots(content: &str, base_url: &str) -> Vec<RobotsRecord> {
    let mut records = Vec::new();
    let mut user_agent = String::new();

    // Bare CR counts as a line break too; the empty piece a CRLF leaves
    // behind is dropped with the other blank lines.
    for line in content.split(|c: char| c == '\n' || c == '\r') {
        let line = line.to_string();
        if line.trim().is_empty() {
            continue;
        }

        let mut permission = Permission::None;
        let mut path = String::new();

        for directive in DIRECTIVES.iter().filter(|d| d.matches(&line)) {
            match directive.effect {
                Effect::UserAgent => {
                    user_agent = directive.value(&line);
                    permission = Permission::None;
                    path.clear();
                }
                Effect::Permission(p) => {
                    permission = p;
                    path = directive.value(&line);
                }
            }
        }

        if path.starts_with('/') {
            path = format!("{}{}", base_url, path);
        }

        records.push(RobotsRecord {
            source_kind: SourceKind::Robots,
            user_agent: user_agent.clone(),
            permission,
            original_line: line,
            extracted_path: path,
        });
    }

    records
}
