/// Canonical skill tokens, lower-case. Matched by case-insensitive
/// substring containment; iteration order is output order.
///
/// `node.js` stands in for the Node ecosystem — a bare `node` token would
/// double-report every `node.js` mention through the substring rule.
const SKILL_DICTIONARY: &[&str] = &[
    "react",
    "javascript",
    "typescript",
    "node.js",
    "express",
    "mongodb",
    "sql",
    "docker",
    "aws",
    "ci/cd",
    "jest",
    "testing",
    "python",
    "flask",
    "django",
    "git",
    "rest",
    "rest api",
];

/// Dictionary scan: the text is lowered once, each token is tested for
/// containment, and the first match appends its canonical display form.
/// No duplicate canonical forms are emitted.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found = Vec::new();
    for token in SKILL_DICTIONARY {
        if lowered.contains(token) {
            let display = display_case(token);
            if !found.contains(&display) {
                found.push(display);
            }
        }
    }
    found
}

/// Canonical display casing: upper-case every letter that follows a
/// non-letter. The literal token `node.js` is the one exception and is
/// rendered exactly as `Node.js`.
fn display_case(token: &str) -> String {
    if token == "node.js" {
        return "Node.js".to_string();
    }
    let mut out = String::with_capacity(token.len());
    let mut prev_alphabetic = false;
    for c in token.chars() {
        if c.is_alphabetic() && !prev_alphabetic {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_alphabetic = c.is_alphabetic();
    }
    out
}
