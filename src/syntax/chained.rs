//! Ordered substitution pipeline
//!
//! Each rule, in application order, rewrites every match in the string the
//! previous rule produced. Markers inserted by earlier rules are ordinary
//! text to later ones, so categories can nest or collide. Input is never
//! escaped: escaping first would change what the patterns see.

use super::markup::wrap;
use super::rules::RuleSet;

/// Highlight one line with the substitution chain
pub fn highlight(rules: &RuleSet, line: &str) -> String {
    let mut highlighted = line.to_string();
    for rule in rules.iter() {
        let matches = rule.find_all(&highlighted);
        if matches.is_empty() {
            continue;
        }

        let mut next = String::with_capacity(highlighted.len() + matches.len() * 32);
        let mut pos = 0;
        for (start, end) in matches {
            next.push_str(&highlighted[pos..start]);
            next.push_str(&wrap(rule.category, &highlighted[start..end]));
            pos = end;
        }
        next.push_str(&highlighted[pos..]);
        highlighted = next;
    }
    highlighted
}
