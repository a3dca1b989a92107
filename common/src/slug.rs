/// Derive a kebab-case slug from free text.
///
/// Rules:
/// - any character that is not alphanumeric separates words,
/// - a lowercase-to-uppercase step starts a new word (`camelCase` → `camel-case`),
/// - an uppercase run followed by lowercase keeps its last capital for the
///   next word (`HTMLParser` → `html-parser`),
/// - words are lowercased with [`char::to_lowercase`] (no locale tables) and
///   joined by single hyphens, with no leading or trailing hyphen.
///
/// Two texts that differ only in punctuation or case produce the same slug.
pub fn to_kebab_case(text: &str) -> String {
    words(text).join("-")
}

fn words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                flush(&mut current, &mut words);
            }
        }

        current.extend(c.to_lowercase());
    }
    flush(&mut current, &mut words);
    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
