//! Rule-based English lemmatizer
//!
//! Folds plural and possessive endings onto the dictionary form so that the
//! result is still a word an embedding table is likely to contain. Verb
//! inflections are left alone: suffix stripping there produces stems
//! (`exercised` -> `exercis`) that no vocabulary holds.

/// Words ending in `s` that are already in their base form
const INVARIANT: &[&str] = &[
    "always", "alias", "analysis", "basis", "bias", "bus", "chaos", "canvas", "corpus",
    "crisis", "diagnosis", "emphasis", "gas", "genus", "lens", "news", "perhaps", "physics",
    "series", "species", "status", "thus", "whereas", "mathematics", "economics", "politics",
    "does", "goes",
];

/// Greek-style plurals in `-es` whose singular ends in `-is`
const IRREGULAR: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("axes", "axis"),
    ("bases", "basis"),
    ("crises", "crisis"),
    ("diagnoses", "diagnosis"),
    ("emphases", "emphasis"),
    ("hypotheses", "hypothesis"),
    ("oases", "oasis"),
    ("parentheses", "parenthesis"),
    ("syntheses", "synthesis"),
    ("theses", "thesis"),
];

/// Singulars ending in `-ie`, whose plural must not become `-y`
const IE_SINGULARS: &[&str] = &[
    "auntie", "birdie", "bookie", "brownie", "calorie", "cookie", "genie", "goalie", "hippie",
    "hoodie", "movie", "newbie", "pixie", "prairie", "rookie", "selfie", "smoothie", "sortie",
    "techie", "veggie", "zombie",
];

/// Singular endings in `-che`, whose plural loses only the `s`
///
/// A root matches a whole word or the tail of a compound (`headache`) when
/// the letter before it is a consonant, so `beaches` still becomes `beach`.
const CHE_ROOTS: &[&str] = &[
    "ache", "avalanche", "cache", "cliche", "creche", "microfiche", "moustache", "niche",
    "panache", "psyche", "quiche",
];

/// Reduce a lowercase token to its root form
pub fn lemmatize(token: &str) -> String {
    let word = token
        .strip_suffix("'s")
        .or_else(|| token.strip_suffix('\''))
        .unwrap_or(token);

    if word.len() <= 3 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }
    if INVARIANT.contains(&word) {
        return word.to_string();
    }
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return singular.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        let singular = &word[..word.len() - 1];
        if IE_SINGULARS.contains(&singular) {
            return singular.to_string();
        }
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if word.ends_with("ches") && is_che_root(&word[..word.len() - 1]) {
        return word[..word.len() - 1].to_string();
    }
    for suffix in ["xes", "ches", "shes", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

fn is_che_root(singular: &str) -> bool {
    CHE_ROOTS.iter().any(|root| match singular.strip_suffix(root) {
        Some("") => true,
        // attach, detach
        Some(head) if head.ends_with("att") || head.ends_with("det") => false,
        Some(head) => head
            .chars()
            .last()
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemmatize("dogs"), "dog");
        assert_eq!(lemmatize("animals"), "animal");
        assert_eq!(lemmatize("pets"), "pet");
    }

    #[test]
    fn test_irregular_endings() {
        assert_eq!(lemmatize("companies"), "company");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("churches"), "church");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("beaches"), "beach");
        assert_eq!(lemmatize("coaches"), "coach");
    }

    #[test]
    fn test_che_singulars() {
        assert_eq!(lemmatize("aches"), "ache");
        assert_eq!(lemmatize("headaches"), "headache");
        assert_eq!(lemmatize("caches"), "cache");
        assert_eq!(lemmatize("niches"), "niche");
        assert_eq!(lemmatize("heartaches"), "heartache");
        assert_eq!(lemmatize("attaches"), "attach");
        assert_eq!(lemmatize("detaches"), "detach");
    }

    #[test]
    fn test_ie_singulars() {
        assert_eq!(lemmatize("movies"), "movie");
        assert_eq!(lemmatize("cookies"), "cookie");
        assert_eq!(lemmatize("stories"), "story");
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(lemmatize("crises"), "crisis");
        assert_eq!(lemmatize("analyses"), "analysis");
        assert_eq!(lemmatize("does"), "does");
    }

    #[test]
    fn test_base_forms_unchanged() {
        assert_eq!(lemmatize("glass"), "glass");
        assert_eq!(lemmatize("status"), "status");
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("news"), "news");
        assert_eq!(lemmatize("bus"), "bus");
        assert_eq!(lemmatize("exercise"), "exercise");
    }

    #[test]
    fn test_short_and_non_ascii_tokens() {
        assert_eq!(lemmatize("is"), "is");
        assert_eq!(lemmatize("gas"), "gas");
        assert_eq!(lemmatize("1990s"), "1990s");
        assert_eq!(lemmatize("cafés"), "cafés");
    }

    #[test]
    fn test_possessive() {
        assert_eq!(lemmatize("dog's"), "dog");
        assert_eq!(lemmatize("dogs'"), "dog");
    }
}
