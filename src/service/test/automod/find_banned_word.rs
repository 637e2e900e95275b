use crate::service::automod::find_banned_word;

/// Tests that matching ignores case. Expected: a shouted banned term is still
/// found and reported in its stored form.
#[test]
fn matches_case_insensitively() {
    let banned = vec!["badword".to_string()];

    let result = find_banned_word("Well BADWORD to you too", &banned);

    assert_eq!(result, Some("badword".to_string()));
}

/// Tests that matching is whole-word. Expected: a banned term embedded inside
/// a longer word does not match.
#[test]
fn does_not_match_inside_longer_words() {
    let banned = vec!["ass".to_string()];

    assert_eq!(find_banned_word("taking a class on grass", &banned), None);
    assert_eq!(
        find_banned_word("what an ass", &banned),
        Some("ass".to_string())
    );
}

/// Tests that the first matching term in list order wins. Expected: the
/// earlier term is reported even when a later one also matches.
#[test]
fn reports_first_matching_term() {
    let banned = vec!["first".to_string(), "second".to_string()];

    let result = find_banned_word("second then first", &banned);

    assert_eq!(result, Some("first".to_string()));
}

/// Tests that regex metacharacters in stored terms are treated literally.
/// Expected: a term like `a+b` only matches the literal text.
#[test]
fn escapes_regex_metacharacters() {
    let banned = vec!["a+b".to_string()];

    assert_eq!(find_banned_word("aaab", &banned), None);
    assert_eq!(find_banned_word("a+b", &banned), Some("a+b".to_string()));
}

/// Tests an empty word list. Expected: nothing ever matches.
#[test]
fn empty_list_never_matches() {
    assert_eq!(find_banned_word("anything at all", &[]), None);
}

/// Tests stored terms with no content. An empty term would compile to a bare
/// boundary pair matching any message. Expected: empty and whitespace terms
/// never match, real terms alongside them still do.
#[test]
fn ignores_empty_and_whitespace_terms() {
    let banned = vec![String::new(), "  ".to_string()];

    assert_eq!(find_banned_word("hello world", &banned), None);

    let mixed = vec![String::new(), "badword".to_string()];
    assert_eq!(
        find_banned_word("badword here", &mixed),
        Some("badword".to_string())
    );
}
