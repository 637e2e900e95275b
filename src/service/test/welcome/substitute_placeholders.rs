use crate::service::welcome::{substitute_placeholders, PlaceholderContext};

fn context() -> PlaceholderContext<'static> {
    PlaceholderContext {
        server_name: "Rust Hideout",
        user_name: "ferris",
        mention: "<@42>",
        member_count: 128,
    }
}

/// Tests that every supported placeholder is substituted. Expected: server,
/// mention, user and member count all appear rendered.
#[test]
fn substitutes_all_placeholders() {
    let rendered = substitute_placeholders(
        "Hey {mention} ({user}), welcome to {server}! You are member #{memberCount}.",
        &context(),
    );

    assert_eq!(
        rendered,
        "Hey <@42> (ferris), welcome to Rust Hideout! You are member #128."
    );
}

/// Tests repeated placeholders. Expected: every occurrence is replaced.
#[test]
fn substitutes_repeated_placeholders() {
    let rendered = substitute_placeholders("{user} {user}", &context());

    assert_eq!(rendered, "ferris ferris");
}

/// Tests unknown braces. Expected: unrecognized placeholders pass through
/// untouched instead of erroring.
#[test]
fn leaves_unknown_braces_alone() {
    let rendered = substitute_placeholders("Hello {unknown}", &context());

    assert_eq!(rendered, "Hello {unknown}");
}
