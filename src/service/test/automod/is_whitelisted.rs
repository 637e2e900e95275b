use super::policy;
use crate::service::automod::is_whitelisted;

/// Tests the member whitelist. Expected: a whitelisted member is exempt even
/// with no whitelisted roles.
#[test]
fn whitelisted_member_is_exempt() {
    let policy = policy();

    assert!(is_whitelisted(&policy, "555", &[]));
}

/// Tests the role whitelist. Expected: holding any whitelisted role exempts
/// the author.
#[test]
fn whitelisted_role_is_exempt() {
    let policy = policy();
    let roles = vec!["111".to_string(), "777".to_string()];

    assert!(is_whitelisted(&policy, "999", &roles));
}

/// Tests a plain member. Expected: no exemption without a whitelist hit.
#[test]
fn plain_member_is_not_exempt() {
    let policy = policy();
    let roles = vec!["111".to_string()];

    assert!(!is_whitelisted(&policy, "999", &roles));
}
