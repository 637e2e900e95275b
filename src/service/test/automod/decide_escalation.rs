use super::policy;
use crate::service::automod::{decide_escalation, Escalation};

/// Tests warnings below the threshold. Expected: the first and second
/// violations warn, reporting the member's standing.
#[test]
fn early_violations_warn() {
    let policy = policy();

    assert_eq!(
        decide_escalation(&policy, 1),
        Escalation::Warn {
            current: 1,
            threshold: 3
        }
    );
    assert_eq!(
        decide_escalation(&policy, 2),
        Escalation::Warn {
            current: 2,
            threshold: 3
        }
    );
}

/// Tests the threshold boundary. Expected: the violation that brings the
/// member to the threshold escalates to a mute with the policy's duration.
#[test]
fn threshold_violation_mutes() {
    let policy = policy();

    assert_eq!(
        decide_escalation(&policy, 3),
        Escalation::Mute {
            duration_minutes: 10
        }
    );
    assert_eq!(
        decide_escalation(&policy, 4),
        Escalation::Mute {
            duration_minutes: 10
        }
    );
}

/// Tests a policy with muting disabled. Expected: the member keeps getting
/// warnings no matter how many accumulate.
#[test]
fn disabled_muting_never_escalates() {
    let mut policy = policy();
    policy.mute_on_violation = false;

    assert_eq!(
        decide_escalation(&policy, 10),
        Escalation::Warn {
            current: 10,
            threshold: 3
        }
    );
}
