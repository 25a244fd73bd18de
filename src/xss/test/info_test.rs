use crate::external::display_server::{kind, state, RawInfo};
use crate::xss::{Error, Info, Kind};
use std::time::Duration;

fn raw(state: u8, kind: u8, til_or_since: u32, idle: u32) -> RawInfo {
    RawInfo {
        state,
        kind,
        til_or_since,
        idle,
    }
}

fn decode(raw: RawInfo) -> Info {
    Info::try_from(&raw).expect("Decoding of a known state failed")
}

#[test]
fn test_active_saver() {
    let info = decode(raw(state::ON, kind::BLANKED, 12_345, 700_000));
    assert!(info.enabled);
    assert!(info.active);
    assert_eq!(info.active_time, Duration::from_millis(12_345));
    assert_eq!(info.countdown, Duration::ZERO);
    assert_eq!(info.idle_time, Duration::from_millis(700_000));
}

#[test]
fn test_inactive_saver() {
    let info = decode(raw(state::OFF, kind::INTERNAL, 599_001, 999));
    assert!(info.enabled);
    assert!(!info.active);
    assert_eq!(info.countdown, Duration::from_millis(599_001));
    assert_eq!(info.active_time, Duration::ZERO);
    assert_eq!(info.idle_time, Duration::from_millis(999));
}

#[test]
fn test_disabled_saver_ignores_timer() {
    for til_or_since in [0, 1, 42_000, u32::MAX] {
        let info = decode(raw(state::DISABLED, kind::EXTERNAL, til_or_since, 5));
        assert!(!info.enabled);
        assert!(!info.active);
        assert_eq!(info.countdown, Duration::ZERO);
        assert_eq!(info.active_time, Duration::ZERO);
        assert_eq!(info.idle_time, Duration::from_millis(5));
    }
}

#[test]
fn test_active_implies_enabled() {
    for state in [state::OFF, state::ON, state::DISABLED] {
        for kind in 0..=4 {
            let info = decode(raw(state, kind, 100, 200));
            assert!(!info.active || info.enabled, "{:?} is active but disabled", info);
        }
    }
}

#[test]
fn test_unknown_state_is_an_error() {
    for code in [state::CYCLE, 4, 17, u8::MAX] {
        match Info::try_from(&raw(code, kind::BLANKED, 10, 10)) {
            Err(Error::Decode(reported)) => assert_eq!(reported, code),
            other => panic!("Expected decode error for state {}, got {:?}", code, other),
        }
    }
}

#[test]
fn test_kinds() {
    assert_eq!(decode(raw(state::OFF, kind::BLANKED, 0, 0)).kind, Kind::Blanked);
    assert_eq!(decode(raw(state::OFF, kind::INTERNAL, 0, 0)).kind, Kind::Internal);
    assert_eq!(decode(raw(state::OFF, kind::EXTERNAL, 0, 0)).kind, Kind::External);
}

#[test]
fn test_unknown_kind_keeps_other_fields() {
    let known = decode(raw(state::ON, kind::EXTERNAL, 3_000, 4_000));
    for code in [3, 9, u8::MAX] {
        let info = decode(raw(state::ON, code, 3_000, 4_000));
        assert_eq!(info.kind, Kind::Unknown(code));
        assert_eq!(info.kind.to_string(), "unknown");
        assert_eq!(
            Info {
                kind: Kind::External,
                ..info
            },
            known
        );
    }
}

#[test]
fn test_idle_time_conversion() {
    for ms in [0u32, 1, 1_000, 86_400_000] {
        let info = decode(raw(state::DISABLED, kind::BLANKED, 0, ms));
        assert_eq!(info.idle_time, Duration::from_millis(u64::from(ms)));
        assert_eq!(info.idle_time.as_millis(), u128::from(ms));
    }
}

#[test]
fn test_kind_display() {
    assert_eq!(Kind::Blanked.to_string(), "blanked");
    assert_eq!(Kind::Internal.to_string(), "internal");
    assert_eq!(Kind::External.to_string(), "external");
}
