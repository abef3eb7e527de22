#[path = "../common/mod.rs"]
mod common;

use readerctl::protocol::PaceRequest;
use readerctl::types::{PaceCapabilities, PinId};
use readerctl::Error;

#[test]
fn capabilities_then_establish_channel() {
    let responses = vec![
        common::capabilities_ok(PaceCapabilities::EID | PaceCapabilities::ESIGN),
        common::pace_ok(&[0x02, 0x00, 0x90, 0x00]),
    ];
    let mut session = common::mock_session(&common::reader_features(), responses);

    let caps = session.pace_capabilities().unwrap();
    assert!(caps.contains(PaceCapabilities::ESIGN));

    let req = PaceRequest::new(PinId::CAN).with_chat(common::esign_chat());
    let result = session.establish_pace_channel(&req).unwrap();
    assert!(result.is_success());
    assert_eq!(result.output(), &[0x02, 0x00, 0x90, 0x00]);

    let controls = &session.transport().controls;
    assert_eq!(controls.len(), 3);
    assert_eq!(controls[1], (common::PACE_CODE, vec![0x01, 0x00, 0x00]));
    assert_eq!(controls[2].0, common::PACE_CODE);
    assert_eq!(controls[2].1, req.encode().unwrap());
}

#[test]
fn capabilities_failure_is_not_a_value() {
    let responses = vec![vec![0x03, 0x00, 0x00, 0xF0, 0x00, 0x00]];
    let mut session = common::mock_session(&common::reader_features(), responses);
    match session.pace_capabilities() {
        Err(Error::ProtocolFailure { code }) => assert_eq!(code, 0xF000_0003),
        other => panic!("expected ProtocolFailure, got: {:?}", other),
    }
}

#[test]
fn short_pace_response_is_malformed() {
    let mut session = common::mock_session(&common::reader_features(), vec![vec![0x00]]);
    let res = session.establish_pace_channel(&PaceRequest::new(PinId::CAN));
    assert!(matches!(res, Err(Error::MalformedResponse { .. })));
}

#[test]
fn reader_without_pace() {
    let entries = [(readerctl::FeatureTag::VERIFY_PIN_DIRECT, common::VERIFY_CODE)];
    let mut session = common::mock_session(&entries, vec![]);
    assert!(matches!(
        session.pace_capabilities(),
        Err(Error::FeatureNotSupported(_))
    ));
}
