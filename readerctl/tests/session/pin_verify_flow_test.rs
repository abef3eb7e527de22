#[path = "../common/mod.rs"]
mod common;

use readerctl::protocol::PinVerifyDirectRequest;
use readerctl::session::ReaderSession;
use readerctl::transport::MockTransport;
use readerctl::types::ReaderInfoItem;

#[test]
fn verify_pin_direct_returns_reader_status_unmodified() {
    let mut session = common::mock_session(&common::reader_features(), vec![vec![0x63, 0xC2]]);

    let req = PinVerifyDirectRequest::default().with_command(common::verify_esign_pin_apdu());
    let resp = session.verify_pin_direct(&req).unwrap();
    assert_eq!(resp, vec![0x63, 0xC2]);

    let (id, payload) = session.transport().controls.last().unwrap().clone();
    assert_eq!(id, common::VERIFY_CODE);
    assert_eq!(payload.len(), 15 + 1 + 3 + 11);
    assert_eq!(payload[15], 11);
}

#[test]
fn reader_info_strings() {
    let mut mock = MockTransport::new();
    mock.push_response(b"REINER SCT\x90\x00".to_vec());
    mock.push_response(b"cyberJack RFID komfort\x90\x00".to_vec());
    let mut session = ReaderSession::new(mock);

    assert_eq!(
        session.reader_info_string(ReaderInfoItem::Vendor).unwrap(),
        "REINER SCT"
    );
    assert_eq!(
        session.reader_info_string(ReaderInfoItem::Product).unwrap(),
        "cyberJack RFID komfort"
    );
    assert_eq!(
        session.transport().commands,
        vec![
            vec![0xFF, 0x9A, 0x01, 0x01, 0x00],
            vec![0xFF, 0x9A, 0x01, 0x03, 0x00],
        ]
    );
    // Reader information never touches the control channel.
    assert!(session.transport().controls.is_empty());
}
