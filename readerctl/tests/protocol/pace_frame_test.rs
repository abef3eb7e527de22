#[path = "../common/mod.rs"]
mod common;

use readerctl::protocol::{PaceRequest, PaceResult, decode_capabilities};
use readerctl::types::{PaceCapabilities, PinId};
use readerctl::Error;

#[test]
fn establish_can_with_esign_chat() {
    let chat = common::esign_chat();
    let frame = PaceRequest::new(PinId::CAN)
        .with_chat(chat.clone())
        .encode()
        .unwrap();

    assert_eq!(
        hex::encode_upper(&frame),
        format!("02160002{:02X}{}000000", chat.len(), hex::encode_upper(&chat))
    );
    assert_eq!(frame.len(), 3 + 1 + (1 + chat.len()) + 1 + 2);
    assert_eq!(
        u16::from_le_bytes([frame[1], frame[2]]) as usize,
        frame.len() - 3
    );
}

#[test]
fn long_certificate_description_uses_two_length_bytes() {
    let cert = vec![0xA5u8; 300];
    let frame = PaceRequest::new(PinId::PIN)
        .with_cert_description(cert.clone())
        .encode()
        .unwrap();
    // header(3) + pin id + chat len + pin len
    let at = 3 + 1 + 1 + 1;
    assert_eq!(&frame[at..at + 2], &300u16.to_le_bytes());
    assert_eq!(&frame[at + 2..], &cert[..]);
}

#[test]
fn oversized_chat_is_rejected() {
    let res = PaceRequest::new(PinId::CAN).with_chat(vec![0u8; 256]).encode();
    assert!(matches!(res, Err(Error::FieldTooLong { field: "chat", .. })));
}

#[test]
fn result_codes() {
    assert_eq!(PaceResult::decode(&[0, 0, 0, 0, 0xAB]).unwrap().result_code, 0);
    assert_eq!(PaceResult::decode(&[1, 0, 0, 0, 0xAB]).unwrap().result_code, 1);
    assert!(PaceResult::decode(&[1, 0, 0]).is_err());
}

#[test]
fn capabilities_fixture() {
    let caps = decode_capabilities(&common::capabilities_ok(0x60)).unwrap();
    assert!(caps.contains(PaceCapabilities::EID));
    assert!(caps.contains(PaceCapabilities::ESIGN));
    assert!(!caps.contains(PaceCapabilities::GENERIC));
}
