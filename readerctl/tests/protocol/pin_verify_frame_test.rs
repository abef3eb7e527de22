#[path = "../common/mod.rs"]
mod common;

use readerctl::protocol::PinVerifyDirectRequest;

#[test]
fn esign_verify_frame_matches_reference_bytes() {
    let apdu = common::verify_esign_pin_apdu();
    let frame = PinVerifyDirectRequest::default()
        .with_command(apdu)
        .encode()
        .unwrap();
    assert_eq!(
        hex::encode_upper(&frame),
        "00000206000606 03FF090400000000 0B000000 0020008106FFFFFFFFFFFF".replace(' ', "")
    );
}

#[test]
fn length_law_holds_for_various_commands() {
    for n in [0usize, 1, 4, 11, 254, 255] {
        let frame = PinVerifyDirectRequest::default()
            .with_command(vec![0x11; n])
            .encode()
            .unwrap();
        assert_eq!(frame.len(), 15 + 1 + 3 + n);
        assert_eq!(frame[15] as usize, n);
    }
}

#[test]
fn oversized_command_is_rejected() {
    let res = PinVerifyDirectRequest::default()
        .with_command(vec![0u8; 256])
        .encode();
    assert!(res.is_err());
}
