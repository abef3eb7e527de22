use readerctl::transport::mock::MockTransport;
use readerctl::transport::Transport;

#[test]
fn mock_transport_control_and_command() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x01]);
    m.push_response(vec![0x90, 0x00]);

    let r = m.send_control(0x4200_0D48, &[]).unwrap();
    assert_eq!(r, vec![0x01]);
    let r = m.send_application_command(&[0x00, 0xA4, 0x04, 0x00]).unwrap();
    assert_eq!(r, vec![0x90, 0x00]);

    assert_eq!(m.controls, vec![(0x4200_0D48, vec![])]);
    assert_eq!(m.commands, vec![vec![0x00, 0xA4, 0x04, 0x00]]);
}

#[test]
fn boxed_mock_is_a_transport() {
    let mut m = MockTransport::new();
    m.push_response(vec![0xAA]);
    let mut t: Box<dyn Transport> = Box::new(m);
    assert_eq!(t.send_control(1, &[2]).unwrap(), vec![0xAA]);
}
