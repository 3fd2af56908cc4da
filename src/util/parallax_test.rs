use super::*;

#[test]
fn disabled_on_mobile_widths() {
    assert!(!parallax_enabled(768.0, 768.0));
    assert!(parallax_enabled(1280.0, 768.0));
}

#[test]
fn offset_moves_against_scroll() {
    assert_eq!(parallax_offset(200.0, 900.0, -0.5), Some(-100.0));
    assert_eq!(parallax_offset(0.0, 900.0, -0.5), Some(0.0));
}

#[test]
fn offset_stops_past_first_screen() {
    assert_eq!(parallax_offset(900.0, 900.0, -0.5), None);
    assert_eq!(parallax_offset(2_000.0, 900.0, -0.5), None);
}

#[test]
fn translate_formats_css_transform() {
    assert_eq!(translate_y(-100.0), "translateY(-100px)");
    assert_eq!(translate_y(-12.5), "translateY(-12.5px)");
}

#[test]
fn gate_allows_one_frame_in_flight() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(!gate.request());
    gate.complete();
    assert!(gate.request());
}
