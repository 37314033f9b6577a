use super::*;

#[test]
fn halves_round_up() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(2.49), 2.0);
    assert_eq!(round_half_up(-2.5), -2.0);
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp_channel(248, 185, 0.0), 248);
    assert_eq!(lerp_channel(248, 185, 1.0), 185);
    assert_eq!(lerp_channel(185, 248, 0.5), 217); // 216.5 rounds up
}

#[test]
fn lerp_clamps_parameter() {
    assert_eq!(lerp_channel(10, 20, -3.0), 10);
    assert_eq!(lerp_channel(10, 20, 7.0), 20);
}

#[test]
fn scale_saturates() {
    assert_eq!(scale_channel(200, 2.0), 255);
    assert_eq!(scale_channel(200, -0.5), 0);
    assert_eq!(scale_channel(248, 0.9005), 223);
}
