//! Position and identifier value-type tests

use road_zones::api::{InertialPosition, LaneId, LanePosition, UniqueId};
use road_zones::math::Vector3;

#[test]
fn test_vector3() {
    let dut = Vector3::new(25.0, 158.0, 33.0);
    assert_eq!(dut.size(), 3);
    assert_eq!(dut.x(), 25.0);
    assert_eq!(dut.y(), 158.0);
    assert_eq!(dut.z(), 33.0);
    assert_eq!(dut[0], 25.0);
    assert_eq!(dut[1], 158.0);
    assert_eq!(dut[2], 33.0);
    assert_eq!(dut, Vector3::new(25.0, 158.0, 33.0));
    assert_ne!(dut, Vector3::new(33.0, 158.0, 25.0));
    assert_eq!(dut.to_string(), "{25, 158, 33}");
}

#[test]
fn test_vector3_norm_and_dot() {
    let dut = Vector3::new(3.0, 4.0, 0.0);
    assert_eq!(dut.norm(), 5.0);
    assert_eq!(dut.dot(&Vector3::new(1.0, 1.0, 7.0)), 7.0);
}

#[test]
fn test_lane_position() {
    let mut dut = LanePosition::new(1.0, 2.0, 3.0);
    assert_eq!(dut.srh(), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(dut.s(), 1.0);
    assert_eq!(dut.r(), 2.0);
    assert_eq!(dut.h(), 3.0);

    dut.set_s(10.0);
    dut.set_r(20.0);
    dut.set_h(30.0);
    assert_eq!(dut, LanePosition::new(10.0, 20.0, 30.0));
}

#[test]
fn test_inertial_position() {
    let mut dut = InertialPosition::new(1.0, 2.0, 3.0);
    assert_eq!(dut.xyz(), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(dut.x(), 1.0);
    assert_eq!(dut.y(), 2.0);
    assert_eq!(dut.z(), 3.0);

    dut.set_x(0.0);
    dut.set_y(3.0);
    dut.set_z(4.0);
    assert_eq!(dut.length(), 5.0);
    assert_eq!(dut.distance(&InertialPosition::new(0.0, 3.0, 4.0)), 0.0);
    assert_eq!(dut.distance(&InertialPosition::new(0.0, 0.0, 4.0)), 3.0);
}

#[test]
fn test_default_positions_are_origin() {
    assert_eq!(LanePosition::default().srh(), Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(
        InertialPosition::default().xyz(),
        Vector3::new(0.0, 0.0, 0.0)
    );
}

#[test]
fn test_string_ids() {
    let lane = LaneId::new("dut");
    assert_eq!(lane.string(), "dut");
    assert_eq!(lane, LaneId::new("dut"));
    assert_eq!(lane.to_string(), "dut");

    let unique = UniqueId::new("uid");
    assert_eq!(unique.string(), "uid");
    assert_ne!(unique, UniqueId::new("other"));
}
