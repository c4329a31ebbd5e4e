mod support;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use vesper::{
    Polar, Vector3, Vector4,
    float_types::{FRAC_PI_2, PI, Real},
    polar::{cartesian3, cartesian4, degrees, radians, spherical},
};

fn grid() -> Vec<Polar> {
    let mut out = Vec::new();
    for radius in [-2.0, 0.5, 3.0] {
        for heading in [-7.0, -2.0, 0.3, 4.0, 10.0] {
            for elevation in [-4.0, -1.0, 0.2, 2.0, 5.5] {
                out.push(Polar::new(radius, heading, elevation));
            }
        }
    }
    out
}

fn is_canonical(p: Polar) -> bool {
    p.radius >= 0.0
        && p.heading > -PI
        && p.heading <= PI
        && p.elevation >= -FRAC_PI_2
        && p.elevation <= FRAC_PI_2
}

#[test]
fn zero_radius_zeroes_angles() {
    let mut p = Polar::new(0.0, 2.0, -1.0);
    p.canonise();
    assert_eq!(p, Polar::default());
}

#[test]
fn negative_radius_flips_both_angles() {
    assert_eq!(Polar::new(-1.0, 0.0, 0.0).canonised(), Polar::new(1.0, 0.0, 0.0));
}

#[test]
fn full_turn_heading_wraps_to_zero() {
    assert_eq!(Polar::new(1.0, 2.0 * PI, 0.0).canonised(), Polar::new(1.0, 0.0, 0.0));
}

#[test]
fn elevation_past_pole_turns_heading() {
    let p = Polar::new(1.0, 0.5, 2.0).canonised();
    assert_relative_eq!(p.radius, 1.0);
    assert_relative_eq!(p.heading, 0.5 - PI, epsilon = 1e-12);
    assert_relative_eq!(p.elevation, PI - 2.0, epsilon = 1e-12);
}

#[test]
fn canonise_lands_in_range() {
    for p in grid() {
        let c = p.canonised();
        assert!(is_canonical(c), "{p} canonised to {c}");
    }
}

#[test]
fn canonise_is_idempotent() {
    for p in grid() {
        let once = p.canonised();
        assert_eq!(once.canonised(), once);
    }
}

#[test]
fn canonise_dense_sweep_is_stable() {
    let headings = (0..4867)
        .map(|i| -100.0 + i as Real * 0.0411)
        .chain((-40..=40).map(|k| k as Real * PI));
    let elevations: Vec<Real> = (0..71)
        .map(|i| -7.0 + i as Real * 0.2)
        .chain((-8..=8).map(|k| k as Real * FRAC_PI_2))
        .collect();

    for heading in headings {
        for &elevation in &elevations {
            for radius in [2.5, -2.5] {
                let once = Polar::new(radius, heading, elevation).canonised();
                assert!(is_canonical(once), "({radius}, {heading}, {elevation}) canonised to {once}");
                assert_eq!(once.canonised(), once);
            }
        }
    }
}

#[test]
fn heading_wrap_stays_below_pi() {
    let p = Polar::new(1.0, -62.83185307179586, 2.0).canonised();
    assert!(is_canonical(p), "{p}");
    assert_eq!(p.canonised(), p);
}

#[test]
fn canonise_keeps_the_point() {
    for p in grid().into_iter().filter(|p| p.radius > 0.0) {
        assert_relative_eq!(cartesian3(p), cartesian3(p.canonised()), epsilon = 1e-9);
    }
}

#[test]
fn poles_have_zero_heading() {
    for heading in [-2.0, 0.0, 1.0, 3.0] {
        let north = Polar::new(2.0, heading, FRAC_PI_2).canonised();
        assert_eq!(north.heading, 0.0);
        let south = Polar::new(2.0, heading, -FRAC_PI_2).canonised();
        assert_eq!(south.heading, 0.0);
    }
}

#[test]
fn cartesian_axes() {
    assert_abs_diff_eq!(
        cartesian3(Polar::new(2.0, 0.0, 0.0)),
        Vector3::new(0.0, 0.0, 2.0),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        cartesian3(Polar::new(1.0, FRAC_PI_2, 0.0)),
        Vector3::x_axis(),
        epsilon = 1e-12
    );
    // positive elevation points down -y
    assert_abs_diff_eq!(
        cartesian3(Polar::new(3.0, 0.0, FRAC_PI_2)),
        Vector3::new(0.0, -3.0, 0.0),
        epsilon = 1e-12
    );
}

#[test]
fn cartesian_preserves_radius() {
    for p in grid().into_iter().filter(|p| p.radius > 0.0) {
        assert_relative_eq!(cartesian3(p).length(), p.radius, epsilon = 1e-12);
    }
}

#[test]
fn cartesian4_is_homogeneous() {
    let p = Polar::new(2.0, 0.7, -0.4);
    let v: Vector4 = cartesian4(p);
    assert_eq!(v.w(), 1.0);
    assert_eq!(v.truncate(), cartesian3(p));
}

#[test]
fn spherical_round_trip() {
    for p in [
        Polar::new(2.0, 0.7, 0.3),
        Polar::new(1.0, -2.5, -1.2),
        Polar::new(5.0, 3.0, 1.0),
    ] {
        assert_relative_eq!(spherical(cartesian3(p)), p, epsilon = 1e-12);
    }
    for v in support::sample_directions() {
        assert_relative_eq!(cartesian3(spherical(v)), v, epsilon = 1e-12);
    }
}

#[test]
fn spherical_of_pole_and_zero() {
    let up = spherical(Vector3::new(0.0, -3.0, 0.0));
    assert_eq!((up.radius, up.heading), (3.0, 0.0));
    assert_relative_eq!(up.elevation, FRAC_PI_2);

    let down = spherical(Vector3::new(0.0, 3.0, 0.0));
    assert_relative_eq!(down.elevation, -FRAC_PI_2);

    assert_eq!(spherical(Vector3::zeros()), Polar::default());
}

#[test]
fn from_conversions() {
    let p = Polar::new(2.0, 0.7, 0.3);
    let v: Vector3 = p.into();
    assert_eq!(v, cartesian3(p));
    let back: Polar = v.into();
    assert_relative_eq!(back, p, epsilon = 1e-12);
}

#[test]
fn degree_radian_conversions() {
    assert_relative_eq!(radians(180.0), PI);
    assert_relative_eq!(radians(-90.0), -FRAC_PI_2);
    assert_relative_eq!(degrees(FRAC_PI_2), 90.0);
    for d in [-720.0, -37.5, 0.0, 12.25, 359.0] {
        assert_relative_eq!(degrees(radians(d)), d, epsilon = 1e-9);
    }
}

#[test]
fn display_format() {
    let p = Polar::new(1.0, 0.5, -0.25);
    assert_eq!(p.to_string(), "( 1 0.5 -0.25 )");
}
