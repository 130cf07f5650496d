use approx::assert_relative_eq;
use proptest::prelude::*;
use wbenvelope::{
    compute_load, load_profile, EnvelopeConstants, LoadSheet, LoadStations, Verdict,
};

fn katana() -> EnvelopeConstants {
    EnvelopeConstants::katana()
}

#[test]
fn reference_scenario_is_red_because_of_zero_fuel() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("scenario.toml");
    std::fs::write(
        &path,
        "empty_weight = 500\nempty_moment = 125\npilot_weight = 80\n\
         pax_weight = 70\nbaggage = 10\nfuel = 50\n",
    )
    .expect("profile written");

    let profile = load_profile(&path).expect("profile loads");
    let sheet = LoadSheet::evaluate(&profile, &katana(), &LoadStations::katana());

    assert_relative_eq!(sheet.zero_fuel.weight, 660.0);
    assert_relative_eq!(sheet.zero_fuel.moment, 154.69, epsilon = 1.0e-9);
    let zero_fuel_arm = sheet.zero_fuel.arm().expect("arm defined");
    assert!(zero_fuel_arm < 0.250);
    assert!(!sheet.zero_fuel_within_limits);

    assert_relative_eq!(sheet.takeoff.weight, 696.0);
    assert_relative_eq!(sheet.takeoff.moment, 184.354, epsilon = 1.0e-9);
    assert!(sheet.takeoff_within_limits);

    assert_eq!(sheet.verdict(), Verdict::OutOfLimits);
}

#[test]
fn full_tank_converts_to_exact_mass() {
    assert_eq!(LoadStations::katana().fuel_mass(74.0), 53.28);
}

#[test]
fn alternate_envelope_can_be_substituted() {
    let wide = EnvelopeConstants::new(500.0, 800.0, vec![0.20, 0.30, 0.40])
        .expect("valid envelope");
    let point = compute_load(500.0, 125.0, 150.0, 10.0, 0.0);
    assert!(!katana().is_within_limits(point.weight, point.moment));
    assert!(wide.is_within_limits(point.weight, point.moment));
}

proptest! {
    #[test]
    fn points_inside_the_trapezoid_are_accepted(
        weight in 560.0f64..=730.0,
        arm in 0.250f64..=0.390,
    ) {
        prop_assert!(katana().is_within_limits(weight, weight * arm));
    }

    #[test]
    fn limit_arms_are_accepted_at_any_weight(
        weight in 560.0f64..=730.0,
        aft in any::<bool>(),
    ) {
        let envelope = katana();
        let arm = if aft { envelope.aft_arm() } else { envelope.forward_arm() };
        prop_assert!(envelope.is_within_limits(weight, weight * arm));
    }

    #[test]
    fn weights_outside_the_limits_are_rejected(
        weight in prop_oneof![-1_000.0f64..559.999, 730.001f64..2_000.0],
        moment in -1_000.0f64..1_000.0,
    ) {
        prop_assert!(!katana().is_within_limits(weight, moment));
    }

    #[test]
    fn arms_outside_the_limits_are_rejected(
        weight in 560.0f64..=730.0,
        arm in prop_oneof![-1.0f64..0.2499, 0.3901f64..1.0],
    ) {
        prop_assert!(!katana().is_within_limits(weight, weight * arm));
    }

    #[test]
    fn load_computation_is_additive(
        empty_weight in 0.0f64..1_000.0,
        empty_moment in 0.0f64..500.0,
        persons in 0.0f64..300.0,
        baggage in 0.0f64..50.0,
        fuel in 0.0f64..60.0,
    ) {
        let point = compute_load(empty_weight, empty_moment, persons, baggage, fuel);
        prop_assert_eq!(point.weight, empty_weight + persons + baggage + fuel);
        prop_assert_eq!(
            point.moment,
            empty_moment + 0.143 * persons + 0.824 * (baggage + fuel)
        );
        prop_assert_eq!(point, compute_load(empty_weight, empty_moment, persons, baggage, fuel));
    }
}
