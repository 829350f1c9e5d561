use drinkplan_engine::numbers::to_cents;
use drinkplan_engine::{
    DrinkType, PlanInput, PricingCatalog, RawNumber, RawPlanInput, ResultSet, Strategy,
    compute, effective_consumption, normalize, voucher_value,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SWEEP_SEED: u64 = 0x00D2_1AC5;
const SWEEP_CASES: usize = 2_000;

fn field(rng: &mut ChaCha8Rng, lo: f64, hi: f64) -> Option<RawNumber> {
    match rng.gen_range(0..10) {
        0 => None,
        1 => Some(RawNumber::Text(format!("{:.1} or so", rng.gen_range(lo..hi)))),
        2 => Some(RawNumber::Text(String::new())),
        _ => Some(RawNumber::Number(rng.gen_range(lo..hi))),
    }
}

/// Arbitrary form state, including out-of-range and half-typed values.
fn random_raw(rng: &mut ChaCha8Rng) -> RawPlanInput {
    let mut raw = RawPlanInput {
        days: field(rng, -5.0, 400.0),
        sea_days: field(rng, -5.0, 30.0),
        sea_weight: field(rng, -0.5, 1.0),
        adults: field(rng, -1.0, 25.0),
        minors: field(rng, -1.0, 25.0),
        voucher_adult: field(rng, -1.0, 8.0),
        voucher_minor: field(rng, -1.0, 8.0),
        voucher_unit_value: field(rng, -10.0, 150.0),
        ..RawPlanInput::default()
    };
    for drink in DrinkType::ALL {
        if rng.gen_bool(0.5)
            && let Some(qty) = field(rng, -2.0, 12.0)
        {
            raw.drinks.insert(drink.id().to_string(), qty);
        }
    }
    raw
}

fn sweep(mut check: impl FnMut(&RawPlanInput, &PlanInput, &ResultSet)) {
    let mut rng = ChaCha8Rng::seed_from_u64(SWEEP_SEED);
    let catalog = PricingCatalog::fallback();
    for _ in 0..SWEEP_CASES {
        let raw = random_raw(&mut rng);
        let input = normalize(&raw);
        let result = compute(&input, &catalog);
        check(&raw, &input, &result);
    }
}

#[test]
fn normalization_is_idempotent() {
    sweep(|raw, input, _| {
        assert_eq!(normalize(&input.to_raw()), *input, "raw input: {raw:?}");
    });
}

#[test]
fn normalized_fields_stay_in_range() {
    sweep(|_, input, _| {
        assert!((1..=365).contains(&input.trip.days));
        assert!(input.trip.sea_days <= input.trip.days);
        assert!((0.0..=0.4).contains(&input.trip.sea_weight));
        assert!((1..=20).contains(&input.party.adult_count));
        assert!(input.party.minor_count <= 20);
        assert!(input.vouchers.per_adult_daily <= 6);
        assert!(input.vouchers.per_minor_daily <= 6);
        assert!((0.0..=100.0).contains(&input.vouchers.unit_value));
        for (_, qty) in input.consumption.iter() {
            assert!((0.0..=99.0).contains(&qty));
        }
    });
}

#[test]
fn weighting_conserves_trip_consumption() {
    sweep(|_, input, _| {
        let effective = effective_consumption(&input.consumption, &input.trip);
        let days = f64::from(input.trip.days);
        let sea = f64::from(input.trip.sea_days);
        let port = f64::from(input.trip.port_days());
        for (drink, base) in input.consumption.iter() {
            let total = effective.sea_day.quantity(drink) * sea
                + effective.port_day.quantity(drink) * port;
            assert!((total - base * days).abs() < 1e-6, "{drink}: {total} vs {base}");
            assert!((effective.average.quantity(drink) - base).abs() < 1e-9);
        }
    });
}

#[test]
fn premium_minors_always_forced_to_mid() {
    sweep(|_, input, result| {
        let premium = result.costs.premium;
        let expected = 34.0 * f64::from(input.trip.days) * f64::from(input.party.minor_count);
        assert_eq!(premium.forced_minor_total.map(to_cents), Some(to_cents(expected)));
        if result.winner == Strategy::Premium {
            for line in result.travelers.minors() {
                assert!(line.forced);
                assert_eq!(line.strategy, Strategy::Mid);
            }
        }
    });
}

#[test]
fn vouchers_only_touch_pay_as_you_go() {
    sweep(|_, input, result| {
        let gross = result.pay_as_you_go_subtotals.alcoholic
            + result.pay_as_you_go_subtotals.non_alcoholic;
        let expected = (gross - voucher_value(input)).max(0.0);
        assert!((result.costs.pay_as_you_go.trip_total - expected).abs() < 0.02);

        let mut without = *input;
        without.vouchers.per_adult_daily = 0;
        without.vouchers.per_minor_daily = 0;
        let bare = compute(&without, &PricingCatalog::fallback());
        for strategy in [Strategy::Basic, Strategy::Mid, Strategy::Premium] {
            assert_eq!(
                to_cents(result.costs.get(strategy).trip_total),
                to_cents(bare.costs.get(strategy).trip_total)
            );
        }
    });
}

#[test]
fn winner_is_cheapest_with_preferred_ties() {
    sweep(|_, _, result| {
        let winning = to_cents(result.costs.get(result.winner).trip_total);
        for cost in result.costs.iter() {
            let cents = to_cents(cost.trip_total);
            assert!(winning <= cents);
            if cents == winning {
                assert!(result.winner <= cost.strategy);
            }
        }
        assert!(result.savings >= 0.0);
    });
}

#[test]
fn no_alcohol_without_adults() {
    sweep(|_, input, result| {
        if !input.party.adult_present {
            assert!(input.consumption.alcoholic_total().abs() < f64::EPSILON);
            assert!(result.pay_as_you_go_subtotals.alcoholic.abs() < f64::EPSILON);
            assert_eq!(result.advisories[0].code, "advisory.party.unsupported");
        }
    });
}

#[test]
fn outputs_are_finite() {
    sweep(|_, _, result| {
        for cost in result.costs.iter() {
            assert!(cost.trip_total.is_finite() && cost.trip_total >= 0.0);
            assert!(cost.per_person_total.is_finite());
            assert!(cost.per_day_total.is_finite());
        }
        assert!(result.travelers.total().is_finite());
        assert!(result.break_even.iter().all(|b| b.daily_spend_per_adult.is_finite()));
    });
}
