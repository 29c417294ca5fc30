//! Property tests for normalization, range transforms and validation.

use geology::core::normalize::normalize;
use geology::core::simulate::simulate;
use geology::core::transform::{apply, depress, raise};
use geology::core::types::{Interval, OperationKind, Step};
use geology::test_support::{heights, modifications};
use geology::{Geology, InvalidArgument, Modification};
use proptest::prelude::*;

const MAX_POINTS: usize = 32;

fn operation_strategy() -> impl Strategy<Value = OperationKind> {
    prop::sample::select(OperationKind::ALL.to_vec())
}

/// A landscape length plus an in-range interval for it.
fn interval_strategy() -> impl Strategy<Value = (usize, usize, usize)> {
    (1..=MAX_POINTS).prop_flat_map(|len| (Just(len), 0..len, 0..len))
}

/// Steps whose coordinates stay in range for `len` points after normalization.
fn steps_strategy(len: usize) -> impl Strategy<Value = Vec<Step>> {
    let bound = len as i64;
    prop::collection::vec(
        (-(bound - 1)..bound, -(bound - 1)..bound, operation_strategy())
            .prop_map(|(x1, x2, operation)| Step { x1, x2, operation }),
        0..8,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Raise followed by depress over the same interval restores the landscape.
    #[test]
    fn prop_raise_then_depress_is_identity(
        (len, a, b) in interval_strategy(),
        start in prop::collection::vec(-5i64..5, MAX_POINTS),
    ) {
        let mut landscape = start[..len].to_vec();
        let interval = Interval::ordered(a, b);
        raise(&mut landscape, interval);
        depress(&mut landscape, interval);
        prop_assert_eq!(&landscape[..], &start[..len]);
    }

    /// Normalization does not depend on argument order.
    #[test]
    fn prop_normalize_is_symmetric(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(normalize(a, b), normalize(b, a));
        let interval = normalize(a, b);
        prop_assert!(interval.lo() <= interval.hi());
    }

    /// Negated coordinates simulate exactly like their absolute values.
    #[test]
    fn prop_negative_coordinates_simulate_like_absolute(
        (len, a, b) in interval_strategy(),
        operation in operation_strategy(),
    ) {
        let positive = Step { x1: a as i64, x2: b as i64, operation };
        let negative = Step { x1: -(a as i64), x2: -(b as i64), operation };
        prop_assert_eq!(simulate(len, &[negative]), simulate(len, &[positive]));
    }

    /// Hill followed by valley over the same interval leaves a flat landscape.
    #[test]
    fn prop_hill_then_valley_is_flat((len, a, b) in interval_strategy()) {
        let mut landscape = vec![0; len];
        let interval = Interval::ordered(a, b);
        apply(&mut landscape, OperationKind::Hill, interval);
        apply(&mut landscape, OperationKind::Valley, interval);
        prop_assert!(landscape.iter().all(|&height| height == 0));
    }

    /// Hill heights never exceed half the interval width and stay inside it.
    #[test]
    fn prop_hill_is_bounded_and_local((len, a, b) in interval_strategy()) {
        let mut landscape = vec![0; len];
        let interval = Interval::ordered(a, b);
        apply(&mut landscape, OperationKind::Hill, interval);
        for (index, &height) in landscape.iter().enumerate() {
            prop_assert!(height >= 0);
            prop_assert!(height as usize <= interval.width() / 2);
            if index < interval.lo() || index > interval.hi() {
                prop_assert_eq!(height, 0);
            }
        }
    }

    /// The simulated landscape validates; perturbing any height makes it invalid.
    #[test]
    fn prop_any_difference_is_false_not_error(
        (len, steps, seed) in (1..=MAX_POINTS).prop_flat_map(|len| {
            (Just(len), steps_strategy(len), any::<prop::sample::Index>())
        }),
    ) {
        let list: Vec<Modification> = steps
            .iter()
            .map(|step| Modification::new(step.x1, step.x2, step.operation))
            .collect();
        let actual = simulate(len, &steps).into_heights();

        let geology = Geology::new(len as i64, &list);
        let mods = modifications(&list);
        let same = heights(&actual);
        prop_assert_eq!(geology.is_valid(len as i64, Some(&mods[..]), Some(&same[..])), Ok(true));

        let mut perturbed = actual.clone();
        perturbed[seed.index(len)] += 1;
        let different = heights(&perturbed);
        prop_assert_eq!(
            geology.is_valid(len as i64, Some(&mods[..]), Some(&different[..])),
            Ok(false)
        );
    }

    /// Any declared count is overridden by the expected heights length.
    #[test]
    fn prop_declared_count_is_advisory(declared in any::<i64>(), len in 0..=MAX_POINTS) {
        let geology = Geology::new(declared, &[]);
        let mods = modifications(&[]);
        let expected = heights(&vec![0; len]);
        let report = geology
            .validate(declared, Some(&mods[..]), Some(&expected[..]))
            .expect("well-formed input");
        prop_assert!(report.valid);
        prop_assert_eq!(report.effective_point_count, len);
    }
}

#[test]
fn missing_lists_fail_with_invalid_argument() {
    let geology = Geology::new(6, &[]);
    let mods = modifications(&[Modification::new(1, 7, OperationKind::Hill)]);
    let expected = heights(&[0, 1, 2, 3, 3, 3, 2, 1]);

    assert_eq!(
        geology.is_valid(6, None, Some(&expected[..])),
        Err(InvalidArgument::MissingModifications)
    );
    assert_eq!(
        geology.is_valid(6, Some(&mods[..]), None),
        Err(InvalidArgument::MissingExpectedHeights)
    );
    assert_eq!(
        geology.is_valid(6, None, None),
        Err(InvalidArgument::MissingModifications)
    );
}

#[test]
fn null_elements_fail_with_invalid_argument() {
    let geology = Geology::new(6, &[]);
    let with_null = vec![Some(Modification::new(1, 7, OperationKind::Hill)), None];
    let expected = heights(&[0, 1, 2, 3, 3, 3, 2, 1]);
    assert_eq!(
        geology.is_valid(6, Some(&with_null[..]), Some(&expected[..])),
        Err(InvalidArgument::NullModification { index: 1 })
    );

    let mods = modifications(&[Modification::new(1, 7, OperationKind::Hill)]);
    let null_height = vec![Some(1), Some(2), None];
    assert_eq!(
        geology.is_valid(6, Some(&mods[..]), Some(&null_height[..])),
        Err(InvalidArgument::NullHeight { index: 2 })
    );
}

#[test]
fn composite_hill_valley_raise() {
    let list = [
        Modification::new(1, 7, OperationKind::Hill),
        Modification::new(1, 7, OperationKind::Valley),
        Modification::new(1, 7, OperationKind::Raise),
    ];
    let geology = Geology::new(7, &list);
    let mods = modifications(geology.operations());
    let expected = heights(&[0, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(geology.is_valid(7, Some(&mods[..]), Some(&expected[..])), Ok(true));
}
