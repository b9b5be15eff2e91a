use proptest::prelude::*;
use tfn::{Callable, EmptyCall, LTFn, TFn};

#[derive(Clone, Debug)]
struct Affine {
    scale: i32,
}

impl Callable<fn(i32) -> i64> for Affine {
    fn call(&self, (x,): (i32,)) -> i64 {
        x as i64 * self.scale as i64
    }
}

#[derive(Clone, Debug)]
struct Poly {
    coefficients: [i64; 4],
}

impl Callable<fn(i32) -> i64> for Poly {
    fn call(&self, (x,): (i32,)) -> i64 {
        let x = x as i64;
        self.coefficients
            .iter()
            .rev()
            .fold(0i64, |acc, &c| acc.wrapping_mul(x).wrapping_add(c))
    }
}

proptest! {
    #[test]
    fn inline_callable_matches_direct_call(scale in any::<i32>(), inputs in proptest::collection::vec(any::<i32>(), 0..32)) {
        let affine = Affine { scale };
        let f: TFn<fn(i32) -> i64> = TFn::new(affine.clone());

        prop_assert!(!f.is_boxed());
        prop_assert_eq!(f.target::<Affine>().map(|a| a.scale), Some(scale));
        prop_assert!(f.target::<Poly>().is_none());

        for x in inputs {
            prop_assert_eq!(f.call(x), Ok(affine.call((x,))));
        }
    }

    #[test]
    fn boxed_callable_matches_direct_call(coefficients in any::<[i64; 4]>(), inputs in proptest::collection::vec(any::<i32>(), 0..32)) {
        let poly = Poly { coefficients };
        let f: TFn<fn(i32) -> i64> = TFn::new(poly.clone());

        prop_assert!(f.is_boxed());
        for x in inputs {
            prop_assert_eq!(f.call(x), Ok(poly.call((x,))));
        }
    }

    #[test]
    fn boxed_copy_is_deep(coefficients in any::<[i64; 4]>(), replacement in any::<i64>(), x in any::<i32>()) {
        let poly = Poly { coefficients };
        let mut f: LTFn<fn(i32) -> i64> = LTFn::new(poly.clone());
        let copy = f.clone();

        f.target_mut::<Poly>().unwrap().coefficients[0] = replacement;

        prop_assert_eq!(copy.call(x), Ok(poly.call((x,))));
        prop_assert_eq!(copy.target::<Poly>().unwrap().coefficients, coefficients);
    }

    #[test]
    fn copy_then_move_round_trip(scale in any::<i32>(), coefficients in any::<[i64; 4]>(), use_poly in any::<bool>(), x in any::<i32>()) {
        let original: LTFn<fn(i32) -> i64> = if use_poly {
            LTFn::new(Poly { coefficients })
        } else {
            LTFn::new(Affine { scale })
        };

        let mut copy = original.clone();
        let moved = copy.take();

        prop_assert_eq!(moved.call(x), original.call(x));
        prop_assert_eq!(moved.is::<Poly>(), use_poly);
        prop_assert_eq!(copy.call(x), Err(EmptyCall));
    }

    #[test]
    fn swap_exchanges_behavior(scale in any::<i32>(), coefficients in any::<[i64; 4]>(), x in any::<i32>()) {
        let affine = Affine { scale };
        let poly = Poly { coefficients };

        let mut a: LTFn<fn(i32) -> i64> = LTFn::new(affine.clone());
        let mut b: LTFn<fn(i32) -> i64> = LTFn::new(poly.clone());

        a.swap(&mut b);

        prop_assert_eq!(a.call(x), Ok(poly.call((x,))));
        prop_assert_eq!(b.call(x), Ok(affine.call((x,))));
        prop_assert!(a.is::<Poly>() && a.is_boxed());
        prop_assert!(b.is::<Affine>() && !b.is_boxed());

        a.swap(&mut b);

        prop_assert!(a.is::<Affine>());
        prop_assert!(b.is::<Poly>());
    }
}

#[test]
fn concrete_scenarios() {
    fn double(x: i32) -> i32 {
        x * 2
    }

    let f: TFn<fn(i32) -> i32> = TFn::new(double as fn(i32) -> i32);
    assert_eq!(f.call(21), Ok(42));

    let empty: TFn<fn(i32) -> i32> = TFn::default();
    assert!(empty.is_empty());
    assert_eq!(empty.call(21), Err(EmptyCall));
    assert_eq!(EmptyCall.to_string(), "bad function call");
}
