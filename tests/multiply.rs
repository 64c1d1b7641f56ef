use list_bigint::{multiply, BigInt, Error, Operand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn product(a: &str, b: &str) -> String {
    let a: BigInt = a.into();
    let b: BigInt = b.into();
    let mut p = BigInt::new();
    p.multiply(&a, &b);
    p.to_string()
}

#[test]
fn test_scenarios() {
    init_logging();
    assert_eq!(product("7", "6"), "42");
    assert_eq!(product("999999999", "2"), "1999999998");
    assert_eq!(product("-5", "3"), "-15");
    assert_eq!(product("0", "123456789123456789"), "0");
    assert_eq!(
        product("999999999999999999", "999999999999999999"),
        "999999999999999998000000000000000001"
    );
}

#[test]
fn test_zero_absorption() {
    let zero = BigInt::new();
    for s in ["1", "-1", "999999999", "-123456789123456789123456789"] {
        let x: BigInt = s.into();
        let mut p: BigInt = "31".into();
        p.multiply(&x, &zero);
        assert_eq!(p, zero);
        assert_eq!(p.signum(), 0);
        assert!(p.digits().is_empty());

        let mut p: BigInt = "-31".into();
        p.multiply(&zero, &x);
        assert_eq!(p, zero);
        assert_eq!(p.to_string(), "0");
    }
}

#[test]
fn test_sign_law() {
    let pos: BigInt = "1000000007".into();
    let neg: BigInt = "-3".into();
    assert_eq!((&pos * &pos).signum(), 1);
    assert_eq!((&neg * &neg).signum(), 1);
    assert_eq!((&pos * &neg).signum(), -1);
    assert_eq!((&neg * &pos).signum(), -1);
    assert_eq!((&neg * &pos).to_string(), "-3000000021");
}

#[test]
fn test_operands_unchanged() {
    let mut a: BigInt = "-123456789987654321123".into();
    let mut b: BigInt = "98765432123456789".into();
    a.digits_mut().move_front();
    a.digits_mut().step_forward();
    b.digits_mut().move_back();

    let a_before = a.copy();
    let b_before = b.copy();

    let mut p = BigInt::new();
    p.multiply(&a, &b);

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
    assert_eq!(a.signum(), -1);
    assert_eq!(a.digits().index(), Some(1));
    assert_eq!(b.digits().index(), Some(1));
    assert_eq!(a.digits().get().unwrap(), 456789987);
}

#[test]
fn test_commutative() {
    let values = [
        "1",
        "-999999999",
        "1000000000",
        "18446744073709551616",
        "-340282366920938463463374607431768211455",
        "100000000000000000000000000000000000000000000001",
    ];
    for x in values {
        for y in values {
            let a: BigInt = x.into();
            let b: BigInt = y.into();
            let mut p1 = BigInt::new();
            let mut p2 = BigInt::new();
            p1.multiply(&a, &b);
            p2.multiply(&b, &a);
            assert_eq!(p1, p2, "{} * {}", x, y);
            assert_eq!(p1.digits(), p2.digits());
        }
    }
}

#[test]
fn test_random_against_i128() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let x: i64 = rng.gen();
        let y: i64 = match rng.gen_range(0..3) {
            0 => rng.gen_range(-1_000_000_000..1_000_000_000),
            _ => rng.gen(),
        };
        let a = BigInt::from(x);
        let b = BigInt::from(y);
        let expected = (x as i128) * (y as i128);
        assert_eq!((&a * &b).to_string(), expected.to_string(), "{} * {}", x, y);
    }
}

#[test]
fn test_square_of_power_of_base() {
    // 10^45 * 10^45 = 10^90
    let a: BigInt = format!("1{}", "0".repeat(45)).as_str().into();
    let p = &a * &a;
    assert_eq!(p.to_string(), format!("1{}", "0".repeat(90)));
    assert_eq!(p.digits().len(), 11);
    assert_eq!(p.digits().front(), Some(1));
}

#[test]
fn test_null_operands() {
    init_logging();
    let a: BigInt = "2".into();
    let mut p = Some(BigInt::from(11));

    let err = multiply(&mut p, None, Some(&a)).unwrap_err();
    assert_eq!(err, Error::NullReference { op: "multiply", operand: Operand::A });
    assert_eq!(
        err.to_string(),
        "Big Integer Error: calling multiply() on NULL Big Integer A reference"
    );

    let err = multiply(&mut p, Some(&a), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Big Integer Error: calling multiply() on NULL Big Integer B reference"
    );
    assert_eq!(p, Some(BigInt::from(11)));
}

#[test]
fn test_unset_destination() {
    let a: BigInt = "-999999999".into();
    let b: BigInt = "999999999".into();
    let mut p: Option<BigInt> = None;
    multiply(&mut p, Some(&a), Some(&b)).unwrap();
    assert_eq!(p.map(|p| p.to_string()), Some("-999999998000000001".to_string()));
}

#[test]
fn test_all_nines_carry_chain() {
    // (10^100 - 1) * (10^37 - 1) = a * 10^37 - a
    let a: BigInt = "9".repeat(100).as_str().into();
    let b: BigInt = "9".repeat(37).as_str().into();
    let p = &a * &b;

    let expected = format!("{}8{}{}1", "9".repeat(36), "9".repeat(63), "0".repeat(36));
    assert_eq!(p.to_string(), expected);

    let shifted: BigInt = format!("{}{}", "9".repeat(100), "0".repeat(37)).as_str().into();
    assert_eq!(p, &shifted - &a);
    assert_eq!(&b * &a, p);
}

#[test]
fn test_add_subtract_in_place() {
    let a: BigInt = "999999999999999999".into();
    let b: BigInt = "-1000000000".into();

    let mut s = BigInt::new();
    s.add(&a, &b);
    assert_eq!(s.to_string(), "999999998999999999");

    let mut d = BigInt::new();
    d.subtract(&s, &a);
    assert_eq!(d, b);

    let mut p = BigInt::new();
    p.multiply(&d, &d);
    assert_eq!(p.to_string(), "1000000000000000000");
}
