use pixel_invaders::rng::Xorshift32;

#[test]
fn golden_sequence_for_seed_13() {
    // Known-answer values for the 13/17/5 shift triple.
    let mut rng = Xorshift32::new(13);
    assert_eq!(rng.next(), 3_514_797);
    assert_eq!(rng.next(), 873_147_917);
    assert_eq!(rng.next(), 1_755_216_872);
    assert_eq!(rng.next(), 1_535_519_545);
}

#[test]
fn same_seed_same_stream() {
    let mut a = Xorshift32::new(42);
    let mut b = Xorshift32::new(42);
    for _ in 0..100 {
        assert_eq!(a.next(), b.next());
    }
}

#[test]
fn unit_stays_in_half_open_interval() {
    let mut rng = Xorshift32::new(13);
    for _ in 0..1000 {
        let u = rng.unit();
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn clone_is_independent() {
    let mut original = Xorshift32::new(7);
    let mut cloned = original;
    assert_eq!(original.next(), cloned.next());
    let _ = cloned.next();
    // Advancing the copy must not advance the original
    let mut reference = Xorshift32::new(7);
    let _ = reference.next();
    assert_eq!(original.next(), reference.next());
}
