use wordseed::rng::{EmptySequence, Xoroshiro128Plus};

// Reference values captured from a canonical run with seed 12345.

const SEED: u64 = 12345;

#[test]
fn golden_next_u64() {
    let mut rng = Xoroshiro128Plus::new(SEED);
    let got: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    assert_eq!(
        got,
        vec![
            0x6142_19c3_268b_11c8,
            0x195e_3efa_f5d0_bd2b,
            0xb68c_b352_d804_d232,
            0x57c6_69ba_df81_f0f2,
        ]
    );
}

#[test]
fn golden_next_u64_seed_zero() {
    let mut rng = Xoroshiro128Plus::new(0);
    assert_eq!(rng.next_u64(), 0x5692_161d_100b_05e5);
    assert_eq!(rng.next_u64(), 0x41ef_c2c0_e830_c987);
}

#[test]
fn golden_next_u32_is_upper_half() {
    let mut rng = Xoroshiro128Plus::new(SEED);
    let got: Vec<u32> = (0..5).map(|_| rng.next_u32()).collect();
    assert_eq!(
        got,
        vec![1_631_721_923, 425_606_906, 3_062_674_258, 1_472_620_986, 1_514_040_233]
    );
}

#[test]
fn golden_next_f64() {
    let mut rng = Xoroshiro128Plus::new(SEED);
    let got: Vec<f64> = (0..3).map(|_| rng.next_f64()).collect();
    let expected = vec![
        1_631_721_923.0 / 4_294_967_296.0,
        425_606_906.0 / 4_294_967_296.0,
        3_062_674_258.0 / 4_294_967_296.0,
    ];
    assert_eq!(got, expected);
    assert!(got.iter().all(|f| (0.0..1.0).contains(f)));
}

#[test]
fn golden_shuffle() {
    let mut rng = Xoroshiro128Plus::new(SEED);
    let input: Vec<u32> = (0..10).collect();
    assert_eq!(rng.shuffle(&input), vec![7, 8, 9, 1, 4, 6, 2, 5, 0, 3]);
}

#[test]
fn golden_choice_sequence() {
    let mut rng = Xoroshiro128Plus::new(SEED);
    let items = ["a", "b", "c", "d", "e"];
    let got: Vec<&str> = (0..5).map(|_| *rng.choice(&items).unwrap()).collect();
    assert_eq!(got, vec!["b", "a", "d", "b", "b"]);
}

#[test]
fn choice_on_empty_is_an_error() {
    let mut rng = Xoroshiro128Plus::new(SEED);
    let empty: Vec<String> = Vec::new();
    assert_eq!(rng.choice(&empty), Err(EmptySequence));
}

#[test]
fn same_seed_same_stream_different_seed_different_stream() {
    let sample = |seed: u64| {
        let mut rng = Xoroshiro128Plus::new(seed);
        (0..16).map(|_| rng.next_u64()).collect::<Vec<_>>()
    };
    assert_eq!(sample(SEED), sample(SEED));
    assert_ne!(sample(SEED), sample(SEED + 1));
    assert_ne!(sample(u64::MAX), sample(0));
}
