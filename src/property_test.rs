//! Property tests that sample random permutations and random plaintext/key
//! pairs, spanning both the cryptanalysis engine and the AES core rather
//! than a single module.

use rand::{seq::SliceRandom, Rng};

use crate::{
    cipher::block::aes,
    decrypt_block,
    encrypt_block,
    sbox::{boolean::BooleanFunction, table::Ddt, transform, SBoxAnalyzer},
    SBox,
};

fn random_permutation(rng: &mut impl Rng) -> SBox {
    let mut bytes: [u8; 256] = std::array::from_fn(|i| i as u8);
    bytes.shuffle(rng);
    SBox::from_bytes(bytes).unwrap()
}

fn sbox_values(sbox: &SBox) -> Vec<i64> {
    sbox.as_bytes().iter().map(|&b| b as i64).collect()
}

#[test]
fn ddt_rows_sum_to_256_and_origin_is_fixed_for_random_permutations() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let sbox = random_permutation(&mut rng);
        let ddt = Ddt::build(&sbox);
        assert_eq!(ddt.get(0, 0), 256);
        for alpha in 0..=255u8 {
            let row_sum: u32 = (0..=255u8).map(|beta| ddt.get(alpha, beta) as u32).sum();
            assert_eq!(row_sum, 256);
            for beta in 0..=255u8 {
                assert_eq!(ddt.get(alpha, beta) % 2, 0);
            }
        }
    }
}

#[test]
fn lat_origin_is_128_and_entries_bounded_by_nonlinearity_for_random_permutations() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let sbox = random_permutation(&mut rng);
        let analyzer = SBoxAnalyzer::new(sbox);
        let lat = analyzer.lat();
        assert_eq!(lat.get(0, 0), 128);
        let nl = analyzer.nonlinearity();
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let entry = lat.get(a, b);
                assert_eq!(entry % 2, 0);
                if (a, b) != (0, 0) {
                    assert!(entry.abs() <= 128 - nl);
                }
            }
        }
    }
}

#[test]
fn algebraic_degree_of_a_permutation_output_bit_is_between_one_and_seven() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let sbox = random_permutation(&mut rng);
        for i in 0..8u8 {
            let f = BooleanFunction::project(&sbox, i);
            let degree = transform::algebraic_degree(&f);
            assert!((1..=7).contains(&degree), "degree {degree} out of range");
        }
    }
}

#[test]
fn identity_permutation_has_zero_nonlinearity_and_maximal_differential_uniformity() {
    let identity: [u8; 256] = std::array::from_fn(|i| i as u8);
    let sbox = SBox::from_bytes(identity).unwrap();
    let analyzer = SBoxAnalyzer::new(sbox);
    assert_eq!(analyzer.nonlinearity(), 0);
    assert_eq!(analyzer.dap().0, 256);
    assert_eq!(analyzer.algebraic_degree(), 1);
}

#[test]
fn encrypt_then_decrypt_recovers_plaintext_for_the_standard_sbox_and_random_permutations() {
    let mut rng = rand::thread_rng();
    let standard = sbox_values(&SBox::from_bytes(aes::S_BOX).unwrap());

    for _ in 0..50 {
        let permutation = sbox_values(&random_permutation(&mut rng));
        for sbox in [&standard, &permutation] {
            let plaintext: [u8; 16] = rng.gen();
            let key: [u8; 16] = rng.gen();
            let ciphertext = encrypt_block(&plaintext, &key, sbox).unwrap();
            let recovered = decrypt_block(&ciphertext, &key, sbox).unwrap();
            assert_eq!(recovered, plaintext);
        }
    }
}

#[test]
fn round_trip_holds_for_a_thousand_random_plaintext_key_pairs_under_one_random_permutation() {
    let mut rng = rand::thread_rng();
    let sbox = sbox_values(&random_permutation(&mut rng));

    for _ in 0..1000 {
        let plaintext: [u8; 16] = rng.gen();
        let key: [u8; 16] = rng.gen();
        let ciphertext = encrypt_block(&plaintext, &key, &sbox).unwrap();
        let recovered = decrypt_block(&ciphertext, &key, &sbox).unwrap();
        assert_eq!(recovered, plaintext);
    }
}
