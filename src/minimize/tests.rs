//! Tests for the minimization engine

use super::*;

fn patterns(implicants: &[Implicant]) -> Vec<String> {
    implicants.iter().map(|i| i.to_string()).collect()
}

fn names(names: &[&str]) -> Vec<Arc<str>> {
    names.iter().map(|&name| Arc::from(name)).collect()
}

// ========== Implicant Tests ==========

#[test]
fn test_from_minterm_is_msb_first() {
    assert_eq!(Implicant::from_minterm(3, 5).to_string(), "101");
    assert_eq!(Implicant::from_minterm(3, 1).to_string(), "001");
    assert_eq!(Implicant::from_minterm(1, 0).to_string(), "0");
}

#[test]
fn test_ones_and_specified_ignore_dont_cares() {
    let a = Implicant::from_minterm(3, 6);
    let b = Implicant::from_minterm(3, 7);
    let merged = a.combine(&b).unwrap();

    assert_eq!(merged.to_string(), "11-");
    assert_eq!(merged.ones(), 2);
    assert_eq!(merged.specified(), 2);
    assert_eq!(merged.width(), 3);
}

#[test]
fn test_combine_requires_exactly_one_difference() {
    let zero = Implicant::from_minterm(3, 0);
    let one = Implicant::from_minterm(3, 1);
    let three = Implicant::from_minterm(3, 3);

    assert_eq!(zero.combine(&one).unwrap().to_string(), "00-");
    assert_eq!(zero.combine(&three), None); // two differing bits
    assert_eq!(zero.combine(&zero), None); // no differing bit
}

#[test]
fn test_combine_rejects_mismatched_dashes() {
    // 00- and 0-0 share minterm 0 but generalize different bits
    let low = Implicant::from_minterm(3, 0).combine(&Implicant::from_minterm(3, 1)).unwrap();
    let mid = Implicant::from_minterm(3, 0).combine(&Implicant::from_minterm(3, 2)).unwrap();
    assert_eq!(low.combine(&mid), None);
}

#[test]
fn test_combine_with_aligned_dashes() {
    // 1-0 and 1-1 differ only in the last bit
    let left = Implicant::from_minterm(3, 4).combine(&Implicant::from_minterm(3, 6)).unwrap();
    let right = Implicant::from_minterm(3, 5).combine(&Implicant::from_minterm(3, 7)).unwrap();
    assert_eq!(left.combine(&right).unwrap().to_string(), "1--");
}

#[test]
fn test_covers_matches_specified_bits_only() {
    let merged = Implicant::from_minterm(3, 3)
        .combine(&Implicant::from_minterm(3, 7))
        .unwrap();
    assert_eq!(merged.to_string(), "-11");

    assert!(merged.covers(3));
    assert!(merged.covers(7));
    assert!(!merged.covers(5));
    assert!(!merged.covers(6));
}

// ========== Prime Implicant Derivation ==========

#[test]
fn test_primes_single_merge() {
    let primes = prime_implicants(3, &[6, 7]);
    assert_eq!(patterns(&primes), ["11-"]);
}

#[test]
fn test_primes_xor_cannot_merge() {
    // XOR minterms are isolated, so every minterm is its own prime
    let primes = prime_implicants(2, &[1, 2]);
    assert_eq!(patterns(&primes), ["01", "10"]);
}

#[test]
fn test_primes_tautology_collapses_to_all_dashes() {
    let primes = prime_implicants(2, &[0, 1, 2, 3]);
    assert_eq!(patterns(&primes), ["--"]);
}

#[test]
fn test_primes_mixed_levels_in_order() {
    // {3,4,5,6,7}: bc survives one merge level, a survives two
    let primes = prime_implicants(3, &[3, 4, 5, 6, 7]);
    assert_eq!(patterns(&primes), ["-11", "1--"]);
}

#[test]
fn test_primes_ignore_duplicate_minterms() {
    let primes = prime_implicants(3, &[6, 6, 7, 7]);
    assert_eq!(patterns(&primes), ["11-"]);
}

#[test]
fn test_primes_empty_input() {
    assert!(prime_implicants(3, &[]).is_empty());
}

// ========== Cover Selection ==========

#[test]
fn test_select_cover_takes_essentials() {
    let minterms = [3, 4, 5, 6, 7];
    let primes = prime_implicants(3, &minterms);
    let cover = select_cover(&primes, &minterms);
    // Minterm 3 forces -11 and minterm 4 forces 1--
    assert_eq!(patterns(&cover), ["-11", "1--"]);
}

#[test]
fn test_select_cover_single_prime() {
    let minterms = [6, 7];
    let primes = prime_implicants(3, &minterms);
    let cover = select_cover(&primes, &minterms);
    assert_eq!(patterns(&cover), ["11-"]);
}

#[test]
fn test_select_cover_cyclic_falls_back_to_greedy() {
    // Every minterm here is covered by exactly two primes, so there are
    // no essentials and the greedy step decides the whole cover.
    let minterms = [0, 1, 2, 5, 6, 7];
    let primes = prime_implicants(3, &minterms);
    assert_eq!(patterns(&primes), ["00-", "0-0", "-01", "-10", "1-1", "11-"]);

    let cover = select_cover(&primes, &minterms);
    assert_eq!(patterns(&cover), ["00-", "-10", "1-1"]);

    let covers_all = minterms
        .iter()
        .all(|&m| cover.iter().any(|prime| prime.covers(m)));
    assert!(covers_all);
}

#[test]
fn test_select_cover_is_deterministic() {
    let minterms = [0, 1, 2, 5, 6, 7];
    let primes = prime_implicants(3, &minterms);

    let first = select_cover(&primes, &minterms);
    for _ in 0..10 {
        assert_eq!(select_cover(&primes, &minterms), first);
    }
}

#[test]
fn test_select_cover_empty() {
    assert!(select_cover(&[], &[]).is_empty());
}

// ========== Expression Reconstruction ==========

#[test]
fn test_sop_empty_cover_is_false() {
    let expr = build_sum_of_products(&[], &names(&["a", "b"]));
    assert_eq!(expr, Node::constant(false));
}

#[test]
fn test_sop_all_dashes_is_true() {
    let cover = prime_implicants(2, &[0, 1, 2, 3]);
    let expr = build_sum_of_products(&cover, &names(&["a", "b"]));
    assert_eq!(expr, Node::constant(true));
}

#[test]
fn test_sop_single_literal_stays_bare() {
    let positive = prime_implicants(2, &[2, 3]); // 1-
    let expr = build_sum_of_products(&positive, &names(&["a", "b"]));
    assert_eq!(expr.to_string(), "a");

    let negative = prime_implicants(2, &[0, 1]); // 0-
    let expr = build_sum_of_products(&negative, &names(&["a", "b"]));
    assert_eq!(expr.to_string(), "not(a)");
}

#[test]
fn test_sop_orders_literals_and_terms() {
    let minterms = [3, 4, 5, 6, 7];
    let primes = prime_implicants(3, &minterms);
    let cover = select_cover(&primes, &minterms);
    let expr = build_sum_of_products(&cover, &names(&["a", "b", "c"]));
    assert_eq!(expr.to_string(), "((b and c) or a)");
}

#[test]
fn test_pos_empty_cover_is_true() {
    let expr = build_product_of_sums(&[], &names(&["a", "b"]));
    assert_eq!(expr, Node::constant(true));
}

#[test]
fn test_pos_inverts_literal_polarity() {
    // XNOR is false on {1, 2}; its product-of-sums form
    let maxterms = [1, 2];
    let primes = prime_implicants(2, &maxterms);
    let cover = select_cover(&primes, &maxterms);
    let expr = build_product_of_sums(&cover, &names(&["a", "b"]));
    assert_eq!(expr.to_string(), "((a or not(b)) and (not(a) or b))");
}
