use card_tokenizer::token::tokenize;
use std::collections::HashSet;

#[test]
fn stable_across_calls() {
    let inputs = ["4532015112830366", "4111111111111111", "4532-0151-1283-0366"];
    for input in inputs {
        let first = tokenize(input);
        for _ in 0..10 {
            assert_eq!(tokenize(input), first);
        }
    }
}

#[test]
fn no_collisions_over_distinct_pans() {
    let mut seen = HashSet::new();
    for n in 0u64..50_000 {
        let pan = format!("{:016}", n);
        assert!(seen.insert(tokenize(&pan)), "collision at {pan}");
    }
}

#[test]
fn tokens_are_fixed_length_hex() {
    for input in ["", "4", "4532015112830366", "not a card at all"] {
        let token = tokenize(input);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
