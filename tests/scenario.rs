use wordset::popcount::{BYTE_POPCOUNT, word_popcount};
use wordset::words::updated_words;
use wordset::{BitSet, FixedBitSet, WordSet};

fn set(members: &[usize]) -> BitSet {
    members.iter().copied().collect()
}

#[test]
fn worked_example() {
    let a = set(&[1, 3, 64, 65]);
    let b = set(&[1, 2, 64]);

    assert_eq!(a.union(&b), set(&[1, 2, 3, 64, 65]));
    assert_eq!(a.intersection(&b), set(&[1, 64]));
    assert_eq!(a.difference(&b), set(&[3, 65]));
    assert_eq!(a.symmetric_difference(&b), set(&[2, 3, 65]));
    assert_eq!(a.count(), 4);
    assert!(!a.is_subset(&b));
    assert!(set(&[1, 64]).is_subset(&a));
}

#[test]
fn worked_example_on_fixed_sets() {
    type Set128 = FixedBitSet<128, 2>;

    let a = Set128::empty().with(1).with(3).with(64).with(65);
    let b = Set128::empty().with(1).with(2).with(64);

    assert_eq!(a.union(&b).to_string(), "{1, 2, 3, 64, 65}");
    assert_eq!(a.intersection(&b).to_string(), "{1, 64}");
    assert_eq!(a.difference(&b).to_string(), "{3, 65}");
    assert_eq!(a.symmetric_difference(&b).to_string(), "{2, 3, 65}");
    assert_eq!(a.count(), 4);
}

#[test]
fn negative_integers_are_never_members() {
    let a = set(&[0, 1, 2]);

    assert!(a.contains(0));
    assert!(!a.contains(-1));
    assert!(!a.contains(-64i64));
    assert!(!BitSet::new().contains(-1));
}

#[test]
fn format_members_is_diagnostic_text() {
    let a = set(&[65, 3, 1, 64]);

    assert_eq!(a.format_members("", ",", ""), "1,3,64,65");
    assert_eq!(a.format_members("BitSet(", ", ", ")"), "BitSet(1, 3, 64, 65)");
    assert_eq!(BitSet::new().format_members("<", ";", ">"), "<>");
}

#[test]
fn for_each_member_visits_in_order() {
    let a = set(&[900, 0, 63, 64, 127]);
    let mut seen = Vec::new();
    a.for_each_member(|x| seen.push(x));

    assert_eq!(seen, vec![0, 63, 64, 127, 900]);
}

#[test]
fn popcount_table_matches_brute_force() {
    for byte in 0..256usize {
        let brute = (0..8).filter(|bit| byte & (1 << bit) != 0).count();
        assert_eq!(BYTE_POPCOUNT[byte] as usize, brute);
    }
    assert_eq!(word_popcount(0xdead_beef_dead_beef), 48);
}

#[test]
fn normalizer_grows_and_shrinks() {
    let grown = updated_words(&[], 2, 1 << 5);
    assert_eq!(grown, vec![0, 0, 1 << 5]);

    let shrunk = updated_words(&grown, 2, 0);
    assert!(shrunk.is_empty());
}
