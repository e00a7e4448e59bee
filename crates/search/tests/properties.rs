//! Property tests for similarity and ranking.

use memeboard_search::{rank, score, similarity, Item};
use proptest::prelude::*;

fn title_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-dA-D ]{0,10}",
        "\\PC{0,12}",
    ]
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(title_strategy(), 0..20).prop_map(|titles| {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Item::new(i.to_string(), title))
            .collect()
    })
}

fn index_of(item: &Item) -> usize {
    item.id.parse().unwrap()
}

proptest! {
    #[test]
    fn similarity_is_reflexive(x in title_strategy()) {
        prop_assert_eq!(similarity(&x, &x), 1.0);
    }

    #[test]
    fn similarity_is_symmetric(a in title_strategy(), b in title_strategy()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn similarity_in_unit_range(a in title_strategy(), b in title_strategy()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn score_in_unit_range(q in title_strategy(), t in title_strategy()) {
        let s = score(&q, &t);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn blank_query_returns_everything_in_order(
        items in corpus_strategy(),
        blank in "[ \t]{0,3}",
        threshold in -1.0f64..2.0,
    ) {
        let results = rank(&items, &blank, threshold);

        prop_assert_eq!(results.len(), items.len());
        for (result, item) in results.iter().zip(&items) {
            prop_assert_eq!(result.item, item);
            prop_assert_eq!(result.similarity_score, 1.0);
        }
    }

    #[test]
    fn nothing_below_threshold(
        items in corpus_strategy(),
        q in "[a-dA-D]{1,4}",
        threshold in 0.0f64..1.0,
    ) {
        for result in rank(&items, &q, threshold) {
            prop_assert!(result.similarity_score >= threshold);
        }
    }

    #[test]
    fn raising_threshold_shrinks_results(
        items in corpus_strategy(),
        q in "[a-dA-D]{1,4}",
        low in 0.0f64..1.0,
        delta in 0.0f64..0.5,
    ) {
        let high = low + delta;
        let loose: Vec<usize> = rank(&items, &q, low).iter().map(|r| index_of(r.item)).collect();
        let strict: Vec<usize> = rank(&items, &q, high).iter().map(|r| index_of(r.item)).collect();

        prop_assert!(strict.iter().all(|i| loose.contains(i)));
    }

    #[test]
    fn sorted_descending_and_stable(items in corpus_strategy(), q in "[a-dA-D]{1,4}") {
        let results = rank(&items, &q, 0.0);

        for pair in results.windows(2) {
            prop_assert!(pair[0].similarity_score >= pair[1].similarity_score);
            if pair[0].similarity_score == pair[1].similarity_score {
                prop_assert!(index_of(pair[0].item) < index_of(pair[1].item));
            }
        }
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(score("chokbar de bz", "Chokbar de BZ"), 1.0);
    assert_eq!(score("grand n", "Le grand n'importe quoi"), 0.85);
    assert_eq!(score("anything", ""), 0.0);

    let fallback = score("helo", "Hello world");
    let expected = (1.0 - 7.0 / 11.0) + (3.0 / 4.0) * 0.1;
    assert!((fallback - expected).abs() < 1e-12);
}

#[test]
fn equal_scores_keep_input_order() {
    // A and B hit the word-start tier (0.90), C the prefix tier (0.95)
    let items = vec![
        Item::new("A", "Le chokbar"),
        Item::new("B", "Gros chokbar"),
        Item::new("C", "Chokbar de BZ"),
    ];

    let order: Vec<&str> = rank(&items, "chok", 0.5)
        .iter()
        .map(|r| r.item.id.as_str())
        .collect();

    assert_eq!(order, vec!["C", "A", "B"]);
}
