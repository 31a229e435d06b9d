//! End-to-end related-terms queries over small WordNet-style fixtures.

use lexnet::prelude::*;

/// 16-synset fixture shaped like the small event/change dataset: the synsets
/// containing "adjustment" reach alteration/modification and the event
/// subtree, while "change" sits above them.
fn event_engine() -> QueryEngine {
    let lexicon = build_lexicon([
        "0,event,something that happens",
        "1,happening occurrence occurrent natural_event,an event that happens",
        "2,act deed human_action human_activity,something that people do",
        "3,adjustment,the act of adjusting",
        "4,alteration modification,the act of making something different",
        "5,change,the action of changing something",
        "6,action,something done",
        "7,variation,an activity that varies",
        "8,motion movement move,the act of changing location",
        "9,locomotion travel,self-propelled movement",
        "10,run running,the act of running",
        "11,dash sprint,a quick run",
        "12,jump parachuting,descent with a parachute",
        "13,leap saltation,a light springing movement",
        "14,jumping,the act of jumping",
        "15,stay,continuing in a place",
    ])
    .unwrap();
    let (graph, report) = build_graph([
        "5,3,4", // change -> adjustment, alteration/modification
        "3,4,0", // adjustment -> alteration/modification, event
        "0,1",   // event -> happening/occurrence/occurrent/natural_event
        "2,6",   // act -> action
        "6,7",   // action -> variation
        "8,9,10", "10,11", "12,13,14",
    ])
    .unwrap();
    assert!(report.warnings.is_empty());
    let frequency = build_frequency_store(
        [
            "event\t2005\t1000",
            "adjustment\t2005\t500",
            "occurrence\t2005\t500",
            "modification\t2005\t100",
            // Recorded, but outside the 2000-2020 query window.
            "happening\t1950\t700",
        ],
        ["1950,50000", "2005,100000"],
    )
    .unwrap();
    QueryEngine::new(graph, lexicon, frequency)
}

/// 11-synset fixture shaped like the demotion/actifed dataset.
fn drug_engine() -> QueryEngine {
    let lexicon = build_lexicon([
        "0,action,something done",
        "1,change,the act of changing",
        "2,demotion,the act of lowering in rank",
        "3,actifed,trade name for a drug",
        "4,antihistamine,a medicine that counteracts histamine",
        "5,nasal_decongestant,a decongestant for the nose",
        "6,cart,a heavy open wagon",
        "7,wheel,a circular frame",
        "8,machine,a device",
        "9,device,an instrumentality",
        "10,instrumentality,an artifact",
    ])
    .unwrap();
    let (graph, _) = build_graph(["2,1", "1,0", "3,4,5", "8,9", "9,10"]).unwrap();
    let frequency = build_frequency_store(Vec::<&str>::new(), Vec::<&str>::new()).unwrap();
    QueryEngine::new(graph, lexicon, frequency)
}

#[test]
fn adjustment_closure_matches_expected_output() {
    let engine = event_engine();
    let query = RelatedTermsQuery::new(["adjustment"]).with_window(2000, 2020);
    assert_eq!(
        engine.handle(&query),
        "[adjustment, alteration, event, happening, modification, natural_event, \
         occurrence, occurrent]"
    );
}

#[test]
fn demotion_and_actifed_closures() {
    let engine = drug_engine();

    let query = RelatedTermsQuery::new(["demotion"]).with_window(2000, 2020);
    assert_eq!(engine.handle(&query), "[action, change, demotion]");

    let query = RelatedTermsQuery::new(["actifed"]).with_window(2000, 2020);
    assert_eq!(
        engine.handle(&query),
        "[actifed, antihistamine, nasal_decongestant]"
    );
}

#[test]
fn unknown_words_yield_empty_result() {
    let engine = drug_engine();
    let query = RelatedTermsQuery::new(["???", "What'sThis"]).with_window(2000, 2020);
    assert_eq!(engine.handle(&query), "[]");

    // One known and one unknown word also collapse to empty.
    let query = RelatedTermsQuery::new(["demotion", "???"]);
    assert_eq!(engine.handle(&query), "[]");
}

#[test]
fn empty_word_list_yields_empty_result() {
    let engine = event_engine();
    assert_eq!(engine.handle(&RelatedTermsQuery::default()), "[]");
}

#[test]
fn intersection_is_order_independent() {
    let engine = event_engine();

    let forward = engine.handle(&RelatedTermsQuery::new(["change", "event"]));
    let backward = engine.handle(&RelatedTermsQuery::new(["event", "change"]));

    assert_eq!(
        forward,
        "[event, happening, natural_event, occurrence, occurrent]"
    );
    assert_eq!(forward, backward);
}

#[test]
fn single_word_query_equals_its_related_set() {
    let engine = event_engine();

    let mut expected: Vec<String> = engine.related_terms("adjustment").into_iter().collect();
    expected.sort_unstable();

    let response = engine.execute(&RelatedTermsQuery::new(["adjustment"]));
    assert_eq!(response.terms(), expected.as_slice());
}

#[test]
fn top_k_ranks_by_count_with_lexical_tie_break() {
    let engine = event_engine();

    // event=1000, adjustment=occurrence=500 (tie, lexical order),
    // modification=100; everything else has no count in the window.
    let query = RelatedTermsQuery::new(["adjustment"])
        .with_window(2000, 2020)
        .with_top_k(3);
    assert_eq!(engine.handle(&query), "[event, adjustment, occurrence]");
}

#[test]
fn top_k_skips_zero_count_entries() {
    let engine = event_engine();

    // "happening" has counts only outside the window, so it is skipped along
    // with the never-recorded terms even though k is large.
    let query = RelatedTermsQuery::new(["adjustment"])
        .with_window(2000, 2020)
        .with_top_k(10);
    assert_eq!(
        engine.handle(&query),
        "[event, adjustment, occurrence, modification]"
    );
}

#[test]
fn reversed_window_with_top_k_yields_empty() {
    let engine = event_engine();
    let query = RelatedTermsQuery::new(["adjustment"])
        .with_window(2020, 2000)
        .with_top_k(5);
    assert_eq!(engine.handle(&query), "[]");
}

#[test]
fn reversed_window_without_top_k_ignores_frequencies() {
    let engine = drug_engine();
    let query = RelatedTermsQuery::new(["demotion"]).with_window(2020, 2000);
    // k == 0 never consults the frequency store.
    assert_eq!(engine.handle(&query), "[action, change, demotion]");
}
