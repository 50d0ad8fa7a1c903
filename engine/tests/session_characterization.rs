// engine/tests/session_characterization.rs
#![forbid(unsafe_code)]

/**
 * Session state-machine characterization tests.
 *
 * Purpose:
 * - Lock the observable behavior of pre-fill, play and insert.
 * - Catch regressions in id allocation and piece-rule semantics.
 *
 * What is tested:
 * - Pre-fill generates ids 1..=C and leaves the queue full.
 * - The reference play/insert scenario end to end.
 * - Rejected inserts never consume an id; ids stay strictly increasing.
 * - Same seed and rule give the same piece stream.
 * - `Bag`: each consecutive group of four pieces holds every kind once.
 * - Id exhaustion at `u32::MAX` ends inserts instead of overflowing.
 */
use piece_queue::{
    FIRST_PIECE_ID, InsertOutcome, Kind, PieceGenerator, PieceRuleKind, PlayOutcome,
    QUEUE_CAPACITY, Session,
};

fn ids(s: &Session) -> Vec<u32> {
    s.queue().iter().map(|p| p.id).collect()
}

fn played_id(o: PlayOutcome) -> u32 {
    match o {
        PlayOutcome::Played(p) => p.id,
        PlayOutcome::Empty => panic!("expected a played piece"),
    }
}

#[test]
fn prefill_fills_queue_with_first_ids() {
    let s = Session::new(1, PieceRuleKind::Uniform);
    assert!(s.queue().is_full());
    assert_eq!(ids(&s), (1..=QUEUE_CAPACITY as u32).collect::<Vec<_>>());
    assert_eq!(s.next_id(), Some(FIRST_PIECE_ID + QUEUE_CAPACITY as u32));
    assert_eq!(s.stats.actions(), 0);
}

#[test]
fn reference_scenario_capacity_five() {
    let mut s = Session::new(20261015, PieceRuleKind::Uniform);
    assert_eq!(ids(&s), vec![1, 2, 3, 4, 5]);

    assert_eq!(played_id(s.play()), 1);
    assert_eq!(ids(&s), vec![2, 3, 4, 5]);
    assert_eq!(s.queue().len(), 4);

    match s.insert() {
        InsertOutcome::Inserted(p) => assert_eq!(p.id, 6),
        InsertOutcome::Full => panic!("insert into non-full queue failed"),
        InsertOutcome::IdsExhausted => panic!("insert into non-full queue failed (ids exhausted)"),
    }
    assert_eq!(ids(&s), vec![2, 3, 4, 5, 6]);
    assert!(s.queue().is_full());

    let before: Vec<_> = s.queue().iter().copied().collect();
    assert_eq!(s.insert(), InsertOutcome::Full);
    assert_eq!(s.queue().iter().copied().collect::<Vec<_>>(), before);

    let drained: Vec<u32> = (0..5).map(|_| played_id(s.play())).collect();
    assert_eq!(drained, vec![2, 3, 4, 5, 6]);
    assert!(s.queue().is_empty());

    assert_eq!(s.play(), PlayOutcome::Empty);
    assert!(s.render().contains("[empty]"));

    assert_eq!(s.stats.plays, 6);
    assert_eq!(s.stats.empty_plays, 1);
    assert_eq!(s.stats.inserts, 1);
    assert_eq!(s.stats.rejected_inserts, 1);
}

#[test]
fn rejected_insert_does_not_consume_an_id() {
    let mut s = Session::new(3, PieceRuleKind::Bag);
    let next = s.next_id();
    assert_eq!(s.insert(), InsertOutcome::Full);
    assert_eq!(s.insert(), InsertOutcome::Full);
    assert_eq!(s.next_id(), next);

    s.play();
    match s.insert() {
        InsertOutcome::Inserted(p) => assert_eq!(Some(p.id), next),
        InsertOutcome::Full => panic!("insert after play failed"),
        InsertOutcome::IdsExhausted => panic!("insert after play failed (ids exhausted)"),
    }
}

#[test]
fn generated_ids_are_strictly_increasing_across_session() {
    let mut s = Session::new(99, PieceRuleKind::Uniform);
    let mut seen: Vec<u32> = ids(&s);

    for i in 0..200usize {
        if i % 3 == 0 {
            s.play();
        } else if let InsertOutcome::Inserted(p) = s.insert() {
            seen.push(p.id);
        }
    }

    assert_eq!(seen.first().copied(), Some(FIRST_PIECE_ID));
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert!(s.queue().len() <= QUEUE_CAPACITY);
}

#[test]
fn same_seed_and_rule_give_same_pieces() {
    for rule in [PieceRuleKind::Uniform, PieceRuleKind::Bag] {
        let mut a = Session::new(1337, rule);
        let mut b = Session::new(1337, rule);
        for _ in 0..50 {
            assert_eq!(a.play(), b.play());
            assert_eq!(a.insert(), b.insert());
        }
        assert_eq!(a.render(), b.render());
    }
}

#[test]
fn generator_sets_given_id_and_valid_kind() {
    let mut g = PieceGenerator::new(5, PieceRuleKind::Uniform);
    for id in [1u32, 2, 40, u32::MAX] {
        let p = g.generate(id);
        assert_eq!(p.id, id);
        assert!(Kind::all().contains(&p.kind));
    }
}

#[test]
fn uniform_rule_eventually_emits_every_kind() {
    let mut g = PieceGenerator::new(2024, PieceRuleKind::Uniform);
    let mut counts = [0u32; 4];
    for id in 1..=400u32 {
        let kind = g.generate(id).kind;
        for (slot, k) in Kind::all().iter().enumerate() {
            if *k == kind {
                counts[slot] += 1;
            }
        }
    }
    assert!(counts.iter().all(|&c| c > 0), "counts={counts:?}");
}

#[test]
fn bag_rule_deals_each_kind_once_per_bag() {
    let mut g = PieceGenerator::new(77, PieceRuleKind::Bag);
    for bag in 0..25u32 {
        let kinds: Vec<Kind> = (0..4).map(|i| g.generate(bag * 4 + i + 1).kind).collect();
        for k in Kind::all() {
            assert_eq!(kinds.iter().filter(|&d| d == k).count(), 1, "bag={kinds:?}");
        }
    }
}

#[test]
fn piece_rule_names_from_cli() {
    assert_eq!(PieceRuleKind::from_cli("bag"), PieceRuleKind::Bag);
    assert_eq!(PieceRuleKind::from_cli("BAG4"), PieceRuleKind::Bag);
    assert_eq!(PieceRuleKind::from_cli("uniform"), PieceRuleKind::Uniform);
    assert_eq!(PieceRuleKind::from_cli("whatever"), PieceRuleKind::Uniform);
}

#[test]
fn empty_session_plays_nothing_and_inserts_from_first_id() {
    let mut s = Session::new_empty(11, PieceRuleKind::Uniform);
    assert!(s.queue().is_empty());
    assert_eq!(s.play(), PlayOutcome::Empty);
    assert_eq!(s.next_id(), Some(FIRST_PIECE_ID));

    match s.insert() {
        InsertOutcome::Inserted(p) => assert_eq!(p.id, FIRST_PIECE_ID),
        InsertOutcome::Full => panic!("insert into empty queue failed"),
        InsertOutcome::IdsExhausted => panic!("insert into empty queue failed (ids exhausted)"),
    }
    assert_eq!(ids(&s), vec![FIRST_PIECE_ID]);
    assert_eq!(s.stats.empty_plays, 1);
}

#[test]
fn id_counter_stops_at_u32_max_without_overflow() {
    let mut s = Session::new_empty_with_first_id(8, PieceRuleKind::Uniform, u32::MAX - 1);

    assert!(matches!(s.insert(), InsertOutcome::Inserted(p) if p.id == u32::MAX - 1));
    assert!(matches!(s.insert(), InsertOutcome::Inserted(p) if p.id == u32::MAX));
    assert_eq!(s.next_id(), None);

    assert_eq!(s.insert(), InsertOutcome::IdsExhausted);
    assert_eq!(s.insert(), InsertOutcome::IdsExhausted);
    assert_eq!(ids(&s), vec![u32::MAX - 1, u32::MAX]);
    assert_eq!(s.stats.inserts, 2);
    assert_eq!(s.stats.rejected_inserts, 2);

    // Existing pieces still play out in order.
    assert_eq!(played_id(s.play()), u32::MAX - 1);
    assert_eq!(played_id(s.play()), u32::MAX);
    assert_eq!(s.play(), PlayOutcome::Empty);
}

#[test]
fn last_id_is_handed_out_once() {
    let mut s = Session::new_empty_with_first_id(8, PieceRuleKind::Bag, u32::MAX);
    assert!(matches!(s.insert(), InsertOutcome::Inserted(p) if p.id == u32::MAX));
    assert_eq!(s.insert(), InsertOutcome::IdsExhausted);
    assert_eq!(s.queue().len(), 1);
}
