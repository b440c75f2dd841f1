use super::*;

#[test]
fn test_sequence_integrity() {
    for ring in Ring::ALL {
        assert_eq!(ring.len() as i64 * ring.wedge_angle(), FULL_TURN_DEGREES, "{ring}");
    }
    assert_eq!(Ring::Outer.wedge_angle(), 6);
    assert_eq!(Ring::Middle.wedge_angle(), 12);
    assert_eq!(Ring::Inner.wedge_angle(), 12);
}

#[test]
fn test_wedges_tile_the_circle() {
    for ring in Ring::ALL {
        let wedges: Vec<Wedge> = ring.wedges().collect();
        assert_eq!(wedges.len(), ring.len());
        assert_eq!(wedges[0].start_angle, 0);
        assert_eq!(wedges.last().unwrap().end_angle, FULL_TURN_DEGREES);
        for pair in wedges.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
    }
    assert!(Ring::Outer.wedge(60).is_none());
}

#[test]
fn test_label_vocabulary_per_ring() {
    let outer = Ring::Outer.sequence();
    assert_eq!(outer[0], BONUS_LABEL);
    assert!(outer.iter().all(|label| BetLabel::from_wedge(label).is_some()));
    assert_eq!(outer.iter().filter(|label| **label == "Logo1").count(), 2);
    assert_eq!(outer.iter().filter(|label| **label == "Logo2").count(), 1);

    let middle = Ring::Middle.sequence();
    assert_eq!(middle.iter().filter(|label| **label == BONUS_LABEL).count(), 1);
    assert!(middle
        .iter()
        .filter(|label| **label != BONUS_LABEL)
        .all(|label| label.parse::<u64>().is_ok()));

    // The inner ring is the hard stop of the cascade.
    assert!(Ring::Inner.sequence().iter().all(|label| label.parse::<u64>().is_ok()));
}

#[test]
fn test_ring_cascade_order() {
    assert_eq!(Ring::Outer.next(), Some(Ring::Middle));
    assert_eq!(Ring::Middle.next(), Some(Ring::Inner));
    assert_eq!(Ring::Inner.next(), None);
}

#[test]
fn test_bet_label_parse_and_display() {
    for label in BetLabel::ALL {
        assert_eq!(label.as_str().parse::<BetLabel>(), Ok(label));
        assert_eq!(label.to_string(), label.as_str());
    }
    assert_eq!(
        "bonus".parse::<BetLabel>(),
        Err(ParseLabelError("bonus".to_string()))
    );
    assert_eq!(BetLabel::from_wedge("30"), None);
}

#[test]
fn test_bet_label_multipliers() {
    assert_eq!(BetLabel::One.multiplier(), Some(1));
    assert_eq!(BetLabel::Ten.multiplier(), Some(10));
    assert_eq!(BetLabel::Logo1.multiplier(), Some(25));
    assert_eq!(BetLabel::Logo2.multiplier(), Some(50));
    assert_eq!(BetLabel::Bonus.multiplier(), None);
}

#[test]
fn test_bet_book_zeroed_and_totals() {
    let mut book = BetBook::zeroed();
    assert!(book.is_empty());
    assert_eq!(book, BetBook::default());

    book.add(BetLabel::Two, 10);
    book.add(BetLabel::Two, 5);
    book.add(BetLabel::Bonus, 25);
    assert_eq!(book.get(BetLabel::Two), 15);
    assert_eq!(book.get(BetLabel::One), 0);
    assert_eq!(book.total(), 40);

    let collected: BetBook = book.iter().collect();
    assert_eq!(collected, book);
}

#[test]
fn test_bet_book_serializes_as_label_map() {
    let book: BetBook = [(BetLabel::One, 10), (BetLabel::Bonus, 5)].into_iter().collect();
    let json = serde_json::to_value(book).unwrap();
    assert_eq!(json["1"], 10);
    assert_eq!(json["BONUS"], 5);
    assert_eq!(json["Logo2"], 0);
    assert_eq!(json.as_object().unwrap().len(), 7);
}

#[test]
fn test_cascade_phase_accessors() {
    assert_eq!(CascadePhase::Idle.current_ring(), None);
    assert_eq!(CascadePhase::Spinning(Ring::Middle).spinning_ring(), Some(Ring::Middle));
    let settled = CascadePhase::Settled {
        ring: Ring::Outer,
        next: Some(Ring::Middle),
    };
    assert_eq!(settled.spinning_ring(), None);
    assert_eq!(settled.current_ring(), Some(Ring::Outer));
    assert_eq!(settled.as_str(), "settled_outer");
    assert_eq!(CascadePhase::Spinning(Ring::Outer).as_str(), "spinning_outer");
}

#[test]
fn test_engine_error_codes() {
    let err: EngineError = LedgerError::InsufficientFunds {
        requested: 150,
        balance: 100,
    }
    .into();
    assert_eq!(err.code(), "INSUFFICIENT_FUNDS");
    assert_eq!(err.to_string(), "insufficient funds (requested=150, balance=100)");

    let err: EngineError = SpinRejected::AlreadySpinning(Ring::Outer).into();
    assert_eq!(err.code(), "ALREADY_SPINNING");
    assert_eq!(err.to_string(), "Outer ring is already spinning");

    let err: EngineError = SpinRejected::CascadePending(Ring::Middle).into();
    assert_eq!(err.code(), "ROUND_IN_PROGRESS");
    assert_eq!(EngineError::BettingClosed.code(), "BETTING_CLOSED");
}

#[test]
fn test_round_event_serialization() {
    let event = RoundEvent::WedgeResolved {
        ring: Ring::Middle,
        index: 3,
        label: "60".to_string(),
        winnings: 305,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["event"], "wedge_resolved");
    assert_eq!(json["ring"], "Middle");
    assert_eq!(json["winnings"], 305);

    let json = serde_json::to_value(RoundEvent::Reset).unwrap();
    assert_eq!(json["event"], "reset");
}
