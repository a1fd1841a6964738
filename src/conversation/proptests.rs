// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Property-based tests for the conversation cycle

use proptest::prelude::*;

use super::controller::{Conversation, Phase, COMMUNICATION_ERROR_TEXT};
use super::turn::Turn;
use crate::error::CommunicationFailure;

/// An external event hitting the controller
#[derive(Debug, Clone)]
enum Step {
    Type(String),
    Submit,
    Reply(String),
    Fail,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[ a-zA-Z+]{0,12}".prop_map(Step::Type),
        Just(Step::Submit),
        "[a-zA-Z .!]{1,20}".prop_map(Step::Reply),
        Just(Step::Fail),
    ]
}

fn apply(conversation: &mut Conversation, step: Step, in_flight: &mut usize) {
    match step {
        Step::Type(text) => conversation.input_mut().set_buffer(text),
        Step::Submit => {
            if conversation.begin_submit().is_some() {
                *in_flight += 1;
            }
        }
        Step::Reply(text) => {
            if *in_flight > 0 {
                *in_flight -= 1;
            }
            conversation.complete(Ok(text));
        }
        Step::Fail => {
            if *in_flight > 0 {
                *in_flight -= 1;
            }
            conversation.complete(Err(CommunicationFailure::Network("down".to_string())));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Earlier turns are never reordered or mutated.
    #[test]
    fn prop_turns_are_append_only(steps in proptest::collection::vec(arb_step(), 0..40)) {
        let mut conversation = Conversation::new();
        let mut in_flight = 0;
        let mut previous: Vec<Turn> = conversation.turns().to_vec();

        for step in steps {
            apply(&mut conversation, step, &mut in_flight);
            let current = conversation.turns();
            prop_assert!(current.len() >= previous.len());
            prop_assert_eq!(&current[..previous.len()], &previous[..]);
            previous = current.to_vec();
        }
    }

    // At most one request is ever outstanding, and the phase says so.
    #[test]
    fn prop_single_flight(steps in proptest::collection::vec(arb_step(), 0..40)) {
        let mut conversation = Conversation::new();
        let mut in_flight = 0;

        for step in steps {
            apply(&mut conversation, step, &mut in_flight);
            prop_assert!(in_flight <= 1);
            prop_assert_eq!(conversation.is_awaiting_reply(), in_flight == 1);
        }
    }

    // Blank input never changes the turn sequence.
    #[test]
    fn prop_blank_submit_is_noop(blank in "[ \t\n]{0,8}") {
        let mut conversation = Conversation::new();
        conversation.input_mut().set_buffer(blank);
        let before = conversation.turns().to_vec();

        prop_assert!(conversation.begin_submit().is_none());
        prop_assert_eq!(conversation.turns(), &before[..]);
        prop_assert_eq!(conversation.phase(), Phase::Idle);
    }

    // A full cycle always adds exactly two turns and ends idle.
    #[test]
    fn prop_cycle_returns_to_idle(text in "[a-zA-Z]{1,10}", succeed in any::<bool>()) {
        let mut conversation = Conversation::new();
        conversation.input_mut().set_buffer(text.clone());
        let sent = conversation.begin_submit();
        prop_assert_eq!(sent.as_deref(), Some(text.as_str()));

        let outcome = if succeed {
            Ok("reply".to_string())
        } else {
            Err(CommunicationFailure::InvalidResponse("bad".to_string()))
        };
        conversation.complete(outcome);

        prop_assert_eq!(conversation.turns().len(), 3);
        prop_assert_eq!(conversation.phase(), Phase::Idle);
        let last = conversation.turns()[2].text();
        prop_assert_eq!(last == COMMUNICATION_ERROR_TEXT, !succeed);
    }
}
