//! Property-based tests for the store engine.
//!
//! These tests use proptest to drive random operation sequences against a
//! store and a plain reference model, checking they never diverge.

use hindsight::action_enum;
use hindsight::core::Draft;
use hindsight::store::{HandlerError, ListenerFilter, Store, StoreError};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct Counter {
    count: i64,
    log: Vec<i64>,
}

action_enum! {
    enum CounterAction {
        Add => "add",
        Reject => "reject",
        Unhandled => "unhandled",
    }
}

#[derive(Clone, Debug)]
enum Op {
    Add(i64),
    Reject,
    Unhandled,
    Undo,
    Redo,
}

fn store() -> Store<Counter, CounterAction, i64> {
    Store::builder()
        .initial(Counter {
            count: 0,
            log: Vec::new(),
        })
        .on(CounterAction::Add, |draft: &mut Draft<Counter>, by: &i64| {
            draft.count += by;
            draft.log.push(*by);
        })
        .try_on(CounterAction::Reject, |draft: &mut Draft<Counter>, _: &i64| {
            draft.count = i64::MIN;
            Err(HandlerError::new("rejected"))
        })
        .build()
        .unwrap()
}

/// Reference model: the obvious three-slot implementation.
#[derive(Clone, Debug, PartialEq)]
struct Model {
    current: Counter,
    past: Vec<Counter>,
    future: Vec<Counter>,
}

impl Model {
    fn new() -> Self {
        Self {
            current: Counter {
                count: 0,
                log: Vec::new(),
            },
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    fn apply(&mut self, op: &Op) {
        match op {
            Op::Add(by) => {
                let mut next = self.current.clone();
                next.count += by;
                next.log.push(*by);
                self.past.push(std::mem::replace(&mut self.current, next));
                self.future.clear();
            }
            Op::Reject | Op::Unhandled => {}
            Op::Undo => {
                if let Some(previous) = self.past.pop() {
                    self.future
                        .insert(0, std::mem::replace(&mut self.current, previous));
                }
            }
            Op::Redo => {
                if !self.future.is_empty() {
                    let next = self.future.remove(0);
                    self.past.push(std::mem::replace(&mut self.current, next));
                }
            }
        }
    }
}

fn run(store: &mut Store<Counter, CounterAction, i64>, op: &Op) -> Result<bool, StoreError> {
    match op {
        Op::Add(by) => store.dispatch(CounterAction::Add, *by).map(|_| true),
        Op::Reject => store.dispatch(CounterAction::Reject, 0).map(|_| true),
        Op::Unhandled => store.dispatch(CounterAction::Unhandled, 0).map(|_| true),
        Op::Undo => store.undo(),
        Op::Redo => store.redo(),
    }
}

prop_compose! {
    fn arbitrary_op()(variant in 0..5u8, by in -10i64..10) -> Op {
        match variant {
            0 => Op::Add(by),
            1 => Op::Reject,
            2 => Op::Unhandled,
            3 => Op::Undo,
            _ => Op::Redo,
        }
    }
}

proptest! {
    #[test]
    fn store_matches_reference_model(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut store = store();
        let mut model = Model::new();

        for op in &ops {
            let _ = run(&mut store, op);
            model.apply(op);

            prop_assert_eq!(store.get_state(), model.current.clone());
            prop_assert_eq!(store.history().past(), model.past.clone());
            prop_assert_eq!(store.history().future(), model.future.clone());
        }
    }

    #[test]
    fn dispatch_always_clears_future(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        by in -10i64..10,
    ) {
        let mut store = store();
        for op in &ops {
            let _ = run(&mut store, op);
        }

        store.dispatch(CounterAction::Add, by).unwrap();
        prop_assert!(store.history().future().is_empty());
    }

    #[test]
    fn failed_dispatch_changes_nothing(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut store = store();
        for op in &ops {
            let _ = run(&mut store, op);
        }

        let state = store.get_state();
        let past = store.history().past();
        let future = store.history().future();

        prop_assert!(store.dispatch(CounterAction::Unhandled, 1).is_err());
        prop_assert!(store.dispatch(CounterAction::Reject, 1).is_err());
        prop_assert!(store.dispatch_named("missing", 1).is_err());

        prop_assert_eq!(store.get_state(), state);
        prop_assert_eq!(store.history().past(), past);
        prop_assert_eq!(store.history().future(), future);
    }

    #[test]
    fn undo_then_redo_round_trips(ops in prop::collection::vec(arbitrary_op(), 1..30)) {
        let mut store = store();
        for op in &ops {
            let _ = run(&mut store, op);
        }

        let state = store.get_state();
        let past_len = store.history().past_len();
        let future_len = store.history().future_len();

        if store.undo().unwrap() {
            prop_assert!(store.redo().unwrap());
            prop_assert_eq!(store.get_state(), state);
            prop_assert_eq!(store.history().past_len(), past_len);
            prop_assert_eq!(store.history().future_len(), future_len);
        } else {
            prop_assert_eq!(past_len, 0);
            prop_assert_eq!(store.get_state(), state);
        }
    }

    #[test]
    fn returned_copies_never_alias_state(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let mut store = store();
        for op in &ops {
            let _ = run(&mut store, op);
        }

        let before = store.get_state();
        let past_before = store.history().past();

        let mut copy = store.get_state();
        copy.count += 1000;
        copy.log.clear();
        let mut past = store.history().past();
        for entry in &mut past {
            entry.count += 1000;
        }
        past.clear();

        prop_assert_eq!(store.get_state(), before);
        prop_assert_eq!(store.history().past(), past_before);
    }

    #[test]
    fn action_listener_only_hears_its_action(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut store = store();
        let heard = Rc::new(RefCell::new(0usize));
        let all = Rc::new(RefCell::new(0usize));

        let h = Rc::clone(&heard);
        store.subscribe(ListenerFilter::Action(CounterAction::Add), move |_, ctx| {
            assert_eq!(ctx.method_name(), Some("add"));
            *h.borrow_mut() += 1;
        });
        let a = Rc::clone(&all);
        store.subscribe(ListenerFilter::All, move |_, _| *a.borrow_mut() += 1);

        let mut expected_adds = 0;
        let mut expected_all = 0;
        for op in &ops {
            if let Ok(true) = run(&mut store, op) {
                expected_all += 1;
                if matches!(op, Op::Add(_)) {
                    expected_adds += 1;
                }
            }
        }

        prop_assert_eq!(*heard.borrow(), expected_adds);
        prop_assert_eq!(*all.borrow(), expected_all);
    }
}
