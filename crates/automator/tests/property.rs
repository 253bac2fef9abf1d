use proctor_automator::{AutomationResult, Config, Status};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Mark {
    Failure,
    Error,
}

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Failure), Just(Mark::Error)]
}

proptest! {
    #[test]
    fn first_mark_decides_the_status(marks in proptest::collection::vec(mark(), 0..12)) {
        let mut result = AutomationResult::new(Config::default());
        for m in &marks {
            match m {
                Mark::Failure => { result.failure(); }
                Mark::Error => { result.error(); }
            }
        }

        let expected = match marks.first() {
            None => Status::Success,
            Some(Mark::Failure) => Status::Failure,
            Some(Mark::Error) => Status::Error,
        };
        prop_assert_eq!(result.status(), expected);
        prop_assert_eq!(u8::from(result.is_success()) + u8::from(result.is_failure()) + u8::from(result.is_error()), 1);
    }

    #[test]
    fn last_write_wins_per_key(writes in proptest::collection::vec(("[a-c]", any::<i64>()), 1..20)) {
        let mut result = AutomationResult::new(Config::default());
        for (key, value) in &writes {
            let stored = result.record_data(key, *value).map(Clone::clone);
            prop_assert_eq!(stored.ok(), Some(serde_json::Value::from(*value)));
        }
        for key in ["a", "b", "c"] {
            let last = writes.iter().rev().find(|(k, _)| k == key).map(|(_, v)| serde_json::Value::from(*v));
            prop_assert_eq!(result.data_log().get(key).cloned(), last);
        }
    }
}
