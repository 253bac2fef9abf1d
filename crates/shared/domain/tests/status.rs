use proctor_domain::Status;
use proptest::prelude::*;

fn status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Success), Just(Status::Failure), Just(Status::Error)]
}

#[test]
fn default_is_success() {
    assert_eq!(Status::default(), Status::Success);
    assert!(!Status::default().is_terminal());
}

#[test]
fn first_terminal_request_wins() {
    let failed_first = Status::Success.transition(Status::Failure).transition(Status::Error);
    assert_eq!(failed_first, Status::Failure);

    let errored_first = Status::Success.transition(Status::Error).transition(Status::Failure);
    assert_eq!(errored_first, Status::Error);
}

#[test]
fn displays_upper_case() {
    assert_eq!(Status::Failure.to_string(), "FAILURE");
    assert_eq!(serde_json::to_string(&Status::Error).ok().as_deref(), Some("\"ERROR\""));
}

proptest! {
    #[test]
    fn final_state_is_first_terminal_request(requests in proptest::collection::vec(status(), 0..16)) {
        let end = requests.iter().fold(Status::Success, |s, r| s.transition(*r));
        let expected = requests.iter().copied().find(|r| r.is_terminal()).unwrap_or(Status::Success);
        prop_assert_eq!(end, expected);
    }
}
