use proctor_kernel::new_run_id;

#[test]
fn generates_hyphenated_uuid() {
    let id = new_run_id();
    let text = id.as_str();
    assert_eq!(text.len(), 36);
    assert_eq!(text.matches('-').count(), 4);
    assert!(text.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
}

#[test]
fn consecutive_ids_differ() {
    assert_ne!(new_run_id(), new_run_id());
}
