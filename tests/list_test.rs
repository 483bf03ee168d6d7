use sll::{List, ListError, Node, push_front, status_code};

#[test]
fn test_push_reverses_insertion_order() {
    let values = [3, 1, 2, -5, 0];
    let mut list = List::new();
    for v in values {
        assert_eq!(push_front(Some(&mut list), Some(Node::new(v))), Ok(()));
    }

    let got: Vec<i32> = list.iter().collect();
    let want: Vec<i32> = values.iter().rev().copied().collect();
    assert_eq!(got, want);
    assert_eq!(list.len(), values.len());
}

#[test]
fn test_failed_push_reports_status() {
    let mut list = List::new();

    let rc = status_code(&push_front(None, Some(Node::new(10))));
    assert_eq!(rc, -1);

    let result = push_front(Some(&mut list), None);
    assert_eq!(result, Err(ListError::NullNode));
    assert_eq!(status_code(&result), -1);
    assert!(list.is_empty());
}
