use std::thread;

use json_dotquery::Resolver;
use serde_json::json;

fn fixture() -> Resolver {
    Resolver::from_value(json!({
        "left": {"a": [1, 2, 3], "b": {"deep": "x"}},
        "right": {"a": [4, 5, 6], "b": {"deep": "y"}}
    }))
}

#[test]
fn resolver_handles_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resolver>();
}

#[test]
fn racing_callers_converge_on_one_cached_child() {
    let root = fixture();

    let children: Vec<Resolver> = thread::scope(|s| {
        (0..8)
            .map(|_| {
                let root = root.clone();
                s.spawn(move || root.child("left.b").unwrap())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    // Whichever insertion won the race, every caller holds the same node.
    let winner = root.child("left.b").unwrap();
    for child in &children {
        assert!(child.ptr_eq(&winner));
    }
}

#[test]
fn disjoint_subtrees_resolve_concurrently() {
    let root = fixture();

    thread::scope(|s| {
        for _ in 0..4 {
            let left = root.clone();
            s.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(left.get_string("left.b.deep").unwrap(), "x");
                    assert_eq!(left.get_i64("left.a.[0]").unwrap(), 1);
                }
            });
            let right = root.clone();
            s.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(right.get_string("right.b.deep").unwrap(), "y");
                    assert_eq!(right.get_i64("right.a.[2]").unwrap(), 6);
                }
            });
        }
    });
}

#[test]
fn concurrent_overlapping_paths_stay_referentially_stable() {
    let root = fixture();

    let (via_full, via_steps) = thread::scope(|s| {
        let a = {
            let root = root.clone();
            s.spawn(move || root.child("right.b.deep").unwrap())
        };
        let b = {
            let root = root.clone();
            s.spawn(move || {
                root.child("right")
                    .unwrap()
                    .child("b")
                    .unwrap()
                    .child("deep")
                    .unwrap()
            })
        };
        (a.join().unwrap(), b.join().unwrap())
    });

    assert!(via_full.ptr_eq(&via_steps));
}
