use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::{HashMap, HashSet};
use pretty_assertions::assert_eq;

use super::*;
use crate::{ListView, Owned, SetView, shared, test_utils};

fn names() -> Vec<String> {
    vec!["Bob".to_string(), "Nancy".to_string(), "Tim".to_string()]
}

#[test]
fn test_list_copy_ignores_later_mutation() {
    test_utils::init_test_logging();
    let source = shared(names());
    let copy = ListCopy::of(&source);
    assert!(!copy.is_live());

    source.borrow_mut().retain(|name| name != "Bob");
    assert_eq!(copy.len(), source.borrow().len() + 1);

    source.borrow_mut().clear();
    assert!(!copy.is_empty());
    assert_eq!(copy.len(), 3);
    for name in names() {
        assert!(copy.contains(&name));
    }
}

#[test]
fn test_set_copy_ignores_later_mutation() {
    let source = shared(names().into_iter().collect::<HashSet<_>>());
    let copy = SetCopy::of(&source);

    source.borrow_mut().clear();
    assert_eq!(copy.len(), 3);
    assert!(copy.contains_all(&names()));
}

#[test]
fn test_index_of_fixed_at_copy_time() {
    let source = shared(vec!['A', 'B', 'C']);
    let view = ListView::over(&source);
    let copy = ListCopy::of(&source);

    source.borrow_mut().insert(0, 'D');
    assert_eq!(view.index_of(&'B'), Some(2));
    assert_eq!(copy.index_of(&'B'), Some(1));
    assert_eq!(*copy.get(0).unwrap(), 'A');
    assert!(copy.get(3).is_err());
}

#[test]
fn test_snapshots_are_independent_of_copy_and_each_other() {
    let copy: ListCopy<String> = names().into_iter().collect();

    let mut first = copy.to_list();
    first.push("Suzy".to_string());
    let second = copy.to_list();

    assert!(!copy.contains_all(&first));
    assert!(!copy.contains(&"Suzy".to_string()));
    assert_eq!(second, names());

    let set_copy: SetCopy<String> = names().into_iter().collect();
    let mut set = set_copy.to_set();
    set.insert("Suzy".to_string());
    assert!(!set_copy.contains_all(&set));
    assert_eq!(set_copy.to_set().len(), 3);
}

#[test]
fn test_set_copy_from_list_view() {
    let source = shared(vec![1, 2, 2, 3]);
    let view = ListView::over(&source);

    let set: SetCopy<i32> = Copied::from_view(&view);
    source.borrow_mut().push(4);

    assert_eq!(set.len(), 3);
    assert!(!set.contains(&4));
}

#[test]
fn test_copy_of_set_view() {
    let source = shared(HashSet::from([1, 2]));
    let view = SetView::over(&source);
    let copy: Copied<Vec<i32>> = Copied::from_view(&view);

    source.borrow_mut().clear();
    let mut items = copy.to_vec();
    items.sort();
    assert_eq!(items, vec![1, 2]);
}

#[test]
fn test_shallow_copy_shares_elements() {
    let row = Rc::new(RefCell::new(vec![1, 2, 3]));
    let matrix = shared(vec![Rc::clone(&row), Rc::new(RefCell::new(vec![4, 5, 6]))]);
    let frozen = ListCopy::of(&matrix);

    matrix.borrow_mut().push(Rc::new(RefCell::new(Vec::new())));
    assert_eq!(frozen.len(), 2);

    frozen.get(0).unwrap().borrow_mut().remove(0);
    assert_eq!(*row.borrow(), vec![2, 3]);
    assert_eq!(*matrix.borrow()[0].borrow(), vec![2, 3]);
}

#[test]
fn test_map_copy_scenario() {
    let source = shared(
        [("Bob", 1), ("Nancy", 2), ("Tim", 3)]
            .into_iter()
            .collect::<HashMap<_, _>>(),
    );
    let view = MapView::over(&source);
    let copy = MapCopy::of(&source);

    source.borrow_mut().remove("Bob");

    assert_eq!(view.len(), 2);
    assert!(!view.contains_key(&"Bob"));
    assert_eq!(copy.len(), 3);
    assert!(copy.contains_key(&"Bob"));
    assert!(copy.contains_value(&1));
    assert_eq!(*copy.get(&"Bob").unwrap(), 1);

    source.borrow_mut().clear();
    assert!(view.is_empty());
    assert!(!copy.is_empty());
    assert!(copy.keys().contains(&"Tim"));
}

#[test]
fn test_map_copy_snapshot_is_independent() {
    let copy: CopiedMap<BTreeMap<&str, i32>> = [("a", 1), ("b", 2)].into_iter().collect();

    let mut map = copy.to_map();
    map.insert("c", 3);

    assert_eq!(copy.len(), 2);
    assert!(!copy.contains_key(&"c"));
    assert_eq!(copy.to_map().len(), 2);
}

#[test]
fn test_clone_and_eq() {
    let copy: ListCopy<i32> = [1, 2, 3].into_iter().collect();
    let other = copy.clone();
    assert_eq!(copy, other);
    assert_ne!(copy, ListCopy::from_store(vec![1, 2]));
    assert_eq!(alloc::format!("{:?}", copy), "Copied([1, 2, 3])");
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_copies_are_send_and_sync() {
    assert_send_sync::<ListCopy<String>>();
    assert_send_sync::<SetCopy<String>>();
    assert_send_sync::<MapCopy<String, i32>>();
    assert_send_sync::<View<Vec<String>, Owned>>();
}

#[test]
fn test_copy_is_read_from_other_threads() {
    let source = shared(names());
    let copy = Arc::new(ListCopy::of(&source));

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let copy = Arc::clone(&copy);
            std::thread::spawn(move || {
                (copy.len(), copy.index_of(&"Nancy".to_string()), copy.to_vec())
            })
        })
        .collect();
    source.borrow_mut().clear();

    for reader in readers {
        let (len, nancy, items) = reader.join().unwrap();
        assert_eq!(len, 3);
        assert_eq!(nancy, Some(1));
        assert_eq!(items, names());
    }
}
