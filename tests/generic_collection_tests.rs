//! Generic tests for every Collection implementation
//!
//! These helpers work with any collection that can be built from an iterator
//! of elements, and check the shared `len`/`is_empty`/`contains` contract.

use classic_adts::binary_heap::BinaryMinHeap;
use classic_adts::bst::BinarySearchTree;
use classic_adts::doubly_linked_list::DoublyLinkedList;
use classic_adts::linked_list::LinkedList;
use classic_adts::queue::Queue;
use classic_adts::stack::Stack;
use classic_adts::{Collection, Element};

/// Test that an empty collection behaves correctly
fn test_empty_collection<C: Collection + FromIterator<Element>>() {
    let c = C::from_iter(std::iter::empty());
    assert!(c.is_empty());
    assert_eq!(c.len(), 0);
    assert!(!c.contains(0));
    assert!(!c.contains(42));
}

/// Test that every inserted value is found and nothing else is
fn test_contains_inserted<C: Collection + FromIterator<Element>>() {
    let c: C = [2, 4, 1, 3].into_iter().collect();
    assert_eq!(c.len(), 4);
    assert!(!c.is_empty());
    for v in 1..=4 {
        assert!(c.contains(v), "value {} should be present", v);
    }
    assert!(!c.contains(0));
    assert!(!c.contains(5));
}

/// Test that duplicates are counted individually
fn test_duplicates_counted<C: Collection + FromIterator<Element>>() {
    let c: C = [7, 7, 7, 1].into_iter().collect();
    assert_eq!(c.len(), 4);
    assert!(c.contains(7));
}

/// Test extreme values of the element type
fn test_extreme_values<C: Collection + FromIterator<Element>>() {
    let c: C = [Element::MAX, Element::MIN, 0].into_iter().collect();
    assert!(c.contains(Element::MAX));
    assert!(c.contains(Element::MIN));
    assert!(c.contains(0));
    assert!(!c.contains(1));
}

/// Works through a `dyn Collection` as well
fn total_len(collections: &[&dyn Collection]) -> usize {
    collections.iter().map(|c| c.len()).sum()
}

macro_rules! collection_tests {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn test_empty() {
                    test_empty_collection::<$ty>();
                }

                #[test]
                fn test_contains() {
                    test_contains_inserted::<$ty>();
                }

                #[test]
                fn test_duplicates() {
                    test_duplicates_counted::<$ty>();
                }

                #[test]
                fn test_extremes() {
                    test_extreme_values::<$ty>();
                }
            }
        )*
    };
}

collection_tests! {
    binary_heap => BinaryMinHeap,
    stack => Stack,
    linked_list => LinkedList,
    doubly_linked_list => DoublyLinkedList,
    queue => Queue,
}

#[test]
fn test_bst_collection_contract() {
    let mut tree = BinarySearchTree::new();
    assert!(Collection::is_empty(&tree));
    for v in [2, 4, 1, 3] {
        tree.insert(v).unwrap();
    }
    assert_eq!(Collection::len(&tree), 4);
    assert!(Collection::contains(&tree, 3));
    assert!(!Collection::contains(&tree, 5));
}

#[test]
fn test_dyn_collections() {
    let heap: BinaryMinHeap = (0..3).collect();
    let stack: Stack = (0..4).collect();
    let queue: Queue = (0..5).collect();
    assert_eq!(total_len(&[&heap, &stack, &queue]), 12);
}
