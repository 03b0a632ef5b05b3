//! Kani verification proofs for the binary min-heap
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use classic_adts::binary_heap::BinaryMinHeap;
#[cfg(kani)]
use classic_adts::CollectionError;

/// Proof that push always increments the length and keeps the heap property
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_keeps_heap_property() {
    let mut heap = BinaryMinHeap::new();
    for _ in 0..4 {
        let len = heap.len();
        heap.push(kani::any());
        assert!(heap.len() == len + 1);
        assert!(heap.verify_heap_property());
    }
}

/// Proof that pop returns the minimum of everything pushed
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_minimum() {
    let a: i64 = kani::any();
    let b: i64 = kani::any();
    let c: i64 = kani::any();

    let mut heap = BinaryMinHeap::new();
    heap.push(a);
    heap.push(b);
    heap.push(c);

    let min = heap.pop().unwrap();
    assert!(min <= a && min <= b && min <= c);
    assert!(min == a || min == b || min == c);
    assert!(heap.len() == 2);
    assert!(heap.verify_heap_property());
}

/// Proof that removing any present value keeps the heap property
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_remove_first_occurrence_keeps_heap_property() {
    let values: [i64; 5] = kani::any();
    let target: usize = kani::any();
    kani::assume(target < values.len());

    let mut heap = BinaryMinHeap::new();
    for v in values {
        heap.push(v);
    }

    assert!(heap.remove_first_occurrence(values[target]).is_ok());
    assert!(heap.len() == 4);
    assert!(heap.verify_heap_property());
}

/// Proof that failed operations on an empty heap report errors
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_errors() {
    let mut heap = BinaryMinHeap::new();
    let v: i64 = kani::any();
    assert!(heap.peek() == Err(CollectionError::EmptyCollection));
    assert!(heap.pop() == Err(CollectionError::EmptyCollection));
    assert!(heap.remove_first_occurrence(v) == Err(CollectionError::NotFound(v)));
}
