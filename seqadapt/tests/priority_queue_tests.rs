use seqadapt::PriorityQueue;

#[test]
fn test_pops_in_descending_order() {
    let mut queue = PriorityQueue::from_values([4, 1, 7, 3, 9, 2, 8]).unwrap();
    let mut popped = Vec::new();

    while let Some(value) = queue.try_pop() {
        popped.push(value);
    }

    assert_eq!(popped, vec![9, 8, 7, 4, 3, 2, 1]);
}

#[test]
fn test_custom_less_makes_min_heap() {
    let mut queue = PriorityQueue::with_less(|a: &i32, b: &i32| a > b).unwrap();

    for value in [5, -2, 10, 0] {
        queue.push(value).unwrap();
    }

    assert_eq!(*queue.top(), -2);
    assert_eq!(queue.pop(), -2);
    assert_eq!(queue.pop(), 0);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_priority_by_field() {
    #[derive(Debug, PartialEq)]
    struct Job {
        name: &'static str,
        priority: u8,
    }

    let mut queue = PriorityQueue::with_less(|a: &Job, b: &Job| a.priority < b.priority).unwrap();
    queue.push(Job { name: "low", priority: 1 }).unwrap();
    queue.push(Job { name: "high", priority: 9 }).unwrap();
    queue.push(Job { name: "mid", priority: 5 }).unwrap();

    assert_eq!(queue.pop().name, "high");
    assert_eq!(queue.pop().name, "mid");
    assert_eq!(queue.pop().name, "low");
}

#[test]
fn test_duplicates() {
    let mut queue = PriorityQueue::from_values([3, 3, 1, 3]).unwrap();

    assert_eq!(queue.pop(), 3);
    assert_eq!(queue.pop(), 3);
    assert_eq!(queue.pop(), 3);
    assert_eq!(queue.pop(), 1);
    assert!(queue.is_empty());
}

#[test]
fn test_capacity_follows_array_policy() {
    let mut queue = PriorityQueue::from_values(0..9).unwrap();
    assert_eq!(queue.capacity(), 16);

    while queue.len() > 4 {
        queue.pop();
    }
    assert_eq!(queue.capacity(), 8);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.try_top(), None);
}

#[test]
fn test_swap() {
    let mut max_queue = PriorityQueue::from_values([1, 5, 3]).unwrap();
    let mut min_queue = PriorityQueue::with_less(|a: &i32, b: &i32| a > b).unwrap();
    min_queue.push(10).unwrap();
    min_queue.push(20).unwrap();

    max_queue.swap(&mut min_queue);

    // The ordering travels with the contents.
    assert_eq!(max_queue.pop(), 10);
    assert_eq!(min_queue.pop(), 5);
    max_queue.push(1).unwrap();
    assert_eq!(max_queue.pop(), 1);
}

#[test]
#[should_panic(expected = "Cannot pop from empty priority queue")]
fn test_pop_on_empty() {
    let mut queue: PriorityQueue<u8> = PriorityQueue::new().unwrap();
    queue.pop();
}

#[test]
#[should_panic(expected = "top() called on empty priority queue")]
fn test_top_on_empty() {
    let queue: PriorityQueue<u8> = PriorityQueue::new().unwrap();
    let _ = queue.top();
}
