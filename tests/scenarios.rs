use fixedring::{Insertion, RingBuffer, State};

fn populated() -> RingBuffer<i32> {
    let mut buf = RingBuffer::with_capacity(10);
    buf.populate_all();
    buf
}

fn assert_ring(buf: &RingBuffer<i32>, raw: [i32; 10], front: usize, back: usize, len: usize) {
    assert_eq!(buf.as_raw(), &raw);
    assert_eq!(buf.front_index(), front, "front index");
    assert_eq!(buf.back_index(), back, "back index");
    assert_eq!(buf.len(), len, "len");
}

#[test]
fn population_ten() {
    let buf = populated();
    assert_ring(&buf, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 0, 0, 10);
    assert_eq!(buf.state(), State::Full);
}

#[test]
fn wrap_one() {
    let mut buf = populated();
    assert_eq!(buf.insert(11), Insertion::Evicted(1));
    assert_ring(&buf, [11, 2, 3, 4, 5, 6, 7, 8, 9, 10], 1, 1, 10);
}

#[test]
fn wrap_two() {
    let mut buf = populated();
    buf.insert(11);
    assert_eq!(buf.insert(12), Insertion::Evicted(2));
    assert_ring(&buf, [11, 12, 3, 4, 5, 6, 7, 8, 9, 10], 2, 2, 10);
}

#[test]
fn remove_after_wrap() {
    let mut buf = populated();
    buf.insert(11);
    assert_eq!(buf.remove(), Some(2));
    assert_ring(&buf, [11, 0, 3, 4, 5, 6, 7, 8, 9, 10], 1, 2, 9);
}

#[test]
fn remove_one() {
    let mut buf = populated();
    buf.insert(11);
    buf.insert(12);
    assert_eq!(buf.remove(), Some(3));
    assert_ring(&buf, [11, 12, 0, 4, 5, 6, 7, 8, 9, 10], 2, 3, 9);
}

#[test]
fn remove_two() {
    let mut buf = populated();
    buf.insert(11);
    buf.insert(12);
    assert!(buf.discard());
    assert!(buf.discard());
    assert_ring(&buf, [11, 12, 0, 0, 5, 6, 7, 8, 9, 10], 2, 4, 8);
}

#[test]
fn fill_removed() {
    let mut buf = populated();
    buf.insert(11);
    buf.insert(12);
    buf.remove();
    buf.remove();
    assert_eq!(buf.insert(13), Insertion::Stored);
    assert_ring(&buf, [11, 12, 13, 0, 5, 6, 7, 8, 9, 10], 3, 4, 9);
}

#[test]
fn before_remove_wrap() {
    let mut buf = populated();
    for _ in 1..buf.capacity() {
        buf.remove();
    }
    assert_ring(&buf, [0, 0, 0, 0, 0, 0, 0, 0, 0, 10], 0, 9, 1);
}

#[test]
fn remove_wrap() {
    let mut buf = populated();
    for _ in 0..buf.capacity() {
        buf.remove();
    }
    assert_ring(&buf, [0; 10], 0, 0, 0);
    assert_eq!(buf.state(), State::Empty);
}

#[test]
fn remove_past_front() {
    let mut buf = populated();
    buf.insert(11);
    for _ in 0..=buf.capacity() {
        buf.remove();
    }
    assert_ring(&buf, [0; 10], 1, 1, 0);
}

#[test]
fn remove_from_empty() {
    let mut buf: RingBuffer<i32> = RingBuffer::with_capacity(10);
    assert_eq!(buf.remove(), None);
    assert_eq!(buf.remove_or_default(), (0, false));
    assert_ring(&buf, [0; 10], 0, 0, 0);
}

#[test]
fn insert_large_amount() {
    let mut buf = RingBuffer::with_capacity(10);
    for i in 0..999 {
        buf.insert(i);
    }
    assert_ring(&buf, [990, 991, 992, 993, 994, 995, 996, 997, 998, 989], 9, 9, 10);
    assert_eq!(buf.iter().copied().collect::<Vec<_>>(), (989..999).collect::<Vec<_>>());
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Inner {
    one: i32,
    two: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Outer<T> {
    three: T,
    four: i32,
}

#[test]
fn compound_element() {
    let mut buf: RingBuffer<Outer<Inner>> = RingBuffer::with_capacity(10);
    let element = Outer {
        three: Inner { one: 7, two: 8 },
        four: 0,
    };

    buf.insert(element);
    assert_eq!(buf.as_raw()[0].three.one, 7);
    assert_eq!(buf.as_raw()[0].three.two, 8);

    assert_eq!(buf.remove_or_default(), (element, true));
    assert_eq!(buf.as_raw()[0], Outer::default());
}

#[test]
fn owned_elements() {
    let mut buf: RingBuffer<String, [String; 2]> = RingBuffer::new_inline();
    buf.insert("first".to_string());
    buf.insert("second".to_string());
    assert_eq!(buf.insert("third".to_string()).evicted().as_deref(), Some("first"));
    assert_eq!(buf.remove().as_deref(), Some("second"));
    assert_eq!(buf.as_raw(), &["third".to_string(), String::new()]);
}
