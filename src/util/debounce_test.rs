use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// Fake pending call that records its id when cancelled.
struct Call {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl Cancel for Call {
    fn cancel(self) {
        self.log.borrow_mut().push(self.id);
    }
}

fn call(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Call {
    Call { id, log: Rc::clone(log) }
}

#[test]
fn new_debouncer_has_nothing_pending() {
    let debouncer: Debouncer<Call> = Debouncer::new();
    assert!(!debouncer.is_pending());
}

#[test]
fn schedule_cancels_only_the_replaced_call() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut debouncer = Debouncer::new();

    debouncer.schedule(call(1, &log));
    assert!(log.borrow().is_empty());

    debouncer.schedule(call(2, &log));
    debouncer.schedule(call(3, &log));

    assert_eq!(*log.borrow(), vec![1, 2]);
    assert!(debouncer.is_pending());
}

#[test]
fn cancel_withdraws_pending_call() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut debouncer = Debouncer::new();
    debouncer.schedule(call(7, &log));

    debouncer.cancel();
    assert_eq!(*log.borrow(), vec![7]);
    assert!(!debouncer.is_pending());

    debouncer.cancel();
    assert_eq!(*log.borrow(), vec![7]);
}
