use super::*;
use crate::TimerQueue;

fn debounced(queue: &Rc<TimerQueue>, delay_ms: u64) -> (DelayedCall<u32>, Rc<RefCell<Vec<u32>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let call = DelayedCall::new(
        Rc::clone(queue) as Rc<dyn TimerScheduler>,
        Duration::from_millis(delay_ms),
        move |value| sink.borrow_mut().push(value),
    );
    (call, calls)
}

#[test]
fn burst_collapses_into_last_call() {
    let queue = Rc::new(TimerQueue::new());
    let (call, calls) = debounced(&queue, 30);

    call.call(1);
    queue.advance(Duration::from_millis(10));
    call.call(2);
    queue.advance(Duration::from_millis(29));
    call.call(3);
    assert!(call.is_pending());
    assert!(calls.borrow().is_empty());

    queue.advance(Duration::from_millis(30));
    assert_eq!(calls.borrow().as_slice(), &[3]);
    assert!(!call.is_pending());
    assert_eq!(queue.pending(), 0);
}

#[test]
fn separated_calls_each_fire() {
    let queue = Rc::new(TimerQueue::new());
    let (call, calls) = debounced(&queue, 30);

    call.call(1);
    queue.advance(Duration::from_millis(30));
    call.call(2);
    queue.advance(Duration::from_millis(30));

    assert_eq!(calls.borrow().as_slice(), &[1, 2]);
}

#[test]
fn cancel_drops_pending_invocation() {
    let queue = Rc::new(TimerQueue::new());
    let (call, calls) = debounced(&queue, 30);

    call.call(7);
    assert!(call.cancel());
    assert!(!call.cancel());
    queue.run_until_idle();

    assert!(calls.borrow().is_empty());
}

#[test]
fn dropped_call_does_not_fire() {
    let queue = Rc::new(TimerQueue::new());
    let (call, calls) = debounced(&queue, 30);

    call.call(9);
    drop(call);
    queue.run_until_idle();

    assert!(calls.borrow().is_empty());
}
