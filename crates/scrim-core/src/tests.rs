#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::dispose::Dispose;
    use crate::signal::*;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_subscriber_sees_new_value() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let _sub = sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(1);
        sig.set(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_dispose_detaches_subscriber() {
        let sig = signal(0);
        let count = Rc::new(RefCell::new(0));

        let count_clone = count.clone();
        let sub = sig.subscribe(move |_| *count_clone.borrow_mut() += 1);

        sig.set(1);
        sub.run();
        sig.set(2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_redundant_set_still_notifies() {
        let sig = signal(7);
        let count = Rc::new(RefCell::new(0));

        let count_clone = count.clone();
        let _sub = sig.subscribe(move |_| *count_clone.borrow_mut() += 1);

        sig.set(7);
        sig.set(7);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_listener_may_set_another_cell() {
        let a = signal(false);
        let b = signal(true);

        let b_clone = b.clone();
        let _sub = a.subscribe(move |now| {
            if *now {
                b_clone.set(false);
            }
        });

        a.set(true);
        assert!(!b.get());
    }

    #[test]
    fn test_listener_may_reenter_same_cell() {
        let sig = signal(0);
        let fired = Rc::new(RefCell::new(false));

        let sig_clone = sig.clone();
        let fired_clone = fired.clone();
        let _sub = sig.subscribe(move |_| {
            if !*fired_clone.borrow() {
                *fired_clone.borrow_mut() = true;
                sig_clone.set(0);
            }
        });

        sig.set(5);
        // The re-entrant write wins; no panic, no unbounded recursion.
        assert_eq!(sig.get(), 0);
    }

    #[test]
    fn test_subscriber_added_during_notification_skips_inflight_change() {
        let sig = signal(0);
        let late_calls = Rc::new(RefCell::new(0));

        let sig_clone = sig.clone();
        let late_calls_clone = late_calls.clone();
        let _sub = sig.subscribe(move |_| {
            let late_calls_inner = late_calls_clone.clone();
            let _ = sig_clone.subscribe(move |_| {
                *late_calls_inner.borrow_mut() += 1;
            });
        });

        sig.set(1);
        assert_eq!(*late_calls.borrow(), 0);

        sig.set(2);
        assert_eq!(*late_calls.borrow(), 1);
    }

    #[test]
    fn test_dispose_runs_once() {
        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        let d = Dispose::new(move || *count_clone.borrow_mut() += 1);

        d.run();
        d.run();
        assert_eq!(*count.borrow(), 1);

        Dispose::noop().run();
    }
}
