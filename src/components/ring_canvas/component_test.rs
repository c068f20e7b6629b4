use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::AtomicBool;

use super::*;

#[test]
fn running_loop_keeps_its_callback() {
	let running = AtomicBool::new(true);
	let slot = RefCell::new(Some(1_u32));
	assert!(!release_if_stopped(&running, &slot));
	assert_eq!(*slot.borrow(), Some(1));
}

#[test]
fn stopped_loop_drops_its_callback() {
	let running = AtomicBool::new(false);
	let slot = RefCell::new(Some(1_u32));
	assert!(release_if_stopped(&running, &slot));
	assert!(slot.borrow().is_none());
}

#[test]
fn stopping_breaks_a_self_referencing_slot() {
	// A callback stand-in that owns a handle to the slot holding it.
	type Slot = Rc<RefCell<Option<Box<dyn Fn() -> usize>>>>;
	let slot: Slot = Rc::new(RefCell::new(None));
	let inner = slot.clone();
	*slot.borrow_mut() = Some(Box::new(move || Rc::strong_count(&inner)));
	assert_eq!(Rc::strong_count(&slot), 2);

	let running = AtomicBool::new(false);
	assert!(release_if_stopped(&running, &slot));
	assert_eq!(Rc::strong_count(&slot), 1);
}
