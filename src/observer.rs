//! Observer: subjects push state changes to whoever is attached.
//!
//! Two variants:
//!
//! - [`ConcreteSubject`] with [`Observer`]s, the textbook shape.
//! - [`Publisher`], generic over its state, with named [`Subscriber`]s that
//!   read the new state as JSON.
//!
//! Observers are held as `Rc<dyn ...>` and compared by identity, so attaching
//! the same observer twice is detected.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Outcome of attaching or detaching an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    Subscribed,
    AlreadySubscribed,
    Unsubscribed,
    NotSubscribed,
}

// ============================================================================
// Subject / Observer
// ============================================================================

pub trait Observer<S: ?Sized> {
    fn update(&self, subject: &S);
}

pub trait Subject {
    fn attach(&mut self, observer: Rc<dyn Observer<Self>>) -> Subscription;
    fn detach(&mut self, observer: &Rc<dyn Observer<Self>>) -> Subscription;
    /// Runs every attached observer's `update`.
    fn notify(&self);
}

pub struct ConcreteSubject {
    state: i32,
    observers: Vec<Rc<dyn Observer<ConcreteSubject>>>,
}

impl ConcreteSubject {
    pub fn new(state: i32) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Moves to a random state in `0..100` and tells everyone.
    pub fn some_business_logic<R: Rng>(&mut self, rng: &mut R) -> i32 {
        self.state = rng.gen_range(0..100);
        tracing::debug!(state = self.state, "subject state changed");
        self.notify();
        self.state
    }

    fn position(&self, observer: &Rc<dyn Observer<ConcreteSubject>>) -> Option<usize> {
        self.observers.iter().position(|o| Rc::ptr_eq(o, observer))
    }
}

impl Subject for ConcreteSubject {
    fn attach(&mut self, observer: Rc<dyn Observer<Self>>) -> Subscription {
        if self.position(&observer).is_some() {
            return Subscription::AlreadySubscribed;
        }
        self.observers.push(observer);
        Subscription::Subscribed
    }

    fn detach(&mut self, observer: &Rc<dyn Observer<Self>>) -> Subscription {
        match self.position(observer) {
            Some(index) => {
                self.observers.remove(index);
                Subscription::Unsubscribed
            }
            None => Subscription::NotSubscribed,
        }
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.update(self);
        }
    }
}

/// Prints each state it sees and keeps a history of them.
pub struct ConcreteObserver {
    name: String,
    seen: RefCell<Vec<i32>>,
}

impl ConcreteObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seen(&self) -> Vec<i32> {
        self.seen.borrow().clone()
    }
}

impl Observer<ConcreteSubject> for ConcreteObserver {
    fn update(&self, subject: &ConcreteSubject) {
        println!("{}: My state has changed to: {}", self.name, subject.state());
        self.seen.borrow_mut().push(subject.state());
    }
}

// ============================================================================
// Generic Publisher / Subscriber
// ============================================================================

/// What a subscriber can read from the publisher that notified it.
pub trait StateSource {
    fn name(&self) -> &str;
    fn state_json(&self) -> String;
}

pub trait Subscriber {
    fn name(&self) -> &str;
    fn update(&self, publisher: &dyn StateSource);
}

pub struct Publisher<S> {
    name: String,
    state: S,
    subscribers: Vec<Rc<dyn Subscriber>>,
}

impl<S: Serialize> Publisher<S> {
    pub fn new(name: impl Into<String>, initial_state: S) -> Self {
        Self {
            name: name.into(),
            state: initial_state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn set_state(&mut self, state: S) {
        self.state = state;
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn add_subscriber(&mut self, subscriber: Rc<dyn Subscriber>) -> Subscription {
        if self.position(&subscriber).is_some() {
            tracing::debug!(publisher = %self.name, subscriber = subscriber.name(), "already subscribed");
            return Subscription::AlreadySubscribed;
        }
        tracing::debug!(publisher = %self.name, subscriber = subscriber.name(), "subscribed");
        self.subscribers.push(subscriber);
        Subscription::Subscribed
    }

    pub fn remove_subscriber(&mut self, subscriber: &Rc<dyn Subscriber>) -> Subscription {
        match self.position(subscriber) {
            Some(index) => {
                self.subscribers.remove(index);
                tracing::debug!(publisher = %self.name, subscriber = subscriber.name(), "unsubscribed");
                Subscription::Unsubscribed
            }
            None => Subscription::NotSubscribed,
        }
    }

    pub fn notify_subscribers(&self) {
        for subscriber in &self.subscribers {
            subscriber.update(self);
        }
    }

    /// Replaces the state, then notifies.
    pub fn publish(&mut self, state: S) {
        self.set_state(state);
        self.notify_subscribers();
    }

    fn position(&self, subscriber: &Rc<dyn Subscriber>) -> Option<usize> {
        self.subscribers.iter().position(|s| Rc::ptr_eq(s, subscriber))
    }
}

impl<S: Serialize> StateSource for Publisher<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn state_json(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|err| format!("<unserializable: {}>", err))
    }
}

/// Each publisher decides for itself how its state changes.
pub trait BusinessLogic {
    fn business_logic<R: Rng>(&mut self, rng: &mut R);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountState {
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NameState {
    pub name: String,
}

pub type Counter = Publisher<CountState>;
pub type NameBook = Publisher<NameState>;

impl BusinessLogic for Counter {
    fn business_logic<R: Rng>(&mut self, rng: &mut R) {
        let count = rng.gen_range(0..100);
        self.publish(CountState { count });
    }
}

impl BusinessLogic for NameBook {
    fn business_logic<R: Rng>(&mut self, rng: &mut R) {
        let name: String = rng
            .sample_iter(&Alphanumeric)
            .take(5)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        self.publish(NameState { name });
    }
}

/// Prints a line per notification and keeps what it received.
pub struct ConcreteSubscriber {
    name: String,
    received: RefCell<Vec<(String, String)>>,
}

impl ConcreteSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: RefCell::new(Vec::new()),
        }
    }

    /// `(publisher name, state as JSON)` pairs, oldest first.
    pub fn received(&self) -> Vec<(String, String)> {
        self.received.borrow().clone()
    }
}

impl Subscriber for ConcreteSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, publisher: &dyn StateSource) {
        let state = publisher.state_json();
        println!(
            "{}: I've received notification from {}. Publisher's state is changed to {}",
            self.name,
            publisher.name(),
            state
        );
        self.received
            .borrow_mut()
            .push((publisher.name().to_string(), state));
    }
}
