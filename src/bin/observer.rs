//! Pattern: Observer
//!
//! Run with: cargo run --bin observer

use design_patterns::console::{self, bad, good, section};
use design_patterns::error::ListenerError;
use design_patterns::event_manager::{
    listener_fn, CountingPublisher, ListenerHandle, SlackMessageListener, COUNTER_DECREMENTED,
    COUNTER_INCREMENTED,
};
use design_patterns::observer::{
    BusinessLogic, ConcreteObserver, ConcreteSubject, ConcreteSubscriber, CountState, Counter,
    NameBook, NameState, Observer, Subject, Subscriber,
};
use design_patterns::PatternError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use std::rc::Rc;

fn subject_example(rng: &mut StdRng) {
    println!("{}", good("subject keeps a list of observers"));
    let mut subject = ConcreteSubject::new(0);
    let observer_a = Rc::new(ConcreteObserver::new("ObserverA"));
    let observer_b = Rc::new(ConcreteObserver::new("ObserverB"));
    let handle_a: Rc<dyn Observer<ConcreteSubject>> = observer_a.clone();
    let handle_b: Rc<dyn Observer<ConcreteSubject>> = observer_b.clone();

    subject.attach(Rc::clone(&handle_a));
    subject.attach(Rc::clone(&handle_b));
    println!("  Attaching ObserverA again: {:?}", subject.attach(Rc::clone(&handle_a)));

    subject.some_business_logic(rng);
    subject.detach(&handle_b);
    subject.some_business_logic(rng);

    println!("  {} saw {:?}", observer_a.name(), observer_a.seen());
    println!("  {} saw {:?}", observer_b.name(), observer_b.seen());
}

fn publisher_example(rng: &mut StdRng) {
    println!("{}", good("publishers generic over their state"));
    let mut counter = Counter::new("Counter", CountState::default());
    let mut names = NameBook::new("NameBook", NameState::default());

    let alice = Rc::new(ConcreteSubscriber::new("Alice"));
    let bob = Rc::new(ConcreteSubscriber::new("Bob"));
    let alice_handle: Rc<dyn Subscriber> = alice.clone();
    let bob_handle: Rc<dyn Subscriber> = bob.clone();

    counter.add_subscriber(Rc::clone(&alice_handle));
    counter.add_subscriber(Rc::clone(&bob_handle));
    names.add_subscriber(Rc::clone(&bob_handle));

    counter.business_logic(rng);
    names.business_logic(rng);
    counter.remove_subscriber(&alice_handle);
    counter.business_logic(rng);

    println!("  Alice received {} notification(s)", alice.received().len());
    println!("  Bob received {} notification(s)", bob.received().len());
}

fn broadcast_everything_example() {
    println!("{}", bad("one notify for every kind of change"));
    println!("  Listeners interested only in decrements still run on every increment.");
}

fn event_manager_example() -> Result<(), PatternError> {
    println!("{}", good("listeners pick the event types they care about"));
    let mut publisher = CountingPublisher::new();
    let slack = Rc::new(SlackMessageListener::new());
    let slack_handle: ListenerHandle<i64> = slack.clone();
    let audit = listener_fn(|value: &i64| {
        println!("Audit: counter went down to {}", value);
        Ok(())
    });

    publisher
        .events_mut()
        .subscribe(COUNTER_INCREMENTED, Rc::clone(&slack_handle));
    publisher.events_mut().subscribe(COUNTER_DECREMENTED, audit);
    println!("  Channels: {:?}", publisher.events());

    publisher.increment()?;
    publisher.increment()?;
    publisher.decrement()?;

    publisher
        .events_mut()
        .unsubscribe(COUNTER_INCREMENTED, &slack_handle);
    publisher.increment()?;
    println!("  Slack messages sent: {:?}", slack.sent());
    println!("  Final count: {}", publisher.count());

    println!("{}", good("a failing listener does not stop the rest"));
    let flaky = listener_fn(|_: &i64| Err(ListenerError::new("webhook timed out")));
    publisher
        .events_mut()
        .subscribe(COUNTER_INCREMENTED, flaky);
    publisher
        .events_mut()
        .subscribe(COUNTER_INCREMENTED, Rc::clone(&slack_handle));
    match publisher.increment() {
        Ok(count) => println!("  Unexpected success at {}", count),
        Err(err) => println!("  {}", console::failure(&err)),
    }
    println!("  Slack messages sent: {:?}", slack.sent());

    Ok(())
}

fn main() -> ExitCode {
    let config = match design_patterns::init_demo() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", console::failure(&err));
            return ExitCode::FAILURE;
        }
    };
    let mut rng = StdRng::seed_from_u64(config.observer.seed);

    println!("{}\n", console::banner("Pattern: Observer"));

    println!("{}", section("Subject and Observers"));
    subject_example(&mut rng);
    println!();

    println!("{}", section("Generic Publishers"));
    publisher_example(&mut rng);
    println!();

    println!("{}", section("Keyed Events"));
    broadcast_everything_example();
    if let Err(err) = event_manager_example() {
        eprintln!("{}", console::failure(&err));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
