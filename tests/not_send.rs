#![cfg(feature = "not-send")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use courier::route::{self, Target};
use courier::{BoxError, Incoming, Method, Params, Request, Route};

/// Counts its runs in a cell shared with the test.
struct Counter {
    hits: Rc<Cell<usize>>,
}

impl Route<usize> for Counter {
    fn run_target(&self, _: &Method, _: &Params) -> Result<Target<usize>, BoxError> {
        self.hits.set(self.hits.get() + 1);
        Ok(Target::Respond(self.hits.get()))
    }

    fn pattern(&self) -> Option<&str> {
        Some("/counter")
    }
}

fn get<T>(path: &str) -> Request<T> {
    Request::new(&Incoming::default(), Some(Method::Get), Some(path))
}

#[test]
fn routes_may_hold_local_state() {
    let hits = Rc::new(Cell::new(0));
    let counter = route::boxed(Counter { hits: hits.clone() });

    let mut request = get("/counter");
    request.route = Some(counter.clone());
    assert_eq!(request.response().unwrap(), Some(1));
    assert_eq!(request.response().unwrap(), Some(2));

    let mut request = get("/other");
    assert_eq!(request.forward(counter).unwrap(), Some(3));
    assert_eq!(hits.get(), 3);
}

#[test]
fn callbacks_may_capture_local_state() {
    let seen = Rc::new(RefCell::new(Vec::new()));

    let leaf = {
        let seen = seen.clone();
        route::callback("/leaf", move |_, params: &Params| {
            seen.borrow_mut().push(params.len());
            Target::respond("leaf")
        })
    };

    let entry = {
        let seen = seen.clone();
        route::callback("/entry/:id", move |_, params: &Params| {
            seen.borrow_mut().push(params.len());
            Target::forward(leaf.clone())
        })
    };

    let mut request = get("/entry/1");
    request.bind(entry, vec!["1"]);

    assert_eq!(request.response().unwrap(), Some("leaf"));
    assert_eq!(*seen.borrow(), vec![1, 0]);
    assert_eq!(request.route.unwrap().pattern(), Some("/leaf"));
}

#[test]
fn methods_may_capture_local_state() {
    let hits = Rc::new(Cell::new(0));

    let users = {
        let hits = hits.clone();
        route::methods("/users")
            .get(move |_| {
                hits.set(hits.get() + 1);
                Target::respond(hits.get())
            })
            .into_route()
    };

    let mut request = get("/users");
    request.route = Some(users);

    assert_eq!(request.response().unwrap(), Some(1));
    assert_eq!(hits.get(), 1);
}
