//! Side channel reporting solver progress.
//!
//! The solver emits an [`Event`] at each of its transitions. Observers only
//! watch: nothing they do can influence the solve.

use crate::kernel::{Polygon, Segment};
use crate::patterns::PatternKind;

/// One successful cut, as seen by observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitStep {
    /// Fragment the cut was applied to.
    pub fragment: Polygon,
    /// Regions certified coverable by the cut (empty for histogram cuts).
    pub covered: Vec<Polygon>,
    /// One or two cut segments.
    pub segments: Vec<Segment>,
    pub pattern: PatternKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Validated input, before any step.
    Initial(Polygon),
    /// Fragment accepted without further cuts.
    BaseCase(Polygon),
    Split(SplitStep),
    /// Fragment on which every pattern failed.
    Unsolved(Polygon),
    /// Last event of every solve that got past validation.
    Close,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Initial(_) => "initial",
            Event::BaseCase(_) => "base-case",
            Event::Split(_) => "split",
            Event::Unsolved(_) => "unsolved",
            Event::Close => "close",
        }
    }
}

pub trait Observer {
    fn notify(&mut self, event: &Event);
}

impl<F: FnMut(&Event)> Observer for F {
    fn notify(&mut self, event: &Event) {
        self(event)
    }
}

/// Observer that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl Observer for Discard {
    fn notify(&mut self, _event: &Event) {}
}

/// Observer recording every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn splits(&self) -> impl Iterator<Item = &SplitStep> {
        self.events.iter().filter_map(|e| match e {
            Event::Split(s) => Some(s),
            _ => None,
        })
    }

    pub fn base_cases(&self) -> impl Iterator<Item = &Polygon> {
        self.events.iter().filter_map(|e| match e {
            Event::BaseCase(p) => Some(p),
            _ => None,
        })
    }
}

impl Observer for EventLog {
    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
