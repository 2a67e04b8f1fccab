use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::observe::{self, ObserverOptions, ViewportObserver};
use crate::prefs::UserPreferences;

pub const PENDING_CLASS: &str = "reveal";
pub const REVEALED_CLASS: &str = "revealed";
const INDEX_ATTRIBUTE: &str = "data-reveal-index";

pub const OBSERVER_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.08,
    root_margin: "0px 0px -12% 0px",
};

/// Card delay step inside a row.
const CARD_STAGGER_MS: u32 = 80;
const CARDS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Heading,
    Card,
    Panel,
}

/// Elements picked up inside the page root, in tagging order.
pub const REVEAL_TARGETS: &[(&str, RevealKind)] = &[
    ("h2", RevealKind::Heading),
    (".card", RevealKind::Card),
    (".panel", RevealKind::Panel),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    Up,
    Left,
    Right,
}

impl RevealDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealDirection::Up => "up",
            RevealDirection::Left => "left",
            RevealDirection::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTag {
    pub direction: RevealDirection,
    pub delay_ms: u32,
}

impl RevealTag {
    /// `position` counts elements of the same kind, starting at 0.
    pub fn for_kind(kind: RevealKind, position: usize) -> Self {
        match kind {
            RevealKind::Heading => Self {
                direction: RevealDirection::Up,
                delay_ms: 0,
            },
            RevealKind::Card => Self {
                direction: RevealDirection::Up,
                delay_ms: (position % CARDS_PER_ROW) as u32 * CARD_STAGGER_MS,
            },
            RevealKind::Panel => Self {
                direction: if position % 2 == 0 {
                    RevealDirection::Left
                } else {
                    RevealDirection::Right
                },
                delay_ms: 0,
            },
        }
    }
}

/// One-way pending -> revealed flags, one per tagged element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn with_len(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    /// Returns `true` only for the first intersection of a pending element.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(revealed) if intersecting && !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }
}

fn tag_targets(root: &Element) -> Vec<Element> {
    let mut tagged = Vec::new();
    for (selector, kind) in REVEAL_TARGETS {
        let Ok(nodes) = root.query_selector_all(selector) else {
            continue;
        };
        for position in 0..nodes.length() {
            let Some(element) = nodes.item(position).and_then(|n| n.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let tag = RevealTag::for_kind(*kind, position as usize);
            let _ = element.class_list().add_1(PENDING_CLASS);
            let _ = element.set_attribute("data-reveal", tag.direction.as_str());
            let _ = element.set_attribute(INDEX_ATTRIBUTE, &tagged.len().to_string());
            if tag.delay_ms > 0 {
                if let Some(html) = element.dyn_ref::<HtmlElement>() {
                    let _ = html
                        .style()
                        .set_property("--reveal-delay", &format!("{}ms", tag.delay_ms));
                }
            }
            tagged.push(element);
        }
    }
    tagged
}

/// Tags the reveal targets under `root` and reveals each one the first time
/// it scrolls into view.
#[hook]
pub fn use_reveal(root: NodeRef, prefs: UserPreferences) {
    use_effect_with_deps(
        move |(root, prefs)| {
            let observer = if !prefs.reveal_enabled(observe::supported()) {
                log::info!("reveal animations disabled");
                None
            } else if let Some(root) = root.cast::<Element>() {
                let targets = tag_targets(&root);
                let set = Rc::new(RefCell::new(RevealSet::with_len(targets.len())));
                let observer = ViewportObserver::new(&OBSERVER_OPTIONS, move |entry, observer| {
                    let target = entry.target();
                    let Some(index) = target
                        .get_attribute(INDEX_ATTRIBUTE)
                        .and_then(|i| i.parse::<usize>().ok())
                    else {
                        return;
                    };
                    if set.borrow_mut().observe(index, entry.is_intersecting()) {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                });
                match observer {
                    Ok(observer) => {
                        for target in &targets {
                            observer.observe(target);
                        }
                        log::info!("watching {} reveal targets", targets.len());
                        Some(observer)
                    }
                    Err(e) => {
                        log::warn!("reveal observer unavailable: {:?}", e);
                        None
                    }
                }
            } else {
                log::warn!("reveal root missing, animations disabled");
                None
            };
            move || drop(observer)
        },
        (root, prefs),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_reveals_only_once() {
        let mut set = RevealSet::with_len(2);
        assert!(!set.observe(0, false));
        assert!(set.observe(0, true));
        assert!(!set.observe(0, false));
        assert!(!set.observe(0, true));
        assert!(set.is_revealed(0));
        assert!(!set.is_revealed(1));
        assert_eq!(set.pending(), 1);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut set = RevealSet::with_len(1);
        assert!(!set.observe(5, true));
        assert!(!set.is_revealed(5));
        assert_eq!(set.pending(), 1);
    }

    #[test]
    fn cards_stagger_within_a_row() {
        let delays: Vec<u32> = (0..6)
            .map(|i| RevealTag::for_kind(RevealKind::Card, i).delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 80, 160, 0, 80, 160]);
    }

    #[test]
    fn panels_alternate_sides() {
        let sides: Vec<&str> = (0..4)
            .map(|i| RevealTag::for_kind(RevealKind::Panel, i).direction.as_str())
            .collect();
        assert_eq!(sides, vec!["left", "right", "left", "right"]);
    }

    #[test]
    fn headings_rise_without_delay() {
        let tag = RevealTag::for_kind(RevealKind::Heading, 4);
        assert_eq!(tag.direction, RevealDirection::Up);
        assert_eq!(tag.delay_ms, 0);
    }
}
