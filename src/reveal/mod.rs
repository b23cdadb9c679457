//! Reveal-on-scroll model: groups, trigger geometry and the initial sweep.
//!
//! Every `.reveal-up` element is a one-way state machine, hidden → visible.
//! Three observer groups (cards, team members, everything else) share one
//! [`RevealGroup`] shape and differ only in membership and trigger geometry.
//!
//! On load, elements already near the viewport are revealed in document order
//! with a staggered delay so the page cascades in instead of popping.


#[cfg(feature = "browser")]
pub mod animator;

use crate::consts::{
    EARLY_ROOT_MARGIN, EARLY_THRESHOLD, PLAIN_THRESHOLD, REVEAL_ABOVE_TOLERANCE_PX,
    REVEAL_BASE_DELAY_MS, REVEAL_BELOW_TOLERANCE_PX, REVEAL_STEP_DELAY_MS,
};

/// Observable state of a reveal element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    #[must_use]
    pub fn from_visible(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }

    /// Move to `Visible`. Returns `true` only on the hidden → visible transition.
    pub fn reveal(&mut self) -> bool {
        let changed = *self == Self::Hidden;
        *self = Self::Visible;
        changed
    }
}

/// Which observer group an element belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealRole {
    Card,
    TeamMember,
    Generic,
}

impl RevealRole {
    /// Cards win over team members when an element carries both classes.
    #[must_use]
    pub fn classify(is_card: bool, is_team_member: bool) -> Self {
        match (is_card, is_team_member) {
            (true, _) => Self::Card,
            (false, true) => Self::TeamMember,
            (false, false) => Self::Generic,
        }
    }
}

/// Intersection trigger: optional root margin plus visible-area threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerGeometry {
    pub root_margin: Option<&'static str>,
    pub threshold: f64,
}

/// One observer group: a role and the geometry that fires it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGroup {
    pub role: RevealRole,
    pub geometry: TriggerGeometry,
}

impl RevealGroup {
    /// Earlier trigger: 300px before entry, pulled back 100px at the bottom.
    const EARLY: TriggerGeometry =
        TriggerGeometry { root_margin: Some(EARLY_ROOT_MARGIN), threshold: EARLY_THRESHOLD };

    pub const CARDS: Self = Self { role: RevealRole::Card, geometry: Self::EARLY };
    pub const TEAM: Self = Self { role: RevealRole::TeamMember, geometry: Self::EARLY };
    pub const GENERIC: Self = Self {
        role: RevealRole::Generic,
        geometry: TriggerGeometry { root_margin: None, threshold: PLAIN_THRESHOLD },
    };

    pub const ALL: [Self; 3] = [Self::CARDS, Self::TEAM, Self::GENERIC];

    #[must_use]
    pub fn accepts(&self, role: RevealRole) -> bool {
        self.role == role
    }
}

/// Viewport-relative bounding box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Whether an element counts as on screen at load.
///
/// Vertically the window is widened: the top may sit up to 300px below the
/// viewport and the bottom up to 100px above it. Horizontally any overlap counts.
#[must_use]
pub fn within_initial_window(bounds: Bounds, viewport_width: f64, viewport_height: f64) -> bool {
    bounds.top < viewport_height + REVEAL_BELOW_TOLERANCE_PX
        && bounds.bottom > -REVEAL_ABOVE_TOLERANCE_PX
        && bounds.left < viewport_width
        && bounds.right > 0.0
}

/// Delay before the element at `index` (document order) is revealed by the sweep.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(REVEAL_STEP_DELAY_MS)
        .saturating_add(REVEAL_BASE_DELAY_MS)
}

/// A reveal the initial sweep has decided to schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub index: usize,
    pub delay_ms: u32,
}

/// Plan the initial sweep over all reveal elements in document order.
///
/// The index used for the stagger counts every element, including skipped ones.
#[must_use]
pub fn plan_initial_sweep<I>(elements: I, viewport_width: f64, viewport_height: f64) -> Vec<ScheduledReveal>
where
    I: IntoIterator<Item = (Bounds, RevealState)>,
{
    elements
        .into_iter()
        .enumerate()
        .filter(|(_, (bounds, state))| {
            *state == RevealState::Hidden
                && within_initial_window(*bounds, viewport_width, viewport_height)
        })
        .map(|(index, _)| ScheduledReveal { index, delay_ms: stagger_delay_ms(index) })
        .collect()
}

/// Document readiness at the moment the animator attaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Loading,
    Interactive,
    Complete,
}

/// When the initial sweep runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepTriggers {
    pub now: bool,
    pub dom_content_loaded: bool,
    pub load: bool,
}

impl Readiness {
    /// Sweep as early as layout allows and once more after `load` if it has
    /// not fired yet. Repeats are harmless because reveal is idempotent.
    #[must_use]
    pub fn sweep_triggers(self) -> SweepTriggers {
        match self {
            Self::Loading => SweepTriggers { now: false, dom_content_loaded: true, load: true },
            Self::Interactive => SweepTriggers { now: true, dom_content_loaded: false, load: true },
            Self::Complete => SweepTriggers { now: true, dom_content_loaded: false, load: false },
        }
    }
}
