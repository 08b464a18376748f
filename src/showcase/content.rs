//! Copy shown in the dock and header

use super::focus::FocusId;

/// Title and body shown in the bottom dock for a focused item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockContent {
    pub title: &'static str,
    pub body: &'static str,
}

const CHAIR: DockContent = DockContent {
    title: "Car Seat Design",
    body: "Hard, boxy car seats make long rides tiring for seniors. \
           Taking advantage of the larger cabin that autonomous driving and PBV allow, \
           this seat borrows the shape of a lounge (corona) chair and offers a zero-gravity seating mode.",
};

const SHELL: DockContent = DockContent {
    title: "Module Design",
    body: "Built around active-senior scenarios, two modules can be attached to suit the rider: \
           a pet car-seat module for seniors who travel with a dog, \
           and a side-table module for everyone else.",
};

const WHEEL: DockContent = DockContent {
    title: "PBV Modular Swap",
    body: "The interior adopts the modular structure of the PBV platform. \
           The cabin layout changes with the rider's needs and purpose, \
           and the base assists with boarding.",
};

/// Dock copy for `id`; the establishing shot has none
pub fn dock_content(id: FocusId) -> Option<&'static DockContent> {
    match id {
        FocusId::Main => None,
        FocusId::Chair => Some(&CHAIR),
        FocusId::Shell => Some(&SHELL),
        FocusId::Wheel => Some(&WHEEL),
    }
}

/// Credits shown in the top header after the intro
pub const HEADER_CREDITS: [&str; 2] = [
    "PBV Interior Design for Active Senior",
    "Designed By Hyeseong Park",
];

pub const HEADER_TAG: &str = "TUK Grad 25";

/// Wordmark used for the intro logo and the return-to-start control
pub const LOGO_TEXT: &str = "FOR:EST";

pub const START_HINT: &str = "Click to start";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_item_has_dock_copy() {
        for id in FocusId::PICKABLE {
            let content = dock_content(id).unwrap();
            assert!(!content.title.is_empty());
            assert!(!content.body.is_empty());
        }
        assert!(dock_content(FocusId::Main).is_none());
    }
}
