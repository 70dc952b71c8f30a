//! Symbolic names for the toolkit's standard event codes.
//!
//! Custom widgets that override their event handler usually want to print what
//! they received; these helpers turn the raw integer back into `FL_*` names.

/// Standard event codes delivered to widget handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum EventKind {
    NoEvent = 0,
    Push = 1,
    Release = 2,
    Enter = 3,
    Leave = 4,
    Drag = 5,
    Focus = 6,
    Unfocus = 7,
    KeyDown = 8,
    KeyUp = 9,
    Close = 10,
    Move = 11,
    Shortcut = 12,
    Deactivate = 13,
    Activate = 14,
    Hide = 15,
    Show = 16,
    Paste = 17,
    SelectionClear = 18,
    MouseWheel = 19,
    DndEnter = 20,
    DndDrag = 21,
    DndLeave = 22,
    DndRelease = 23,
}

const ALL: [EventKind; 24] = [
    EventKind::NoEvent,
    EventKind::Push,
    EventKind::Release,
    EventKind::Enter,
    EventKind::Leave,
    EventKind::Drag,
    EventKind::Focus,
    EventKind::Unfocus,
    EventKind::KeyDown,
    EventKind::KeyUp,
    EventKind::Close,
    EventKind::Move,
    EventKind::Shortcut,
    EventKind::Deactivate,
    EventKind::Activate,
    EventKind::Hide,
    EventKind::Show,
    EventKind::Paste,
    EventKind::SelectionClear,
    EventKind::MouseWheel,
    EventKind::DndEnter,
    EventKind::DndDrag,
    EventKind::DndLeave,
    EventKind::DndRelease,
];

impl EventKind {
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code).ok().and_then(|idx| ALL.get(idx).copied())
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NoEvent => "FL_NO_EVENT",
            Self::Push => "FL_PUSH",
            Self::Release => "FL_RELEASE",
            Self::Enter => "FL_ENTER",
            Self::Leave => "FL_LEAVE",
            Self::Drag => "FL_DRAG",
            Self::Focus => "FL_FOCUS",
            Self::Unfocus => "FL_UNFOCUS",
            Self::KeyDown => "FL_KEYDOWN",
            Self::KeyUp => "FL_KEYUP",
            Self::Close => "FL_CLOSE",
            Self::Move => "FL_MOVE",
            Self::Shortcut => "FL_SHORTCUT",
            Self::Deactivate => "FL_DEACTIVATE",
            Self::Activate => "FL_ACTIVATE",
            Self::Hide => "FL_HIDE",
            Self::Show => "FL_SHOW",
            Self::Paste => "FL_PASTE",
            Self::SelectionClear => "FL_SELECTIONCLEAR",
            Self::MouseWheel => "FL_MOUSEWHEEL",
            Self::DndEnter => "FL_DND_ENTER",
            Self::DndDrag => "FL_DND_DRAG",
            Self::DndLeave => "FL_DND_LEAVE",
            Self::DndRelease => "FL_DND_RELEASE",
        }
    }
}

/// Name of an event code, or `??(code)` when the code is not a standard event.
pub fn lookup_event(code: i32) -> String {
    match EventKind::from_code(code) {
        Some(kind) => kind.name().to_string(),
        None => format!("??({code})"),
    }
}
