use core::fmt;
use spin::Mutex;

const MAX_COMPONENTS: usize = 8;

/// Boot-time initialization status of one component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    NotStarted,
    InProgress,
    Completed,
    Failed(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct ComponentStatus {
    pub name: &'static str,
    pub status: InitStatus,
}

static INIT_STATUS: Mutex<[Option<ComponentStatus>; MAX_COMPONENTS]> = Mutex::new([None; MAX_COMPONENTS]);

impl ComponentStatus {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            status: InitStatus::NotStarted,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, InitStatus::Completed)
    }
}

/// Track a component; extra registrations past the table size are ignored
pub fn register_component(name: &'static str) {
    let mut components = INIT_STATUS.lock();
    if let Some(slot) = components.iter_mut().find(|c| c.is_none()) {
        *slot = Some(ComponentStatus::new(name));
    }
}

pub fn update_component_status(name: &'static str, status: InitStatus) {
    let mut components = INIT_STATUS.lock();
    if let Some(comp) = components.iter_mut().flatten().find(|c| c.name == name) {
        comp.status = status;
    }
}

/// Check if all components are initialized
pub fn all_components_ready() -> bool {
    let components = INIT_STATUS.lock();
    let mut registered = components.iter().flatten().peekable();
    registered.peek().is_some() && registered.all(|c| c.is_complete())
}

impl fmt::Display for InitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitStatus::NotStarted => write!(f, "Not Started"),
            InitStatus::InProgress => write!(f, "In Progress"),
            InitStatus::Completed => write!(f, "Completed"),
            InitStatus::Failed(err) => write!(f, "Failed: {}", err),
        }
    }
}
