use crate::utils::storage;
use leptos::*;

pub const SIDEBAR_POSITION_KEY: &str = "sidebarPosition";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarPosition {
    #[default]
    Left,
    Right,
}

impl SidebarPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarPosition::Left => "left",
            SidebarPosition::Right => "right",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(SidebarPosition::Left),
            "right" => Some(SidebarPosition::Right),
            _ => None,
        }
    }
}

/// Explicit publish/subscribe channel for the sidebar-position preference.
/// The settings page publishes; the dashboard shell subscribes. Hydrated once
/// from persistent storage when the bus is created.
#[derive(Clone, Copy)]
pub struct SidebarBus {
    position: RwSignal<SidebarPosition>,
}

impl SidebarBus {
    pub fn new() -> Self {
        Self {
            position: create_rw_signal(stored_position().unwrap_or_default()),
        }
    }

    pub fn subscribe(&self) -> Signal<SidebarPosition> {
        self.position.read_only().into()
    }

    pub fn publish(&self, position: SidebarPosition) {
        self.position.set(position);
    }
}

fn stored_position() -> Option<SidebarPosition> {
    storage::local_storage()
        .ok()
        .and_then(|s| s.get_item(SIDEBAR_POSITION_KEY).ok().flatten())
        .and_then(|value| SidebarPosition::parse(&value))
}

/// Persisting is the settings writer's job; the shell never calls this.
pub fn save_position(position: SidebarPosition) {
    match storage::local_storage() {
        Ok(s) => {
            if s.set_item(SIDEBAR_POSITION_KEY, position.as_str()).is_err() {
                log::warn!("failed to persist sidebar position");
            }
        }
        Err(reason) => log::warn!("sidebar position not persisted: {reason}"),
    }
}

pub fn provide_sidebar_bus() -> SidebarBus {
    if let Some(existing) = use_context::<SidebarBus>() {
        return existing;
    }
    let bus = SidebarBus::new();
    provide_context(bus);
    bus
}

pub fn use_sidebar_bus() -> SidebarBus {
    use_context::<SidebarBus>().unwrap_or_else(SidebarBus::new)
}
