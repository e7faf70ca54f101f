// State management module.
// Sidebar collapse state, row cursor, and route navigation.

pub mod navigation;
pub mod sidebar;
pub mod visual;

pub use navigation::{Navigator, RouteHistory};
pub use sidebar::{
    CampaignRow, SettingsMenuProps, Sidebar, SidebarHandler, SidebarOptions, SidebarProps,
};
pub use visual::{SettleTimer, SidebarPhase, SidebarWidth, TextVisibility, VisualState};
