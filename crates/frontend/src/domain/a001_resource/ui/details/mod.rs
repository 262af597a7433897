pub mod content;
pub mod layout;
pub mod model;
pub mod navigation;
pub mod page;
pub mod resource_tab;
pub mod tabs;
pub mod view_model;

pub use page::ResourcePage;
pub use resource_tab::ResourceTab;
