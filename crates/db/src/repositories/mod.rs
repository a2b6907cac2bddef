pub mod layout_repo;
pub mod slot_repo;
pub mod wine_repo;

pub use layout_repo::LayoutRepo;
pub use slot_repo::SlotRepo;
pub use wine_repo::WineRepo;
