//! Route table and navigation state of the interview practice app.
//!
//! Everything here is DOM-free; `interview_web` mounts it in the browser.

mod entry;
mod navigation;
mod page;
mod table;
mod validation;

pub use entry::RouteEntry;
pub use navigation::Navigator;
pub use page::Page;
pub use table::{app_routes, NavLink, RouteTable, RouteTableError};
