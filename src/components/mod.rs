pub mod report_card;
pub mod uploader;

pub use report_card::{bullet_list, report_list, report_section};
pub use uploader::uploader;
