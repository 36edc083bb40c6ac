//! UI Components
//!
//! Reusable Leptos components.

mod gallery_controls;
mod project_card;
mod pagination;
mod project_gallery;
mod voting_widget;
mod submission_form;
mod wallet_button;

pub use gallery_controls::GalleryControls;
pub use project_card::ProjectCard;
pub use pagination::Pagination;
pub use project_gallery::ProjectGallery;
pub use voting_widget::VotingWidget;
pub use submission_form::SubmissionForm;
pub use wallet_button::WalletButton;
