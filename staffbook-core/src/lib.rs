//! Staffbook Core Library
//!
//! Employee contact directory: the contact model, a CRUD store seam, and
//! headless controllers for the listing, detail and create/edit views.

pub mod api;
pub mod contact;
pub mod form;
pub mod repository;
pub mod store;

pub use api::{
    ContactDetailController, ContactFormController, ContactListController, EventDispatcher,
    Interaction, Navigator, Route, RouteParam, StaffbookError, StaffbookResult, ViewEvent,
};
pub use contact::{Contact, ContactLinks, EmployeeId, StorageId, ValidationError};
pub use form::{Field, FieldStatus, FormMode, FormModel, Uniqueness, UniquenessChecker};
pub use repository::ContactRepository;
#[cfg(feature = "http")]
pub use store::HttpStore;
pub use store::{ContactStore, MemoryStore, MockStore, StoreConfig, StoreError};
