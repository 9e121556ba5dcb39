//! Service interfaces
//!
//! One trait per domain. Handlers depend only on these traits; the middleware
//! adapter in [`crate::db`] implements all of them.

pub mod germplasm_list;
pub mod location;
pub mod ontology;
pub mod program;
pub mod role;
pub mod study_instance;
pub mod study_transactions;

pub use germplasm_list::GermplasmListService;
pub use location::LocationService;
pub use ontology::OntologyService;
pub use program::ProgramService;
pub use role::RoleService;
pub use study_instance::StudyInstanceService;
pub use study_transactions::StudyTransactionsService;
