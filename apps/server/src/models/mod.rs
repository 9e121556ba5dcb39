//! Transfer objects shaped for requests and responses.
//!
//! Records are owned by the middleware; this crate only filters and shapes them.

mod common;
mod germplasm_list;
mod location;
mod ontology;
mod program;
mod role;
mod study;

pub use common::{CompositeTarget, Page, PageRequest, SearchComposite};
pub use germplasm_list::{
    GermplasmList, GermplasmListRequest, GermplasmListSearchRequest, MatchType, TextFilter,
};
pub use location::{Location, LocationDto, LocationRequest, LocationSearchRequest};
pub use ontology::{
    DataTypeSummary, MethodRequest, MethodSummary, PropertyRequest, PropertySummary,
};
pub use program::{ProgramFilter, ProgramSummary, Project};
pub use role::{Role, RoleRequest, RoleSearchRequest, RoleType};
pub use study::{
    StudyInstance, StudyInstanceSearch, StudyTransaction, StudyTransactionsSearch,
    TransactionStatus, TransactionType,
};
