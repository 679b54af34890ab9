pub mod hh;
pub mod superjob;

pub use hh::{HhArea, HhClient, HhConfig, HhRole, HhVacancy};
pub use superjob::{
    SuperJobCatalogue, SuperJobClient, SuperJobConfig, SuperJobTown, SuperJobVacancy,
};
