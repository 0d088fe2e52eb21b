pub use ecosys_core::{EnvError, GridWorld, Observation};
pub mod config {
    pub use ecosys_core::config::*;
}
pub mod entity {
    pub use ecosys_data::*;
}
pub mod observation {
    pub use ecosys_core::observation::*;
}
pub mod policy {
    pub use ecosys_core::policy::*;
}
pub mod runner {
    pub use ecosys_core::runner::*;
}
pub mod snapshot {
    pub use ecosys_core::snapshot::*;
}
pub mod world {
    pub use ecosys_core::world::*;
}
pub mod metrics {
    pub use ecosys_core::metrics::*;
}
