// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod actuals_csv_datasource;
        pub(crate) mod baselines_csv_datasource;
        pub(crate) mod changes_csv_datasource;
        pub(crate) mod gdp_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod change_category_model;
        pub(crate) mod component_model;
        pub(crate) mod fiscal_amount_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod season_flag_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod tables_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod actual;
        pub(crate) mod baseline;
        pub(crate) mod change;
        pub(crate) mod component;
        pub(crate) mod gdp;
        pub(crate) mod merged_fact;
        pub(crate) mod projection_error;
        pub(crate) mod report;
        pub(crate) mod scaled_actual;
        pub(crate) mod summary;
        pub(crate) mod tables;
    }
    pub(crate) mod logic {
        pub(crate) mod actuals_scaler;
        pub(crate) mod baseline_selector;
        pub(crate) mod category_order;
        pub(crate) mod error_calculator;
        pub(crate) mod legislative_changes;
        pub(crate) mod merge_engine;
        pub(crate) mod summary_stats;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod tables_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod analysis_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod table_printer;
    pub(crate) mod value_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::actual::*;
        pub use crate::domain::entities::baseline::*;
        pub use crate::domain::entities::change::*;
        pub use crate::domain::entities::component::*;
        pub use crate::domain::entities::gdp::*;
        pub use crate::domain::entities::merged_fact::*;
        pub use crate::domain::entities::projection_error::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::scaled_actual::*;
        pub use crate::domain::entities::summary::*;
        pub use crate::domain::entities::tables::*;
    }
}
